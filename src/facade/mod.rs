pub mod args;
pub mod logging;
pub mod session;

use std::env;
use std::io;

use anyhow::Context;
use ss_config::ConfSource;

use crate::types::AnyResult;
use args::StatArgs;
use session::{exit_code, run_session};

/// Resolves configuration, starts logging and runs one session on the
/// process's stdio. Returns the exit code for a completed session.
pub fn run(args: &StatArgs) -> AnyResult<i32> {
    let work_root = env::current_dir().context("get current work dir")?;
    let (conf, source) = args.resolve_conf(&work_root)?;
    logging::init_logging(conf.log_level())?;
    match &source {
        ConfSource::File(path) => log::info!("config loaded from {}", path.display()),
        ConfSource::Default => log::info!("no config file, using defaults"),
    }
    log::debug!("effective config: {:?}", conf);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let report = run_session(
        &conf,
        &args.session_options(),
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(exit_code(&report))
}
