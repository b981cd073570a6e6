use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::types::AnyResult;

/// Logs go to stderr; `RUST_LOG`, when set, refines `level`.
pub fn init_logging(level: LevelFilter) -> AnyResult<()> {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}
