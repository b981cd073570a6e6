use clap::Parser;
use sampstat::{EXIT_ABORTED, StatArgs};

fn main() {
    let args = StatArgs::parse();
    let code = match sampstat::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            EXIT_ABORTED
        }
    };
    std::process::exit(code);
}
