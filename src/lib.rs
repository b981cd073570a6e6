//! sampstat: read a numeric sample from stdin and report its descriptive
//! statistics.

pub mod facade;
pub mod types;

pub use facade::args::StatArgs;
pub use facade::run;
pub use facade::session::{EXIT_ABORTED, EXIT_OK, EXIT_STAT_FAILURE};
