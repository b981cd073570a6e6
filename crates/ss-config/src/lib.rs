//! Configuration for the sampstat calculator.
//!
//! Configuration is optional: an absent `sampstat.toml` means built-in
//! defaults, and every field of a present file may be omitted.

mod error;
pub mod stat;

pub use error::{ConfError, ConfResult};
pub use stat::{
    ConfOverrides, ConfSource, InputConf, LogConf, OutputFormat, ReportConf, SAMPSTAT_TOML,
    StatConf, ZTarget,
};
