use std::path::PathBuf;

use thiserror::Error;

pub type ConfResult<T> = Result<T, ConfError>;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("read config '{}' failed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config '{}' failed: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}
