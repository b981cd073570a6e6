use std::fs;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use log::LevelFilter;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{ConfError, ConfResult};

pub const SAMPSTAT_TOML: &str = "sampstat.toml";
/// 超过 f64 有效位数的精度没有意义
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Line-per-statistic, interleaved with prompts
    #[default]
    Text,
    Table,
    Json,
}

/// Which value the z-score is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ZTarget {
    /// Ask for the value explicitly
    #[default]
    Prompt,
    /// Use the last element of the sample, no prompt
    LastSample,
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Default)]
pub struct InputConf {
    #[serde(default)]
    pub z_target: ZTarget,
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct ReportConf {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Absent: exact-match probability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_tolerance: Option<f64>,
}

impl Default for ReportConf {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
            probability_tolerance: None,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct LogConf {
    #[serde(default = "default_log_level")]
    pub level: LevelFilter,
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub fn default_precision() -> usize {
    4
}

pub fn default_log_level() -> LevelFilter {
    LevelFilter::Warn
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfOverrides {
    pub format: Option<OutputFormat>,
    pub precision: Option<usize>,
    pub z_target: Option<ZTarget>,
    pub probability_tolerance: Option<f64>,
    pub log_level: Option<LevelFilter>,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfSource {
    File(PathBuf),
    Default,
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Default, Getters)]
pub struct StatConf {
    #[serde(default)]
    input: InputConf,
    #[serde(default)]
    report: ReportConf,
    #[serde(default)]
    log: LogConf,
}

impl StatConf {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let conf: StatConf = toml::from_str(&raw).map_err(|source| ConfError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        conf.validate()?;
        Ok(conf)
    }

    /// An explicit path must exist; otherwise `<work_root>/sampstat.toml` is
    /// used when present, and the built-in defaults when not.
    pub fn discover<P: AsRef<Path>>(
        work_root: P,
        explicit: Option<&Path>,
    ) -> ConfResult<(Self, ConfSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfSource::File(path.to_path_buf())));
        }
        let candidate = work_root.as_ref().join(SAMPSTAT_TOML);
        if candidate.is_file() {
            let conf = Self::load(&candidate)?;
            return Ok((conf, ConfSource::File(candidate)));
        }
        Ok((Self::default(), ConfSource::Default))
    }

    pub fn with_overrides(mut self, ov: ConfOverrides) -> ConfResult<Self> {
        if let Some(format) = ov.format {
            self.report.format = format;
        }
        if let Some(precision) = ov.precision {
            self.report.precision = precision;
        }
        if let Some(z_target) = ov.z_target {
            self.input.z_target = z_target;
        }
        if ov.probability_tolerance.is_some() {
            self.report.probability_tolerance = ov.probability_tolerance;
        }
        if let Some(level) = ov.log_level {
            self.log.level = level;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ConfResult<()> {
        if self.report.precision > MAX_PRECISION {
            return Err(ConfError::Invalid(format!(
                "report.precision must be <= {} (got {})",
                MAX_PRECISION, self.report.precision
            )));
        }
        if let Some(tol) = self.report.probability_tolerance
            && (!tol.is_finite() || tol < 0.0)
        {
            return Err(ConfError::Invalid(format!(
                "report.probability_tolerance must be a finite value >= 0 (got {})",
                tol
            )));
        }
        Ok(())
    }

    // Shortcuts for the fields the session reads most
    pub fn format(&self) -> OutputFormat {
        self.report.format
    }

    pub fn precision(&self) -> usize {
        self.report.precision
    }

    pub fn z_target(&self) -> ZTarget {
        self.input.z_target
    }

    pub fn probability_tolerance(&self) -> Option<f64> {
        self.report.probability_tolerance
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log.level
    }
}
