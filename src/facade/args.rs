use anyhow::{Context, bail};
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use ss_config::{ConfOverrides, ConfSource, OutputFormat, StatConf, ZTarget};

use crate::facade::session::SessionOptions;
use crate::types::AnyResult;

#[derive(Parser, Debug, Default)]
// `-V/--version` prints version
// `-V/--version` 打印版本号
#[command(
    name = "sampstat",
    version,
    about = "Descriptive statistics for numbers read from stdin/从标准输入读取样本并计算描述统计"
)]
pub struct StatArgs {
    /// Config file (TOML); omit to use ./sampstat.toml when present/配置文件（TOML）；省略时若存在 ./sampstat.toml 则使用
    #[clap(short = 'c', long = "conf")]
    pub conf: Option<PathBuf>,
    /// Output format: text, table, json/输出格式：text、table、json
    #[clap(short = 'f', long)]
    pub format: Option<OutputFormat>,
    /// Decimal places for computed values/计算结果保留的小数位数
    #[clap(short = 'p', long)]
    pub precision: Option<usize>,
    /// Z-score target: prompt, last_sample/z-score 目标值：prompt、last_sample
    #[clap(long = "z-target")]
    pub z_target: Option<ZTarget>,
    /// Value for the z-score; skips the prompt/z-score 取值；指定后跳过提示
    #[clap(long = "z-value", allow_negative_numbers = true, value_parser = finite_number)]
    pub z_value: Option<f64>,
    /// Confidence level (0.90, 0.95, 0.99); skips the prompt/置信水平；指定后跳过提示
    #[clap(long, value_parser = finite_number)]
    pub confidence: Option<f64>,
    /// Probe value for the empirical probability; skips the prompt/经验概率的目标值；指定后跳过提示
    #[clap(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub probe: Option<f64>,
    /// Match probe values within this tolerance instead of exactly/按容差匹配目标值，而非精确相等
    #[clap(long, allow_negative_numbers = true)]
    pub tolerance: Option<f64>,
    /// Do not print prompts/不打印输入提示
    #[clap(short = 'q', long, default_value = "false")]
    pub quiet: bool,
    /// Log profile: dev/int/prod (overrides [log].level)/日志预设：dev/int/prod（覆盖配置文件中的 [log].level）
    #[clap(long = "log-profile")]
    pub log_profile: Option<String>,
}

impl StatArgs {
    pub fn overrides(&self) -> AnyResult<ConfOverrides> {
        let log_level = match self.log_profile.as_deref() {
            Some(profile) => Some(profile_level(profile)?),
            None => None,
        };
        Ok(ConfOverrides {
            format: self.format,
            precision: self.precision,
            z_target: self.z_target,
            probability_tolerance: self.tolerance,
            log_level,
        })
    }

    /// File (explicit or discovered under `work_root`) first, then flags.
    pub fn resolve_conf(&self, work_root: &Path) -> AnyResult<(StatConf, ConfSource)> {
        let (conf, source) = StatConf::discover(work_root, self.conf.as_deref())?;
        let conf = conf
            .with_overrides(self.overrides()?)
            .context("apply command line options")?;
        Ok((conf, source))
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            z_value: self.z_value,
            confidence: self.confidence,
            probe: self.probe,
            quiet: self.quiet,
        }
    }
}

/// Same rule as prompted answers: `nan`/`inf` are not numbers here.
fn finite_number(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(v) => Err(format!("{} is not a finite number", v)),
        Err(e) => Err(e.to_string()),
    }
}

pub fn profile_level(profile: &str) -> AnyResult<LevelFilter> {
    match profile {
        "dev" => Ok(LevelFilter::Debug),
        "int" => Ok(LevelFilter::Info),
        "prod" => Ok(LevelFilter::Warn),
        other => bail!(
            "unknown --log-profile '{}' (expected dev, int or prod)",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> StatArgs {
        StatArgs::try_parse_from(std::iter::once("sampstat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse(&[]);
        assert!(args.conf.is_none());
        assert!(!args.quiet);
        assert_eq!(args.overrides().unwrap(), ConfOverrides::default());
    }

    #[test]
    fn parses_all_flags() {
        let args = parse(&[
            "-f",
            "json",
            "-p",
            "2",
            "--z-target",
            "last_sample",
            "--z-value",
            "-1.5",
            "--confidence",
            "0.99",
            "--probe",
            "-3",
            "--tolerance",
            "0.01",
            "-q",
            "--log-profile",
            "dev",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.precision, Some(2));
        assert_eq!(args.z_target, Some(ZTarget::LastSample));
        let opts = args.session_options();
        assert_eq!(opts.z_value, Some(-1.5));
        assert_eq!(opts.confidence, Some(0.99));
        assert_eq!(opts.probe, Some(-3.0));
        assert!(opts.quiet);
        let ov = args.overrides().unwrap();
        assert_eq!(ov.log_level, Some(LevelFilter::Debug));
        assert_eq!(ov.probability_tolerance, Some(0.01));
    }

    #[test]
    fn rejects_unknown_format() {
        let res = StatArgs::try_parse_from(["sampstat", "--format", "xml"]);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_non_finite_answers() {
        for flag in ["--probe", "--z-value", "--confidence"] {
            for raw in ["nan", "inf", "-inf"] {
                let res = StatArgs::try_parse_from(["sampstat", flag, raw]);
                assert!(res.is_err(), "{} {} accepted", flag, raw);
            }
        }
        assert_eq!(parse(&["--probe", "-2.5"]).probe, Some(-2.5));
    }

    #[test]
    fn rejects_unknown_log_profile() {
        let args = parse(&["--log-profile", "verbose"]);
        let err = args.overrides().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(ss_config::SAMPSTAT_TOML),
            "[report]\nformat = \"table\"\nprecision = 2\n",
        )
        .unwrap();
        let args = parse(&["-p", "6"]);
        let (conf, source) = args.resolve_conf(dir.path()).unwrap();
        assert!(matches!(source, ConfSource::File(_)));
        assert_eq!(conf.format(), OutputFormat::Table);
        assert_eq!(conf.precision(), 6);
    }

    #[test]
    fn invalid_flag_value_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        // 负容差可以通过解析，但在配置校验阶段被拒绝
        let args = parse(&["--tolerance", "-1"]);
        assert_eq!(args.tolerance, Some(-1.0));
        assert!(args.resolve_conf(dir.path()).is_err());
    }
}
