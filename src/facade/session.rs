//! Interactive session: read the sample, then compute and report each
//! statistic in order, prompting for the values each step needs.

use std::io::{BufRead, Write};

use ss_cli_core::input::{PROMPT_CONFIDENCE, PROMPT_PROBE, PROMPT_SAMPLE, PROMPT_Z_VALUE};
use ss_cli_core::{SampleInput, StatKey, StatReport, TokenReader, write_report, write_text_entry};
use ss_config::{OutputFormat, StatConf, ZTarget};
use ss_stats::{Sample, StatError, StatResult, z_score};

use crate::types::AnyResult;

pub const EXIT_OK: i32 = 0;
pub const EXIT_STAT_FAILURE: i32 = 1;
pub const EXIT_ABORTED: i32 = 2;

/// Values supplied up front; each one replaces its prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionOptions {
    pub z_value: Option<f64>,
    pub confidence: Option<f64>,
    pub probe: Option<f64>,
    pub quiet: bool,
}

/// Prompt/result routing for one session.
struct Console<'a, O, E> {
    out: &'a mut O,
    err: &'a mut E,
    format: OutputFormat,
    quiet: bool,
}

impl<O: Write, E: Write> Console<'_, O, E> {
    /// Prompts share stdout with results only in text mode.
    fn prompt(&mut self, text: &str) -> AnyResult<()> {
        if self.quiet {
            return Ok(());
        }
        match self.format {
            OutputFormat::Text => {
                write!(self.out, "{}", text)?;
                self.out.flush()?;
            }
            _ => {
                write!(self.err, "{}", text)?;
                self.err.flush()?;
            }
        }
        Ok(())
    }

    fn emit(
        &mut self,
        report: &mut StatReport,
        key: StatKey,
        input: Option<f64>,
        result: &StatResult<f64>,
    ) -> AnyResult<()> {
        let precision = report.precision;
        let entry = report.record(key, input, result);
        if self.format == OutputFormat::Text {
            write_text_entry(&mut *self.out, &mut *self.err, entry, precision)?;
        }
        Ok(())
    }
}

/// Runs the whole input protocol against `input`.
///
/// Statistic failures are recorded in the returned report; only malformed
/// prompted input and I/O failures abort with `Err`.
pub fn run_session<R, O, E>(
    conf: &StatConf,
    opts: &SessionOptions,
    input: R,
    out: &mut O,
    err: &mut E,
) -> AnyResult<StatReport>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut reader = TokenReader::new(input);
    let mut console = Console {
        out,
        err,
        format: conf.format(),
        quiet: opts.quiet,
    };

    console.prompt(PROMPT_SAMPLE)?;
    let SampleInput { sample, terminator } = reader.read_sample()?;
    log::info!("sample collected: {} values", sample.len());
    if let Some(tok) = &terminator {
        log::debug!("sample input ended at token '{}'", tok);
    }

    let mut report = StatReport::new(sample.len(), conf.precision());
    let mean = sample.mean();
    let std_dev = sample.standard_deviation();
    console.emit(&mut report, StatKey::Mean, None, &mean)?;
    console.emit(&mut report, StatKey::Variance, None, &sample.variance())?;
    console.emit(&mut report, StatKey::StandardDeviation, None, &std_dev)?;

    let target = match (opts.z_value, conf.z_target()) {
        (Some(v), _) => Ok(v),
        (None, ZTarget::LastSample) => sample.last().ok_or(StatError::EmptySample),
        (None, ZTarget::Prompt) => {
            console.prompt(PROMPT_Z_VALUE)?;
            Ok(reader.read_number("z-score value")?)
        }
    };
    let z_input = target.as_ref().ok().copied();
    let z = target.and_then(|value| z_score_against(value, &mean, &std_dev));
    console.emit(&mut report, StatKey::ZScore, z_input, &z)?;

    let level = match opts.confidence {
        Some(level) => level,
        None => {
            console.prompt(PROMPT_CONFIDENCE)?;
            reader.read_number("confidence level")?
        }
    };
    let margin = sample.confidence_interval_margin(level);
    console.emit(&mut report, StatKey::MarginOfError, Some(level), &margin)?;

    let probe = match opts.probe {
        Some(probe) => probe,
        None => {
            console.prompt(PROMPT_PROBE)?;
            reader.read_number("probe value")?
        }
    };
    let probability = probability_of(&sample, probe, conf.probability_tolerance());
    console.emit(&mut report, StatKey::Probability, Some(probe), &probability)?;

    write_report(&mut *console.out, &report, conf.format())?;
    console.out.flush()?;
    Ok(report)
}

fn z_score_against(
    value: f64,
    mean: &StatResult<f64>,
    std_dev: &StatResult<f64>,
) -> StatResult<f64> {
    let mean = mean.clone()?;
    let std_dev = std_dev.clone()?;
    z_score(value, mean, std_dev)
}

fn probability_of(sample: &Sample, probe: f64, tolerance: Option<f64>) -> StatResult<f64> {
    match tolerance {
        Some(tol) => sample.empirical_probability_within(probe, tol),
        None => sample.empirical_probability(probe),
    }
}

pub fn exit_code(report: &StatReport) -> i32 {
    if report.has_failures() {
        EXIT_STAT_FAILURE
    } else {
        EXIT_OK
    }
}
