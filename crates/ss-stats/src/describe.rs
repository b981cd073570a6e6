//! Closed-form descriptive statistics over a [`Sample`].
//!
//! All functions are pure: the same sample always yields the same result.

use crate::confidence::ConfidenceLevel;
use crate::error::{StatError, StatResult};
use crate::sample::Sample;

/// Arithmetic mean, `sum / n`.
///
/// When the plain sum overflows, the mean is recomputed as `Σ(x / n)`.
pub fn mean(sample: &Sample) -> StatResult<f64> {
    if sample.is_empty() {
        return Err(StatError::EmptySample);
    }
    let values = sample.values();
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return Ok(sum / n);
    }
    finite("mean", values.iter().map(|v| v / n).sum())
}

/// Sample variance with Bessel's correction, `Σ(x − mean)² / (n − 1)`.
///
/// A sample whose elements are all identical has a variance of exactly
/// `0.0`, regardless of rounding in the mean.
pub fn variance(sample: &Sample) -> StatResult<f64> {
    ensure_len(sample, 2)?;
    let values = sample.values();
    let first = values[0];
    if values.iter().all(|&v| v == first) {
        return Ok(0.0);
    }
    let mean = mean(sample)?;
    let squares: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    finite("variance", squares / (values.len() - 1) as f64)
}

pub fn standard_deviation(sample: &Sample) -> StatResult<f64> {
    variance(sample).map(f64::sqrt)
}

/// `(value − mean) / std_dev`.
///
/// # Errors
/// - [`StatError::DegenerateSample`] when `std_dev` is zero.
/// - [`StatError::NonFiniteValue`] when any argument is NaN or infinite.
/// - [`StatError::Overflow`] when the quotient leaves the `f64` range.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> StatResult<f64> {
    for v in [value, mean, std_dev] {
        ensure_finite(v)?;
    }
    if std_dev == 0.0 {
        return Err(StatError::DegenerateSample);
    }
    finite("z-score", (value - mean) / std_dev)
}

/// Half-width of the normal confidence interval around the mean:
/// `z(level) × s / √n`.
///
/// The level is validated before the sample.
pub fn confidence_interval_margin(sample: &Sample, confidence_level: f64) -> StatResult<f64> {
    let z = z_value(confidence_level)?;
    let std_dev = standard_deviation(sample)?;
    finite("margin of error", z * (std_dev / (sample.len() as f64).sqrt()))
}

/// Relative frequency of `value` in the sample.
///
/// Matching uses exact `f64` equality. That is reliable for integer-valued
/// data but fragile for values produced by arithmetic (`0.1 + 0.2` will not
/// match `0.3`); see [`empirical_probability_within`].
pub fn empirical_probability(sample: &Sample, value: f64) -> StatResult<f64> {
    ensure_finite(value)?;
    relative_frequency(sample, |x| x == value)
}

/// Relative frequency of elements within `tolerance` of `value`.
pub fn empirical_probability_within(
    sample: &Sample,
    value: f64,
    tolerance: f64,
) -> StatResult<f64> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(StatError::NonFiniteValue { value: tolerance });
    }
    ensure_finite(value)?;
    relative_frequency(sample, |x| (x - value).abs() <= tolerance)
}

fn relative_frequency<F>(sample: &Sample, matches: F) -> StatResult<f64>
where
    F: Fn(f64) -> bool,
{
    if sample.is_empty() {
        return Err(StatError::EmptySample);
    }
    let hits = sample.values().iter().filter(|&&x| matches(x)).count();
    Ok(hits as f64 / sample.len() as f64)
}

fn z_value(confidence_level: f64) -> StatResult<f64> {
    ConfidenceLevel::from_level(confidence_level).map(|level| level.critical_value())
}

fn ensure_finite(value: f64) -> StatResult<()> {
    if !value.is_finite() {
        return Err(StatError::NonFiniteValue { value });
    }
    Ok(())
}

fn finite(statistic: &'static str, value: f64) -> StatResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatError::Overflow { statistic })
    }
}

fn ensure_len(sample: &Sample, required: usize) -> StatResult<()> {
    if sample.len() < required {
        return Err(StatError::InsufficientSample {
            required,
            found: sample.len(),
        });
    }
    Ok(())
}
