use crate::describe;
use crate::error::{StatError, StatResult};

/// Ordered, finite observations under analysis.
///
/// A `Sample` cannot be modified after construction; every statistic is a
/// pure function of its contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Builds a sample, rejecting NaN and infinite values.
    pub fn new(values: Vec<f64>) -> StatResult<Self> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatError::NonFiniteValue { value: *bad });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The most recently entered observation.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn mean(&self) -> StatResult<f64> {
        describe::mean(self)
    }

    pub fn variance(&self) -> StatResult<f64> {
        describe::variance(self)
    }

    pub fn standard_deviation(&self) -> StatResult<f64> {
        describe::standard_deviation(self)
    }

    pub fn confidence_interval_margin(&self, confidence_level: f64) -> StatResult<f64> {
        describe::confidence_interval_margin(self, confidence_level)
    }

    pub fn empirical_probability(&self, value: f64) -> StatResult<f64> {
        describe::empirical_probability(self, value)
    }

    pub fn empirical_probability_within(&self, value: f64, tolerance: f64) -> StatResult<f64> {
        describe::empirical_probability_within(self, value, tolerance)
    }

    /// Z-score of `value` against this sample's own mean and deviation.
    pub fn z_score_of(&self, value: f64) -> StatResult<f64> {
        let mean = self.mean()?;
        let std_dev = self.standard_deviation()?;
        describe::z_score(value, mean, std_dev)
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = StatError;

    fn try_from(values: Vec<f64>) -> StatResult<Self> {
        Sample::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = StatError;

    fn try_from(values: &[f64]) -> StatResult<Self> {
        Sample::new(values.to_vec())
    }
}
