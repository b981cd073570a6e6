//! Error taxonomy for sample statistics.
//!
//! Every precondition is checked before the corresponding formula runs, so
//! none of the public functions ever hand back NaN or infinity.

use thiserror::Error;

pub type StatResult<T> = Result<T, StatError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    /// Mean/probability requested on a sample with no elements.
    #[error("empty sample: at least one value is required")]
    EmptySample,
    /// Variance-based statistic requested on a sample that is too small.
    #[error("insufficient sample: {required} values required, found {found}")]
    InsufficientSample { required: usize, found: usize },
    /// Standard deviation is zero, a z-score would divide by zero.
    #[error("degenerate sample: standard deviation is zero")]
    DegenerateSample,
    #[error("unsupported confidence level {0} (expected 0.90, 0.95 or 0.99)")]
    UnsupportedConfidenceLevel(f64),
    /// A prompted numeric read failed; `token` is `None` at end of input.
    #[error("malformed input for {field}: {}", describe_token(.token))]
    MalformedInput {
        field: String,
        token: Option<String>,
    },
    #[error("non-finite value {value} is not allowed")]
    NonFiniteValue { value: f64 },
    /// Finite inputs whose result is out of `f64` range.
    #[error("overflow: {statistic} exceeds the representable range")]
    Overflow { statistic: &'static str },
}

fn describe_token(token: &Option<String>) -> String {
    match token {
        Some(tok) => format!("expected a number, got '{}'", tok),
        None => "unexpected end of input".to_string(),
    }
}

impl StatError {
    pub fn malformed<S: Into<String>>(field: S, token: Option<String>) -> Self {
        StatError::MalformedInput {
            field: field.into(),
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_mentions_token() {
        let err = StatError::malformed("confidence level", Some("abc".into()));
        let msg = err.to_string();
        assert!(msg.contains("confidence level"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn malformed_input_at_eof() {
        let err = StatError::malformed("probe value", None);
        assert_eq!(
            err.to_string(),
            "malformed input for probe value: unexpected end of input"
        );
    }

    #[test]
    fn overflow_names_statistic() {
        let err = StatError::Overflow {
            statistic: "variance",
        };
        assert_eq!(
            err.to_string(),
            "overflow: variance exceeds the representable range"
        );
    }

    #[test]
    fn insufficient_sample_message() {
        let err = StatError::InsufficientSample {
            required: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient sample: 2 values required, found 1"
        );
    }
}
