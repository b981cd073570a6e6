use std::fmt;

use crate::error::{StatError, StatResult};

/// Confidence levels with a tabulated two-tailed normal critical value.
///
/// This is a closed table, not an inverse-CDF: any level outside it is
/// rejected with [`StatError::UnsupportedConfidenceLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    P90,
    P95,
    P99,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::P90,
        ConfidenceLevel::P95,
        ConfidenceLevel::P99,
    ];

    /// Exact match on the parsed value; `0.9`, `0.90` and `0.900` all parse
    /// to the same `f64`.
    pub fn from_level(level: f64) -> StatResult<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.level() == level)
            .ok_or(StatError::UnsupportedConfidenceLevel(level))
    }

    pub fn level(&self) -> f64 {
        match self {
            ConfidenceLevel::P90 => 0.90,
            ConfidenceLevel::P95 => 0.95,
            ConfidenceLevel::P99 => 0.99,
        }
    }

    pub fn critical_value(&self) -> f64 {
        match self {
            ConfidenceLevel::P90 => 1.645,
            ConfidenceLevel::P95 => 1.96,
            ConfidenceLevel::P99 => 2.576,
        }
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = StatError;

    fn try_from(level: f64) -> StatResult<Self> {
        Self::from_level(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup() {
        assert_eq!(ConfidenceLevel::from_level(0.90).unwrap().critical_value(), 1.645);
        assert_eq!(ConfidenceLevel::from_level(0.95).unwrap().critical_value(), 1.96);
        assert_eq!(ConfidenceLevel::from_level(0.99).unwrap().critical_value(), 2.576);
    }

    #[test]
    fn parsed_spellings_match() {
        for raw in ["0.9", "0.90", "0.900"] {
            let level: f64 = raw.parse().unwrap();
            assert_eq!(ConfidenceLevel::try_from(level), Ok(ConfidenceLevel::P90));
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert_eq!(
            ConfidenceLevel::from_level(0.80),
            Err(StatError::UnsupportedConfidenceLevel(0.80))
        );
        assert!(ConfidenceLevel::from_level(95.0).is_err());
        assert!(ConfidenceLevel::from_level(f64::NAN).is_err());
    }

    #[test]
    fn display_as_fraction() {
        assert_eq!(ConfidenceLevel::P95.to_string(), "0.95");
        assert_eq!(ConfidenceLevel::P90.to_string(), "0.90");
    }
}
