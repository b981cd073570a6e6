//! # ss-stats
//!
//! Descriptive statistics over a small, in-memory [`Sample`]: mean,
//! Bessel-corrected variance, standard deviation, z-score, the normal
//! confidence-interval margin and empirical probability.
//!
//! ```
//! use ss_stats::{Sample, StatError};
//!
//! let sample = Sample::new(vec![2.0, 4.0, 6.0]).unwrap();
//! assert_eq!(sample.mean().unwrap(), 4.0);
//! assert_eq!(sample.variance().unwrap(), 4.0);
//! assert_eq!(
//!     sample.confidence_interval_margin(0.80),
//!     Err(StatError::UnsupportedConfidenceLevel(0.80))
//! );
//! ```

mod confidence;
pub mod describe;
mod error;
mod sample;

pub use confidence::ConfidenceLevel;
pub use describe::{
    confidence_interval_margin, empirical_probability, empirical_probability_within, mean,
    standard_deviation, variance, z_score,
};
pub use error::{StatError, StatResult};
pub use sample::Sample;
