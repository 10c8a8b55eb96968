//! Error Types for Threshold Configuration
//!
//! ## Design Philosophy
//!
//! The evaluation paths of this crate are total functions: an empty window,
//! a missing light sensor or a reservoir reading of zero are all defined
//! cases with defined outputs. The only thing that can actually be wrong is
//! the configuration handed to the evaluators, so that is the only thing
//! that returns an error.
//!
//! Like the rest of the core, errors stay small and allocation free:
//! - **Copy semantics**: variants carry `f32` values and `&'static str` names
//! - **No heap**: metric names are static, never formatted strings
//!
//! ```rust
//! use leafguard_core::{Bounds, ThresholdError, ThresholdSpec};
//!
//! let spec = ThresholdSpec::default().with_soil(Bounds::between(2600.0, 1800.0, 200.0));
//! match spec.validate() {
//!     Ok(()) => {}
//!     Err(ThresholdError::InvertedBounds { metric, .. }) => {
//!         // refuse to start with a table that can never be satisfied
//!         assert_eq!(metric, "soil");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for threshold configuration
pub type ThresholdResult<T> = Result<T, ThresholdError>;

/// Threshold table errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    /// Low bound is above the high bound, so every reading would alert
    #[error("{metric}: low bound {low} is above high bound {high}")]
    InvertedBounds {
        /// Metric the bounds belong to
        metric: &'static str,
        /// Configured low bound
        low: f32,
        /// Configured high bound
        high: f32,
    },

    /// Bound or delta is NaN or infinite
    #[error("{metric}: {field} is not a finite number")]
    NonFinite {
        /// Metric the value belongs to
        metric: &'static str,
        /// Which field was rejected
        field: &'static str,
    },

    /// Escalation delta must be zero or positive
    #[error("{metric}: critical delta {delta} is negative")]
    NegativeDelta {
        /// Metric the delta belongs to
        metric: &'static str,
        /// Configured delta
        delta: f32,
    },

    /// Cooldown of zero would let every candidate through
    #[error("Cooldown must be greater than zero")]
    ZeroCooldown,
}
