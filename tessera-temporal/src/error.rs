//! Error types shared by every part of the temporal engine.
use thiserror::Error;

use crate::{constraint::Bound, granularity::Granularity};

/// Failures reported by the temporal engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    /// A unit step was zero, negative or not a whole number.
    #[error("invalid step `{step}`: steps must be positive whole numbers")]
    InvalidStep {
        /// Textual form of the rejected step.
        step: String,
    },
    /// A unit value fell outside the domain of its granularity.
    #[error("{value} is outside the {granularity} domain {min}..={max}")]
    InvalidUnitValue {
        /// Granularity whose domain was violated.
        granularity: Granularity,
        /// The rejected value.
        value: i64,
        /// Smallest legal value.
        min: i64,
        /// Largest legal value.
        max: i64,
    },
    /// A year fell outside the range dates can be constructed in.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Earliest supported year.
        min: i32,
        /// Latest supported year.
        max: i32,
    },
    /// Free-text date or time input could not be parsed.
    #[error("cannot parse `{text}`: {reason}")]
    UnparseableTemporalString {
        /// The text that failed to parse.
        text: String,
        /// Short description of what was wrong.
        reason: &'static str,
    },
    /// A minimum bound was later than the maximum bound. Both were dropped.
    #[error("minimum {min} is after maximum {max}; both bounds ignored")]
    InvertedConstraints {
        /// The rejected minimum.
        min: Bound,
        /// The rejected maximum.
        max: Bound,
    },
}

impl TemporalError {
    pub(crate) fn unit(granularity: Granularity, value: i64, min: i64, max: i64) -> Self {
        TemporalError::InvalidUnitValue {
            granularity,
            value,
            min,
            max,
        }
    }

    pub(crate) fn unparseable(text: &str, reason: &'static str) -> Self {
        TemporalError::UnparseableTemporalString {
            text: text.to_string(),
            reason,
        }
    }
}
