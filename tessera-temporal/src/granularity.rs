//! Granularities and the unit domains they enumerate.
use std::{fmt, num::NonZeroU32, ops::RangeInclusive};

use crate::{date::YearMonth, error::TemporalError, instant::Field};

/// The temporal unit being enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Day of month, `1..=days_in_month`.
    Day,
    /// Month of year, `0..=11`.
    Month,
    /// Hour on a 12-hour clock, `1..=12`.
    Hour12,
    /// Hour on a 24-hour clock, `0..=23`.
    Hour24,
    /// Minute of hour, `0..=59`.
    Minute,
    /// Second of minute, `0..=59`.
    Second,
}

impl Granularity {
    /// Returns the legal values for this granularity.
    ///
    /// `month` only matters for [`Granularity::Day`], whose upper bound depends
    /// on the length of the month.
    pub fn domain(self, month: YearMonth) -> RangeInclusive<u8> {
        match self {
            Granularity::Day => 1..=month.days(),
            Granularity::Month => 0..=11,
            Granularity::Hour12 => 1..=12,
            Granularity::Hour24 => 0..=23,
            Granularity::Minute | Granularity::Second => 0..=59,
        }
    }

    /// Validates `value` against the domain of this granularity.
    pub fn check(self, value: i64, month: YearMonth) -> Result<u8, TemporalError> {
        let domain = self.domain(month);
        let (min, max) = (*domain.start() as i64, *domain.end() as i64);
        if (min..=max).contains(&value) {
            Ok(value as u8)
        } else {
            Err(TemporalError::unit(self, value, min, max))
        }
    }

    /// Returns the zero-padded label for `value`.
    ///
    /// Months are labelled by their ordinal, so month `0` reads `"01"`.
    pub fn label(self, value: u8) -> String {
        match self {
            Granularity::Month => format!("{:02}", value + 1),
            _ => format!("{value:02}"),
        }
    }

    /// The finest instant field this granularity addresses.
    pub(crate) fn field(self) -> Field {
        match self {
            Granularity::Day => Field::Day,
            Granularity::Month => Field::Month,
            Granularity::Hour12 | Granularity::Hour24 => Field::Hour,
            Granularity::Minute => Field::Minute,
            Granularity::Second => Field::Second,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Hour12 => "12-hour",
            Granularity::Hour24 => "24-hour",
            Granularity::Minute => "minute",
            Granularity::Second => "second",
        };
        f.write_str(name)
    }
}

/// A validated, strictly positive whole-number step between enumerated units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step(NonZeroU32);

impl Step {
    /// A step of one unit.
    pub const ONE: Step = Step(NonZeroU32::MIN);

    /// Returns the step size.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::ONE
    }
}

impl TryFrom<i64> for Step {
    type Error = TemporalError;

    fn try_from(step: i64) -> Result<Self, Self::Error> {
        u32::try_from(step)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Step)
            .ok_or_else(|| TemporalError::InvalidStep {
                step: step.to_string(),
            })
    }
}

impl TryFrom<u32> for Step {
    type Error = TemporalError;

    fn try_from(step: u32) -> Result<Self, Self::Error> {
        Step::try_from(step as i64)
    }
}

impl TryFrom<f64> for Step {
    type Error = TemporalError;

    fn try_from(step: f64) -> Result<Self, Self::Error> {
        if step.is_finite() && step.fract() == 0.0 && step >= 1.0 && step <= u32::MAX as f64 {
            Step::try_from(step as i64)
        } else {
            Err(TemporalError::InvalidStep {
                step: step.to_string(),
            })
        }
    }
}
