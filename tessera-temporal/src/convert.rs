//! Conversions between clock and calendar representations.
use std::fmt;

use crate::{
    date::{CalendarDate, YearMonth},
    error::TemporalError,
    granularity::Granularity,
};

/// Indicates whether a time is in AM or PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

impl DayPeriod {
    /// Returns the other period.
    pub fn toggled(self) -> Self {
        match self {
            DayPeriod::Am => DayPeriod::Pm,
            DayPeriod::Pm => DayPeriod::Am,
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DayPeriod::Am => "AM",
            DayPeriod::Pm => "PM",
        })
    }
}

/// An hour on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hour12 {
    /// Hour, `1..=12`.
    pub hour: u8,
    /// AM or PM.
    pub period: DayPeriod,
}

/// Converts a 24-hour value to its 12-hour form.
///
/// Midnight is `12 AM` and noon is `12 PM`.
pub fn to_12h(hour24: u8) -> Result<Hour12, TemporalError> {
    if hour24 > 23 {
        return Err(TemporalError::unit(Granularity::Hour24, hour24 as i64, 0, 23));
    }
    let (hour, period) = match hour24 {
        0 => (12, DayPeriod::Am),
        12 => (12, DayPeriod::Pm),
        h if h < 12 => (h, DayPeriod::Am),
        h => (h - 12, DayPeriod::Pm),
    };
    Ok(Hour12 { hour, period })
}

/// Converts a 12-hour value and period to the 24-hour value.
pub fn to_24h(hour12: u8, period: DayPeriod) -> Result<u8, TemporalError> {
    if !(1..=12).contains(&hour12) {
        return Err(TemporalError::unit(Granularity::Hour12, hour12 as i64, 1, 12));
    }
    Ok(match (period, hour12) {
        (DayPeriod::Am, 12) => 0,
        (DayPeriod::Pm, h) if h != 12 => h + 12,
        (_, h) => h,
    })
}

/// Returns the period a 24-hour value falls in.
pub fn period_of(hour24: u8) -> DayPeriod {
    if hour24 >= 12 {
        DayPeriod::Pm
    } else {
        DayPeriod::Am
    }
}

/// Where a date sits relative to a displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthRelation {
    /// Before the displayed month.
    Previous,
    /// Inside the displayed month.
    Current,
    /// After the displayed month.
    Next,
}

/// Classifies `date` against the displayed `month`.
pub fn month_relation(date: CalendarDate, month: YearMonth) -> MonthRelation {
    match date.year_month().cmp(&month) {
        std::cmp::Ordering::Less => MonthRelation::Previous,
        std::cmp::Ordering::Equal => MonthRelation::Current,
        std::cmp::Ordering::Greater => MonthRelation::Next,
    }
}
