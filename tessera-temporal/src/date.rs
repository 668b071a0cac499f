//! Calendar primitives: dates, year/month pairs and weekdays.
//!
//! Months are 0-based throughout (`0` is January), matching the structured
//! `{year, month, day}` shape hosts exchange with the engine. Textual ISO forms
//! (`YYYY-MM-DD`) use the conventional 1-based month.
//!
//! Dates can be constructed for years in [`MIN_YEAR`]`..=`[`MAX_YEAR`].
//! Arithmetic may step one year past either end so that grids around the
//! first and last supported months stay contiguous, and saturates there.
use std::{fmt, str::FromStr};

use crate::{error::TemporalError, granularity::Granularity};

/// Earliest year accepted by [`CalendarDate::new`] and [`YearMonth::new`].
pub const MIN_YEAR: i32 = -1_000_000;
/// Latest year accepted by [`CalendarDate::new`] and [`YearMonth::new`].
pub const MAX_YEAR: i32 = 1_000_000;

const FIRST_DAY: i64 = days_from_civil(MIN_YEAR - 1, 0, 1);
const LAST_DAY: i64 = days_from_civil(MAX_YEAR + 1, 11, 31);
const FIRST_MONTH: i64 = (MIN_YEAR as i64 - 1) * 12;
const LAST_MONTH: i64 = (MAX_YEAR as i64 + 1) * 12 + 11;

/// Days of the week in Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// Returns the position of this weekday in a Monday-first week.
    pub fn index_from_monday(self) -> i32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Returns the weekday at `index` in a Monday-first week, wrapping.
    pub fn from_monday_index(index: i32) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

/// Returns the seven weekdays of a grid row starting at `first_day_of_week`.
pub fn weekday_sequence(first_day_of_week: Weekday) -> [Weekday; 7] {
    let mut days = [Weekday::Monday; 7];
    let start = first_day_of_week.index_from_monday();
    for (idx, slot) in days.iter_mut().enumerate() {
        *slot = Weekday::from_monday_index(start + idx as i32);
    }
    days
}

/// A calendar date expressed as year, 0-based month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDate")
)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDate {
    year: i32,
    month: i64,
    day: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for CalendarDate {
    type Error = TemporalError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        let month = u8::try_from(raw.month)
            .ok()
            .filter(|month| *month <= 11)
            .ok_or_else(|| TemporalError::unit(Granularity::Month, raw.month, 0, 11))?;
        let day = u8::try_from(raw.day).map_err(|_| {
            TemporalError::unit(
                Granularity::Day,
                raw.day,
                1,
                days_in_month(raw.year, month) as i64,
            )
        })?;
        CalendarDate::new(raw.year, month, day)
    }
}

impl CalendarDate {
    /// Creates a calendar date, rejecting out-of-range years, months and days.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, TemporalError> {
        let year_month = YearMonth::new(year, month)?;
        Granularity::Day.check(day as i64, year_month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (0-11).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the year/month this date belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::new_unchecked(self.year, self.month)
    }

    /// Returns the weekday of this date.
    pub fn weekday(&self) -> Weekday {
        let days = days_from_civil(self.year, self.month, self.day);
        Weekday::from_monday_index((days + 3).rem_euclid(7) as i32)
    }

    /// Returns the date `delta` days away, saturating one year past the
    /// supported range.
    pub fn add_days(&self, delta: i64) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch().saturating_add(delta))
    }

    /// Returns the number of days since 1970-01-01.
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the date `days` after 1970-01-01, saturating one year past the
    /// supported range.
    pub fn from_days_since_epoch(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days.clamp(FIRST_DAY, LAST_DAY));
        Self::new_unchecked(year, month, day)
    }

    /// Replaces the day of the month.
    pub fn with_day(&self, day: u8) -> Result<Self, TemporalError> {
        CalendarDate::new(self.year, self.month, day)
    }

    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = TemporalError;

    /// Parses `YYYY-MM-DD` with a 1-based month.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let mut parts = trimmed.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TemporalError::unparseable(text, "expected YYYY-MM-DD"));
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(TemporalError::unparseable(text, "expected YYYY-MM-DD"));
        }
        let year = parse_digits(text, year)?;
        let month = parse_digits(text, month)?;
        let day = parse_digits(text, day)?;
        if !(1..=12).contains(&month) {
            return Err(TemporalError::unparseable(text, "month out of range"));
        }
        CalendarDate::new(year as i32, (month - 1) as u8, day.min(u8::MAX as u32) as u8)
            .map_err(|_| TemporalError::unparseable(text, "day out of range"))
    }
}

pub(crate) fn parse_digits(text: &str, field: &str) -> Result<u32, TemporalError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TemporalError::unparseable(text, "expected digits"));
    }
    field
        .parse()
        .map_err(|_| TemporalError::unparseable(text, "number too large"))
}

/// A year and 0-based month pair used for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the year is supported and the month is
    /// within `0..=11`.
    pub fn new(year: i32, month: u8) -> Result<Self, TemporalError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TemporalError::YearOutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        if month > 11 {
            return Err(TemporalError::unit(Granularity::Month, month as i64, 0, 11));
        }
        Ok(Self { year, month })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (0-11).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the number of days in this month.
    pub fn days(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Returns the first day of this month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, 1)
    }

    /// Returns the date for this month at the provided day.
    pub fn to_date(&self, day: u8) -> Result<CalendarDate, TemporalError> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// Returns the date at `day`, clamped to the length of the month.
    pub fn clamped_date(&self, day: u8) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, day.clamp(1, self.days()))
    }

    /// Adds or subtracts months, adjusting the year as needed.
    ///
    /// Saturates one year past the supported range.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = (self.year as i64 * 12 + self.month as i64 + delta as i64)
            .clamp(FIRST_MONTH, LAST_MONTH);
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u8,
        }
    }

    pub(crate) fn new_unchecked(year: i32, month: u8) -> Self {
        Self { year, month }
    }
}

/// Returns the number of days in a 0-based month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => 30,
    }
}

/// Returns whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let m = month as i64 + 1;
    let y = year as i64 - if m <= 2 { 1 } else { 0 };
    let d = day as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, (month - 1) as u8, day as u8)
}
