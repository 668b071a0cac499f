//! Timezone-naive wall-clock instants and precision-aware comparison.
use std::{cmp::Ordering, fmt};

use crate::{
    date::{CalendarDate, YearMonth},
    error::TemporalError,
    time::TimeOfDay,
};

/// A wall-clock point with second precision and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    date: CalendarDate,
    time: TimeOfDay,
}

impl Instant {
    /// Creates an instant from its six fields, with a 0-based month.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, TemporalError> {
        Ok(Self {
            date: CalendarDate::new(year, month, day)?,
            time: TimeOfDay::new(hour, minute, second)?,
        })
    }

    /// Combines a date and a time of day.
    pub fn from_parts(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Returns the date part.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the time part.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Replaces the date part.
    pub fn with_date(&self, date: CalendarDate) -> Self {
        Self { date, ..*self }
    }

    /// Replaces the time part.
    pub fn with_time(&self, time: TimeOfDay) -> Self {
        Self { time, ..*self }
    }
}

impl From<CalendarDate> for Instant {
    fn from(date: CalendarDate) -> Self {
        Instant::from_parts(date, TimeOfDay::MIDNIGHT)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date,
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )
    }
}

/// The fields of an instant, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Year.
    Year,
    /// Month of year.
    Month,
    /// Day of month.
    Day,
    /// Hour of day.
    Hour,
    /// Minute of hour.
    Minute,
    /// Second of minute.
    Second,
}

/// The contiguous run of instant fields a temporal value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKey {
    first: Field,
    last: Field,
    values: [i64; 6],
}

impl FieldKey {
    fn new(first: Field, last: Field, values: [i64; 6]) -> Self {
        Self {
            first,
            last,
            values,
        }
    }

    pub(crate) fn from_date(date: CalendarDate) -> Self {
        Self::new(Field::Year, Field::Day, date_values(date, TimeOfDay::MIDNIGHT))
    }

    pub(crate) fn from_time(time: TimeOfDay, last: Field) -> Self {
        Self::new(
            Field::Hour,
            last,
            date_values(CalendarDate::new_unchecked(0, 0, 1), time),
        )
    }

    pub(crate) fn from_instant(instant: Instant) -> Self {
        Self::new(
            Field::Year,
            Field::Second,
            date_values(instant.date, instant.time),
        )
    }

    pub(crate) fn first(&self) -> Field {
        self.first
    }

    /// Drops every field finer than `last`.
    pub fn truncate(self, last: Field) -> Self {
        Self {
            last: self.last.min(last),
            ..self
        }
    }

    /// Compares two keys over the fields both carry.
    ///
    /// Returns `None` when they share no field, meaning neither constrains the
    /// other.
    pub fn compare_overlap(&self, other: &FieldKey) -> Option<Ordering> {
        let first = self.first.max(other.first) as usize;
        let last = self.last.min(other.last) as usize;
        if first > last {
            return None;
        }
        Some(self.values[first..=last].cmp(&other.values[first..=last]))
    }
}

fn date_values(date: CalendarDate, time: TimeOfDay) -> [i64; 6] {
    [
        date.year() as i64,
        date.month() as i64,
        date.day() as i64,
        time.hour() as i64,
        time.minute() as i64,
        time.second() as i64,
    ]
}

/// A value that can be compared against constraint bounds.
pub trait Temporal: Copy + Ord {
    /// Returns the fields this value carries.
    fn field_key(&self) -> FieldKey;
}

impl Temporal for CalendarDate {
    fn field_key(&self) -> FieldKey {
        FieldKey::from_date(*self)
    }
}

impl Temporal for YearMonth {
    fn field_key(&self) -> FieldKey {
        FieldKey::from_date(self.first_day()).truncate(Field::Month)
    }
}

impl Temporal for TimeOfDay {
    fn field_key(&self) -> FieldKey {
        FieldKey::from_time(*self, Field::Second)
    }
}

impl Temporal for Instant {
    fn field_key(&self) -> FieldKey {
        FieldKey::from_instant(*self)
    }
}
