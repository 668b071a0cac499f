//! Display names for months and weekdays.
//!
//! The engine itself only deals in numeric units; these are the names a host
//! may plug in for headers and year grids.
use crate::date::Weekday;

/// Supplies locale-specific month and weekday names.
pub trait CalendarLabels: Send + Sync {
    /// Full month name for a 0-based month.
    fn month_name(&self, month: u8) -> String;

    /// Abbreviated month name for a 0-based month.
    fn month_short_name(&self, month: u8) -> String;

    /// Abbreviated weekday name.
    fn weekday_short_name(&self, day: Weekday) -> String;
}

/// English month and weekday names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl CalendarLabels for EnglishLabels {
    fn month_name(&self, month: u8) -> String {
        match month {
            0 => "January",
            1 => "February",
            2 => "March",
            3 => "April",
            4 => "May",
            5 => "June",
            6 => "July",
            7 => "August",
            8 => "September",
            9 => "October",
            10 => "November",
            _ => "December",
        }
        .to_string()
    }

    fn month_short_name(&self, month: u8) -> String {
        let mut name = self.month_name(month);
        name.truncate(3);
        name
    }

    fn weekday_short_name(&self, day: Weekday) -> String {
        match day {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
        .to_string()
    }
}
