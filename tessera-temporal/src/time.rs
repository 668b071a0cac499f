//! Wall-clock times of day and their `HH:mm` / `HH:mm:ss` wire form.
use std::{fmt, str::FromStr};

use crate::{
    date::{YearMonth, parse_digits},
    error::TemporalError,
    granularity::Granularity,
};

/// A time of day on a 24-hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a time of day, rejecting out-of-range units.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TemporalError> {
        // Month is irrelevant for sub-day domains.
        let any = YearMonth::new_unchecked(1970, 0);
        Granularity::Hour24.check(hour as i64, any)?;
        Granularity::Minute.check(minute as i64, any)?;
        Granularity::Second.check(second as i64, any)?;
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Formats the time in its 24-hour wire form.
    pub fn to_wire(&self, precision: TimePrecision) -> String {
        match precision {
            TimePrecision::Minute => format!("{:02}:{:02}", self.hour, self.minute),
            TimePrecision::Second => {
                format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
            }
        }
    }

    pub(crate) fn new_unchecked(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// The finest unit a wire time carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimePrecision {
    /// `HH:mm`.
    #[default]
    Minute,
    /// `HH:mm:ss`.
    Second,
}

/// A time of day together with the precision it was written with.
///
/// Serializes as `HH:mm` or `HH:mm:ss`, always zero-padded and 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireTime {
    /// The time of day.
    pub time: TimeOfDay,
    /// Whether seconds are part of the value.
    pub precision: TimePrecision,
}

impl WireTime {
    /// Creates a wire time.
    pub fn new(time: TimeOfDay, precision: TimePrecision) -> Self {
        let time = match precision {
            TimePrecision::Minute => TimeOfDay::new_unchecked(time.hour, time.minute, 0),
            TimePrecision::Second => time,
        };
        Self { time, precision }
    }
}

impl fmt::Display for WireTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.time.to_wire(self.precision))
    }
}

impl FromStr for WireTime {
    type Err = TemporalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = text.trim().split(':').collect();
        let precision = match fields.len() {
            2 => TimePrecision::Minute,
            3 => TimePrecision::Second,
            _ => return Err(TemporalError::unparseable(text, "expected HH:mm or HH:mm:ss")),
        };
        if fields.iter().any(|field| field.len() != 2) {
            return Err(TemporalError::unparseable(text, "fields must be two digits"));
        }
        let hour = parse_digits(text, fields[0])?;
        let minute = parse_digits(text, fields[1])?;
        let second = match fields.get(2) {
            Some(field) => parse_digits(text, field)?,
            None => 0,
        };
        let time = TimeOfDay::new(hour as u8, minute as u8, second as u8)
            .map_err(|_| TemporalError::unparseable(text, "time out of range"))?;
        Ok(WireTime { time, precision })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WireTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WireTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_units() {
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
        assert!(TimeOfDay::new(24, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 60, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 60).is_err());
    }

    #[test]
    fn wire_form_is_zero_padded_and_24_hour() {
        let time = TimeOfDay::new(7, 5, 9).unwrap();
        assert_eq!(time.to_wire(TimePrecision::Minute), "07:05");
        assert_eq!(time.to_wire(TimePrecision::Second), "07:05:09");
        let evening = WireTime::new(TimeOfDay::new(21, 30, 15).unwrap(), TimePrecision::Minute);
        assert_eq!(evening.to_string(), "21:30");
        assert_eq!(evening.time.second(), 0);
    }

    #[test]
    fn parses_both_wire_shapes() {
        let short: WireTime = "09:30".parse().unwrap();
        assert_eq!(short.precision, TimePrecision::Minute);
        assert_eq!(short.time, TimeOfDay::new(9, 30, 0).unwrap());

        let long: WireTime = "23:59:58".parse().unwrap();
        assert_eq!(long.precision, TimePrecision::Second);
        assert_eq!(long.time.second(), 58);

        for bad in ["9:30", "24:00", "12:60", "12:30:61", "noon", "12:30:00:00", "ab:cd", ""] {
            assert!(
                matches!(
                    bad.parse::<WireTime>(),
                    Err(TemporalError::UnparseableTemporalString { .. })
                ),
                "{bad}"
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_wire_string() {
        let value: WireTime = "08:15:00".parse().unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""08:15:00""#);
        let back: WireTime = serde_json::from_str(r#""18:45""#).unwrap();
        assert_eq!(back.to_string(), "18:45");
        assert!(serde_json::from_str::<WireTime>(r#""25:00""#).is_err());
    }
}
