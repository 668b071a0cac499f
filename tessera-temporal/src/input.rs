//! Free-text date and time entry.
//!
//! Typed input fails in ordinary use, so parsing reports a [`FieldInput`]
//! rather than a bare `Result`: an empty field and an unparseable one are
//! different states for a host rendering validation feedback.
use crate::{date::CalendarDate, error::TemporalError, time::WireTime};

/// The state of a text field holding a temporal value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldInput<T> {
    /// Nothing entered.
    #[default]
    Empty,
    /// A well-formed value.
    Valid(T),
    /// Text that does not parse.
    Invalid(TemporalError),
}

impl<T> FieldInput<T> {
    /// Returns the parsed value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldInput::Valid(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the parse failure, if any.
    pub fn error(&self) -> Option<&TemporalError> {
        match self {
            FieldInput::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// Returns true when the field is blank.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldInput::Empty)
    }

    /// Returns true when the field holds unparseable text.
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldInput::Invalid(_))
    }

    /// Converts into the parsed value, dropping the distinction between
    /// empty and invalid.
    pub fn into_value(self) -> Option<T> {
        match self {
            FieldInput::Valid(value) => Some(value),
            _ => None,
        }
    }

    fn from_text(text: &str, parse: impl FnOnce(&str) -> Result<T, TemporalError>) -> Self {
        if text.trim().is_empty() {
            return FieldInput::Empty;
        }
        match parse(text) {
            Ok(value) => FieldInput::Valid(value),
            Err(error) => FieldInput::Invalid(error),
        }
    }
}

/// Parses a `YYYY-MM-DD` date, where the month in the text is 1-based.
///
/// ```
/// use tessera_temporal::input::{FieldInput, parse_date_input};
///
/// let parsed = parse_date_input("2024-03-05");
/// assert_eq!(parsed.value().map(|d| d.month()), Some(2));
/// assert!(parse_date_input("  ").is_empty());
/// assert!(parse_date_input("2024-13-01").is_invalid());
/// ```
pub fn parse_date_input(text: &str) -> FieldInput<CalendarDate> {
    FieldInput::from_text(text, str::parse)
}

/// Parses a 24-hour `HH:mm` or `HH:mm:ss` time.
///
/// The precision of the result follows the text.
pub fn parse_time_input(text: &str) -> FieldInput<WireTime> {
    FieldInput::from_text(text, str::parse)
}
