//! Shift model.
//!
//! A [`Shift`] is the decoded form of a shift token such as `MO10:00-12:00`:
//! the day plus the start and end time texts, still unnormalized.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Day;

/// A single worked shift within one day.
///
/// Times are kept as the `HH:MM` text from the timesheet; normalization into
/// linear minutes happens when the shift is paid, so that bounds errors are
/// attributed to the shift rather than to the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The day the shift was worked.
    pub day: Day,
    /// The start time as `HH:MM`.
    pub start: String,
    /// The end time as `HH:MM`.
    pub end: String,
}

impl Shift {
    /// Creates a shift from its parts.
    pub fn new(day: Day, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.day, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reproduces_token() {
        let shift = Shift::new(Day::Saturday, "14:00", "18:00");
        assert_eq!(shift.to_string(), "SA14:00-18:00");
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{"day": "TU", "start": "10:00", "end": "12:00"}"#;
        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift, Shift::new(Day::Tuesday, "10:00", "12:00"));
    }
}
