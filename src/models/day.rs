//! Day-of-week model.
//!
//! Timesheets name days with two-letter codes (`MO` … `SU`). The week starts
//! on Monday, so Monday has ordinal 1 and Sunday ordinal 7.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A day of the working week as written in a timesheet.
///
/// # Example
///
/// ```
/// use weekly_payroll::models::Day;
///
/// let day: Day = "SA".parse().unwrap();
/// assert_eq!(day.ordinal(), 6);
/// assert!(day.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// `MO`
    #[serde(rename = "MO")]
    Monday,
    /// `TU`
    #[serde(rename = "TU")]
    Tuesday,
    /// `WE`
    #[serde(rename = "WE")]
    Wednesday,
    /// `TH`
    #[serde(rename = "TH")]
    Thursday,
    /// `FR`
    #[serde(rename = "FR")]
    Friday,
    /// `SA`
    #[serde(rename = "SA")]
    Saturday,
    /// `SU`
    #[serde(rename = "SU")]
    Sunday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Looks up a day by its two-letter code. Codes are case sensitive.
    pub fn from_code(code: &str) -> Option<Day> {
        Day::ALL.into_iter().find(|day| day.code() == code)
    }

    /// The two-letter timesheet code.
    pub fn code(self) -> &'static str {
        match self {
            Day::Monday => "MO",
            Day::Tuesday => "TU",
            Day::Wednesday => "WE",
            Day::Thursday => "TH",
            Day::Friday => "FR",
            Day::Saturday => "SA",
            Day::Sunday => "SU",
        }
    }

    /// Position in the week, Monday = 1 through Sunday = 7.
    pub fn ordinal(self) -> u32 {
        self.weekday().number_from_monday()
    }

    /// Saturday and Sunday attract the weekend surcharge.
    pub fn is_weekend(self) -> bool {
        self.ordinal() > 5
    }

    /// The equivalent chrono weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl FromStr for Day {
    type Err = PayrollError;

    fn from_str(s: &str) -> PayrollResult<Self> {
        Day::from_code(s).ok_or_else(|| PayrollError::MalformedShift {
            token: s.to_string(),
            reason: format!("unknown day code '{}'", s),
        })
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
