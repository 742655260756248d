//! Timesheet record grammar.
//!
//! A record line has the form
//!
//! ```text
//! NAME=DDHH:MM-HH:MM(,DDHH:MM-HH:MM)*
//! ```
//!
//! where `NAME` is 2 to 15 ASCII letters and `DD` is one of `MO TU WE TH FR
//! SA SU`. The whole line must match; there is no leading or trailing text,
//! and tokens are separated by exactly one comma.

use thiserror::Error;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Day, EmployeeRecord, Shift};

/// Shortest accepted employee name.
pub const MIN_NAME_LEN: usize = 2;
/// Longest accepted employee name.
pub const MAX_NAME_LEN: usize = 15;

/// Length of a shift token such as `MO10:00-12:00`.
const SHIFT_TOKEN_LEN: usize = 13;

/// Why a line was not accepted as a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRejection {
    /// The line is empty.
    #[error("line is empty")]
    Empty,

    /// There is no `=` between name and shifts.
    #[error("missing '=' between name and shifts")]
    MissingSeparator,

    /// The name is not 2 to 15 ASCII letters.
    #[error("invalid employee name '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// Nothing follows the `=`.
    #[error("no shifts after '='")]
    NoShifts,

    /// One of the comma-separated tokens is not a shift.
    #[error("shift {position} '{token}' is invalid: {reason}")]
    InvalidShift {
        /// One-based position of the token in the line.
        position: usize,
        /// The rejected token.
        token: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Parses one line into an employee record.
///
/// # Example
///
/// ```
/// use weekly_payroll::parser::{parse_line, LineRejection};
///
/// let record = parse_line("RENE=MO10:00-12:00,SA14:00-18:00").unwrap();
/// assert_eq!(record.name, "RENE");
/// assert_eq!(record.tokens, vec!["MO10:00-12:00", "SA14:00-18:00"]);
///
/// assert_eq!(parse_line("RENE="), Err(LineRejection::NoShifts));
/// ```
pub fn parse_line(line: &str) -> Result<EmployeeRecord, LineRejection> {
    if line.is_empty() {
        return Err(LineRejection::Empty);
    }

    let (name, shifts) = line
        .split_once('=')
        .ok_or(LineRejection::MissingSeparator)?;

    if !is_valid_name(name) {
        return Err(LineRejection::InvalidName {
            name: name.to_string(),
        });
    }
    if shifts.is_empty() {
        return Err(LineRejection::NoShifts);
    }

    let mut tokens = Vec::new();
    for (index, token) in shifts.split(',').enumerate() {
        if let Err(reason) = scan_shift(token) {
            return Err(LineRejection::InvalidShift {
                position: index + 1,
                token: token.to_string(),
                reason,
            });
        }
        tokens.push(token.to_string());
    }

    Ok(EmployeeRecord::new(name, tokens))
}

/// Returns true if the whole line matches the record grammar.
pub fn is_valid_line(line: &str) -> bool {
    parse_line(line).is_ok()
}

/// The employee name at the start of a line, if the line opens with a valid
/// name followed by `=`.
pub fn extract_name(line: &str) -> Option<&str> {
    line.split_once('=')
        .map(|(name, _)| name)
        .filter(|name| is_valid_name(name))
}

/// The comma-separated tokens after the `=`, unvalidated.
pub fn extract_shift_tokens(line: &str) -> Vec<String> {
    line.split_once('=')
        .map(|(_, shifts)| shifts.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}

/// Decodes a shift token into its day, start time and end time.
///
/// # Errors
///
/// Returns [`PayrollError::MalformedShift`] if the token does not follow the
/// `DDHH:MM-HH:MM` layout.
///
/// # Example
///
/// ```
/// use weekly_payroll::models::Day;
/// use weekly_payroll::parser::extract_day_start_end;
///
/// let shift = extract_day_start_end("SU20:00-21:00").unwrap();
/// assert_eq!(shift.day, Day::Sunday);
/// assert_eq!(shift.start, "20:00");
/// assert_eq!(shift.end, "21:00");
/// ```
pub fn extract_day_start_end(token: &str) -> PayrollResult<Shift> {
    scan_shift(token)
        .map(|(day, start, end)| Shift::new(day, start, end))
        .map_err(|reason| PayrollError::MalformedShift {
            token: token.to_string(),
            reason,
        })
}

fn is_valid_name(name: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len())
        && name.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Checks the token layout and splits it into day code and the two times.
fn scan_shift(token: &str) -> Result<(Day, &str, &str), String> {
    if !token.is_ascii() {
        return Err("contains non-ASCII characters".to_string());
    }
    if token.len() != SHIFT_TOKEN_LEN {
        return Err(format!(
            "expected {} characters, found {}",
            SHIFT_TOKEN_LEN,
            token.len()
        ));
    }

    let (code, times) = token.split_at(2);
    let day = Day::from_code(code).ok_or_else(|| format!("unknown day code '{}'", code))?;

    let (start, rest) = times.split_at(5);
    let end = rest
        .strip_prefix('-')
        .ok_or_else(|| "expected '-' between start and end".to_string())?;

    for time in [start, end] {
        if !is_time_shape(time) {
            return Err(format!("'{}' is not HH:MM", time));
        }
    }

    Ok((day, start, end))
}

fn is_time_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}
