//! Time normalization.
//!
//! Converts `HH:MM` text into linear time: minutes since the start of the
//! day. Shifts never cross midnight, so `00:00` always means the end of the
//! day and normalizes to 1440 rather than 0.

use crate::config::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::error::{PayrollError, PayrollResult};

/// Hour substituted for `00:00`.
const END_OF_DAY_HOUR: u32 = 24;

/// Splits `HH:MM` into hour and minute.
///
/// # Errors
///
/// - [`PayrollError::MalformedShift`] if `text` is not exactly two digits,
///   a colon, and two digits
/// - [`PayrollError::OutOfBounds`] if the hour is above 24, the minute is 60
///   or more, or the time lies past `24:00`
///
/// # Example
///
/// ```
/// use weekly_payroll::parser::parse_time;
///
/// assert_eq!(parse_time("21:35").unwrap(), (21, 35));
/// assert!(parse_time("27:30").is_err());
/// ```
pub fn parse_time(text: &str) -> PayrollResult<(u32, u32)> {
    let malformed = |reason: &str| PayrollError::MalformedShift {
        token: text.to_string(),
        reason: reason.to_string(),
    };

    let (hour_text, minute_text) = text
        .split_once(':')
        .ok_or_else(|| malformed("expected HH:MM"))?;
    let hour = two_digits(hour_text).ok_or_else(|| malformed("hour must be two digits"))?;
    let minute = two_digits(minute_text).ok_or_else(|| malformed("minute must be two digits"))?;

    let past_end_of_day = hour == END_OF_DAY_HOUR && minute > 0;
    if hour > END_OF_DAY_HOUR || minute >= MINUTES_PER_HOUR || past_end_of_day {
        return Err(PayrollError::OutOfBounds {
            time: text.to_string(),
            hour,
            minute,
        });
    }

    Ok((hour, minute))
}

/// Maps `00:00` to hour 24; every other hour passes through.
pub fn adjust_midnight(hour: u32, minute: u32) -> u32 {
    if hour == 0 && minute == 0 {
        END_OF_DAY_HOUR
    } else {
        hour
    }
}

/// Converts `HH:MM` to linear minutes in `[1, 1440]`.
///
/// # Example
///
/// ```
/// use weekly_payroll::parser::to_linear_minutes;
///
/// assert_eq!(to_linear_minutes("09:00").unwrap(), 540);
/// assert_eq!(to_linear_minutes("00:01").unwrap(), 1);
/// assert_eq!(to_linear_minutes("00:00").unwrap(), 1440);
/// ```
pub fn to_linear_minutes(text: &str) -> PayrollResult<u32> {
    let (hour, minute) = parse_time(text)?;
    let linear = adjust_midnight(hour, minute) * MINUTES_PER_HOUR + minute;
    debug_assert!((1..=MINUTES_PER_DAY).contains(&linear));
    Ok(linear)
}

fn two_digits(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0'))
}
