//! Timesheet parsing.
//!
//! [`record`] recognizes whole lines and decodes shift tokens; [`time`]
//! turns `HH:MM` text into linear minutes.

pub mod record;
pub mod time;

pub use record::{
    LineRejection, extract_day_start_end, extract_name, extract_shift_tokens, is_valid_line,
    parse_line,
};
pub use time::{adjust_midnight, parse_time, to_linear_minutes};
