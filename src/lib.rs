//! Weekly payroll engine.
//!
//! This crate reads weekly timesheets of the form
//! `NAME=DDHH:MM-HH:MM,DDHH:MM-HH:MM,...` and pays each shift against
//! time-of-day wage bands, with a surcharge on weekends.
//!
//! # Example
//!
//! ```
//! use weekly_payroll::calculation::run_payroll;
//! use weekly_payroll::config::WageTable;
//! use weekly_payroll::report::render_text;
//!
//! let payroll = run_payroll(
//!     &WageTable::default(),
//!     ["ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00"],
//! )?;
//! assert_eq!(render_text(&payroll), "The amount to pay ASTRID is: 85.00 USD\n");
//! # Ok::<(), weekly_payroll::error::PayrollError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod parser;
pub mod report;
