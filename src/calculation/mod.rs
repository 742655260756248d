//! Calculation logic for the payroll engine.
//!
//! This module prices shifts against the wage table (splitting intervals at
//! band boundaries and applying the weekend surcharge) and aggregates the
//! results into weekly payments per employee.

mod interval;
mod weekly;

pub use interval::{amount_for_interval, basic_wage, check_coherent, pay_shift};
pub use weekly::{parse_all_records, pay_token, payroll_for_all, run_payroll, weekly_payment};
