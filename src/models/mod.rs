//! Core data models for the payroll engine.
//!
//! This module contains the domain models used throughout the engine.

mod day;
mod payroll;
mod shift;

pub use day::Day;
pub use payroll::{
    EmployeePay, EmployeeRecord, EmployeeShifts, Payroll, ShiftOutcome, WeeklyPayment,
};
pub use shift::Shift;
