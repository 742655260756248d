//! Weekly payroll aggregation.
//!
//! This module turns raw timesheet lines into per-employee shift lists and
//! those into weekly payments. Invalid lines are dropped, invalid shifts are
//! skipped and reported, and only an input with no valid line at all is an
//! error.

use tracing::{debug, info, warn};

use crate::config::WageTable;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeShifts, Payroll, ShiftOutcome, WeeklyPayment};
use crate::parser::{extract_day_start_end, parse_line};

use super::pay_shift;

/// Parses every line, keeping the shift tokens of each valid record.
///
/// A later valid line for an employee replaces the earlier one entirely.
///
/// # Errors
///
/// Returns [`PayrollError::EmptyInput`] if no line is a valid record.
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::parse_all_records;
///
/// let shifts = parse_all_records(["RENE=MO10:00-12:00,WE10:00-12:00", "not a record"]).unwrap();
/// assert_eq!(shifts.len(), 1);
/// assert_eq!(shifts.get("RENE").unwrap(), &["MO10:00-12:00", "WE10:00-12:00"]);
///
/// assert!(parse_all_records(["RENE="]).is_err());
/// ```
pub fn parse_all_records<I, S>(lines: I) -> PayrollResult<EmployeeShifts>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut shifts = EmployeeShifts::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(line) {
            Ok(record) => {
                let name = record.name.clone();
                if let Some(previous) = shifts.insert(record) {
                    debug!(
                        line_number = index + 1,
                        employee = %name,
                        replaced_shifts = previous.len(),
                        "Later record replaces earlier entry"
                    );
                }
            }
            Err(rejection) => {
                debug!(line_number = index + 1, reason = %rejection, "Ignoring invalid line");
            }
        }
    }

    if shifts.is_empty() {
        return Err(PayrollError::EmptyInput);
    }
    Ok(shifts)
}

/// Pays one shift token, capturing any failure as a skip.
pub fn pay_token(table: &WageTable, token: &str) -> ShiftOutcome {
    match extract_day_start_end(token).and_then(|shift| pay_shift(table, &shift)) {
        Ok(amount) => ShiftOutcome::Paid {
            token: token.to_string(),
            amount,
        },
        Err(reason) => ShiftOutcome::Skipped {
            token: token.to_string(),
            reason,
        },
    }
}

/// Pays every token of one employee.
///
/// Shifts that cannot be paid are logged and left out of the total; the
/// other shifts are still paid.
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::weekly_payment;
/// use weekly_payroll::config::WageTable;
/// use rust_decimal::Decimal;
///
/// let tokens = ["MO10:00-12:00", "TH12:00-14:00", "SU20:00-21:00", "TU12:00-10:00"];
/// let payment = weekly_payment(&WageTable::default(), &tokens);
/// assert_eq!(payment.total(), Decimal::from(85));
/// assert_eq!(payment.skipped().count(), 1);
/// ```
pub fn weekly_payment<S: AsRef<str>>(table: &WageTable, tokens: &[S]) -> WeeklyPayment {
    let outcomes = tokens
        .iter()
        .map(|token| {
            let outcome = pay_token(table, token.as_ref());
            if let ShiftOutcome::Skipped { token, reason } = &outcome {
                warn!(token = %token, reason = %reason, "Skipping shift");
            }
            outcome
        })
        .collect();

    WeeklyPayment { outcomes }
}

/// Computes the weekly payment of every employee.
pub fn payroll_for_all(table: &WageTable, shifts: &EmployeeShifts) -> Payroll {
    let mut payroll = Payroll::new();
    for record in shifts {
        let payment = weekly_payment(table, &record.tokens);
        debug!(
            employee = %record.name,
            shifts = record.tokens.len(),
            skipped = payment.skipped().count(),
            total = %payment.total(),
            "Computed weekly payment"
        );
        payroll.push(record.name.clone(), payment);
    }
    payroll
}

/// Parses `lines` and pays every employee found.
///
/// # Errors
///
/// Returns [`PayrollError::EmptyInput`] if no line is a valid record.
pub fn run_payroll<I, S>(table: &WageTable, lines: I) -> PayrollResult<Payroll>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let shifts = parse_all_records(lines)?;
    let payroll = payroll_for_all(table, &shifts);
    info!(employees = payroll.len(), "Payroll computed");
    Ok(payroll)
}
