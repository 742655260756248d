//! Interval pricing.
//!
//! This module prices a labour interval on one day against the wage table.
//! An interval that crosses band boundaries is split at the ceiling of the
//! band holding its start, the part up to the ceiling is paid at that band's
//! rate, and the remainder, starting one minute after the ceiling, is priced
//! recursively.

use rust_decimal::Decimal;
use tracing::trace;

use crate::config::{MINUTES_PER_HOUR, WageTable};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Day, Shift};
use crate::parser::to_linear_minutes;

/// Checks that an interval does not run backwards.
///
/// # Errors
///
/// Returns [`PayrollError::IncoherentInterval`] if `start > end`.
pub fn check_coherent(start: u32, end: u32) -> PayrollResult<()> {
    if start <= end {
        Ok(())
    } else {
        Err(PayrollError::IncoherentInterval { start, end })
    }
}

/// Pays `[start, end]` entirely at the rate of the band holding `start`.
///
/// The weekend surcharge is added to the base rate before multiplying by the
/// duration `end - start`. Callers are responsible for `start` and `end`
/// sharing a band; [`amount_for_interval`] guarantees that.
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::basic_wage;
/// use weekly_payroll::config::WageTable;
/// use weekly_payroll::models::Day;
/// use rust_decimal::Decimal;
///
/// let table = WageTable::default();
/// assert_eq!(basic_wage(&table, Day::Monday, 0, 60).unwrap(), Decimal::from(25));
/// assert_eq!(basic_wage(&table, Day::Sunday, 0, 60).unwrap(), Decimal::from(30));
/// ```
pub fn basic_wage(table: &WageTable, day: Day, start: u32, end: u32) -> PayrollResult<Decimal> {
    let band = table
        .band_for_time(start)
        .ok_or(PayrollError::UncoveredTime { minute: start })?;

    let mut hourly = band.hourly_rate;
    if day.is_weekend() {
        hourly += table.weekend_surcharge_hourly();
    }

    // Per-minute rate times minutes, with the division by 60 done last so
    // whole-hour rates stay exact.
    Ok(hourly * Decimal::from(end - start) / Decimal::from(MINUTES_PER_HOUR))
}

/// Amount owed for working `[start, end]` (linear minutes) on `day`.
///
/// # Errors
///
/// - [`PayrollError::IncoherentInterval`] if `start > end`
/// - [`PayrollError::UncoveredTime`] if part of the interval lies outside
///   the wage table
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::amount_for_interval;
/// use weekly_payroll::config::WageTable;
/// use weekly_payroll::models::Day;
/// use rust_decimal::Decimal;
///
/// let table = WageTable::default();
/// // 00:00-09:00 early morning plus 09:01-10:00 normal, on a Sunday.
/// let amount = amount_for_interval(&table, Day::Sunday, 0, 600).unwrap();
/// assert_eq!(amount.round_dp(2), Decimal::new(28967, 2));
/// ```
pub fn amount_for_interval(
    table: &WageTable,
    day: Day,
    start: u32,
    end: u32,
) -> PayrollResult<Decimal> {
    check_coherent(start, end)?;

    if table.same_band(start, end) {
        return basic_wage(table, day, start, end);
    }

    let ceiling = table
        .band_ceiling(start)
        .ok_or(PayrollError::UncoveredTime { minute: start })?;
    trace!(%day, start, end, ceiling, "Splitting interval at band ceiling");

    Ok(basic_wage(table, day, start, ceiling)?
        + amount_for_interval(table, day, ceiling + 1, end)?)
}

/// Normalizes a shift's times and prices it.
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::pay_shift;
/// use weekly_payroll::config::WageTable;
/// use weekly_payroll::models::{Day, Shift};
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(Day::Monday, "10:00", "12:00");
/// assert_eq!(pay_shift(&WageTable::default(), &shift).unwrap(), Decimal::from(30));
/// ```
pub fn pay_shift(table: &WageTable, shift: &Shift) -> PayrollResult<Decimal> {
    let start = to_linear_minutes(&shift.start)?;
    let end = to_linear_minutes(&shift.end)?;
    check_coherent(start, end)?;
    amount_for_interval(table, shift.day, start, end)
}
