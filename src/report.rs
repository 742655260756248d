//! Payroll presentation.
//!
//! Amounts are carried unrounded through the engine and rounded to cents
//! only here, half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{Payroll, ShiftOutcome};

/// Currency label printed after every amount.
pub const CURRENCY: &str = "USD";

/// Rounds an amount to cents.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimals.
///
/// ```
/// use weekly_payroll::report::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(215)), "215.00");
/// assert_eq!(format_amount(Decimal::new(289_666_667, 6)), "289.67");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_amount(amount);
    rounded.rescale(2);
    rounded.to_string()
}

/// The report line for one employee.
///
/// ```
/// use weekly_payroll::report::paycheck_line;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     paycheck_line("ASTRID", Decimal::from(85)),
///     "The amount to pay ASTRID is: 85.00 USD"
/// );
/// ```
pub fn paycheck_line(name: &str, amount: Decimal) -> String {
    format!(
        "The amount to pay {} is: {} {}",
        name,
        format_amount(amount),
        CURRENCY
    )
}

/// One report line per employee, in payroll order, each newline-terminated.
pub fn render_text(payroll: &Payroll) -> String {
    payroll
        .amounts()
        .map(|(name, amount)| paycheck_line(name, amount) + "\n")
        .collect()
}

/// Serializable view of a computed payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Employees in payroll order.
    pub employees: Vec<EmployeeSummary>,
}

/// One employee's line in a [`PayrollSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee's name.
    pub name: String,
    /// Weekly total, two decimals.
    pub amount: String,
    /// Currency of `amount`.
    pub currency: String,
    /// Per-shift outcomes in token order.
    pub shifts: Vec<ShiftSummary>,
}

/// One shift's outcome in a [`PayrollSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// The raw shift token.
    pub token: String,
    /// Amount paid, two decimals; absent when skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Why the shift was skipped; absent when paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

impl From<&ShiftOutcome> for ShiftSummary {
    fn from(outcome: &ShiftOutcome) -> Self {
        match outcome {
            ShiftOutcome::Paid { token, amount } => ShiftSummary {
                token: token.clone(),
                amount: Some(format_amount(*amount)),
                skipped: None,
            },
            ShiftOutcome::Skipped { token, reason } => ShiftSummary {
                token: token.clone(),
                amount: None,
                skipped: Some(reason.to_string()),
            },
        }
    }
}

impl From<&Payroll> for PayrollSummary {
    fn from(payroll: &Payroll) -> Self {
        let employees = payroll
            .iter()
            .map(|entry| EmployeeSummary {
                name: entry.name.clone(),
                amount: format_amount(entry.payment.total()),
                currency: CURRENCY.to_string(),
                shifts: entry.payment.outcomes.iter().map(ShiftSummary::from).collect(),
            })
            .collect();
        PayrollSummary { employees }
    }
}
