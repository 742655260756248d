//! Payroll aggregation models.
//!
//! [`EmployeeShifts`] holds the parsed shift tokens of every employee and
//! [`Payroll`] the computed weekly payments. Both keep employees in the order
//! their name was first seen in the input.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::PayrollError;

/// The shift tokens recorded for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// The employee's name, case as supplied.
    pub name: String,
    /// Raw shift tokens such as `MO10:00-12:00`, in line order.
    pub tokens: Vec<String>,
}

impl EmployeeRecord {
    /// Creates a record from a name and its tokens.
    pub fn new(name: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }
}

/// Employee name to shift tokens, in first-seen order.
///
/// Inserting a name that is already present replaces its tokens wholesale
/// and keeps the original position.
///
/// # Example
///
/// ```
/// use weekly_payroll::models::{EmployeeRecord, EmployeeShifts};
///
/// let mut shifts = EmployeeShifts::new();
/// shifts.insert(EmployeeRecord::new("RENE", vec!["MO10:00-12:00".to_string()]));
/// shifts.insert(EmployeeRecord::new("ASTRID", vec!["TU10:00-12:00".to_string()]));
/// let previous = shifts.insert(EmployeeRecord::new("RENE", vec!["SU20:00-21:00".to_string()]));
///
/// assert_eq!(previous, Some(vec!["MO10:00-12:00".to_string()]));
/// assert_eq!(shifts.names().collect::<Vec<_>>(), vec!["RENE", "ASTRID"]);
/// assert_eq!(shifts.get("RENE").unwrap(), &["SU20:00-21:00".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeShifts {
    records: Vec<EmployeeRecord>,
    index: HashMap<String, usize>,
}

impl EmployeeShifts {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record, returning the tokens it replaced, if any.
    pub fn insert(&mut self, record: EmployeeRecord) -> Option<Vec<String>> {
        match self.index.get(&record.name) {
            Some(&position) => Some(std::mem::replace(
                &mut self.records[position].tokens,
                record.tokens,
            )),
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// The tokens stored for `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&position| self.records[position].tokens.as_slice())
    }

    /// Returns true if `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Employee names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.records.iter()
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no employee has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a EmployeeShifts {
    type Item = &'a EmployeeRecord;
    type IntoIter = std::slice::Iter<'a, EmployeeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// What happened to one shift token during payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// The shift was paid.
    Paid {
        /// The raw token.
        token: String,
        /// Unrounded amount for the shift.
        amount: Decimal,
    },
    /// The shift could not be paid and was left out of the total.
    Skipped {
        /// The raw token.
        token: String,
        /// Why the shift was skipped.
        reason: PayrollError,
    },
}

impl ShiftOutcome {
    /// The raw token this outcome belongs to.
    pub fn token(&self) -> &str {
        match self {
            ShiftOutcome::Paid { token, .. } | ShiftOutcome::Skipped { token, .. } => token,
        }
    }

    /// The amount paid, or `None` for a skipped shift.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            ShiftOutcome::Paid { amount, .. } => Some(*amount),
            ShiftOutcome::Skipped { .. } => None,
        }
    }

    /// Returns true if the shift was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, ShiftOutcome::Skipped { .. })
    }
}

/// One employee's payment for the week together with per-shift outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyPayment {
    /// Outcomes in token order.
    pub outcomes: Vec<ShiftOutcome>,
}

impl WeeklyPayment {
    /// Sum of all paid shifts, unrounded.
    pub fn total(&self) -> Decimal {
        self.outcomes.iter().filter_map(ShiftOutcome::amount).sum()
    }

    /// Shifts that were left out of the total.
    pub fn skipped(&self) -> impl Iterator<Item = &ShiftOutcome> {
        self.outcomes.iter().filter(|o| o.is_skipped())
    }
}

/// A computed payment for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePay {
    /// The employee's name.
    pub name: String,
    /// The employee's weekly payment.
    pub payment: WeeklyPayment,
}

/// Employee name to weekly payment, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payroll {
    entries: Vec<EmployeePay>,
}

impl Payroll {
    /// Creates an empty payroll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee's payment.
    pub fn push(&mut self, name: impl Into<String>, payment: WeeklyPayment) {
        self.entries.push(EmployeePay {
            name: name.into(),
            payment,
        });
    }

    /// The unrounded total for `name`.
    pub fn amount(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.payment.total())
    }

    /// Name and unrounded total for every employee.
    pub fn amounts(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.payment.total()))
    }

    /// All entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeePay> {
        self.entries.iter()
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the payroll has no employees.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
