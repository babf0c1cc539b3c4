//! Expense records
//!
//! Fixed expenses are recurring monthly costs. Variable expenses are dated,
//! one-off costs. Both are plain values; the store owns the canonical lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{FixedExpenseCategory, VariableExpenseCategory};
use super::ids::{FixedExpenseId, VariableExpenseId};

/// Longest accepted expense name
pub const MAX_NAME_LEN: usize = 100;

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveAmount(f64),
    NonFiniteAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Expense name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
            Self::NonFiniteAmount => write!(f, "Expense amount must be a finite number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

fn validate_common(name: &str, amount: f64) -> Result<(), ExpenseValidationError> {
    if name.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ExpenseValidationError::NameTooLong(len));
    }
    if !amount.is_finite() {
        return Err(ExpenseValidationError::NonFiniteAmount);
    }
    if amount <= 0.0 {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

/// Read access shared by both expense kinds
pub trait Expense {
    fn name(&self) -> &str;
    fn amount(&self) -> f64;
    fn category_label(&self) -> &'static str;

    /// Date of the expense, if the kind carries one
    fn date(&self) -> Option<NaiveDate> {
        None
    }
}

/// A recurring monthly cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpenseItem {
    pub id: FixedExpenseId,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub category: FixedExpenseCategory,
}

impl FixedExpenseItem {
    /// Create a new fixed expense with a fresh id
    pub fn new(name: impl Into<String>, amount: f64, category: FixedExpenseCategory) -> Self {
        Self {
            id: FixedExpenseId::new(),
            name: name.into().trim().to_string(),
            amount,
            category,
        }
    }

    /// Check the invariants the store relies on
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_common(&self.name, self.amount)
    }
}

impl Expense for FixedExpenseItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn category_label(&self) -> &'static str {
        use super::category::CategorySet;
        self.category.label()
    }
}

impl fmt::Display for FixedExpenseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// A dated one-off cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpenseItem {
    pub id: VariableExpenseId,
    #[serde(with = "date_codec")]
    pub date: NaiveDate,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub category: VariableExpenseCategory,
}

impl VariableExpenseItem {
    /// Create a new variable expense with a fresh id
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        amount: f64,
        category: VariableExpenseCategory,
    ) -> Self {
        Self {
            id: VariableExpenseId::new(),
            date,
            name: name.into().trim().to_string(),
            amount,
            category,
        }
    }

    /// Check the invariants the store relies on
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_common(&self.name, self.amount)
    }
}

impl Expense for VariableExpenseItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn category_label(&self) -> &'static str {
        use super::category::CategorySet;
        self.category.label()
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl fmt::Display for VariableExpenseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date.format("%Y-%m-%d"), self.name, self.category)
    }
}

/// Serde codec for calendar dates in persisted records.
///
/// Writes `YYYY-MM-DD`. Reads that form as well as full ISO-8601 timestamps
/// such as `2024-03-15T09:30:00.000Z`, which older data files contain;
/// timestamps are reduced to the calendar date in the local time zone.
pub mod date_codec {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
    }

    /// Parse any of the accepted date representations, reading timestamps
    /// in the local time zone
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        parse_in(raw, &Local)
    }

    /// Parse any of the accepted date representations; timestamps become
    /// the calendar date they fall on in `tz`
    pub fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Some(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.with_timezone(tz).date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.date())
    }
}
