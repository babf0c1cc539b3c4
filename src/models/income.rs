//! Monthly net income model
//!
//! Only the current value is kept; updating it replaces the previous one.

use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Validation errors for monthly income
#[derive(Debug, Clone, PartialEq)]
pub enum IncomeValidationError {
    NegativeAmount(f64),
    NonFiniteAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Monthly income cannot be negative (got {})", amount)
            }
            Self::NonFiniteAmount => write!(f, "Monthly income must be a finite number"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// Net income per month together with the display currency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub amount: f64,
    pub currency: Currency,
}

impl MonthlyIncome {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Whether an income has been entered.
    ///
    /// Zero and negative values count as "not set": statistics relative to
    /// income are not computed for them.
    pub fn is_set(&self) -> bool {
        self.amount.is_finite() && self.amount > 0.0
    }

    /// Validate a user-supplied income
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_finite() {
            return Err(IncomeValidationError::NonFiniteAmount);
        }
        if self.amount < 0.0 {
            return Err(IncomeValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let income = MonthlyIncome::default();
        assert_eq!(income.amount, 0.0);
        assert_eq!(income.currency, Currency::Sek);
        assert!(!income.is_set());
    }

    #[test]
    fn test_is_set() {
        assert!(MonthlyIncome::new(25_000.0, Currency::Sek).is_set());
        assert!(!MonthlyIncome::new(-1.0, Currency::Sek).is_set());
        assert!(!MonthlyIncome::new(f64::INFINITY, Currency::Usd).is_set());
    }

    #[test]
    fn test_validation() {
        assert!(MonthlyIncome::new(0.0, Currency::Sek).validate().is_ok());
        assert_eq!(
            MonthlyIncome::new(-100.0, Currency::Sek).validate(),
            Err(IncomeValidationError::NegativeAmount(-100.0))
        );
        assert_eq!(
            MonthlyIncome::new(f64::NAN, Currency::Sek).validate(),
            Err(IncomeValidationError::NonFiniteAmount)
        );
    }
}
