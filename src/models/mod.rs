//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain:
//! monthly income, fixed and variable expenses, and their categories.

pub mod category;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod income;

pub use category::{category_at, CategorySet, FixedExpenseCategory, VariableExpenseCategory};
pub use currency::Currency;
pub use expense::{Expense, ExpenseValidationError, FixedExpenseItem, VariableExpenseItem};
pub use ids::{FixedExpenseId, VariableExpenseId};
pub use income::{IncomeValidationError, MonthlyIncome};
