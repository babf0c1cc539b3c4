//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging clap
//! argument parsing with the expense store. User input is validated here;
//! the store trusts what it is given.

pub mod categories;
pub mod config;
pub mod fixed;
pub mod income;
pub mod summary;
pub mod variable;

pub use categories::{handle_categories_command, CategoryKind};
pub use config::{handle_config_command, ConfigCommands};
pub use fixed::{handle_fixed_command, FixedCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use summary::handle_summary_command;
pub use variable::{handle_variable_command, VariableCommands};

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::expense::date_codec;
use crate::models::CategorySet;

/// Parse an amount such as "8000", "8,000" or "129.50"
pub fn parse_amount(raw: &str) -> TrackerResult<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();

    let amount: f64 = cleaned
        .parse()
        .map_err(|_| TrackerError::Validation(format!("Invalid amount '{}'", raw)))?;

    if !amount.is_finite() {
        return Err(TrackerError::Validation(format!("Invalid amount '{}'", raw)));
    }
    Ok(amount)
}

/// Parse a category by label, or by its 1-based number in the category list.
///
/// Numbers outside the list resolve to the fallback category.
pub fn parse_category<C>(raw: &str) -> TrackerResult<C>
where
    C: CategorySet + std::str::FromStr,
    TrackerError: From<<C as std::str::FromStr>::Err>,
{
    match raw.trim().parse::<isize>() {
        Ok(number) => Ok(C::at(number.saturating_sub(1))),
        Err(_) => Ok(raw.parse::<C>()?),
    }
}

/// Parse a date given as `YYYY-MM-DD`, an RFC 3339 timestamp, or "today"
pub fn parse_date(raw: &str) -> TrackerResult<NaiveDate> {
    if raw.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }

    date_codec::parse(raw).ok_or_else(|| {
        TrackerError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", raw))
    })
}

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Clamp a requested 1-based page number into range
pub(crate) fn clamp_page(requested: usize, pages: usize) -> usize {
    requested.clamp(1, pages.max(1))
}
