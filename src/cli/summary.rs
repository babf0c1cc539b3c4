//! Summary command
//!
//! Prints the month overview: income against fixed and this month's
//! variable expenses, plus the category splits.

use chrono::NaiveDate;

use super::{parse_date, today};
use crate::config::settings::Settings;
use crate::display::format_overview;
use crate::error::TrackerResult;
use crate::reports::Overview;
use crate::storage::{ExpenseStore, StorageBackend};

/// Build the overview for `as_of` (today when `None`)
pub fn build_overview<B: StorageBackend>(
    store: &ExpenseStore<B>,
    as_of: Option<&str>,
) -> TrackerResult<Overview> {
    let reference: NaiveDate = match as_of {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };

    Ok(Overview::build(
        store.income().amount,
        store.fixed_expenses(),
        store.variable_expenses(),
        reference,
    ))
}

/// Handle the summary command
pub fn handle_summary_command<B: StorageBackend>(
    store: &ExpenseStore<B>,
    settings: &Settings,
    as_of: Option<String>,
) -> TrackerResult<()> {
    let overview = build_overview(store, as_of.as_deref())?;
    println!(
        "{}",
        format_overview(&overview, store.currency(), settings.date_style)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FixedExpenseCategory, FixedExpenseItem, VariableExpenseCategory, VariableExpenseItem,
    };
    use crate::storage::MemoryBackend;

    #[test]
    fn test_build_overview_as_of() {
        let mut store = ExpenseStore::load_all(MemoryBackend::new()).unwrap();
        store.set_income(3000.0).unwrap();
        store
            .add_fixed(FixedExpenseItem::new("Rent", 1500.0, FixedExpenseCategory::Bills))
            .unwrap();
        for day in [1, 15, 16] {
            store
                .add_variable(VariableExpenseItem::new(
                    NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                    "Food",
                    100.0,
                    VariableExpenseCategory::Food,
                ))
                .unwrap();
        }

        let overview = build_overview(&store, Some("2024-03-15")).unwrap();
        assert_eq!(overview.this_month.len(), 2);
        assert_eq!(overview.variable_total, 200.0);
        assert_eq!(overview.remaining, 1300.0);
    }

    #[test]
    fn test_build_overview_bad_date() {
        let store = ExpenseStore::load_all(MemoryBackend::new()).unwrap();
        assert!(build_overview(&store, Some("March")).unwrap_err().is_validation());
    }
}
