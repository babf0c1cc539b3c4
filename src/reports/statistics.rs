//! Derived statistics over expense snapshots
//!
//! Everything here is a pure function of its inputs.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::models::{Expense, VariableExpenseItem};

/// Days in the simplified month used for per-period figures
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Weeks in the simplified month used for per-period figures
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Total amount of `items`; zero for an empty list
pub fn sum<T: Expense>(items: &[T]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.amount())
}

/// `part` as a percentage of `whole`.
///
/// Returns 0.0 when `whole` is zero, negative or not finite, so callers never
/// see NaN or infinities.
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if !whole.is_finite() || whole <= 0.0 || !part.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

/// A monthly figure spread over other time units.
///
/// Assumes a 30-day, 4-week month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodBreakdown {
    pub year: f64,
    pub month: f64,
    pub week: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
}

impl PeriodBreakdown {
    pub fn from_monthly(monthly: f64) -> Self {
        Self {
            year: monthly * 12.0,
            month: monthly,
            week: monthly / WEEKS_PER_MONTH,
            day: monthly / DAYS_PER_MONTH,
            hour: monthly / (DAYS_PER_MONTH * 24.0),
            minute: monthly / (DAYS_PER_MONTH * 24.0 * 60.0),
        }
    }

    /// Label/value pairs from the longest period to the shortest
    pub fn rows(&self) -> [(&'static str, f64); 6] {
        [
            ("Year", self.year),
            ("Month", self.month),
            ("Week", self.week),
            ("Day", self.day),
            ("Hour", self.hour),
            ("Minute", self.minute),
        ]
    }
}

/// First calendar day of the month containing `date`
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Variable expenses dated from the first of `reference`'s month up to and
/// including `reference`, newest first.
pub fn expenses_in_current_month(
    items: &[VariableExpenseItem],
    reference: NaiveDate,
) -> Vec<VariableExpenseItem> {
    let start = first_day_of_month(reference);

    let mut in_window: Vec<_> = items
        .iter()
        .filter(|e| e.date >= start && e.date <= reference)
        .cloned()
        .collect();

    in_window.sort_by(|a, b| b.date.cmp(&a.date));
    in_window
}

/// How many years a monthly income takes to add up to `target`.
///
/// `None` when the income is zero, negative or not finite.
pub fn years_to_reach(target: f64, monthly_income: f64) -> Option<f64> {
    if !monthly_income.is_finite() || monthly_income <= 0.0 {
        return None;
    }
    Some(target / monthly_income / 12.0)
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: &'static str,
    pub total: f64,
    pub count: usize,
    /// Share of the total across all categories
    pub percentage: f64,
}

/// Totals per category, largest first, ties ordered by label
pub fn spending_by_category<T: Expense>(items: &[T]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&'static str, (f64, usize)> = HashMap::new();
    for item in items {
        let entry = totals.entry(item.category_label()).or_insert((0.0, 0));
        entry.0 += item.amount();
        entry.1 += 1;
    }

    let grand_total = sum(items);
    let mut rows: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category,
            total,
            count,
            percentage: percentage_of(total, grand_total),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(b.category))
    });
    rows
}

/// Figures shown on the summary page
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub reference: NaiveDate,
    pub monthly_income: f64,
    pub fixed_total: f64,
    pub variable_total: f64,
    /// Income minus both totals
    pub remaining: f64,
    pub fixed_percentage: f64,
    pub variable_percentage: f64,
    pub remaining_percentage: f64,
    /// Variable expenses in the current month window, newest first
    pub this_month: Vec<VariableExpenseItem>,
    pub fixed_by_category: Vec<CategoryTotal>,
    /// Split of `this_month`
    pub variable_by_category: Vec<CategoryTotal>,
}

impl Overview {
    /// Summarize a month. Percentages are 0 while no income is set.
    pub fn build<F: Expense>(
        monthly_income: f64,
        fixed: &[F],
        variable: &[VariableExpenseItem],
        reference: NaiveDate,
    ) -> Self {
        let this_month = expenses_in_current_month(variable, reference);
        let fixed_total = sum(fixed);
        let variable_total = sum(&this_month);
        let remaining = monthly_income - fixed_total - variable_total;

        Self {
            reference,
            monthly_income,
            fixed_total,
            variable_total,
            remaining,
            fixed_percentage: percentage_of(fixed_total, monthly_income),
            variable_percentage: percentage_of(variable_total, monthly_income),
            remaining_percentage: percentage_of(remaining, monthly_income),
            fixed_by_category: spending_by_category(fixed),
            variable_by_category: spending_by_category(&this_month),
            this_month,
        }
    }

    /// Month and year of the reference date, e.g. "March 2024"
    pub fn period_label(&self) -> String {
        format!(
            "{} {}",
            crate::display::month_name(self.reference),
            self.reference.year()
        )
    }
}
