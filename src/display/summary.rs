//! Income and summary page formatting

use chrono::Datelike;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::expense::{format_period_breakdown, format_variable_table};
use super::format::{
    days_in_month, format_bar, format_money, format_number, format_percentage, DateStyle,
};
use crate::models::{Currency, MonthlyIncome};
use crate::reports::{years_to_reach, CategoryTotal, Overview, PeriodBreakdown};

/// Amount used for the "you earn a million every N years" line
pub const MILLION: f64 = 1_000_000.0;

const BAR_WIDTH: usize = 20;

const INCOME_HINT: &str = "No monthly income set. Run 'expenses income set <amount>' to add one.";

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Items")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the monthly income and what it amounts to per period
pub fn format_income(income: &MonthlyIncome) -> String {
    if !income.is_set() {
        return INCOME_HINT.to_string();
    }

    let mut output = format!(
        "Monthly income: {}\n\n",
        format_money(income.amount, income.currency, 2)
    );
    output.push_str(&format_period_breakdown(
        &PeriodBreakdown::from_monthly(income.amount),
        income.currency,
    ));
    if let Some(line) = format_million_line(income.amount, income.currency) {
        output.push_str("\n\n");
        output.push_str(&line);
    }
    output
}

/// "You earn 1,000,000 kr every 2.8 years", `None` without an income
pub fn format_million_line(monthly_income: f64, currency: Currency) -> Option<String> {
    years_to_reach(MILLION, monthly_income).map(|years| {
        format!(
            "You earn {} every {} years",
            format_money(MILLION, currency, 0),
            format_number(years, 1)
        )
    })
}

/// Format per-category totals with a share bar
pub fn format_category_split(rows: &[CategoryTotal], currency: Currency) -> String {
    if rows.is_empty() {
        return "Nothing spent yet.".to_string();
    }

    let largest = rows.iter().map(|r| r.total).fold(0.0, f64::max);
    let table_rows: Vec<CategoryRow> = rows
        .iter()
        .map(|row| CategoryRow {
            category: row.category,
            count: row.count,
            total: format_money(row.total, currency, 2),
            share: format_percentage(row.percentage),
            bar: format_bar(row.total, largest, BAR_WIDTH),
        })
        .collect();

    Table::new(table_rows)
        .with(Style::blank())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string()
}

fn figure_line(label: &str, amount: f64, currency: Currency, pct: Option<f64>) -> String {
    let money = format_money(amount, currency, 2);
    match pct {
        Some(pct) => format!("  {:<20}{:>16}  {:>7}\n", label, money, format_percentage(pct)),
        None => format!("  {:<20}{:>16}\n", label, money),
    }
}

/// Format the summary page for one month
pub fn format_overview(overview: &Overview, currency: Currency, date_style: DateStyle) -> String {
    let income_set = overview.monthly_income.is_finite() && overview.monthly_income > 0.0;
    let pct = |value: f64| income_set.then_some(value);

    let mut output = format!(
        "Summary for {} (day {} of {})\n\n",
        overview.period_label(),
        overview.reference.day(),
        days_in_month(overview.reference)
    );

    if income_set {
        output.push_str(&figure_line("Income", overview.monthly_income, currency, None));
    }
    output.push_str(&figure_line(
        "Fixed expenses",
        overview.fixed_total,
        currency,
        pct(overview.fixed_percentage),
    ));
    output.push_str(&figure_line(
        "Variable expenses",
        overview.variable_total,
        currency,
        pct(overview.variable_percentage),
    ));
    if income_set {
        output.push_str(&figure_line(
            "Remaining",
            overview.remaining,
            currency,
            pct(overview.remaining_percentage),
        ));
    }

    output.push('\n');
    match format_million_line(overview.monthly_income, currency) {
        Some(line) => output.push_str(&line),
        None => output.push_str(INCOME_HINT),
    }
    output.push_str("\n\n");

    output.push_str("Variable expenses this month\n");
    output.push_str(&format_variable_table(&overview.this_month, currency, date_style));
    output.push_str("\n\n");

    output.push_str("Fixed expenses by category\n");
    output.push_str(&format_category_split(&overview.fixed_by_category, currency));
    output.push_str("\n\n");

    output.push_str("Variable expenses by category this month\n");
    output.push_str(&format_category_split(&overview.variable_by_category, currency));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FixedExpenseCategory, FixedExpenseItem, VariableExpenseCategory, VariableExpenseItem,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_income_not_set() {
        let income = MonthlyIncome::default();
        assert!(format_income(&income).contains("expenses income set"));
    }

    #[test]
    fn test_income_breakdown() {
        let income = MonthlyIncome::new(30000.0, Currency::Sek);
        let output = format_income(&income);

        assert!(output.starts_with("Monthly income: 30,000 kr"));
        assert!(output.contains("360,000 kr"));
        assert!(output.contains("1,000 kr"));
        assert!(output.contains("You earn 1,000,000 kr every 2.8 years"));
    }

    #[test]
    fn test_million_line_needs_income() {
        assert!(format_million_line(0.0, Currency::Usd).is_none());
        assert_eq!(
            format_million_line(5000.0, Currency::Usd).unwrap(),
            "You earn $1,000,000 every 16.7 years"
        );
    }

    #[test]
    fn test_category_split() {
        assert_eq!(format_category_split(&[], Currency::Sek), "Nothing spent yet.");

        let rows = vec![CategoryTotal {
            category: "Food",
            total: 300.0,
            count: 2,
            percentage: 100.0,
        }];
        let output = format_category_split(&rows, Currency::Sek);
        assert!(output.contains("Food"));
        assert!(output.contains("300 kr"));
        assert!(output.contains("100%"));
    }

    #[test]
    fn test_overview_with_income() {
        let fixed = vec![FixedExpenseItem::new("Rent", 1500.0, FixedExpenseCategory::Bills)];
        let variable = vec![VariableExpenseItem::new(
            date(2024, 3, 3),
            "Groceries",
            300.0,
            VariableExpenseCategory::Food,
        )];
        let overview = Overview::build(3000.0, &fixed, &variable, date(2024, 3, 15));
        let output = format_overview(&overview, Currency::Sek, DateStyle::Short);

        assert!(output.starts_with("Summary for March 2024 (day 15 of 31)"));
        assert!(output.contains("Remaining"));
        assert!(output.contains("1,200 kr"));
        assert!(output.contains("40%"));
        assert!(output.contains("3 Mar 2024"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Bills"));
    }

    #[test]
    fn test_overview_without_income_shows_hint() {
        let overview = Overview::build::<FixedExpenseItem>(0.0, &[], &[], date(2024, 2, 29));
        let output = format_overview(&overview, Currency::Sek, DateStyle::Long);

        assert!(output.starts_with("Summary for February 2024 (day 29 of 29)"));
        assert!(output.contains(INCOME_HINT));
        assert!(!output.contains("Remaining"));
        assert!(output.contains("No variable expenses found."));
    }
}
