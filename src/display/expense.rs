//! Expense display formatting
//!
//! Formats fixed and variable expenses as tables and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::{format_date, format_money, DateStyle};
use crate::models::{Currency, FixedExpenseItem, VariableExpenseItem};
use crate::reports::PeriodBreakdown;

/// Amounts in tables and detail views carry two decimals when fractional
const AMOUNT_DECIMALS: usize = 2;

#[derive(Tabled)]
struct FixedRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

#[derive(Tabled)]
struct PeriodRow {
    #[tabled(rename = "Per")]
    period: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn render<R: Tabled>(rows: Vec<R>, amount_column: usize) -> String {
    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::single(amount_column)).with(Alignment::right()))
        .to_string()
}

/// Format a page of fixed expenses as a table
pub fn format_fixed_table(items: &[FixedExpenseItem], currency: Currency) -> String {
    if items.is_empty() {
        return "No fixed expenses found.".to_string();
    }

    let rows = items
        .iter()
        .map(|item| FixedRow {
            id: item.id.to_string(),
            name: item.name.clone(),
            amount: format_money(item.amount, currency, AMOUNT_DECIMALS),
            category: item.category.to_string(),
        })
        .collect();

    render(rows, 2)
}

/// Format a page of variable expenses as a table
pub fn format_variable_table(
    items: &[VariableExpenseItem],
    currency: Currency,
    date_style: DateStyle,
) -> String {
    if items.is_empty() {
        return "No variable expenses found.".to_string();
    }

    let rows = items
        .iter()
        .map(|item| VariableRow {
            id: item.id.to_string(),
            date: format_date(item.date, date_style),
            name: item.name.clone(),
            amount: format_money(item.amount, currency, AMOUNT_DECIMALS),
            category: item.category.to_string(),
        })
        .collect();

    render(rows, 3)
}

/// Format a monthly amount spread over year, month, week, day, hour, minute
pub fn format_period_breakdown(breakdown: &PeriodBreakdown, currency: Currency) -> String {
    let rows = breakdown
        .rows()
        .into_iter()
        .map(|(period, amount)| PeriodRow {
            period,
            amount: format_money(amount, currency, AMOUNT_DECIMALS),
        })
        .collect();

    render(rows, 1)
}

/// Footer line under a paged table, e.g. "Page 1 of 3 (25 expenses)"
pub fn format_page_footer(page: usize, pages: usize, total_items: usize) -> String {
    let noun = if total_items == 1 { "expense" } else { "expenses" };
    format!("Page {} of {} ({} {})", page, pages.max(1), total_items, noun)
}

/// Format a single fixed expense, including what it costs per period
pub fn format_fixed_details(item: &FixedExpenseItem, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Fixed expense: {}\n", item.name));
    output.push_str(&format!("  ID:        {}\n", item.id));
    output.push_str(&format!("  Category:  {}\n", item.category));
    output.push_str(&format!(
        "  Amount:    {} per month\n",
        format_money(item.amount, currency, AMOUNT_DECIMALS)
    ));
    output.push('\n');
    output.push_str(&format_period_breakdown(
        &PeriodBreakdown::from_monthly(item.amount),
        currency,
    ));

    output
}

/// Format a single variable expense
pub fn format_variable_details(
    item: &VariableExpenseItem,
    currency: Currency,
    date_style: DateStyle,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Variable expense: {}\n", item.name));
    output.push_str(&format!("  ID:        {}\n", item.id));
    output.push_str(&format!("  Date:      {}\n", format_date(item.date, date_style)));
    output.push_str(&format!("  Category:  {}\n", item.category));
    output.push_str(&format!(
        "  Amount:    {}",
        format_money(item.amount, currency, AMOUNT_DECIMALS)
    ));

    output
}
