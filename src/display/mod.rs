//! Display formatting for terminal output
//!
//! Turns models and report figures into the strings the CLI prints:
//! numbers and dates, expense tables, detail views and the summary page.

pub mod category;
pub mod expense;
pub mod format;
pub mod summary;

pub use category::format_category_list;
pub use expense::{
    format_fixed_details, format_fixed_table, format_page_footer, format_period_breakdown,
    format_variable_details, format_variable_table,
};
pub use format::{
    day_name, days_in_month, format_bar, format_date, format_money, format_number,
    format_percentage, month_name, DateStyle,
};
pub use summary::{format_category_split, format_income, format_million_line, format_overview};
