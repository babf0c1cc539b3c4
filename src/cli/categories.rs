//! Category listing command

use clap::ValueEnum;

use crate::display::format_category_list;
use crate::models::{FixedExpenseCategory, VariableExpenseCategory};

/// Which category set to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryKind {
    Fixed,
    Variable,
}

/// Render the requested category sets, both when `kind` is `None`
pub fn render_categories(kind: Option<CategoryKind>) -> String {
    let fixed = || format_category_list::<FixedExpenseCategory>("Fixed expense categories");
    let variable =
        || format_category_list::<VariableExpenseCategory>("Variable expense categories");

    match kind {
        Some(CategoryKind::Fixed) => fixed(),
        Some(CategoryKind::Variable) => variable(),
        None => format!("{}\n{}", fixed(), variable()),
    }
}

/// Handle the categories command
pub fn handle_categories_command(kind: Option<CategoryKind>) {
    print!("{}", render_categories(kind));
}
