//! Variable expense CLI commands
//!
//! Implements CLI commands for dated one-off costs.

use clap::Subcommand;
use tracing::info;

use super::{clamp_page, parse_amount, parse_category, parse_date, today};
use crate::config::settings::Settings;
use crate::display::{
    format_date, format_money, format_page_footer, format_variable_details,
    format_variable_table,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{VariableExpenseCategory, VariableExpenseItem};
use crate::reports::{paginate, sort_by, sum, SortOrder};
use crate::storage::{ExpenseStore, StorageBackend};

/// Variable expense subcommands
#[derive(Subcommand)]
pub enum VariableCommands {
    /// Add a variable expense
    Add {
        /// Expense name
        name: String,

        /// Amount spent (e.g., "450" or "89.90")
        amount: String,

        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Category label or number from 'expenses categories variable'
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List variable expenses
    List {
        /// Column to sort by: date, name, amount or category
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort direction: asc or desc
        #[arg(short, long)]
        order: Option<String>,

        /// Page to show
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Show every expense on one page
        #[arg(long)]
        all: bool,
    },

    /// Show a variable expense
    Show {
        /// Expense name or ID
        expense: String,
    },

    /// Edit a variable expense
    Edit {
        /// Expense name or ID
        expense: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a variable expense
    Remove {
        /// Expense name or ID
        expense: String,
    },
}

/// Handle a variable expense command
pub fn handle_variable_command<B: StorageBackend>(
    store: &mut ExpenseStore<B>,
    settings: &Settings,
    cmd: VariableCommands,
) -> TrackerResult<()> {
    let currency = store.currency();

    match cmd {
        VariableCommands::Add {
            name,
            amount,
            date,
            category,
        } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => today(),
            };
            let category = match category {
                Some(raw) => parse_category::<VariableExpenseCategory>(&raw)?,
                None => VariableExpenseCategory::default(),
            };
            let item = VariableExpenseItem::new(date, name, parse_amount(&amount)?, category);
            item.validate()?;

            store.add_variable(item.clone())?;
            info!(id = %item.id, "Added variable expense");

            println!(
                "Added variable expense: {} on {} ({}, {})",
                item.name,
                format_date(item.date, settings.date_style),
                format_money(item.amount, currency, 2),
                item.category
            );
            println!("  ID: {}", item.id);
        }

        VariableCommands::List {
            sort,
            order,
            page,
            all,
        } => {
            let order = match order {
                Some(raw) => raw.parse::<SortOrder>().map_err(TrackerError::Validation)?,
                None if sort.is_some() => SortOrder::default(),
                None => settings.variable_sort.order,
            };
            let field = sort.unwrap_or_else(|| settings.variable_sort.field.clone());

            let items = store.variable_expenses();
            let sorted = sort_by(items, &field, order);
            let per_page = if all { 0 } else { settings.page_size };
            let pages = paginate(&sorted, per_page);
            let page = clamp_page(page, pages.len());

            println!(
                "{}",
                format_variable_table(
                    pages.get(page - 1).copied().unwrap_or(&[]),
                    currency,
                    settings.date_style
                )
            );
            if !items.is_empty() {
                println!("Total: {}", format_money(sum(items), currency, 2));
            }
            if pages.len() > 1 {
                println!("{}", format_page_footer(page, pages.len(), items.len()));
            }
        }

        VariableCommands::Show { expense } => {
            let item = store.find_variable(&expense)?;
            println!(
                "{}",
                format_variable_details(item, currency, settings.date_style)
            );
        }

        VariableCommands::Edit {
            expense,
            name,
            amount,
            date,
            category,
        } => {
            let original = store.find_variable(&expense)?.clone();

            let mut updated = original.clone();
            if let Some(name) = name {
                updated.name = name.trim().to_string();
            }
            if let Some(amount) = amount {
                updated.amount = parse_amount(&amount)?;
            }
            if let Some(date) = date {
                updated.date = parse_date(&date)?;
            }
            if let Some(category) = category {
                updated.category = parse_category(&category)?;
            }
            updated.validate()?;

            if updated == original {
                println!("Nothing changed.");
                return Ok(());
            }

            store.update_variable(updated.clone())?;
            info!(id = %updated.id, "Updated variable expense");
            println!("Updated variable expense: {}", updated.name);
        }

        VariableCommands::Remove { expense } => {
            let item = store.find_variable(&expense)?.clone();
            store.remove_variable(item.id)?;
            info!(id = %item.id, "Removed variable expense");
            println!("Removed variable expense: {}", item.name);
        }
    }

    Ok(())
}
