//! Fixed expense CLI commands
//!
//! Implements CLI commands for recurring monthly costs.

use clap::Subcommand;
use tracing::info;

use super::{clamp_page, parse_amount, parse_category};
use crate::config::settings::Settings;
use crate::display::{format_fixed_details, format_fixed_table, format_money, format_page_footer};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{FixedExpenseCategory, FixedExpenseItem};
use crate::reports::{paginate, sort_by, sum, SortOrder};
use crate::storage::{ExpenseStore, StorageBackend};

/// Fixed expense subcommands
#[derive(Subcommand)]
pub enum FixedCommands {
    /// Add a fixed expense
    Add {
        /// Expense name
        name: String,

        /// Monthly amount (e.g., "8000" or "129.50")
        amount: String,

        /// Category label or number from 'expenses categories fixed'
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List fixed expenses
    List {
        /// Column to sort by: name, amount or category
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

    /// Show a fixed expense and what it costs per period
    Show {
        /// Expense name or ID
        expense: String,
    },

    /// Edit a fixed expense
    Edit {
        /// Expense name or ID
        expense: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New monthly amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a fixed expense
    Remove {
        /// Expense name or ID
        expense: String,
    },
}

/// Handle a fixed expense command
pub fn handle_fixed_command<B: StorageBackend>(
    store: &mut ExpenseStore<B>,
    settings: &Settings,
    cmd: FixedCommands,
) -> TrackerResult<()> {
    let currency = store.currency();

    match cmd {
        FixedCommands::Add {
            name,
            amount,
            category,
        } => {
            let category = match category {
                Some(raw) => parse_category::<FixedExpenseCategory>(&raw)?,
                None => FixedExpenseCategory::default(),
            };
            let item = FixedExpenseItem::new(name, parse_amount(&amount)?, category);
            item.validate()?;

            store.add_fixed(item.clone())?;
            info!(id = %item.id, "Added fixed expense");

            println!(
                "Added fixed expense: {} ({}, {})",
                item.name,
                format_money(item.amount, currency, 2),
                item.category
            );
            println!("  ID: {}", item.id);
        }

        FixedCommands::List {
            sort,
            order,
            page,
            all,
        } => {
            let order = match order {
                Some(raw) => raw.parse::<SortOrder>().map_err(TrackerError::Validation)?,
                None if sort.is_some() => SortOrder::default(),
                None => settings.fixed_sort.order,
            };
            let field = sort.unwrap_or_else(|| settings.fixed_sort.field.clone());

            let items = store.fixed_expenses();
            let sorted = sort_by(items, &field, order);
            let per_page = if all { 0 } else { settings.page_size };
            let pages = paginate(&sorted, per_page);
            let page = clamp_page(page, pages.len());

            println!(
                "{}",
                format_fixed_table(pages.get(page - 1).copied().unwrap_or(&[]), currency)
            );
            if !items.is_empty() {
                println!("Total: {} per month", format_money(sum(items), currency, 2));
            }
            if pages.len() > 1 {
                println!("{}", format_page_footer(page, pages.len(), items.len()));
            }
        }

        FixedCommands::Show { expense } => {
            let item = store.find_fixed(&expense)?;
            println!("{}", format_fixed_details(item, currency));
        }

        FixedCommands::Edit {
            expense,
            name,
            amount,
            category,
        } => {
            let original = store.find_fixed(&expense)?.clone();

            let mut updated = original.clone();
            if let Some(name) = name {
                updated.name = name.trim().to_string();
            }
            if let Some(amount) = amount {
                updated.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                updated.category = parse_category(&category)?;
            }
            updated.validate()?;

            if updated == original {
                println!("Nothing changed.");
                return Ok(());
            }

            store.update_fixed(updated.clone())?;
            info!(id = %updated.id, "Updated fixed expense");
            println!("Updated fixed expense: {}", updated.name);
        }

        FixedCommands::Remove { expense } => {
            let item = store.find_fixed(&expense)?.clone();
            store.remove_fixed(item.id)?;
            info!(id = %item.id, "Removed fixed expense");
            println!("Removed fixed expense: {}", item.name);
        }
    }

    Ok(())
}
