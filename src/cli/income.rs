//! Income CLI commands
//!
//! Implements CLI commands for the monthly income and display currency.

use clap::Subcommand;
use tracing::info;

use super::parse_amount;
use crate::display::{format_income, format_money};
use crate::error::TrackerResult;
use crate::models::{Currency, MonthlyIncome};
use crate::storage::{ExpenseStore, StorageBackend};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Net income per month (e.g., "30000" or "30,000")
        amount: String,

        /// Display currency: kr, $, €, SEK, USD or EURO
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Show the monthly income and what it amounts to per period
    Show,
}

/// Handle an income command
pub fn handle_income_command<B: StorageBackend>(
    store: &mut ExpenseStore<B>,
    cmd: IncomeCommands,
) -> TrackerResult<()> {
    match cmd {
        IncomeCommands::Set { amount, currency } => {
            let currency = match currency {
                Some(raw) => raw.parse::<Currency>()?,
                None => store.currency(),
            };
            let income = MonthlyIncome::new(parse_amount(&amount)?, currency);
            income.validate()?;

            // Income is written first so a failed currency write keeps the amount
            store.set_income(income.amount)?;
            if currency != store.currency() {
                store.set_currency(currency)?;
            }
            info!(amount = income.amount, currency = %currency, "Monthly income set");

            println!(
                "Monthly income set to {}",
                format_money(income.amount, currency, 2)
            );
        }

        IncomeCommands::Show => {
            println!("{}", format_income(&store.income()));
        }
    }

    Ok(())
}
