//! Configuration CLI commands
//!
//! Shows where data lives and changes the saved display settings.

use clap::Subcommand;
use tracing::info;

use crate::config::paths::DATA_DIR_ENV;
use crate::config::{Settings, TrackerPaths};
use crate::display::DateStyle;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{FixedExpenseItem, VariableExpenseItem};
use crate::reports::{SortField, SortOrder, Sortable};

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Change settings and save them
    Set {
        /// Date style: long, short, numeric, weekday or short-weekday
        #[arg(long)]
        date_style: Option<String>,

        /// Rows per table page (0 shows everything on one page)
        #[arg(long)]
        page_size: Option<usize>,

        /// Default column for 'fixed list': name, amount or category
        #[arg(long)]
        fixed_sort: Option<String>,

        /// Default direction for 'fixed list': asc or desc
        #[arg(long)]
        fixed_order: Option<String>,

        /// Default column for 'variable list': name, amount, category or date
        #[arg(long)]
        variable_sort: Option<String>,

        /// Default direction for 'variable list': asc or desc
        #[arg(long)]
        variable_order: Option<String>,
    },
}

/// Handle a configuration command
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> TrackerResult<()> {
    match cmd {
        ConfigCommands::Show => println!("{}", format_config(paths, settings)),

        ConfigCommands::Set {
            date_style,
            page_size,
            fixed_sort,
            fixed_order,
            variable_sort,
            variable_order,
        } => {
            let mut updated = settings.clone();
            if let Some(raw) = date_style {
                updated.date_style = raw.parse::<DateStyle>().map_err(TrackerError::Validation)?;
            }
            if let Some(size) = page_size {
                updated.page_size = size;
            }
            if let Some(raw) = fixed_sort {
                updated.fixed_sort.field = sort_column::<FixedExpenseItem>(&raw)?;
            }
            if let Some(raw) = fixed_order {
                updated.fixed_sort.order = parse_order(&raw)?;
            }
            if let Some(raw) = variable_sort {
                updated.variable_sort.field = sort_column::<VariableExpenseItem>(&raw)?;
            }
            if let Some(raw) = variable_order {
                updated.variable_sort.order = parse_order(&raw)?;
            }

            if updated == *settings {
                println!("Nothing changed.");
                return Ok(());
            }

            updated.save(paths)?;
            *settings = updated;
            info!(path = %paths.settings_file().display(), "Saved settings");
            println!("Settings saved to {}", paths.settings_file().display());
        }
    }

    Ok(())
}

/// Column label as stored in settings, rejecting columns `T` cannot sort by
fn sort_column<T: Sortable>(raw: &str) -> TrackerResult<String> {
    let field = SortField::parse(raw)
        .filter(|f| T::supports(*f))
        .ok_or_else(|| TrackerError::Validation(format!("Cannot sort this table by '{}'", raw)))?;

    let label = match field {
        SortField::Name => "Name",
        SortField::Amount => "Amount",
        SortField::Category => "Category",
        SortField::Date => "Date",
    };
    Ok(label.to_string())
}

fn parse_order(raw: &str) -> TrackerResult<SortOrder> {
    raw.parse::<SortOrder>().map_err(TrackerError::Validation)
}

/// Paths and settings as printed by `config show`
pub fn format_config(paths: &TrackerPaths, settings: &Settings) -> String {
    let mut output = String::from("Expense Tracker Configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!("Base directory:  {}\n", paths.base_dir().display()));
    output.push_str(&format!("Data directory:  {}\n", paths.data_dir().display()));
    output.push_str(&format!("Settings file:   {}\n", paths.settings_file().display()));
    output.push_str(&format!("(override with {})\n\n", DATA_DIR_ENV));

    output.push_str("Settings:\n");
    output.push_str(&format!("  Date style:     {}\n", settings.date_style));
    output.push_str(&format!(
        "  Fixed sort:     {} {}\n",
        settings.fixed_sort.field, settings.fixed_sort.order
    ));
    output.push_str(&format!(
        "  Variable sort:  {} {}\n",
        settings.variable_sort.field, settings.variable_sort.order
    ));
    output.push_str(&format!("  Page size:      {}", settings.page_size));
    output
}
