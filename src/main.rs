use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_categories_command, handle_config_command, handle_fixed_command,
    handle_income_command, handle_summary_command, handle_variable_command, CategoryKind,
    ConfigCommands,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track monthly income, fixed and variable expenses",
    long_about = "Expense Tracker keeps your monthly income, recurring fixed \
                  expenses and one-off variable expenses, and shows what is \
                  left of your income each month."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income and currency
    #[command(subcommand)]
    Income(expense_tracker::cli::IncomeCommands),

    /// Recurring monthly expenses
    #[command(subcommand)]
    Fixed(expense_tracker::cli::FixedCommands),

    /// Dated one-off expenses
    #[command(subcommand, alias = "var")]
    Variable(expense_tracker::cli::VariableCommands),

    /// List the expense categories
    Categories {
        /// Only list one set
        #[arg(value_enum)]
        kind: Option<CategoryKind>,
    },

    /// Show the overview for the current month
    Summary {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Show or change configuration (shows it by default)
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(log_level(cli.verbose, cli.quiet));

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Resolved paths");

    let Some(command) = cli.command else {
        println!("Expense Tracker - monthly income and expenses");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Income(cmd) => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_income_command(&mut store, cmd)?;
        }
        Commands::Fixed(cmd) => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_fixed_command(&mut store, &settings, cmd)?;
        }
        Commands::Variable(cmd) => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_variable_command(&mut store, &settings, cmd)?;
        }
        Commands::Categories { kind } => handle_categories_command(kind),
        Commands::Summary { as_of } => {
            let store = ExpenseStore::open(&paths)?;
            handle_summary_command(&store, &settings, as_of)?;
        }
        Commands::Config { action } => {
            let action = action.unwrap_or(ConfigCommands::Show);
            handle_config_command(&paths, &mut settings, action)?;
        }
    }

    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Log to stderr so command output on stdout stays clean
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "expense_tracker={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
