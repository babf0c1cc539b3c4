//! Expense Tracker - personal finance tracking from the terminal
//!
//! Tracks one monthly income, recurring fixed expenses and dated variable
//! expenses, and derives totals, per-period breakdowns and a monthly overview
//! from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Income, expenses, categories and currency
//! - `storage`: The expense store and its key-value backends
//! - `reports`: Statistics and the sort layer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::new()?;
//! let store = ExpenseStore::open(&paths)?;
//! println!("{} fixed expenses", store.fixed_expenses().len());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use storage::{ExpenseStore, FileBackend, MemoryBackend, Snapshot, StorageBackend};
