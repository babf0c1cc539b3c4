//! Configuration for the expense tracker
//!
//! - Base directory resolution (environment override or platform default)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
