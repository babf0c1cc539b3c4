//! User settings for the expense tracker
//!
//! Display preferences only: how dates are written, how tables are ordered
//! by default, and how many rows a page holds. Tracked data lives in the
//! store, never here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::TrackerPaths;
use crate::display::DateStyle;
use crate::error::TrackerError;
use crate::reports::{SortOrder, SortSpec};
use crate::storage::file_io::write_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How dates are printed
    #[serde(default)]
    pub date_style: DateStyle,

    /// Default ordering of the fixed expense table
    #[serde(default = "default_fixed_sort")]
    pub fixed_sort: SortSpec,

    /// Default ordering of the variable expense table
    #[serde(default = "default_variable_sort")]
    pub variable_sort: SortSpec,

    /// Rows per table page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_fixed_sort() -> SortSpec {
    SortSpec::new("Amount", SortOrder::Descending)
}

fn default_variable_sort() -> SortSpec {
    SortSpec::new("Date", SortOrder::Descending)
}

fn default_page_size() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_style: DateStyle::default(),
            fixed_sort: default_fixed_sort(),
            variable_sort: default_variable_sort(),
            page_size: default_page_size(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "No settings file, using defaults");
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        write_atomic(paths.settings_file(), &contents)
    }
}
