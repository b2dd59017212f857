//! # Storage Module
//!
//! Persists the user's vacation selections, carryover days, and region to a
//! flat JSON file.
//!
//! ## File format:
//! ```json
//! {
//!   "holidays1": ["2025-03-14", "..."],
//!   "holidays2": [],
//!   "previous_year": 2,
//!   "region": "berlin",
//!   "last_updated": "2025-08-25 14:03:12"
//! }
//! ```
//!
//! ## Purpose:
//! The file is overwritten wholesale on every save, with no versioning or
//! migration. Writes go through a temp file and rename so a crash mid-write
//! cannot truncate the previous good state. Loads never fail: an absent or
//! unparsable file yields empty defaults and the app proceeds.

use chrono::{Local, NaiveDate};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Failure writing the state file. Persistence errors are logged and shown
/// as a status line, never fatal to the UI.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk shape of the state file.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    /// Selected dates for the active year.
    #[serde(default)]
    holidays1: Vec<String>,
    /// Dormant next-year slot. Round-tripped for data consistency but not
    /// reachable from the UI.
    #[serde(default)]
    holidays2: Vec<String>,
    #[serde(default)]
    previous_year: i32,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    last_updated: String,
}

/// Result of loading the state file, with defaults already applied.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SavedSelection {
    pub current_year: HashSet<NaiveDate>,
    pub next_year: HashSet<NaiveDate>,
    pub carryover: i32,
    pub region: Option<String>,
}

/// Reads and writes the user's selection state.
pub struct StorageManager {
    storage_file: PathBuf,
}

impl StorageManager {
    /// Create a storage manager for `storage_file`, creating its parent
    /// directory if missing.
    pub fn new<P: AsRef<Path>>(storage_file: P) -> anyhow::Result<Self> {
        let storage_file = storage_file.as_ref().to_path_buf();

        if let Some(parent) = storage_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { storage_file })
    }

    /// Create a storage manager under the platform data directory
    /// (`<data_dir>/vacation-planner/holidays_status.json`).
    pub fn new_default() -> anyhow::Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine user data directory"))?;
        Self::new(data_dir.join("vacation-planner").join("holidays_status.json"))
    }

    /// The file this manager persists to.
    pub fn storage_file(&self) -> &Path {
        &self.storage_file
    }

    /// Save both selection slots plus carryover and region.
    ///
    /// Serializes to `<file>.tmp` first and renames over the target, so a
    /// partial write cannot destroy the previous state.
    pub fn save(
        &self,
        current_year: &HashSet<NaiveDate>,
        next_year: &HashSet<NaiveDate>,
        carryover: i32,
        region: &str,
    ) -> Result<(), SaveError> {
        let state = PersistedState {
            holidays1: format_dates(current_year),
            holidays2: format_dates(next_year),
            previous_year: carryover,
            region: Some(region.to_string()),
            last_updated: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        let json = serde_json::to_string_pretty(&state)?;

        let tmp_file = self.storage_file.with_extension("tmp");
        fs::write(&tmp_file, json)?;
        fs::rename(&tmp_file, &self.storage_file)?;

        Ok(())
    }

    /// Load the persisted selection, or empty defaults if the file is
    /// absent or unparsable. Never errors.
    pub fn load(&self) -> SavedSelection {
        if !self.storage_file.exists() {
            return SavedSelection::default();
        }

        let contents = match fs::read_to_string(&self.storage_file) {
            Ok(contents) => contents,
            Err(e) => {
                error!("Failed to read state file {}: {}", self.storage_file.display(), e);
                return SavedSelection::default();
            }
        };

        let state: PersistedState = match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(e) => {
                error!("Failed to parse state file {}: {}", self.storage_file.display(), e);
                return SavedSelection::default();
            }
        };

        SavedSelection {
            current_year: parse_dates(&state.holidays1),
            next_year: parse_dates(&state.holidays2),
            carryover: state.previous_year,
            region: state.region,
        }
    }

    /// Delete the storage file if present.
    #[allow(dead_code)]
    pub fn clear(&self) -> anyhow::Result<()> {
        if self.storage_file.exists() {
            fs::remove_file(&self.storage_file)?;
        }
        Ok(())
    }
}

/// Format a date set as sorted `YYYY-MM-DD` strings for stable file output.
fn format_dates(dates: &HashSet<NaiveDate>) -> Vec<String> {
    let mut sorted: Vec<&NaiveDate> = dates.iter().collect();
    sorted.sort();
    sorted
        .into_iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect()
}

/// Parse persisted date strings, dropping any that fail to parse.
fn parse_dates(raw: &[String]) -> HashSet<NaiveDate> {
    raw.iter()
        .filter_map(|s| match NaiveDate::parse_from_str(s, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("Skipping unparsable stored date '{}': {}", s, e);
                None
            }
        })
        .collect()
}
