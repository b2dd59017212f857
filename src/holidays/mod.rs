//! # Holiday Config Module
//!
//! Loads the public-holiday configuration from a flat JSON file and answers
//! lookups by region and year.
//!
//! ## Config format:
//! ```json
//! { "berlin": { "2025": [ { "date": "2025-12-25", "name": "Christmas Day" } ] } }
//! ```
//!
//! ## Purpose:
//! The planner only ever reads this file; a separate maintenance tool owns
//! writing it. Every failure mode here (missing file, malformed JSON, bad
//! date string, unknown region/year) degrades to empty data with a logged
//! diagnostic - the application must keep running on a broken config.

use chrono::{Datelike, NaiveDate};
use log::{error, warn};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// A single configured public holiday.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// Date in `YYYY-MM-DD` form. Kept as a string so one malformed entry
    /// can be skipped at lookup time instead of failing the whole config.
    pub date: String,
    /// Display name, e.g. "Christmas Day".
    pub name: String,
}

/// Raw shape of the config file: region -> year string -> entries.
type HolidayConfig = HashMap<String, HashMap<String, Vec<HolidayEntry>>>;

/// Read-only view over the holiday configuration.
pub struct HolidayCalendar {
    config: HolidayConfig,
}

impl HolidayCalendar {
    /// Load the configuration from `config_path`.
    ///
    /// Never fails: a missing or unparsable file yields an empty calendar
    /// with a warning, matching how the rest of the app treats config errors.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Self {
        let config_path = config_path.as_ref();

        let config = if !config_path.exists() {
            warn!(
                "Holiday config file not found at {}, starting with empty config",
                config_path.display()
            );
            HolidayConfig::new()
        } else {
            match fs::read_to_string(config_path) {
                Ok(contents) => match serde_json::from_str::<HolidayConfig>(&contents) {
                    Ok(config) => config,
                    Err(e) => {
                        error!("Failed to parse holiday config {}: {}", config_path.display(), e);
                        HolidayConfig::new()
                    }
                },
                Err(e) => {
                    error!("Failed to read holiday config {}: {}", config_path.display(), e);
                    HolidayConfig::new()
                }
            }
        };

        Self { config }
    }

    /// Build a calendar directly from parsed config data (used by tests).
    #[cfg(test)]
    pub fn from_json(json: &str) -> Self {
        Self {
            config: serde_json::from_str(json).expect("valid holiday config JSON"),
        }
    }

    /// Public-holiday dates for a given year and region.
    ///
    /// Unknown regions/years and unparsable entries produce an empty set or
    /// a skipped entry respectively, each with a diagnostic.
    pub fn holidays_for_year(&self, year: i32, region: &str) -> HashSet<NaiveDate> {
        let mut holidays = HashSet::new();

        let Some(years) = self.config.get(region) else {
            warn!("Region '{}' not found in holiday config", region);
            return holidays;
        };

        let Some(entries) = years.get(&year.to_string()) else {
            warn!("No holidays defined for {} in {}", region, year);
            return holidays;
        };

        for entry in entries {
            match NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") {
                Ok(date) => {
                    holidays.insert(date);
                }
                Err(e) => {
                    warn!("Skipping holiday entry '{}' ({}): {}", entry.name, entry.date, e);
                }
            }
        }

        holidays
    }

    /// Name of the holiday on `date` for `region`, if one is configured.
    ///
    /// Duplicate dates are permitted in the config; the first match wins.
    pub fn holiday_name(&self, date: NaiveDate, region: &str) -> Option<&str> {
        let entries = self.config.get(region)?.get(&date.year().to_string())?;

        entries
            .iter()
            .find(|entry| {
                NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d")
                    .map(|d| d == date)
                    .unwrap_or(false)
            })
            .map(|entry| entry.name.as_str())
    }

    /// Regions present in the config, in file order.
    pub fn available_regions(&self) -> Vec<String> {
        self.config.keys().cloned().collect()
    }

    /// Years with data for `region`. Unsorted; callers sort for display.
    pub fn available_years(&self, region: &str) -> Vec<i32> {
        let Some(years) = self.config.get(region) else {
            return Vec::new();
        };

        years.keys().filter_map(|y| y.parse::<i32>().ok()).collect()
    }
}
