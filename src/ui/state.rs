//! # Application State
//!
//! The app struct wiring loader, storage, and planner together, plus the
//! UI-only state (modal flags, pending inputs, status line).
//!
//! ## Responsibilities:
//! - Startup: load config and persisted state, pick region/year
//! - Rebuild the cached month grids on year/region change
//! - Run the click/reset/region-change flows against the planner
//! - Persist on save and on window close

use crate::domain::calendar::{self, MonthGrid};
use crate::domain::planner::{Planner, ToggleOutcome, DEFAULT_REGION, DEFAULT_TOTAL_HOLIDAYS};
use crate::holidays::HolidayCalendar;
use crate::storage::StorageManager;
use chrono::{Datelike, Local, NaiveDate};
use log::{error, info};
use std::path::Path;

/// Main application state for the vacation planner.
pub struct VacationPlannerApp {
    pub holiday_calendar: HolidayCalendar,
    pub storage: StorageManager,
    pub planner: Planner,

    /// Cached grids for the active (region, year); rebuilt on change.
    pub month_grids: Vec<MonthGrid>,
    /// Regions offered in the selector, sorted.
    pub available_regions: Vec<String>,
    /// Years offered in the selector for the active region, sorted.
    pub available_years: Vec<i32>,

    /// Raw text of the carryover entry, applied on OK.
    pub carryover_input: String,
    /// Region chosen in the selector while the save prompt is open.
    pub pending_region: Option<String>,
    pub show_reset_confirm: bool,
    pub show_limit_warning: bool,
    /// Non-blocking save/status feedback.
    pub status_message: Option<String>,
}

impl VacationPlannerApp {
    /// Build the app with the default config and storage locations.
    pub fn new() -> anyhow::Result<Self> {
        let storage = StorageManager::new_default()?;
        Self::with_parts(HolidayCalendar::load("config/holidays.json"), storage)
    }

    /// Build the app from explicit file paths.
    pub fn with_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        config_path: P,
        storage_path: Q,
    ) -> anyhow::Result<Self> {
        let storage = StorageManager::new(storage_path)?;
        Self::with_parts(HolidayCalendar::load(config_path), storage)
    }

    fn with_parts(holiday_calendar: HolidayCalendar, storage: StorageManager) -> anyhow::Result<Self> {
        let saved = storage.load();

        let region = saved
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let mut planner = Planner::new(DEFAULT_TOTAL_HOLIDAYS, &region, Local::now().year());
        planner.restore(saved.current_year, saved.next_year, saved.carryover, saved.region);

        let mut app = Self {
            holiday_calendar,
            storage,
            planner,
            month_grids: Vec::new(),
            available_regions: Vec::new(),
            available_years: Vec::new(),
            carryover_input: String::new(),
            pending_region: None,
            show_reset_confirm: false,
            show_limit_warning: false,
            status_message: None,
        };

        app.carryover_input = app.planner.carryover().to_string();
        app.refresh_region_lists();

        // If the current year has no data for the region, start on the
        // region's first available year instead of an empty calendar.
        if !app.available_years.is_empty() && !app.available_years.contains(&app.planner.year()) {
            let first = app.available_years[0];
            app.planner.set_year(first);
        }

        app.rebuild_calendar();
        info!(
            "Planner ready: region {}, year {}, {} booked days",
            app.planner.region(),
            app.planner.year(),
            app.planner.taken()
        );
        Ok(app)
    }

    /// Re-derive the region and year selector contents from the config.
    pub fn refresh_region_lists(&mut self) {
        self.available_regions = self.holiday_calendar.available_regions();
        self.available_regions.sort();
        if self.available_regions.is_empty() {
            self.available_regions.push(DEFAULT_REGION.to_string());
        }

        self.available_years = self.holiday_calendar.available_years(self.planner.region());
        self.available_years.sort();
        if self.available_years.is_empty() {
            self.available_years.push(Local::now().year());
        }
    }

    /// Rebuild the cached month grids for the active (region, year).
    pub fn rebuild_calendar(&mut self) {
        let holidays = self
            .holiday_calendar
            .holidays_for_year(self.planner.year(), self.planner.region());
        self.planner.set_public_holidays(holidays.clone());
        self.month_grids = calendar::year_grids(self.planner.year(), &holidays);
    }

    /// Whether the active (region, year) has any configured holiday data.
    pub fn active_year_has_data(&self) -> bool {
        self.holiday_calendar
            .available_years(self.planner.region())
            .contains(&self.planner.year())
    }

    // --- user actions ---

    /// Forward a day click to the planner and react to the outcome.
    pub fn handle_day_click(&mut self, date: NaiveDate) {
        match self.planner.toggle(date) {
            ToggleOutcome::Added | ToggleOutcome::Removed => {
                self.status_message = None;
            }
            ToggleOutcome::LimitReached => {
                self.show_limit_warning = true;
            }
            ToggleOutcome::Ignored => {}
        }
    }

    /// Apply the carryover text entry to the planner.
    pub fn apply_carryover(&mut self) {
        match self.carryover_input.trim().parse::<i32>() {
            Ok(days) => {
                self.planner.set_carryover(days);
                info!("Carryover set to {}", days);
            }
            Err(_) => {
                // revert the entry to the last applied value
                self.carryover_input = self.planner.carryover().to_string();
            }
        }
    }

    /// Persist the current state, reporting the result on the status line.
    pub fn save_state(&mut self) {
        let result = self.storage.save(
            self.planner.selection(),
            self.planner.next_year_selection(),
            self.planner.carryover(),
            self.planner.region(),
        );

        match result {
            Ok(()) => {
                info!("Saved {} booked days", self.planner.taken());
                self.status_message = Some(format!(
                    "Saved to {}",
                    self.storage.storage_file().display()
                ));
            }
            Err(e) => {
                error!("Failed to save holidays: {}", e);
                self.status_message = Some(format!("Save failed: {}", e));
            }
        }
    }

    /// Change the active year and rebuild the calendar.
    pub fn select_year(&mut self, year: i32) {
        if year == self.planner.year() {
            return;
        }
        self.planner.set_year(year);
        self.rebuild_calendar();
    }

    /// React to a region pick in the selector. With selections present, the
    /// switch is deferred behind the save prompt.
    pub fn request_region_change(&mut self, region: String) {
        if region == self.planner.region() {
            return;
        }

        if self.planner.has_selection() {
            self.pending_region = Some(region);
        } else {
            self.apply_region_change(region);
        }
    }

    /// Resolve the save prompt: save first if requested, then switch.
    pub fn confirm_region_change(&mut self, save_first: bool) {
        if save_first {
            self.save_state();
        }
        if let Some(region) = self.pending_region.take() {
            self.apply_region_change(region);
        }
    }

    /// Cancel the prompt; the selector snaps back to the active region.
    pub fn cancel_region_change(&mut self) {
        self.pending_region = None;
    }

    fn apply_region_change(&mut self, region: String) {
        let years = self.holiday_calendar.available_years(&region);
        self.planner.switch_region(&region, years);
        self.refresh_region_lists();
        self.rebuild_calendar();
        info!("Region changed to {} (year {})", self.planner.region(), self.planner.year());
    }

    /// Resolve the reset confirmation.
    pub fn confirm_reset(&mut self) {
        self.show_reset_confirm = false;
        self.planner.reset();
        self.rebuild_calendar();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"{
        "berlin": {
            "2025": [
                {"date": "2025-12-25", "name": "Christmas Day"},
                {"date": "2025-12-26", "name": "Boxing Day"}
            ]
        },
        "bayern": {
            "2026": [
                {"date": "2026-01-06", "name": "Epiphany"}
            ]
        }
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_app() -> (VacationPlannerApp, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("holidays.json");
        fs::write(&config_path, CONFIG).unwrap();
        let storage_path = temp_dir.path().join("data").join("status.json");

        let app = VacationPlannerApp::with_paths(&config_path, &storage_path).unwrap();
        (app, temp_dir)
    }

    #[test]
    fn starts_with_defaults_when_storage_absent() {
        let (app, _temp_dir) = test_app();

        assert_eq!(app.planner.region(), DEFAULT_REGION);
        assert_eq!(app.planner.taken(), 0);
        assert_eq!(app.planner.carryover(), 0);
        assert_eq!(app.month_grids.len(), 12);
    }

    #[test]
    fn falls_back_to_first_configured_year() {
        // berlin only has 2025 data; whatever the current year is, the app
        // must land on a year with data.
        let (app, _temp_dir) = test_app();
        assert_eq!(app.planner.year(), 2025);
        assert!(app.active_year_has_data());
    }

    #[test]
    fn christmas_is_blocked_in_the_grid() {
        let (app, _temp_dir) = test_app();
        let december = &app.month_grids[11];

        let christmas = december
            .cells
            .iter()
            .find(|c| c.date == Some(date(2025, 12, 25)))
            .unwrap();
        assert!(christmas.kind.is_blocked());
    }

    #[test]
    fn day_click_cycle_updates_counters() {
        let (mut app, _temp_dir) = test_app();
        let monday = date(2025, 8, 25);

        app.handle_day_click(monday);
        assert_eq!(app.planner.taken(), 1);

        app.handle_day_click(monday);
        assert_eq!(app.planner.taken(), 0);
        assert!(!app.show_limit_warning);
    }

    #[test]
    fn limit_breach_raises_warning_flag() {
        let (mut app, _temp_dir) = test_app();
        app.planner.set_carryover(-(DEFAULT_TOTAL_HOLIDAYS)); // cap of zero

        app.handle_day_click(date(2025, 8, 25));
        assert!(app.show_limit_warning);
        assert_eq!(app.planner.taken(), 0);
    }

    #[test]
    fn region_change_without_selection_is_immediate() {
        let (mut app, _temp_dir) = test_app();

        app.request_region_change("bayern".to_string());
        assert!(app.pending_region.is_none());
        assert_eq!(app.planner.region(), "bayern");
        // 2025 has no bayern data -> fall back to 2026 and rebuild
        assert_eq!(app.planner.year(), 2026);
        assert_eq!(app.month_grids[0].year, 2026);
    }

    #[test]
    fn region_change_with_selection_goes_through_prompt() {
        let (mut app, _temp_dir) = test_app();
        app.handle_day_click(date(2025, 8, 25));

        app.request_region_change("bayern".to_string());
        assert_eq!(app.pending_region.as_deref(), Some("bayern"));
        assert_eq!(app.planner.region(), "berlin");

        app.cancel_region_change();
        assert!(app.pending_region.is_none());
        assert_eq!(app.planner.region(), "berlin");
        assert_eq!(app.planner.taken(), 1);
    }

    #[test]
    fn confirm_region_change_with_save_persists_old_region() {
        let (mut app, _temp_dir) = test_app();
        app.handle_day_click(date(2025, 8, 25));
        app.request_region_change("bayern".to_string());

        app.confirm_region_change(true);
        assert_eq!(app.planner.region(), "bayern");
        // selection is retained in memory across the switch
        assert_eq!(app.planner.taken(), 1);

        let saved = app.storage.load();
        assert_eq!(saved.region.as_deref(), Some("berlin"));
        assert!(saved.current_year.contains(&date(2025, 8, 25)));
    }

    #[test]
    fn save_and_reload_round_trips_state() {
        let (mut app, temp_dir) = test_app();
        app.handle_day_click(date(2025, 8, 25));
        app.handle_day_click(date(2025, 8, 26));
        app.carryover_input = "2".to_string();
        app.apply_carryover();
        app.save_state();
        assert!(app.status_message.as_deref().unwrap().starts_with("Saved"));

        let config_path = temp_dir.path().join("holidays.json");
        let storage_path = temp_dir.path().join("data").join("status.json");
        let reloaded = VacationPlannerApp::with_paths(&config_path, &storage_path).unwrap();

        assert_eq!(reloaded.planner.taken(), 2);
        assert_eq!(reloaded.planner.carryover(), 2);
        assert_eq!(reloaded.planner.region(), "berlin");
        assert!(reloaded.planner.selection().contains(&date(2025, 8, 26)));
    }

    #[test]
    fn invalid_carryover_input_reverts() {
        let (mut app, _temp_dir) = test_app();
        app.planner.set_carryover(3);

        app.carryover_input = "abc".to_string();
        app.apply_carryover();
        assert_eq!(app.planner.carryover(), 3);
        assert_eq!(app.carryover_input, "3");
    }

    #[test]
    fn reset_clears_selection_and_rebuilds() {
        let (mut app, _temp_dir) = test_app();
        app.handle_day_click(date(2025, 8, 25));
        app.show_reset_confirm = true;

        app.confirm_reset();
        assert!(!app.show_reset_confirm);
        assert_eq!(app.planner.taken(), 0);
        assert_eq!(app.month_grids.len(), 12);
    }
}
