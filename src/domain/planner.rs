//! Vacation selection and allowance accounting.
//!
//! This is the single source of truth for the user's selection: which dates
//! are booked for the active year, how many days the allowance permits, and
//! what happens on a day click. The rendering layer reads this state and
//! forwards clicks; it never mutates the selection directly.

use crate::domain::calendar;
use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Vacation days granted per year before carryover.
pub const DEFAULT_TOTAL_HOLIDAYS: i32 = 30;

/// Region used when nothing is persisted and the config offers no regions.
pub const DEFAULT_REGION: &str = "berlin";

/// State of one date in the active year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Weekend or public holiday - never user-toggleable.
    Blocked,
    /// Working day, not currently selected.
    Available,
    /// Working day, selected as vacation.
    Selected,
}

/// Result of a toggle attempt, for the UI to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The date was added to the selection.
    Added,
    /// The date was removed from the selection.
    Removed,
    /// The allowance is exhausted; nothing changed.
    LimitReached,
    /// The date is a weekend/public holiday or outside the active year;
    /// nothing changed.
    Ignored,
}

/// Selection state and allowance accounting for the active (region, year).
pub struct Planner {
    total_holidays: i32,
    carryover: i32,
    region: String,
    year: i32,
    /// Selected vacation days for the active year.
    selection: HashSet<NaiveDate>,
    /// Dormant next-year slot: persisted for data consistency, not
    /// reachable through the UI.
    next_year_selection: HashSet<NaiveDate>,
    /// Public holidays for the active (region, year); used for blocking.
    public_holidays: HashSet<NaiveDate>,
}

impl Planner {
    pub fn new(total_holidays: i32, region: &str, year: i32) -> Self {
        Self {
            total_holidays,
            carryover: 0,
            region: region.to_string(),
            year,
            selection: HashSet::new(),
            next_year_selection: HashSet::new(),
            public_holidays: HashSet::new(),
        }
    }

    // --- accessors ---

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn carryover(&self) -> i32 {
        self.carryover
    }

    pub fn selection(&self) -> &HashSet<NaiveDate> {
        &self.selection
    }

    pub fn next_year_selection(&self) -> &HashSet<NaiveDate> {
        &self.next_year_selection
    }

    /// Number of booked days for the active year. Always equals the
    /// selection size.
    pub fn taken(&self) -> i32 {
        self.selection.len() as i32
    }

    /// Days still available: total + carryover - taken. Can go negative if
    /// the carryover is lowered after booking; the cap is only enforced at
    /// add time.
    pub fn remaining(&self) -> i32 {
        self.total_holidays + self.carryover - self.taken()
    }

    /// Whether any selection exists in either slot (drives the save prompt
    /// on region change).
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty() || !self.next_year_selection.is_empty()
    }

    // --- state loading / context switching ---

    /// Install state loaded from storage.
    pub fn restore(
        &mut self,
        selection: HashSet<NaiveDate>,
        next_year_selection: HashSet<NaiveDate>,
        carryover: i32,
        region: Option<String>,
    ) {
        // Persisted dates are not re-validated against weekends/holidays;
        // blocking is enforced at click time only.
        self.selection = selection;
        self.next_year_selection = next_year_selection;
        self.carryover = carryover;
        if let Some(region) = region {
            self.region = region;
        }
        info!(
            "Restored selection: {} booked days, carryover {}, region {}",
            self.taken(),
            self.carryover,
            self.region
        );
    }

    /// Replace the public-holiday set for the active (region, year).
    pub fn set_public_holidays(&mut self, public_holidays: HashSet<NaiveDate>) {
        self.public_holidays = public_holidays;
    }

    pub fn set_carryover(&mut self, carryover: i32) {
        self.carryover = carryover;
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Switch to `region`, falling back to the first available year when the
    /// active year has no data there. Returns the (possibly adjusted) year.
    ///
    /// The in-memory selection is kept regardless of whether it was saved.
    pub fn switch_region(&mut self, region: &str, mut available_years: Vec<i32>) -> i32 {
        self.region = region.to_string();
        available_years.sort();

        if !available_years.is_empty() && !available_years.contains(&self.year) {
            let fallback = available_years[0];
            warn!(
                "Year {} not available for region '{}', falling back to {}",
                self.year, region, fallback
            );
            self.year = fallback;
        }

        self.year
    }

    // --- toggle state machine ---

    /// Status of a date in the active year.
    pub fn day_status(&self, date: NaiveDate) -> DayStatus {
        if calendar::is_weekend(date) || self.public_holidays.contains(&date) {
            DayStatus::Blocked
        } else if self.selection.contains(&date) {
            DayStatus::Selected
        } else {
            DayStatus::Available
        }
    }

    /// Toggle a date on or off, enforcing the allowance cap on add.
    pub fn toggle(&mut self, date: NaiveDate) -> ToggleOutcome {
        if date.year() != self.year {
            debug!("Ignoring click on {} outside active year {}", date, self.year);
            return ToggleOutcome::Ignored;
        }

        match self.day_status(date) {
            DayStatus::Blocked => ToggleOutcome::Ignored,
            DayStatus::Selected => {
                self.selection.remove(&date);
                debug!("Removed {}, {} days booked", date, self.taken());
                ToggleOutcome::Removed
            }
            DayStatus::Available => {
                if self.taken() >= self.total_holidays + self.carryover {
                    info!("Allowance exhausted ({} days), rejecting {}", self.taken(), date);
                    return ToggleOutcome::LimitReached;
                }
                self.selection.insert(date);
                debug!("Added {}, {} days booked", date, self.taken());
                ToggleOutcome::Added
            }
        }
    }

    /// Clear the active year's selection. Caller is responsible for the
    /// confirmation prompt and the calendar rebuild.
    pub fn reset(&mut self) {
        info!("Resetting {} booked days for {}", self.taken(), self.year);
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A planner for 2025 with Christmas configured as a public holiday.
    fn planner_2025() -> Planner {
        let mut planner = Planner::new(DEFAULT_TOTAL_HOLIDAYS, "berlin", 2025);
        planner.set_public_holidays([date(2025, 12, 25)].into());
        planner
    }

    /// Weekdays of 2025 in calendar order, excluding public holidays.
    fn workdays_2025(planner: &Planner) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut d = date(2025, 1, 1);
        while d.year() == 2025 {
            if planner.day_status(d) != DayStatus::Blocked {
                days.push(d);
            }
            d = d.succ_opt().unwrap();
        }
        days
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut planner = planner_2025();
        let monday = date(2025, 8, 25);

        assert_eq!(planner.day_status(monday), DayStatus::Available);
        assert_eq!(planner.toggle(monday), ToggleOutcome::Added);
        assert_eq!(planner.day_status(monday), DayStatus::Selected);
        assert_eq!(planner.taken(), 1);

        assert_eq!(planner.toggle(monday), ToggleOutcome::Removed);
        assert_eq!(planner.day_status(monday), DayStatus::Available);
        assert_eq!(planner.taken(), 0);
    }

    #[test]
    fn blocked_days_are_never_toggled() {
        let mut planner = planner_2025();
        let saturday = date(2025, 8, 23);
        let christmas = date(2025, 12, 25);

        assert_eq!(planner.day_status(saturday), DayStatus::Blocked);
        assert_eq!(planner.day_status(christmas), DayStatus::Blocked);

        assert_eq!(planner.toggle(saturday), ToggleOutcome::Ignored);
        assert_eq!(planner.toggle(christmas), ToggleOutcome::Ignored);
        assert_eq!(planner.taken(), 0);
        assert!(planner.selection().is_empty());
    }

    #[test]
    fn clicks_outside_active_year_are_ignored() {
        let mut planner = planner_2025();
        assert_eq!(planner.toggle(date(2026, 6, 1)), ToggleOutcome::Ignored);
        assert_eq!(planner.taken(), 0);
    }

    #[test]
    fn thirty_days_fit_and_the_thirty_first_is_rejected() {
        let mut planner = planner_2025();
        let workdays = workdays_2025(&planner);

        for d in workdays.iter().take(30) {
            assert_eq!(planner.toggle(*d), ToggleOutcome::Added);
        }
        assert_eq!(planner.taken(), 30);
        assert_eq!(planner.remaining(), 0);

        assert_eq!(planner.toggle(workdays[30]), ToggleOutcome::LimitReached);
        assert_eq!(planner.taken(), 30);
        assert!(!planner.selection().contains(&workdays[30]));
    }

    #[test]
    fn carryover_raises_the_cap() {
        let mut planner = planner_2025();
        planner.set_carryover(2);
        let workdays = workdays_2025(&planner);

        for d in workdays.iter().take(32) {
            assert_eq!(planner.toggle(*d), ToggleOutcome::Added);
        }
        assert_eq!(planner.taken(), 32);
        assert_eq!(planner.toggle(workdays[32]), ToggleOutcome::LimitReached);
    }

    #[test]
    fn taken_always_matches_selection_size() {
        let mut planner = planner_2025();
        let workdays = workdays_2025(&planner);

        for d in workdays.iter().take(5) {
            planner.toggle(*d);
            assert_eq!(planner.taken() as usize, planner.selection().len());
        }
        planner.toggle(workdays[0]);
        assert_eq!(planner.taken() as usize, planner.selection().len());
    }

    #[test]
    fn reset_clears_only_the_selection() {
        let mut planner = planner_2025();
        planner.set_carryover(4);
        planner.toggle(date(2025, 8, 25));
        planner.toggle(date(2025, 8, 26));

        planner.reset();
        assert_eq!(planner.taken(), 0);
        assert!(planner.selection().is_empty());
        assert_eq!(planner.carryover(), 4);
        assert_eq!(planner.remaining(), DEFAULT_TOTAL_HOLIDAYS + 4);
    }

    #[test]
    fn region_switch_falls_back_to_first_available_year() {
        let mut planner = planner_2025();

        // target region only has 2026/2027 data
        let year = planner.switch_region("bayern", vec![2027, 2026]);
        assert_eq!(year, 2026);
        assert_eq!(planner.year(), 2026);
        assert_eq!(planner.region(), "bayern");
    }

    #[test]
    fn region_switch_keeps_year_when_available() {
        let mut planner = planner_2025();
        let year = planner.switch_region("bayern", vec![2024, 2025, 2026]);
        assert_eq!(year, 2025);
    }

    #[test]
    fn region_switch_keeps_selection_in_memory() {
        let mut planner = planner_2025();
        planner.toggle(date(2025, 8, 25));

        planner.switch_region("bayern", vec![2026]);
        assert_eq!(planner.taken(), 1);
        assert!(planner.has_selection());
    }

    #[test]
    fn restore_takes_state_as_is() {
        let mut planner = planner_2025();
        // A stored weekend date is restored verbatim; blocking applies at
        // click time only.
        let stored: HashSet<NaiveDate> = [date(2025, 8, 23), date(2025, 8, 25)].into();

        planner.restore(stored.clone(), HashSet::new(), 2, Some("bayern".to_string()));
        assert_eq!(planner.selection(), &stored);
        assert_eq!(planner.taken(), 2);
        assert_eq!(planner.carryover(), 2);
        assert_eq!(planner.region(), "bayern");
    }

    #[test]
    fn restore_without_region_keeps_default() {
        let mut planner = planner_2025();
        planner.restore(HashSet::new(), HashSet::new(), 0, None);
        assert_eq!(planner.region(), "berlin");
    }
}
