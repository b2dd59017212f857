//! # Styling Module
//!
//! Global egui style setup and the color constants for the planner.
//!
//! ## Purpose:
//! Every visual decision about a calendar day lives here, keyed only by the
//! day's kind and whether it is selected. Rendering code asks `day_fill` /
//! `day_text_color` and never picks colors per widget kind, so the selected
//! visual is a single code path regardless of how the cell is drawn.

use crate::domain::calendar::DayKind;
use eframe::egui;
use egui::Color32;

/// Configure the application-wide egui style.
pub fn setup_planner_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.button_frame = true;
        // Visible background for the carryover text edit
        style.visuals.extreme_bg_color = Color32::from_rgb(248, 248, 248);

        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(4.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(4.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(4.0);

        style
    });
}

/// Color constants for the planner theme.
pub mod colors {
    use eframe::egui::Color32;

    /// Fill for a selected vacation day (the original planner's blue).
    pub const SELECTED_DAY: Color32 = Color32::from_rgb(48, 124, 175);
    /// Fill for a selectable working day.
    pub const WORKDAY: Color32 = Color32::from_rgb(250, 250, 250);
    /// Fill for weekends and public holidays.
    pub const BLOCKED_DAY: Color32 = Color32::from_rgb(215, 215, 215);
    /// Hover tint for selectable days.
    pub const WORKDAY_HOVERED: Color32 = Color32::from_rgb(225, 238, 248);

    pub const DAY_BORDER: Color32 = Color32::from_rgba_premultiplied(180, 180, 180, 200);
    pub const MONTH_BORDER: Color32 = Color32::from_rgb(160, 160, 160);

    pub const DAY_TEXT: Color32 = Color32::from_rgb(40, 40, 40);
    pub const SELECTED_DAY_TEXT: Color32 = Color32::WHITE;
    pub const BLOCKED_DAY_TEXT: Color32 = Color32::from_rgb(130, 130, 130);

    pub const WARNING_TEXT: Color32 = Color32::from_rgb(230, 140, 0);
    pub const STATUS_TEXT: Color32 = Color32::from_rgb(90, 90, 90);
}

/// Background fill for a day cell.
pub fn day_fill(kind: DayKind, is_selected: bool, is_hovered: bool) -> Color32 {
    if is_selected {
        return colors::SELECTED_DAY;
    }
    match kind {
        DayKind::Workday => {
            if is_hovered {
                colors::WORKDAY_HOVERED
            } else {
                colors::WORKDAY
            }
        }
        DayKind::Weekend | DayKind::PublicHoliday => colors::BLOCKED_DAY,
        DayKind::Padding => Color32::TRANSPARENT,
    }
}

/// Day-number text color for a day cell.
pub fn day_text_color(kind: DayKind, is_selected: bool) -> Color32 {
    if is_selected {
        return colors::SELECTED_DAY_TEXT;
    }
    match kind {
        DayKind::Workday => colors::DAY_TEXT,
        DayKind::Weekend | DayKind::PublicHoliday => colors::BLOCKED_DAY_TEXT,
        DayKind::Padding => Color32::TRANSPARENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_visual_is_uniform_across_day_kinds() {
        // Selection overrides every other visual input.
        assert_eq!(day_fill(DayKind::Workday, true, false), colors::SELECTED_DAY);
        assert_eq!(day_fill(DayKind::Workday, true, true), colors::SELECTED_DAY);
        assert_eq!(day_text_color(DayKind::Workday, true), colors::SELECTED_DAY_TEXT);
    }

    #[test]
    fn blocked_days_share_one_visual() {
        assert_eq!(
            day_fill(DayKind::Weekend, false, false),
            day_fill(DayKind::PublicHoliday, false, false)
        );
        assert_eq!(
            day_text_color(DayKind::Weekend, false),
            day_text_color(DayKind::PublicHoliday, false)
        );
    }
}
