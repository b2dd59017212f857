//! # Calendar Component
//!
//! Renders the active year as 12 month grids in a 4x3 layout. Each day cell
//! is painted from the domain classification plus the planner's selection
//! state; blocked days are non-interactive and show the holiday name as a
//! tooltip where one is configured. Clicks are collected during the pass
//! and forwarded to the planner afterwards, so the rendering code never
//! mutates selection state itself.

use crate::domain::calendar::{month_name, DayCell, DayKind, MonthGrid, WEEKDAY_HEADERS};
use crate::domain::planner::DayStatus;
use crate::ui::components::styling;
use crate::ui::state::VacationPlannerApp;
use chrono::NaiveDate;
use eframe::egui;

const CELL_SIZE: egui::Vec2 = egui::vec2(26.0, 22.0);
const MONTHS_PER_ROW: usize = 4;

impl VacationPlannerApp {
    /// Render the 12-month calendar for the active year.
    pub fn render_calendar(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.planner.year().to_string())
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .strong(),
            );
        });
        ui.add_space(4.0);

        let mut clicked_date: Option<NaiveDate> = None;

        for row in self.month_grids.chunks(MONTHS_PER_ROW) {
            ui.horizontal_top(|ui| {
                for grid in row {
                    render_month(ui, grid, &self.planner, &self.holiday_calendar, &mut clicked_date);
                }
            });
            ui.add_space(6.0);
        }

        if let Some(date) = clicked_date {
            self.handle_day_click(date);
        }
    }
}

/// Render one month grid inside a bordered frame.
fn render_month(
    ui: &mut egui::Ui,
    grid: &MonthGrid,
    planner: &crate::domain::planner::Planner,
    holiday_calendar: &crate::holidays::HolidayCalendar,
    clicked_date: &mut Option<NaiveDate>,
) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, styling::colors::MONTH_BORDER))
        .rounding(egui::Rounding::same(3.0))
        .inner_margin(egui::Margin::same(4.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(month_name(grid.month)).strong());

                egui::Grid::new(("month", grid.year, grid.month))
                    .spacing(egui::vec2(1.0, 1.0))
                    .min_col_width(CELL_SIZE.x)
                    .show(ui, |ui| {
                        for header in WEEKDAY_HEADERS {
                            ui.label(
                                egui::RichText::new(header)
                                    .font(egui::FontId::new(9.0, egui::FontFamily::Proportional)),
                            );
                        }
                        ui.end_row();

                        for (i, cell) in grid.cells.iter().enumerate() {
                            render_day_cell(ui, cell, planner, holiday_calendar, clicked_date);
                            if i % 7 == 6 {
                                ui.end_row();
                            }
                        }
                        ui.end_row();
                    });
            });
        });
}

/// Paint a single day cell and record a click if it is selectable.
fn render_day_cell(
    ui: &mut egui::Ui,
    cell: &DayCell,
    planner: &crate::domain::planner::Planner,
    holiday_calendar: &crate::holidays::HolidayCalendar,
    clicked_date: &mut Option<NaiveDate>,
) {
    let Some(date) = cell.date else {
        // padding cell: reserve the space, draw nothing
        ui.allocate_exact_size(CELL_SIZE, egui::Sense::hover());
        return;
    };

    let status = planner.day_status(date);
    let is_selected = status == DayStatus::Selected;

    let sense = if cell.kind.is_blocked() {
        egui::Sense::hover()
    } else {
        egui::Sense::click()
    };
    let (rect, response) = ui.allocate_exact_size(CELL_SIZE, sense);

    let fill = styling::day_fill(cell.kind, is_selected, response.hovered());
    ui.painter().rect_filled(rect, egui::Rounding::same(3.0), fill);
    ui.painter().rect_stroke(
        rect,
        egui::Rounding::same(3.0),
        egui::Stroke::new(0.5, styling::colors::DAY_BORDER),
    );

    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        cell.day.to_string(),
        egui::FontId::new(11.0, egui::FontFamily::Proportional),
        styling::day_text_color(cell.kind, is_selected),
    );

    if response.clicked() {
        *clicked_date = Some(date);
    }

    if cell.kind == DayKind::PublicHoliday {
        if let Some(name) = holiday_calendar.holiday_name(date, planner.region()) {
            response.on_hover_text(name);
        }
    }
}
