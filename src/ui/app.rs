//! # App Loop
//!
//! The `eframe::App` implementation: per-frame layout of header, messages,
//! and the scrollable year calendar, plus modal rendering and the
//! save-on-close behavior.

use crate::ui::components::styling;
use crate::ui::state::VacationPlannerApp;
use eframe::egui;

impl eframe::App for VacationPlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        styling::setup_planner_style(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();

            self.render_messages(ui);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_calendar(ui);
                });
        });

        self.render_modals(ctx);

        // Persist on window close, like the original planner did.
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_state();
        }
    }
}

impl VacationPlannerApp {
    /// Render the warning banner and status line.
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        if !self.active_year_has_data() {
            ui.colored_label(
                styling::colors::WARNING_TEXT,
                format!(
                    "No holiday data for {} in {}",
                    self.planner.region(),
                    self.planner.year()
                ),
            );
        }

        if let Some(status) = &self.status_message {
            ui.colored_label(styling::colors::STATUS_TEXT, status);
        }
    }
}
