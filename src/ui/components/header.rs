//! # Header Component
//!
//! The top control bar: region and year selectors, the carryover entry,
//! the "Days left" / "Booked days" counters, and the Reset / Save buttons.

use crate::ui::state::VacationPlannerApp;
use eframe::egui;

impl VacationPlannerApp {
    /// Render the header control bar.
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Vacation Planner")
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.add_space(12.0);

            self.render_region_selector(ui);
            self.render_year_selector(ui);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save Holidays").clicked() {
                    self.save_state();
                }
                if ui.button("Reset").clicked() {
                    self.show_reset_confirm = true;
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label("Previous Year:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.carryover_input).desired_width(36.0),
            );
            let entry_submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.small_button("OK").clicked() || entry_submitted {
                self.apply_carryover();
            }

            ui.add_space(16.0);
            ui.label(format!("Days left: {}", self.planner.remaining()));
            ui.add_space(8.0);
            ui.label(format!("Booked days: {}", self.planner.taken()));
        });
    }

    /// Region dropdown. With selections present, the actual switch is
    /// deferred behind the save prompt.
    fn render_region_selector(&mut self, ui: &mut egui::Ui) {
        let active_region = self.planner.region().to_string();
        let mut selected_region = active_region.clone();

        egui::ComboBox::from_label("Region")
            .selected_text(&active_region)
            .width(120.0)
            .show_ui(ui, |ui| {
                for region in &self.available_regions {
                    ui.selectable_value(&mut selected_region, region.clone(), region);
                }
            });

        if selected_region != active_region {
            self.request_region_change(selected_region);
        }
    }

    /// Year dropdown over the years configured for the active region.
    fn render_year_selector(&mut self, ui: &mut egui::Ui) {
        let active_year = self.planner.year();
        let mut selected_year = active_year;

        egui::ComboBox::from_label("Year")
            .selected_text(active_year.to_string())
            .width(70.0)
            .show_ui(ui, |ui| {
                for year in &self.available_years {
                    ui.selectable_value(&mut selected_year, *year, year.to_string());
                }
            });

        if selected_year != active_year {
            self.select_year(selected_year);
        }
    }
}
