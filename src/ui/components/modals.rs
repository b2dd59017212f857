//! # Modals
//!
//! Overlay dialogs rendered above the calendar: the allowance-exhausted
//! warning, the reset confirmation, and the three-way region-change save
//! prompt. All use the same backdrop-plus-framed-card pattern.

use crate::ui::state::VacationPlannerApp;
use eframe::egui;

impl VacationPlannerApp {
    /// Render whichever modal is currently active.
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_limit_warning_modal(ctx);
        self.render_reset_confirm_modal(ctx);
        self.render_region_change_modal(ctx);
    }

    /// Blocking warning shown when an add would exceed the allowance.
    fn render_limit_warning_modal(&mut self, ctx: &egui::Context) {
        if !self.show_limit_warning {
            return;
        }

        modal_overlay(ctx, "limit_warning_modal", |ui| {
            ui.label(
                egui::RichText::new("Warning")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label("No more vacation days left for this year!");
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                self.show_limit_warning = false;
            }
        });
    }

    /// Confirmation before clearing the active year's selection.
    fn render_reset_confirm_modal(&mut self, ctx: &egui::Context) {
        if !self.show_reset_confirm {
            return;
        }

        modal_overlay(ctx, "reset_confirm_modal", |ui| {
            ui.label(
                egui::RichText::new("Confirm Reset")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label("Reset all holidays for the current year?");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    self.confirm_reset();
                }
                if ui.button("No").clicked() {
                    self.show_reset_confirm = false;
                }
            });
        });
    }

    /// Three-way prompt when switching region with selections present.
    fn render_region_change_modal(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending_region.clone() else {
            return;
        };

        modal_overlay(ctx, "region_change_modal", |ui| {
            ui.label(
                egui::RichText::new("Region Change")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label(format!(
                "Save current holidays before changing region to {}?",
                pending
            ));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save and switch").clicked() {
                    self.confirm_region_change(true);
                }
                if ui.button("Switch without saving").clicked() {
                    self.confirm_region_change(false);
                }
                if ui.button("Cancel").clicked() {
                    self.cancel_region_change();
                }
            });
        });
    }
}

/// Dimmed backdrop with a centered card, shared by all modals.
fn modal_overlay(ctx: &egui::Context, id: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 96),
            );

            egui::Frame::window(&ui.style())
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(16.0))
                .show(ui, |ui| {
                    ui.set_min_width(280.0);
                    ui.vertical_centered(add_contents);
                });
        });
}
