use eframe::egui;
use log::{error, info};

mod domain;
mod holidays;
mod storage;
mod ui;

use ui::VacationPlannerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Vacation Planner");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([940.0, 600.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Vacation Planner")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Vacation Planner",
        options,
        Box::new(|_cc| match VacationPlannerApp::new() {
            Ok(app) => {
                info!("Planner initialized");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize planner: {}", e);
                Err(format!("Failed to initialize planner: {}", e).into())
            }
        }),
    )
}
