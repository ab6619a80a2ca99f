mod app;
mod color;
mod config;
mod data;
mod model;
mod state;
mod ui;

use app::BmiExplorerApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!("starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BMI Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(BmiExplorerApp::new(config)))),
    )
}
