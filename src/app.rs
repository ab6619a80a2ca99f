use eframe::egui;

use crate::config::AppConfig;
use crate::state::{AppState, View};
use crate::ui::{analytics, panels, predict};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BmiExplorerApp {
    pub state: AppState,
}

impl BmiExplorerApp {
    /// Load the configured dataset and fit the model once, up front.
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::startup(config),
        }
    }
}

impl eframe::App for BmiExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: view selector ----
        egui::SidePanel::left("option_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Body Mass Index");
            ui.add_space(4.0);
            match self.state.view {
                View::BodyMassIndex => predict::prediction_form(ui, &mut self.state),
                View::DataScience => analytics::analytics_view(
                    ui,
                    self.state.dataset.as_ref(),
                    self.state.config.head_rows,
                ),
            }
        });
    }
}
