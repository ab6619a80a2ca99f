use eframe::egui::{self, RichText, Ui};

use crate::color::category_color;
use crate::state::{AppState, INPUT_RANGE};

// ---------------------------------------------------------------------------
// Body Mass Index view – prediction form
// ---------------------------------------------------------------------------

pub fn prediction_form(ui: &mut Ui, state: &mut AppState) {
    ui.label("Check your body mass index.");
    ui.add_space(8.0);

    egui::Grid::new("bmi_inputs")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Height (cm)");
            ui.add(
                egui::DragValue::new(&mut state.height)
                    .range(INPUT_RANGE)
                    .speed(0.5)
                    .min_decimals(1),
            );
            ui.end_row();

            ui.label("Weight (kg)");
            ui.add(
                egui::DragValue::new(&mut state.weight)
                    .range(INPUT_RANGE)
                    .speed(0.5)
                    .min_decimals(1),
            );
            ui.end_row();
        });

    ui.add_space(8.0);

    let can_predict = state.classifier.is_some();
    if ui
        .add_enabled(can_predict, egui::Button::new("Predict"))
        .clicked()
    {
        state.predict();
    }

    if !can_predict {
        ui.label("No dataset loaded, so there is no model to predict with.");
        return;
    }

    if let Some(category) = state.prediction {
        ui.add_space(8.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Your body mass index is:");
            ui.label(
                RichText::new(category.label())
                    .strong()
                    .color(category_color(category)),
            );
        });
    }
}
