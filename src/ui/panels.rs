use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – view selector
// ---------------------------------------------------------------------------

/// Render the left option panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Options");
    ui.separator();

    egui::ComboBox::from_id_salt("view_select")
        .selected_text(state.view.label())
        .show_ui(ui, |ui: &mut Ui| {
            for view in View::ALL {
                ui.selectable_value(&mut state.view, view, view.label());
            }
        });

    ui.add_space(8.0);

    match (&state.dataset, &state.classifier) {
        (Some(ds), Some(model)) => {
            ui.small(format!("{} records", ds.len()));
            ui.small(format!(
                "{}-NN fitted on {} rows, {} held out",
                model.k(),
                model.train_len(),
                model.test_len()
            ));
        }
        _ => {
            ui.small("No dataset loaded.");
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{}", ds.source.display()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open BMI dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_dataset(&path);
    }
}
