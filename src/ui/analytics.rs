use eframe::egui::{self, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::category_color;
use crate::data::model::{BmiCategory, Dataset, Record};
use crate::data::stats::{self, ColumnSummary};
use crate::ui::plot;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// DataScience view
// ---------------------------------------------------------------------------

/// Render the descriptive-analytics page for the loaded dataset.
pub fn analytics_view(ui: &mut Ui, dataset: Option<&Dataset>, head_rows: usize) {
    let Some(dataset) = dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dataset loaded  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            about(ui);
            ui.separator();

            ui.strong("DataFrame");
            ui.push_id("head_table", |ui: &mut Ui| {
                head_table(ui, dataset.head(head_rows));
            });
            ui.add_space(8.0);

            ui.strong("Data Summary");
            ui.push_id("summary_table", |ui: &mut Ui| {
                summary_table(ui, &stats::describe(dataset));
            });
            for note in stats::observations(dataset) {
                ui.label(format!("• {note}"));
            }
            ui.add_space(8.0);

            ui.strong("Data Visualization");
            ui.label("Count and percentage of gender per index");
            plot::category_gender_chart(ui, &stats::gender_by_category(dataset));
            ui.add_space(8.0);

            ui.strong("Gender Distribution");
            plot::gender_chart(ui, &stats::gender_counts(dataset));
        });
}

fn about(ui: &mut Ui) {
    ui.heading("About the data");
    ui.label(
        "This dataset from Kaggle records the height, weight, gender and body \
         mass index (BMI) of individuals. BMI uses height and weight to tell \
         whether a body weight is healthy: weight in kilograms divided by the \
         square of height in metres.",
    );
    ui.add_space(4.0);
    ui.label("Columns:");
    ui.label("• Gender: gender of the individual");
    ui.label("• Height: height in centimetres");
    ui.label("• Weight: weight in kilograms");
    ui.label("• Index: BMI category");
    ui.indent("index_legend", |ui: &mut Ui| {
        for cat in BmiCategory::ALL {
            ui.label(
                RichText::new(format!("{}: {}", cat.index(), cat.label()))
                    .color(category_color(cat)),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

fn head_table(ui: &mut Ui, rows: &[Record]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::right_to_left(egui::Align::Center))
        .columns(Column::auto().at_least(70.0), 5)
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["", "Gender", "Height", "Weight", "Index"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (i, r) in rows.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(i.to_string());
                    });
                    // Gender is shown label-encoded, as it is summarised.
                    row.col(|ui: &mut Ui| {
                        ui.label(r.gender.encoded().to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}", r.height));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}", r.weight));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(r.index.index().to_string());
                    });
                });
            }
        });
}

fn summary_table(ui: &mut Ui, summary: &[ColumnSummary]) {
    let values: Vec<[f64; 8]> = summary.iter().map(ColumnSummary::values).collect();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::right_to_left(egui::Align::Center))
        .column(Column::auto().at_least(50.0))
        .columns(Column::auto().at_least(90.0), summary.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|_ui: &mut Ui| {});
            for col in summary {
                header.col(|ui: &mut Ui| {
                    ui.strong(col.name);
                });
            }
        })
        .body(|mut body| {
            for (r, label) in ColumnSummary::ROWS.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.strong(*label);
                    });
                    for col in &values {
                        row.col(|ui: &mut Ui| {
                            ui.label(format_stat(col[r]));
                        });
                    }
                });
            }
        });
}

/// Six decimals like a dataframe summary; NaN shown as-is.
fn format_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_formatted_with_six_decimals() {
        assert_eq!(format_stat(171.5), "171.500000");
        assert_eq!(format_stat(f64::NAN), "NaN");
        assert_eq!(format_stat(5.0), "5.000000");
    }
}
