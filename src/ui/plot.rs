use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};

use crate::color::gender_color;
use crate::data::model::Gender;
use crate::data::stats::CrossTab;

const BAR_WIDTH: f64 = 0.6;
const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Stacked count per category, split by gender
// ---------------------------------------------------------------------------

/// A percentage label centred inside one stacked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLabel {
    pub x: f64,
    pub y: f64,
    pub percentage: f64,
}

/// Labels for every non-empty segment. Male segments sit at the bottom of each
/// stack, Female segments on top.
pub fn segment_labels(tab: &CrossTab) -> Vec<SegmentLabel> {
    let mut labels = Vec::new();
    for cat in tab.categories() {
        let mut base = 0.0;
        for gender in Gender::ALL {
            let height = tab.count(cat, gender) as f64;
            if height > 0.0 {
                labels.push(SegmentLabel {
                    x: cat.index() as f64,
                    y: base + height / 2.0,
                    percentage: tab.percentage(cat, gender),
                });
            }
            base += height;
        }
    }
    labels
}

fn gender_bars(tab: &CrossTab, gender: Gender) -> BarChart {
    let bars: Vec<Bar> = tab
        .categories()
        .map(|cat| {
            Bar::new(cat.index() as f64, tab.count(cat, gender) as f64)
                .width(BAR_WIDTH)
                .name(format!("{cat} ({gender})"))
        })
        .collect();
    BarChart::new(bars)
        .name(gender.to_string())
        .color(gender_color(gender))
}

/// Stacked bar chart of record counts per category and gender, with the
/// within-category percentage written on each segment.
pub fn category_gender_chart(ui: &mut Ui, tab: &CrossTab) {
    let male = gender_bars(tab, Gender::Male);
    let female = gender_bars(tab, Gender::Female).stack_on(&[&male]);
    let labels = segment_labels(tab);

    Plot::new("category_gender_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Index")
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(male);
            plot_ui.bar_chart(female);
            for label in labels {
                let text = RichText::new(format!("{:.1}%", label.percentage))
                    .color(Color32::WHITE)
                    .size(11.0);
                plot_ui.text(Text::new(PlotPoint::new(label.x, label.y), text));
            }
        });
}

// ---------------------------------------------------------------------------
// Gender distribution
// ---------------------------------------------------------------------------

/// One bar of the gender distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionBar {
    pub x: f64,
    pub count: f64,
    pub gender: Gender,
    pub color: Color32,
}

/// Bars in the order given (largest first from
/// [`crate::data::stats::gender_counts`]). Colours follow the gender, so they
/// match the stacked chart whichever group is larger.
pub fn distribution_bars(counts: &[(Gender, usize)]) -> Vec<DistributionBar> {
    counts
        .iter()
        .enumerate()
        .map(|(x, &(gender, count))| DistributionBar {
            x: x as f64,
            count: count as f64,
            gender,
            color: gender_color(gender),
        })
        .collect()
}

pub fn gender_chart(ui: &mut Ui, counts: &[(Gender, usize)]) {
    let bars = distribution_bars(counts);

    Plot::new("gender_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Gender")
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for bar in bars {
                plot_ui.bar_chart(
                    BarChart::new(vec![Bar::new(bar.x, bar.count).width(BAR_WIDTH)])
                        .name(bar.gender.to_string())
                        .color(bar.color),
                );
            }
        });
}
