use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{BmiCategory, Gender};

// ---------------------------------------------------------------------------
// Gender colours (matplotlib tab10 blue / orange)
// ---------------------------------------------------------------------------

pub fn gender_color(gender: Gender) -> Color32 {
    match gender {
        Gender::Male => Color32::from_rgb(0x1f, 0x77, 0xb4),
        Gender::Female => Color32::from_rgb(0xff, 0x7f, 0x0e),
    }
}

// ---------------------------------------------------------------------------
// Category ramp: blue (very weak) → green (normal) → red (extremely obese)
// ---------------------------------------------------------------------------

/// Hue for each category, chosen so Normal sits on green.
const CATEGORY_HUES: [f32; 6] = [210.0, 170.0, 120.0, 50.0, 25.0, 0.0];

pub fn category_color(category: BmiCategory) -> Color32 {
    hsl_to_color32(CATEGORY_HUES[category.index()], 0.75, 0.45)
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
