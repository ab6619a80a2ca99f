use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROWS: usize = 500;
const SEED: u64 = 42;

/// BMI upper bounds for categories 0..=4; anything above is category 5.
const BMI_BOUNDS: [f64; 5] = [16.0, 18.5, 25.0, 30.0, 40.0];

fn bmi_index(height_cm: f64, weight_kg: f64) -> usize {
    let m = height_cm / 100.0;
    let bmi = weight_kg / (m * m);
    BMI_BOUNDS
        .iter()
        .position(|&upper| bmi < upper)
        .unwrap_or(BMI_BOUNDS.len())
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bmi_train.csv"));

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(["Gender", "Height", "Weight", "Index"])?;

    for _ in 0..ROWS {
        let gender = if rng.gen_bool(0.5) { "Male" } else { "Female" };
        let height: u32 = rng.gen_range(140..=199);
        let weight: u32 = rng.gen_range(50..=160);
        let index = bmi_index(f64::from(height), f64::from(weight));

        writer.write_record([
            gender.to_string(),
            height.to_string(),
            weight.to_string(),
            index.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {ROWS} records to {}", output_path.display());
    Ok(())
}
