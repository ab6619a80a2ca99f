use std::collections::BTreeMap;

use super::model::{BmiCategory, Dataset, Gender, Record};

// ---------------------------------------------------------------------------
// Column summary (count / mean / std / quartiles)
// ---------------------------------------------------------------------------

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: &'static str,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator). NaN for fewer than two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Row labels in the order returned by [`ColumnSummary::values`].
    pub const ROWS: [&'static str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }

    /// Summarise `values`. `None` if empty.
    pub fn from_values(name: &'static str, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n > 1 {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Some(Self {
            name,
            count: n,
            mean,
            std,
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted[n - 1],
        })
    }
}

/// Linear-interpolation quantile (R-7) over an already sorted, non-empty slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Summary of every numeric column, with Gender label-encoded.
pub fn describe(dataset: &Dataset) -> Vec<ColumnSummary> {
    let columns: [(&'static str, fn(&Record) -> f64); 4] = [
        ("Gender", |r| f64::from(r.gender.encoded())),
        ("Height", |r| r.height),
        ("Weight", |r| r.weight),
        ("Index", |r| r.index.index() as f64),
    ];

    columns
        .iter()
        .filter_map(|&(name, get)| {
            let values: Vec<f64> = dataset.records.iter().map(get).collect();
            ColumnSummary::from_values(name, &values)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category × gender cross tabulation
// ---------------------------------------------------------------------------

/// Counts of records per (category, gender). Only categories that occur
/// in the dataset have a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTab {
    rows: BTreeMap<BmiCategory, [usize; 2]>,
}

impl CrossTab {
    pub fn categories(&self) -> impl Iterator<Item = BmiCategory> + '_ {
        self.rows.keys().copied()
    }

    pub fn count(&self, category: BmiCategory, gender: Gender) -> usize {
        self.rows
            .get(&category)
            .map_or(0, |row| row[usize::from(gender.encoded())])
    }

    pub fn row_total(&self, category: BmiCategory) -> usize {
        self.rows.get(&category).map_or(0, |row| row.iter().sum())
    }

    /// Share of `gender` within the category's row, in `0..=100`.
    /// Zero for a category with no records.
    pub fn percentage(&self, category: BmiCategory, gender: Gender) -> f64 {
        let total = self.row_total(category);
        if total == 0 {
            return 0.0;
        }
        self.count(category, gender) as f64 / total as f64 * 100.0
    }

    /// The gender with the larger count in `category`, with its share.
    /// `None` on an exact tie or an empty row.
    pub fn majority(&self, category: BmiCategory) -> Option<(Gender, f64)> {
        let male = self.count(category, Gender::Male);
        let female = self.count(category, Gender::Female);
        let winner = match male.cmp(&female) {
            std::cmp::Ordering::Greater => Gender::Male,
            std::cmp::Ordering::Less => Gender::Female,
            std::cmp::Ordering::Equal => return None,
        };
        Some((winner, self.percentage(category, winner)))
    }
}

pub fn gender_by_category(dataset: &Dataset) -> CrossTab {
    let mut rows: BTreeMap<BmiCategory, [usize; 2]> = BTreeMap::new();
    for r in &dataset.records {
        rows.entry(r.index).or_default()[usize::from(r.gender.encoded())] += 1;
    }
    CrossTab { rows }
}

/// Record count per gender, largest first (ties keep Male before Female).
pub fn gender_counts(dataset: &Dataset) -> Vec<(Gender, usize)> {
    let mut counts: Vec<(Gender, usize)> = Gender::ALL
        .iter()
        .map(|&g| (g, dataset.records.iter().filter(|r| r.gender == g).count()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------------------------------------------------------
// Observations shown under the summary table
// ---------------------------------------------------------------------------

/// Bullet points derived from the data: height/weight extremes and means,
/// then the majority gender of each category.
pub fn observations(dataset: &Dataset) -> Vec<String> {
    let summary = describe(dataset);
    let mut notes = Vec::new();

    for col in summary.iter().filter(|c| matches!(c.name, "Height" | "Weight")) {
        let (noun, unit) = if col.name == "Height" {
            ("height", "cm")
        } else {
            ("weight", "kg")
        };
        notes.push(format!("Lowest {noun} is {:.0} {unit}", col.min));
        notes.push(format!("Highest {noun} is {:.0} {unit}", col.max));
        notes.push(format!("Average {noun}: {:.0} {unit}", col.mean));
    }

    let tab = gender_by_category(dataset);
    for cat in tab.categories() {
        let note = match tab.majority(cat) {
            Some((gender, pct)) => format!(
                "{cat}: mostly {} ({pct:.1}%)",
                gender.to_string().to_lowercase()
            ),
            None => format!("{cat}: evenly split between women and men"),
        };
        notes.push(note);
    }
    notes
}
