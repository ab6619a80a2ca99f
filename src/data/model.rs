use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Gender – categorical column, label-encoded for statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Parse the textual column value (`"Male"` / `"Female"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Label encoding: Male → 0, Female → 1.
    pub fn encoded(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

// ---------------------------------------------------------------------------
// BmiCategory – the ordinal Index column
// ---------------------------------------------------------------------------

/// Ordinal body-mass category, 0 (very weak) to 5 (extremely obese).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BmiCategory {
    VeryWeak = 0,
    Weak = 1,
    Normal = 2,
    Overweight = 3,
    Obese = 4,
    ExtremelyObese = 5,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 6] = [
        BmiCategory::VeryWeak,
        BmiCategory::Weak,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
        BmiCategory::ExtremelyObese,
    ];

    /// Look up a category by its index value. `None` outside `0..=5`.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::VeryWeak => "Very Weak",
            BmiCategory::Weak => "Weak",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::ExtremelyObese => "Extremely Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// Row layout as it appears on disk (`Gender,Height,Weight,Index`).
/// Converted into a validated [`Record`] by the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "Index")]
    pub index: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub gender: Gender,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub index: BmiCategory,
}

impl Record {
    /// The model's feature vector: raw (unscaled) height and weight.
    pub fn features(&self) -> [f64; 2] {
        [self.height, self.weight]
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// File the records were read from.
    pub source: PathBuf,
}

impl Dataset {
    pub fn new(records: Vec<Record>, source: impl Into<PathBuf>) -> Self {
        Self {
            records,
            source: source.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` records (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_encoding_matches_label_order() {
        assert_eq!(Gender::Male.encoded(), 0);
        assert_eq!(Gender::Female.encoded(), 1);
        assert_eq!(Gender::parse(" Female "), Some(Gender::Female));
        assert_eq!(Gender::parse("female"), None);
    }

    #[test]
    fn category_lookup_covers_all_indices() {
        for i in 0..=5 {
            let cat = BmiCategory::from_index(i).expect("in range");
            assert_eq!(cat.index() as i64, i);
        }
        assert_eq!(BmiCategory::from_index(6), None);
        assert_eq!(BmiCategory::from_index(-1), None);
        assert_eq!(BmiCategory::from_index(2).unwrap().label(), "Normal");
        assert_eq!(BmiCategory::ExtremelyObese.to_string(), "Extremely Obese");
    }

    #[test]
    fn head_is_clamped_to_length() {
        let rec = Record {
            gender: Gender::Male,
            height: 170.0,
            weight: 70.0,
            index: BmiCategory::Normal,
        };
        let ds = Dataset::new(vec![rec; 3], "mem.csv");
        assert_eq!(ds.head(5).len(), 3);
        assert_eq!(ds.head(2).len(), 2);
        assert_eq!(rec.features(), [170.0, 70.0]);
    }
}
