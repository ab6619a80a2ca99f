use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{BmiCategory, Dataset, Gender, RawRecord, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{}' not found, check the file location", .0.display())]
    NotFound(PathBuf),

    #[error("reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("row {row}: unknown gender '{value}' (expected Male or Female)")]
    InvalidGender { row: usize, value: String },

    #[error("row {row}: index {value} is outside 0..=5")]
    InvalidIndex { row: usize, value: i64 },

    #[error("row {row}: {column} must be a non-negative number, got {value}")]
    InvalidMeasurement {
        row: usize,
        column: &'static str,
        value: f64,
    },

    #[error("dataset contains no records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a BMI dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header `Gender,Height,Weight,Index`
/// * `.json` – `[{ "Gender": "Male", "Height": 174, "Weight": 96, "Index": 4 }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "csv" => read_csv(open(path)?)?,
        "json" => serde_json::from_reader(open(path)?)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    let records = validate(raw)?;
    log::debug!("parsed {} records from {}", records.len(), path.display());
    Ok(Dataset::new(records, path))
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(LoadError::NotFound(path.to_path_buf()))
        }
        Err(source) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv<R: io::Read>(reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<RawRecord>()
        .map(|row| row.map_err(LoadError::from))
        .collect()
}

// ---------------------------------------------------------------------------
// Validation: raw rows → typed records
// ---------------------------------------------------------------------------

/// Rows are numbered from 1 to match what a spreadsheet shows under the header.
fn validate(raw: Vec<RawRecord>) -> Result<Vec<Record>, LoadError> {
    if raw.is_empty() {
        return Err(LoadError::Empty);
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| -> Result<Record, LoadError> {
            let row = i + 1;
            let gender = Gender::parse(&r.gender).ok_or_else(|| LoadError::InvalidGender {
                row,
                value: r.gender.clone(),
            })?;
            let index = BmiCategory::from_index(r.index).ok_or(LoadError::InvalidIndex {
                row,
                value: r.index,
            })?;
            check_measurement(row, "Height", r.height)?;
            check_measurement(row, "Weight", r.weight)?;

            Ok(Record {
                gender,
                height: r.height,
                weight: r.weight,
                index,
            })
        })
        .collect()
}

fn check_measurement(row: usize, column: &'static str, value: f64) -> Result<(), LoadError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LoadError::InvalidMeasurement { row, column, value })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_csv_records() {
        let file = write_temp(
            ".csv",
            "Gender,Height,Weight,Index\nMale,174,96,4\nFemale,185,110,4\nMale,189, 87,2\n",
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].gender, Gender::Male);
        assert_eq!(ds.records[1].gender, Gender::Female);
        assert_eq!(ds.records[2].weight, 87.0);
        assert_eq!(ds.records[2].index, BmiCategory::Normal);
        assert_eq!(ds.source, file.path());
    }

    #[test]
    fn loads_json_records() {
        let file = write_temp(
            ".json",
            r#"[{"Gender":"Female","Height":150.5,"Weight":45,"Index":1}]"#,
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].height, 150.5);
        assert_eq!(ds.records[0].index, BmiCategory::Weak);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bmi_train.csv");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(ref p) if p == &path));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let file = write_temp(".csv", "Gender,Height,Weight,Index\nMale,174,96,4\nMale,170,70,6\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidIndex { row: 2, value: 6 }));
    }

    #[test]
    fn rejects_unknown_gender() {
        let file = write_temp(".csv", "Gender,Height,Weight,Index\nOther,174,96,4\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidGender { row: 1, .. }));
    }

    #[test]
    fn rejects_negative_measurement() {
        let file = write_temp(".csv", "Gender,Height,Weight,Index\nMale,174,-3,0\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidMeasurement { row: 1, column: "Weight", .. }
        ));
    }

    #[test]
    fn rejects_empty_file_and_unknown_extension() {
        let file = write_temp(".csv", "Gender,Height,Weight,Index\n");
        assert!(matches!(load_file(file.path()), Err(LoadError::Empty)));

        let file = write_temp(".parquet", "");
        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::UnsupportedExtension(ref e)) if e == "parquet"
        ));
    }

    #[test]
    fn malformed_number_is_a_csv_error() {
        let file = write_temp(".csv", "Gender,Height,Weight,Index\nMale,tall,96,4\n");
        assert!(matches!(load_file(file.path()), Err(LoadError::Csv(_))));
    }
}
