use std::path::PathBuf;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Dataset read at startup when nothing else is given.
pub const DEFAULT_DATASET: &str = "bmi_train.csv";

/// Classifier hyper-parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Number of neighbours voting on a prediction.
    pub k: usize,
    /// Fraction of rows held out of the training set.
    pub test_size: f64,
    /// Seed for the train/test shuffle.
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            k: 3,
            test_size: 0.2,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub model: ModelConfig,
    /// Rows shown in the dataset preview table.
    pub head_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            model: ModelConfig::default(),
            head_rows: 5,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `BMI_DATASET` / `BMI_K` / `BMI_SEED` and then
    /// by the first positional argument (dataset path).
    pub fn from_env() -> Self {
        let vars = |key: &str| std::env::var(key).ok();
        Self::from_sources(std::env::args().nth(1), vars)
    }

    /// Build from an optional CLI path and a variable lookup. Unparsable
    /// values are logged and ignored.
    pub fn from_sources<F>(cli_path: Option<String>, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = var("BMI_DATASET") {
            config.dataset_path = PathBuf::from(path);
        }
        if let Some(k) = parse_var(&var, "BMI_K") {
            config.model.k = k;
        }
        if let Some(seed) = parse_var(&var, "BMI_SEED") {
            config.model.seed = seed;
        }
        if let Some(path) = cli_path {
            config.dataset_path = PathBuf::from(path);
        }
        config
    }
}

fn parse_var<T, F>(var: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_training_setup() {
        let c = AppConfig::from_sources(None, lookup(&[]));
        assert_eq!(c.dataset_path, PathBuf::from("bmi_train.csv"));
        assert_eq!(c.model.k, 3);
        assert_eq!(c.model.test_size, 0.2);
        assert_eq!(c.model.seed, 42);
        assert_eq!(c.head_rows, 5);
    }

    #[test]
    fn env_overrides_and_cli_path_wins() {
        let vars = lookup(&[("BMI_DATASET", "env.csv"), ("BMI_K", "5"), ("BMI_SEED", "7")]);
        let c = AppConfig::from_sources(Some("cli.csv".into()), vars);
        assert_eq!(c.dataset_path, PathBuf::from("cli.csv"));
        assert_eq!(c.model.k, 5);
        assert_eq!(c.model.seed, 7);

        let c = AppConfig::from_sources(None, lookup(&[("BMI_DATASET", "env.csv")]));
        assert_eq!(c.dataset_path, PathBuf::from("env.csv"));
    }

    #[test]
    fn invalid_values_are_ignored() {
        let c = AppConfig::from_sources(None, lookup(&[("BMI_K", "three"), ("BMI_SEED", "-1")]));
        assert_eq!(c.model, ModelConfig::default());
    }
}
