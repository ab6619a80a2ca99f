use std::path::Path;

use crate::config::AppConfig;
use crate::data::loader::{self, LoadError};
use crate::data::model::{BmiCategory, Dataset};
use crate::model::ModelError;
use crate::model::classifier::BmiClassifier;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// The two mutually exclusive pages selected in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    BodyMassIndex,
    DataScience,
}

impl View {
    pub const ALL: [View; 2] = [View::BodyMassIndex, View::DataScience];

    pub fn label(self) -> &'static str {
        match self {
            View::BodyMassIndex => "Body Mass Index",
            View::DataScience => "DataScience",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Numeric input range shared by the height and weight fields.
pub const INPUT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=200.0;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("training the classifier: {0}")]
    Model(#[from] ModelError),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded dataset (None if the last load at startup failed).
    pub dataset: Option<Dataset>,

    /// Classifier fitted on `dataset`; rebuilt only when the dataset changes.
    pub classifier: Option<BmiClassifier>,

    pub view: View,

    /// Height input in cm.
    pub height: f64,

    /// Weight input in kg.
    pub weight: f64,

    /// Result of the last "Predict" press.
    pub prediction: Option<BmiCategory>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Empty state; nothing is loaded until [`AppState::load_dataset`].
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            dataset: None,
            classifier: None,
            view: View::default(),
            height: 167.0,
            weight: 49.0,
            prediction: None,
            status_message: None,
        }
    }

    /// State with the configured dataset loaded and the model fitted.
    /// A failed load is recorded in `status_message`, never propagated.
    pub fn startup(config: AppConfig) -> Self {
        let mut state = Self::new(config);
        let path = state.config.dataset_path.clone();
        state.load_dataset(&path);
        state
    }

    /// Load `path`, fit a classifier on it and make both current.
    ///
    /// On failure the error is logged and shown once in the status bar, and the
    /// previous dataset and model (if any) stay active.
    pub fn load_dataset(&mut self, path: &Path) -> bool {
        match self.try_load(path) {
            Ok((dataset, classifier)) => {
                log::info!(
                    "Loaded {} records from {}",
                    dataset.len(),
                    dataset.source.display()
                );
                self.set_dataset(dataset, classifier);
                true
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
                false
            }
        }
    }

    fn try_load(&self, path: &Path) -> Result<(Dataset, BmiClassifier), StateError> {
        let dataset = loader::load_file(path)?;
        let classifier = BmiClassifier::fit(&dataset, &self.config.model)?;
        Ok((dataset, classifier))
    }

    /// Make a loaded dataset and its fitted model current.
    pub fn set_dataset(&mut self, dataset: Dataset, classifier: BmiClassifier) {
        self.config.dataset_path = dataset.source.clone();
        self.dataset = Some(dataset);
        self.classifier = Some(classifier);
        self.prediction = None;
        self.status_message = None;
    }

    /// Classify the current inputs. `None` without a fitted model.
    pub fn predict(&mut self) -> Option<BmiCategory> {
        let height = self.height.clamp(*INPUT_RANGE.start(), *INPUT_RANGE.end());
        let weight = self.weight.clamp(*INPUT_RANGE.start(), *INPUT_RANGE.end());
        self.prediction = self
            .classifier
            .as_ref()
            .map(|model| model.predict(height, weight));
        self.prediction
    }
}
