//! Classifier layer: seeded split, k-nearest-neighbor model, BMI wrapper.
//!
//! ```text
//!   Dataset ──► split ──► train rows ──► knn::fit
//!                               │
//!   (height, weight) ───────────┴──────► classifier::predict ──► BmiCategory
//! ```

pub mod classifier;
pub mod knn;
pub mod split;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot fit with zero samples")]
    EmptyTrainingSet,

    #[error("{points} feature rows but {labels} labels")]
    LengthMismatch { points: usize, labels: usize },

    #[error("k must be at least 1")]
    ZeroNeighbors,

    #[error("k = {k} exceeds the {samples} training samples")]
    TooFewSamples { k: usize, samples: usize },

    #[error("test size must be between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    #[error("splitting {samples} samples leaves an empty partition (train={n_train}, test={n_test})")]
    EmptyPartition {
        samples: usize,
        n_train: usize,
        n_test: usize,
    },
}
