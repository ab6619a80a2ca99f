use crate::config::ModelConfig;
use crate::data::model::{BmiCategory, Dataset};

use super::ModelError;
use super::knn::{FittedKnn, KNearestNeighbors};
use super::split::train_test_split;

// ---------------------------------------------------------------------------
// BmiClassifier – kNN over (height, weight) fitted on the training split
// ---------------------------------------------------------------------------

/// Maps a (height, weight) pair to one of the six BMI categories.
///
/// Gender is not a feature. The held-out test rows are only counted.
#[derive(Debug, Clone)]
pub struct BmiClassifier {
    knn: FittedKnn<BmiCategory>,
    test_len: usize,
}

impl BmiClassifier {
    /// Split `dataset` with the configured seed and fit on the training rows.
    pub fn fit(dataset: &Dataset, config: &ModelConfig) -> Result<Self, ModelError> {
        if dataset.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        let split = train_test_split(dataset.len(), config.test_size, config.seed)?;

        let (points, labels): (Vec<_>, Vec<_>) = split
            .train
            .iter()
            .map(|&i| {
                let r = &dataset.records[i];
                (r.features(), r.index)
            })
            .unzip();

        let knn = KNearestNeighbors::new(config.k).fit(&points, &labels)?;

        log::info!(
            "fitted {}-NN on {} rows ({} held out, seed {})",
            config.k,
            points.len(),
            split.test.len(),
            config.seed
        );

        Ok(Self {
            knn,
            test_len: split.test.len(),
        })
    }

    /// Predict the category for a height in cm and a weight in kg.
    pub fn predict(&self, height: f64, weight: f64) -> BmiCategory {
        let category = self.knn.predict([height, weight]);
        log::debug!("predict({height}, {weight}) -> {category}");
        category
    }

    pub fn k(&self) -> usize {
        self.knn.k()
    }

    pub fn train_len(&self) -> usize {
        self.knn.len()
    }

    pub fn test_len(&self) -> usize {
        self.test_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Gender, Record};

    fn rec(height: f64, weight: f64, index: i64) -> Record {
        Record {
            gender: if index % 2 == 0 { Gender::Male } else { Gender::Female },
            height,
            weight,
            index: BmiCategory::from_index(index).unwrap(),
        }
    }

    /// Three loose clusters: slim tall people, a normal cluster around
    /// (170, 70), and heavy short people.
    fn dataset() -> Dataset {
        let mut records = Vec::new();
        for i in 0..10 {
            let d = i as f64 * 0.5;
            records.push(rec(185.0 + d, 50.0 + d, 0));
            records.push(rec(170.0 + d, 70.0 - d, 2));
            records.push(rec(150.0 + d, 140.0 + d, 5));
        }
        Dataset::new(records, "clusters.csv")
    }

    #[test]
    fn normal_cluster_predicts_normal() {
        let model = BmiClassifier::fit(&dataset(), &ModelConfig::default()).unwrap();
        assert_eq!(model.predict(170.0, 70.0), BmiCategory::Normal);
        assert_eq!(model.predict(170.0, 70.0).label(), "Normal");
        assert_eq!(model.predict(152.0, 141.0), BmiCategory::ExtremelyObese);
        assert_eq!(model.predict(187.0, 51.0), BmiCategory::VeryWeak);
    }

    #[test]
    fn split_is_eighty_twenty() {
        let model = BmiClassifier::fit(&dataset(), &ModelConfig::default()).unwrap();
        assert_eq!(model.train_len(), 24);
        assert_eq!(model.test_len(), 6);
        assert_eq!(model.k(), 3);
    }

    #[test]
    fn predictions_are_deterministic() {
        let config = ModelConfig::default();
        let a = BmiClassifier::fit(&dataset(), &config).unwrap();
        let b = BmiClassifier::fit(&dataset(), &config).unwrap();
        for (h, w) in [(167.0, 49.0), (0.0, 0.0), (200.0, 200.0), (160.0, 100.0)] {
            assert_eq!(a.predict(h, w), a.predict(h, w));
            assert_eq!(a.predict(h, w), b.predict(h, w));
        }
    }

    #[test]
    fn boundary_queries_yield_a_known_category() {
        let model = BmiClassifier::fit(&dataset(), &ModelConfig::default()).unwrap();
        for (h, w) in [(0.0, 0.0), (200.0, 0.0), (0.0, 200.0), (200.0, 200.0)] {
            let cat = model.predict(h, w);
            assert!(cat.index() <= 5);
            assert!(BmiCategory::ALL.contains(&cat));
        }
    }

    #[test]
    fn empty_dataset_fails_before_splitting() {
        let ds = Dataset::new(Vec::new(), "empty.csv");
        assert!(matches!(
            BmiClassifier::fit(&ds, &ModelConfig::default()),
            Err(ModelError::EmptyTrainingSet)
        ));
    }

    #[test]
    fn two_rows_fit_with_one_neighbour() {
        // ceil(2 * 0.2) = 1 held out, leaving one training row.
        let ds = Dataset::new(vec![rec(170.0, 70.0, 2), rec(171.0, 71.0, 2)], "tiny.csv");
        let config = ModelConfig { k: 1, ..ModelConfig::default() };
        let model = BmiClassifier::fit(&ds, &config).unwrap();
        assert_eq!(model.train_len(), 1);
        assert_eq!(model.test_len(), 1);
        assert_eq!(model.predict(0.0, 0.0), BmiCategory::Normal);
    }

    #[test]
    fn too_small_dataset_fails_to_fit() {
        let ds = Dataset::new(vec![rec(170.0, 70.0, 2), rec(171.0, 71.0, 2)], "tiny.csv");
        assert!(matches!(
            BmiClassifier::fit(&ds, &ModelConfig::default()),
            Err(ModelError::TooFewSamples { k: 3, samples: 1 })
        ));
        let ds = Dataset::new(vec![rec(170.0, 70.0, 2)], "one.csv");
        assert!(matches!(
            BmiClassifier::fit(&ds, &ModelConfig::default()),
            Err(ModelError::EmptyPartition { n_train: 0, n_test: 1, .. })
        ));

        // 5 rows: 4 train, 1 test, but k = 5 needs five training rows.
        let ds = Dataset::new(vec![rec(170.0, 70.0, 2); 5], "small.csv");
        let config = ModelConfig { k: 5, ..ModelConfig::default() };
        assert!(matches!(
            BmiClassifier::fit(&ds, &config),
            Err(ModelError::TooFewSamples { k: 5, samples: 4 })
        ));
    }
}
