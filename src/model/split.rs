use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::ModelError;

/// Row indices of a train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n_samples` with a seeded RNG and cut off the last
/// `ceil(n_samples * test_size)` indices as the test partition.
///
/// # Errors
///
/// `test_size` must lie strictly between 0 and 1, and both partitions must
/// end up non-empty.
pub fn train_test_split(n_samples: usize, test_size: f64, seed: u64) -> Result<Split, ModelError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ModelError::InvalidTestSize(test_size));
    }

    let n_test = (n_samples as f64 * test_size).ceil() as usize;
    let n_train = n_samples.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(ModelError::EmptyPartition {
            samples: n_samples,
            n_train,
            n_test,
        });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test = indices.split_off(n_train);
    Ok(Split {
        train: indices,
        test,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn split_sizes_are_eighty_twenty() {
        let split = train_test_split(10, 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);

        // Fractional hold-out sizes round up: ceil(1.4) = 2, ceil(1.2) = 2.
        let split = train_test_split(7, 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.train.len(), 5);

        let split = train_test_split(6, 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.train.len(), 4);

        let split = train_test_split(2, 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 1);
        assert_eq!(split.train.len(), 1);
    }

    #[test]
    fn partitions_are_disjoint_and_complete() {
        let split = train_test_split(100, 0.2, 7).unwrap();
        let train: BTreeSet<_> = split.train.iter().copied().collect();
        let test: BTreeSet<_> = split.test.iter().copied().collect();
        assert!(train.is_disjoint(&test));
        let all: BTreeSet<_> = train.union(&test).copied().collect();
        assert_eq!(all, (0..100).collect());
    }

    #[test]
    fn same_seed_same_split() {
        let a = train_test_split(50, 0.2, 42).unwrap();
        let b = train_test_split(50, 0.2, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(matches!(
            train_test_split(10, 0.0, 42),
            Err(ModelError::InvalidTestSize(_))
        ));
        assert!(matches!(
            train_test_split(10, 1.0, 42),
            Err(ModelError::InvalidTestSize(_))
        ));
        assert!(matches!(
            train_test_split(1, 0.2, 42),
            Err(ModelError::EmptyPartition { n_train: 0, n_test: 1, .. })
        ));
        assert!(matches!(
            train_test_split(0, 0.2, 42),
            Err(ModelError::EmptyPartition { .. })
        ));
    }
}
