use std::collections::BTreeMap;

use super::ModelError;

/// A point on the (height, weight) feature plane.
pub type Point = [f64; 2];

/// K-Nearest Neighbors classifier over a two-dimensional feature plane.
///
/// Holds only the hyper-parameter; [`KNearestNeighbors::fit`] returns a
/// [`FittedKnn`] that owns the training set and can always predict.
///
/// ```text
/// let model = KNearestNeighbors::new(3).fit(&points, &labels)?;
/// let label = model.predict([170.0, 70.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KNearestNeighbors {
    /// Number of neighbors to use
    k: usize,
}

impl KNearestNeighbors {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Store the training data.
    ///
    /// # Errors
    ///
    /// Fails on an empty training set, mismatched lengths, `k == 0` or
    /// `k` larger than the number of samples.
    pub fn fit<L: Copy + Ord>(self, points: &[Point], labels: &[L]) -> Result<FittedKnn<L>, ModelError> {
        let Some(&first_label) = labels.first() else {
            return Err(ModelError::EmptyTrainingSet);
        };
        if points.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                points: points.len(),
                labels: labels.len(),
            });
        }
        if self.k == 0 {
            return Err(ModelError::ZeroNeighbors);
        }
        if self.k > points.len() {
            return Err(ModelError::TooFewSamples {
                k: self.k,
                samples: points.len(),
            });
        }

        Ok(FittedKnn {
            k: self.k,
            points: points.to_vec(),
            labels: labels.to_vec(),
            first_label,
        })
    }
}

/// A kNN model with a non-empty training set and `1 <= k <= len()`.
///
/// Lazy learner: `predict` scans every stored sample. Distances are Euclidean
/// on the raw coordinates. Neighbours at equal distance are taken in training
/// order; a tied vote resolves to the smallest label.
#[derive(Debug, Clone)]
pub struct FittedKnn<L> {
    k: usize,
    points: Vec<Point>,
    labels: Vec<L>,
    /// Label of the first training sample; the vote result for an empty
    /// neighbour list, which the invariants above rule out.
    first_label: L,
}

impl<L: Copy + Ord> FittedKnn<L> {
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of stored training samples, always at least `k`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The `k` nearest training samples as `(distance, label)`, closest first.
    pub fn neighbors(&self, query: Point) -> Vec<(f64, L)> {
        let mut distances: Vec<(f64, L)> = self
            .points
            .iter()
            .zip(&self.labels)
            .map(|(p, &label)| (euclidean(p, &query), label))
            .collect();

        // Stable: equal distances keep training order.
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));
        distances.truncate(self.k);
        distances
    }

    /// Majority label among the `k` nearest neighbours.
    pub fn predict(&self, query: Point) -> L {
        majority_vote(&self.neighbors(query)).unwrap_or(self.first_label)
    }
}

fn euclidean(a: &Point, b: &Point) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Most frequent label; ties resolve to the smallest label.
fn majority_vote<L: Copy + Ord>(neighbors: &[(f64, L)]) -> Option<L> {
    let mut counts: BTreeMap<L, usize> = BTreeMap::new();
    for &(_, label) in neighbors {
        *counts.entry(label).or_insert(0) += 1;
    }

    // BTreeMap iterates in ascending label order, so keeping the first
    // strictly greater count prefers the smallest label on ties.
    let mut best: Option<(L, usize)> = None;
    for (label, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}
