use arbor_helpers::{Dataset, Float};

use crate::entropy::entropy;
use crate::split::{distinct_values, partition};

/// Gains closer than this are treated as equal, so floating-point noise
/// cannot break the lowest-index tie rule.
pub const GAIN_TOLERANCE: f64 = 1e-12;

/// Information gain of splitting `dataset` on feature column `col`.
///
/// `base` is the entropy of `dataset` itself, passed in so that scoring all
/// columns computes it once.
pub fn information_gain_from<F: Float>(dataset: &Dataset, col: usize, base: F) -> F {
    let n = F::from_usize(dataset.len()).unwrap_or_else(F::one);
    let remainder: F = distinct_values(dataset, col)
        .iter()
        .map(|value| partition(dataset, col, value))
        // empty partitions weigh nothing
        .filter(|subset| !subset.is_empty())
        .map(|subset| {
            let weight = F::from_usize(subset.len()).unwrap_or_else(F::zero) / n;
            weight * entropy::<F>(&subset)
        })
        .sum();
    base - remainder
}

/// Information gain of splitting a non-empty `dataset` on feature column `col`.
pub fn information_gain<F: Float>(dataset: &Dataset, col: usize) -> F {
    information_gain_from(dataset, col, entropy::<F>(dataset))
}

/// Index of the feature column with the highest information gain.
///
/// Columns are scanned in ascending order and a later column only replaces
/// the running best on a strictly greater gain, so ties go to the lowest
/// index. Returns `None` when the dataset is empty or has no feature columns.
pub fn best_feature<F: Float>(dataset: &Dataset) -> Option<(usize, F)> {
    if dataset.is_empty() || dataset.n_features() == 0 {
        return None;
    }
    let base = entropy::<F>(dataset);
    pick_best((0..dataset.n_features()).map(|col| information_gain_from(dataset, col, base)))
}

/// Index and value of the highest gain, scanning in order. A later gain must
/// exceed the running best by more than [`GAIN_TOLERANCE`] to replace it.
fn pick_best<F: Float>(gains: impl IntoIterator<Item = F>) -> Option<(usize, F)> {
    let tolerance = F::from_f64(GAIN_TOLERANCE).unwrap_or_else(F::epsilon);
    let mut best: Option<(usize, F)> = None;
    for (col, gain) in gains.into_iter().enumerate() {
        match best {
            Some((_, best_gain)) if gain <= best_gain + tolerance => {}
            _ => best = Some((col, gain)),
        }
    }
    best
}
