use std::collections::{BTreeMap, HashSet};

use arbor_helpers::Dataset;
use tracing::{debug, trace};

use crate::entropy::majority_vote;
use crate::error::Id3Error;
use crate::select::best_feature;
use crate::split::{distinct_values, partition};
use crate::tree::{DecisionTree, Node};

/// Induces a decision tree from `dataset` with the ID3 algorithm.
///
/// # Arguments
///
/// * `dataset`: The labelled records; the last column of each record is its class.
/// * `feature_names`: One name per feature column, in column order. Nodes of
///   the tree are named after these, and prediction resolves them by name.
///
/// # Errors
///
/// Returns `Id3Error::EmptyDataset` if `dataset` has no records,
/// `Id3Error::ArityMismatch` if the number of names differs from the number
/// of feature columns, and `Id3Error::DuplicateFeature` if a name repeats.
pub fn fit<S: AsRef<str>>(dataset: &Dataset, feature_names: &[S]) -> Result<DecisionTree, Id3Error> {
    if dataset.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    if feature_names.len() != dataset.n_features() {
        return Err(Id3Error::ArityMismatch {
            expected: dataset.n_features(),
            found: feature_names.len(),
        });
    }
    let mut seen = HashSet::new();
    for name in feature_names {
        if !seen.insert(name.as_ref()) {
            return Err(Id3Error::DuplicateFeature(name.as_ref().to_owned()));
        }
    }

    let names: Vec<String> = feature_names.iter().map(|s| s.as_ref().to_owned()).collect();
    debug!(
        records = dataset.len(),
        features = names.len(),
        "fitting ID3 decision tree"
    );
    Ok(grow(dataset, &names, 0))
}

/// Recursive step of [`fit`]. `dataset` is non-empty and `names` matches its
/// feature columns.
fn grow(dataset: &Dataset, names: &[String], depth: usize) -> DecisionTree {
    let labels = dataset.labels();
    let first = &labels[0];
    if labels.iter().all(|label| label == first) {
        trace!(depth, label = %first, "pure subset");
        return DecisionTree::Leaf(first.clone());
    }

    let Some((col, gain)) = best_feature::<f64>(dataset) else {
        // no features left: fall back to the majority label
        let label = majority_vote(dataset).unwrap_or_else(|| first.clone());
        trace!(depth, label = %label, "features exhausted, majority vote");
        return DecisionTree::Leaf(label);
    };

    let feature = &names[col];
    debug!(depth, feature = %feature, gain, "splitting");

    // each branch gets its own copy of the remaining names
    let remaining: Vec<String> = names
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != col)
        .map(|(_, name)| name.clone())
        .collect();

    let children: BTreeMap<_, _> = distinct_values(dataset, col)
        .into_iter()
        .map(|value| {
            let subset = partition(dataset, col, &value);
            let subtree = grow(&subset, &remaining, depth + 1);
            (value, subtree)
        })
        .collect();

    DecisionTree::Node(Node::new(feature.clone(), children))
}
