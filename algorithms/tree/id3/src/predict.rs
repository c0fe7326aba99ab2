use arbor_helpers::{Dataset, Value};
use tracing::trace;

use crate::error::Id3Error;
use crate::tree::DecisionTree;

impl DecisionTree {
    /// Predicts the label for a new instance.
    ///
    /// # Arguments
    ///
    /// * `feature_names`: The names of the instance's columns. The order may
    ///   differ from the training order; nodes are resolved by name.
    /// * `values`: The instance's feature values, parallel to `feature_names`.
    ///
    /// # Errors
    ///
    /// Returns `Id3Error::ArityMismatch` if names and values differ in length,
    /// `Id3Error::UnknownFeature` if a node tests a feature missing from
    /// `feature_names`, and `Id3Error::UnseenValue` if the instance carries a
    /// value the node never saw during training.
    pub fn predict<S: AsRef<str>>(
        &self,
        feature_names: &[S],
        values: &[Value],
    ) -> Result<&Value, Id3Error> {
        if feature_names.len() != values.len() {
            return Err(Id3Error::ArityMismatch {
                expected: feature_names.len(),
                found: values.len(),
            });
        }
        let mut current = self;
        loop {
            match current {
                DecisionTree::Leaf(label) => return Ok(label),
                DecisionTree::Node(node) => {
                    let index = feature_names
                        .iter()
                        .position(|name| name.as_ref() == node.feature())
                        .ok_or_else(|| Id3Error::UnknownFeature(node.feature().to_owned()))?;
                    let value = &values[index];
                    trace!(feature = node.feature(), value = %value, "descending");
                    current = node.child(value).ok_or_else(|| Id3Error::UnseenValue {
                        feature: node.feature().to_owned(),
                        value: value.clone(),
                    })?;
                }
            }
        }
    }

    /// Predicts every record of `dataset`, whose feature columns are named by
    /// `feature_names`. The label column is ignored.
    pub fn predict_dataset<S: AsRef<str>>(
        &self,
        feature_names: &[S],
        dataset: &Dataset,
    ) -> Result<Vec<Value>, Id3Error> {
        if feature_names.len() != dataset.n_features() {
            return Err(Id3Error::ArityMismatch {
                expected: dataset.n_features(),
                found: feature_names.len(),
            });
        }
        (0..dataset.len())
            .map(|i| {
                self.predict(feature_names, &dataset.features_of(i))
                    .cloned()
            })
            .collect()
    }

    /// Fraction of records in `dataset` whose label the tree predicts correctly.
    ///
    /// Fails like [`DecisionTree::predict_dataset`]; an empty dataset scores 0.
    pub fn accuracy<S: AsRef<str>>(
        &self,
        feature_names: &[S],
        dataset: &Dataset,
    ) -> Result<f64, Id3Error> {
        let predictions = self.predict_dataset(feature_names, dataset)?;
        if predictions.is_empty() {
            return Ok(0.0);
        }
        let correct = predictions
            .iter()
            .zip(dataset.labels())
            .filter(|(predicted, actual)| predicted == actual)
            .count();
        Ok(correct as f64 / predictions.len() as f64)
    }
}
