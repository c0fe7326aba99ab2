//! ID3 decision trees over categorical data.
//!
//! [`fit`] induces a tree by repeatedly splitting on the feature with the
//! highest information gain; [`DecisionTree::predict`] walks it for a new
//! instance; [`persistence`] saves and restores trees.
//!
//! ```
//! use arbor_helpers::{row, Value};
//! use id3::{fit, sample};
//!
//! let (dataset, names) = sample::fish_dataset();
//! let tree = fit(&dataset, &names).unwrap();
//! assert_eq!(tree.height(), 2);
//!
//! let label = tree.predict(&["flippers", "no surfacing"], &row![1, 1]).unwrap();
//! assert_eq!(label, &Value::from("yes"));
//! ```

mod builder;
mod entropy;
mod error;
mod predict;
mod select;
mod split;
mod tree;

pub mod persistence;
pub mod sample;

pub use builder::fit;
pub use entropy::{LabelCounts, entropy, majority_vote};
pub use error::Id3Error;
pub use persistence::{load, save};
pub use select::{GAIN_TOLERANCE, best_feature, information_gain};
pub use split::{distinct_values, partition};
pub use tree::{DecisionTree, Node};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_thread_safe() {
        assert_send_sync::<DecisionTree>();
        assert_send_sync::<arbor_helpers::Dataset>();
        assert_send_sync::<Id3Error>();
    }
}
