use std::path::PathBuf;

use arbor_helpers::{DatasetError, Value};
use thiserror::Error;

/// Errors that can occur when fitting, querying or persisting an ID3 tree.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// Cannot induce a tree from a dataset without records.
    #[error("cannot build a decision tree from an empty dataset")]
    EmptyDataset,
    /// The number of feature names does not match the number of feature columns.
    #[error("expected {expected} feature names, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    /// Two feature columns share a name, so lookups by name would be ambiguous.
    #[error("feature name {0:?} appears more than once")]
    DuplicateFeature(String),
    /// The tree tests a feature the query does not provide.
    #[error("query does not provide feature {0:?}")]
    UnknownFeature(String),
    /// The query holds a value never observed for this feature during training.
    #[error("value {value} of feature {feature:?} was not seen during training")]
    UnseenValue { feature: String, value: Value },
    /// Serialized tree data is malformed, truncated or structurally invalid.
    #[error("corrupt tree data: {0}")]
    CorruptTreeData(String),
    /// The persistence source does not exist.
    #[error("no tree found at {0}")]
    NotFound(PathBuf),
    /// Serializing a tree to a writer failed.
    #[error("failed to write tree data: {0}")]
    Write(#[source] serde_json::Error),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
