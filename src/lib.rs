//! Decision tree induction for categorical data.
//!
//! Re-exports the data model from `arbor-helpers` and the ID3 engine from
//! `id3`, and reads datasets from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub mod logging;

pub use arbor_helpers::{Dataset, DatasetError, Float, Value, row};
pub use id3::{DecisionTree, Id3Error, Node, fit, persistence, sample};

/// Errors surfaced by the `arbor` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Tree(#[from] Id3Error),
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
}

/// On-disk dataset layout: feature names plus records whose last value is the label.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetFile {
    pub features: Vec<String>,
    pub records: Vec<Vec<Value>>,
}

impl DatasetFile {
    pub fn into_parts(self) -> Result<(Dataset, Vec<String>), DatasetError> {
        let dataset = Dataset::from_rows(self.records)?;
        Ok((dataset, self.features))
    }
}

/// Reads a JSON dataset file of the form
/// `{"features": ["a", "b"], "records": [[1, "x", "yes"], ...]}`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<(Dataset, Vec<String>), AppError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: DatasetFile = serde_json::from_str(&text).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into_parts()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fish.json");
        fs::write(
            &path,
            r#"{"features": ["no surfacing", "flippers"],
                "records": [[1, 1, "yes"], [1, 1, "no"], [1, 0, "no"], [0, 1, "no"], [0, 1, "no"]]}"#,
        )
        .unwrap();
        let (dataset, names) = load_dataset(&path).unwrap();
        let (expected, expected_names) = sample::fish_dataset();
        assert_eq!(dataset, expected);
        assert_eq!(names, expected_names);
    }

    #[test]
    fn test_ragged_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"features": ["a"], "records": [[1, "x"], [2]]}"#).unwrap();
        assert!(matches!(
            load_dataset(&path),
            Err(AppError::Dataset(DatasetError::Ragged { row: 1, .. }))
        ));
    }

    #[test]
    fn test_unparsable_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{").unwrap();
        assert!(matches!(load_dataset(&path), Err(AppError::Parse { .. })));
        assert!(matches!(
            load_dataset(dir.path().join("missing.json")),
            Err(AppError::Read { .. })
        ));
    }

    #[test]
    fn test_fit_from_file_then_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.json");
        fs::write(
            &data,
            r#"{"features": ["outlook", "windy"],
                "records": [["sunny", 0, "no"], ["sunny", 1, "no"], ["rain", 0, "yes"], ["rain", 1, "no"]]}"#,
        )
        .unwrap();
        let (dataset, names) = load_dataset(&data).unwrap();
        let tree = fit(&dataset, &names).unwrap();
        let out = dir.path().join("tree.json");
        persistence::save(&tree, &out).unwrap();
        let restored = persistence::load(&out).unwrap();
        assert_eq!(restored, tree);
        assert_eq!(
            restored.predict(&["windy", "outlook"], &row![0, "rain"]).unwrap(),
            &Value::from("yes")
        );
    }
}
