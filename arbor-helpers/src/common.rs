use ndarray::{Array2, ArrayView1, ArrayView2, Axis, ShapeError};
use thiserror::Error;

use crate::Value;

/// Errors raised while assembling a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// A record's length differs from the first record's length.
    #[error("record {row} has {found} values, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Records must at least carry a label.
    #[error("records have no label column")]
    MissingLabel,
    #[error("invalid dataset shape: {0}")]
    Shape(#[from] ShapeError),
}

/// A labelled table of categorical records.
///
/// Each row is one record: the feature values followed by the label in the
/// last column. All rows share the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Array2<Value>,
}

impl Dataset {
    /// Builds a dataset from row-major records.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Ragged` if the records differ in length and
    /// `DatasetError::MissingLabel` if the records are zero-width.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Value>,
    {
        let mut flat = Vec::new();
        let mut width = None;
        let mut n_rows = 0;
        for (row, record) in rows.into_iter().enumerate() {
            let before = flat.len();
            flat.extend(record);
            let found = flat.len() - before;
            match width {
                None if found == 0 => return Err(DatasetError::MissingLabel),
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(DatasetError::Ragged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            n_rows += 1;
        }
        let records = Array2::from_shape_vec((n_rows, width.unwrap_or(0)), flat)?;
        Ok(Self { records })
    }

    /// Wraps an existing table. The last column is taken as the label.
    pub fn from_array(records: Array2<Value>) -> Result<Self, DatasetError> {
        if records.ncols() == 0 && records.nrows() > 0 {
            return Err(DatasetError::MissingLabel);
        }
        Ok(Self { records })
    }

    /// A dataset with no records and the given row width.
    pub fn empty(width: usize) -> Self {
        Self {
            records: Array2::from_shape_vec((0, width), Vec::new())
                .expect("zero rows fit any width"),
        }
    }

    pub fn len(&self) -> usize {
        self.records.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.records.nrows() == 0
    }

    /// Row width, label included.
    pub fn width(&self) -> usize {
        self.records.ncols()
    }

    /// Number of feature columns (the width minus the label).
    pub fn n_features(&self) -> usize {
        self.width().saturating_sub(1)
    }

    pub fn records(&self) -> ArrayView2<'_, Value> {
        self.records.view()
    }

    pub fn record(&self, index: usize) -> ArrayView1<'_, Value> {
        self.records.row(index)
    }

    /// The feature values of one record, label excluded.
    pub fn features_of(&self, index: usize) -> Vec<Value> {
        self.records
            .row(index)
            .iter()
            .take(self.n_features())
            .cloned()
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Value>> {
        self.records.axis_iter(Axis(0))
    }

    /// The label column.
    ///
    /// # Panics
    ///
    /// Panics if the dataset is zero-width.
    pub fn labels(&self) -> ArrayView1<'_, Value> {
        self.records.column(self.width() - 1)
    }

    /// A single feature column.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not a feature column.
    pub fn feature(&self, col: usize) -> ArrayView1<'_, Value> {
        assert!(
            col < self.n_features(),
            "feature column {} out of range for {} features",
            col,
            self.n_features()
        );
        self.records.column(col)
    }
}
