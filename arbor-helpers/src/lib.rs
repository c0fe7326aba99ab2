use ndarray::NdFloat;

use num_traits::FromPrimitive;

use std::iter::Sum;

// Include submodules
mod common;
mod value;

// Re-export types from submodules
pub use common::{Dataset, DatasetError};
pub use value::Value;

/// Float types usable for entropy and information-gain arithmetic.
pub trait Float: NdFloat + FromPrimitive + Default + Sum + std::marker::Unpin {}

impl Float for f32 {}

impl Float for f64 {}

/// Builds a record (`Vec<Value>`) from a list of atoms.
///
/// ```
/// use arbor_helpers::{row, Value};
///
/// let record = row![1, 0, "no"];
/// assert_eq!(record, vec![Value::Int(1), Value::Int(0), Value::from("no")]);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}
