//! Small datasets for demonstrations and tests.

use arbor_helpers::{Dataset, Value, row};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// The marine animal dataset: can it survive without surfacing, does it have
/// flippers, and is it a fish.
pub fn fish_dataset() -> (Dataset, Vec<String>) {
    let records = vec![
        row![1, 1, "yes"],
        row![1, 1, "no"],
        row![1, 0, "no"],
        row![0, 1, "no"],
        row![0, 1, "no"],
    ];
    let dataset = Dataset::from_rows(records).expect("fish records share one width");
    (dataset, vec!["no surfacing".to_owned(), "flippers".to_owned()])
}

/// A random categorical dataset, reproducible from `seed`.
///
/// Feature values are integers in `0..cardinality` and labels are the texts
/// `"c0"` to `"c{classes-1}"`.
///
/// # Panics
///
/// Panics if `cardinality` or `classes` is zero.
pub fn random_dataset(
    records: usize,
    features: usize,
    cardinality: u32,
    classes: u32,
    seed: u64,
) -> Dataset {
    assert!(cardinality > 0 && classes > 0, "cardinality and classes must be positive");
    if records == 0 {
        return Dataset::empty(features + 1);
    }
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let rows: Vec<Vec<Value>> = (0..records)
        .map(|_| {
            let mut record: Vec<Value> = (0..features)
                .map(|_| Value::from(rng.random_range(0..cardinality)))
                .collect();
            record.push(Value::from(format!("c{}", rng.random_range(0..classes))));
            record
        })
        .collect();
    Dataset::from_rows(rows).expect("random records share one width")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fish_dataset_shape() {
        let (ds, names) = fish_dataset();
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.n_features(), names.len());
    }

    #[test]
    fn test_random_dataset_is_reproducible() {
        let a = random_dataset(20, 3, 4, 2, 42);
        let b = random_dataset(20, 3, 4, 2, 42);
        let c = random_dataset(20, 3, 4, 2, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(random_dataset(0, 3, 4, 2, 42).is_empty());
        assert_eq!(a.len(), 20);
        assert_eq!(a.width(), 4);
        for value in a.feature(0) {
            let v = value.as_int().unwrap();
            assert!((0..4).contains(&v));
        }
    }
}
