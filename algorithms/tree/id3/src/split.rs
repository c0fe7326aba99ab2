use std::collections::HashSet;

use arbor_helpers::{Dataset, Value};
use ndarray::Axis;

/// The distinct values of feature column `col`, in the order they first appear.
pub fn distinct_values(dataset: &Dataset, col: usize) -> Vec<Value> {
    let mut seen = HashSet::new();
    dataset
        .feature(col)
        .into_iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// Selects the records whose feature `col` equals `value` and drops that column.
///
/// The label stays in the last position and surviving records keep their
/// relative order. The input is left untouched; the result may be empty.
///
/// # Panics
///
/// Panics if `col` is not a feature column of `dataset`.
pub fn partition(dataset: &Dataset, col: usize, value: &Value) -> Dataset {
    let rows: Vec<usize> = dataset
        .feature(col)
        .into_iter()
        .enumerate()
        .filter(|(_, v)| *v == value)
        .map(|(i, _)| i)
        .collect();
    let kept: Vec<usize> = (0..dataset.width()).filter(|&c| c != col).collect();
    if rows.is_empty() {
        return Dataset::empty(kept.len());
    }
    let projected = dataset
        .records()
        .select(Axis(0), &rows)
        .select(Axis(1), &kept);
    Dataset::from_array(projected).expect("projection keeps the label column")
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_helpers::row;

    fn fish() -> Dataset {
        Dataset::from_rows(vec![
            row![1, 1, "yes"],
            row![1, 1, "no"],
            row![1, 0, "no"],
            row![0, 1, "no"],
            row![0, 1, "no"],
        ])
        .unwrap()
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let ds = fish();
        assert_eq!(distinct_values(&ds, 0), row![1, 0]);
        assert_eq!(distinct_values(&ds, 1), row![1, 0]);
    }

    #[test]
    fn test_partition_removes_column_and_keeps_order() {
        let ds = fish();
        let left = partition(&ds, 0, &Value::Int(1));
        let expected =
            Dataset::from_rows(vec![row![1, "yes"], row![1, "no"], row![0, "no"]]).unwrap();
        assert_eq!(left, expected);

        let right = partition(&ds, 1, &Value::Int(1));
        let expected = Dataset::from_rows(vec![
            row![1, "yes"],
            row![1, "no"],
            row![0, "no"],
            row![0, "no"],
        ])
        .unwrap();
        assert_eq!(right, expected);
    }

    #[test]
    fn test_partition_does_not_mutate_input() {
        let ds = fish();
        let before = ds.clone();
        let _ = partition(&ds, 1, &Value::Int(0));
        assert_eq!(ds, before);
    }

    #[test]
    fn test_partition_without_matches_is_empty() {
        let ds = fish();
        let none = partition(&ds, 0, &Value::Int(7));
        assert!(none.is_empty());
        assert_eq!(none.width(), 2);
    }

    #[test]
    fn test_partitions_cover_every_record() {
        let ds = fish();
        for col in 0..ds.n_features() {
            let total: usize = distinct_values(&ds, col)
                .iter()
                .map(|v| {
                    let part = partition(&ds, col, v);
                    assert!(part.len() <= ds.len());
                    assert_eq!(part.width(), ds.width() - 1);
                    part.len()
                })
                .sum();
            assert_eq!(total, ds.len());
        }
    }
}
