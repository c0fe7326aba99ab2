use std::collections::HashMap;

use arbor_helpers::{Dataset, Float, Value};

/// Occurrence count of every label in a dataset, in the order labels are first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCounts {
    counts: Vec<(Value, usize)>,
    total: usize,
}

impl LabelCounts {
    /// Tallies the label column of `dataset`, one count per record.
    pub fn tally(dataset: &Dataset) -> Self {
        let mut index: HashMap<&Value, usize> = HashMap::new();
        let mut counts: Vec<(Value, usize)> = Vec::new();
        if dataset.width() == 0 {
            return Self { counts, total: 0 };
        }
        for label in dataset.labels() {
            match index.get(label) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(label, counts.len());
                    counts.push((label.clone(), 1));
                }
            }
        }
        Self {
            counts,
            total: dataset.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, label: &Value) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, usize)> {
        self.counts.iter().map(|(l, c)| (l, *c))
    }

    /// The label with the highest count. Among tied labels the one seen first wins.
    pub fn most_common(&self) -> Option<&Value> {
        let mut best: Option<(&Value, usize)> = None;
        for (label, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }
        best.map(|(label, _)| label)
    }
}

/// Shannon entropy (base 2) of the label distribution of `dataset`.
///
/// The dataset must not be empty; the empty dataset has no distribution and
/// callers weigh empty partitions as zero instead of asking for their entropy.
pub fn entropy<F: Float>(dataset: &Dataset) -> F {
    debug_assert!(!dataset.is_empty(), "entropy of an empty dataset");
    entropy_of_counts(&LabelCounts::tally(dataset))
}

pub(crate) fn entropy_of_counts<F: Float>(counts: &LabelCounts) -> F {
    let total = match F::from_usize(counts.total()) {
        Some(n) if counts.total() > 0 => n,
        _ => return F::zero(),
    };
    let h: F = counts
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(_, count)| {
            let p = F::from_usize(count).unwrap_or_else(F::zero) / total;
            -(p * p.log2())
        })
        .sum();
    // A single class sums to -0.0; report it as plain zero.
    if h > F::zero() { h } else { F::zero() }
}

/// The majority label of `dataset`: the most frequent label, ties going to
/// the label that appears first in the dataset.
pub fn majority_vote(dataset: &Dataset) -> Option<Value> {
    LabelCounts::tally(dataset).most_common().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use arbor_helpers::row;

    fn labels_only(labels: &[&str]) -> Dataset {
        Dataset::from_rows(labels.iter().map(|l| row![*l])).unwrap()
    }

    #[test]
    fn test_tally_counts_each_record_once() {
        let ds = labels_only(&["yes", "no", "no"]);
        let counts = LabelCounts::tally(&ds);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.distinct(), 2);
        assert_eq!(counts.get(&Value::from("no")), 2);
        assert_eq!(counts.get(&Value::from("yes")), 1);
        assert_eq!(counts.get(&Value::from("maybe")), 0);
    }

    #[test]
    fn test_entropy_of_pure_set_is_zero() {
        let ds = labels_only(&["no", "no", "no"]);
        assert_eq!(entropy::<f64>(&ds), 0.0);
    }

    #[test]
    fn test_entropy_of_uniform_set_is_log2_of_classes() {
        let two = labels_only(&["a", "b", "a", "b"]);
        assert_abs_diff_eq!(entropy::<f64>(&two), 1.0, epsilon = 1e-12);

        let four = labels_only(&["a", "b", "c", "d"]);
        assert_abs_diff_eq!(entropy::<f64>(&four), 2.0, epsilon = 1e-12);

        let skewed = labels_only(&["a", "a", "a", "b"]);
        assert!(entropy::<f64>(&skewed) < 1.0);
        assert!(entropy::<f64>(&skewed) > 0.0);
    }

    #[test]
    fn test_entropy_of_fish_dataset() {
        let ds = Dataset::from_rows(vec![
            row![1, 1, "yes"],
            row![1, 1, "no"],
            row![1, 0, "no"],
            row![0, 1, "no"],
            row![0, 1, "no"],
        ])
        .unwrap();
        // -(0.2 log2 0.2 + 0.8 log2 0.8)
        assert_abs_diff_eq!(entropy::<f64>(&ds), 0.7219280948873623, epsilon = 1e-12);
        assert_abs_diff_eq!(entropy::<f32>(&ds), 0.72192806f32, epsilon = 1e-5);
    }

    #[test]
    fn test_majority_vote() {
        let ds = labels_only(&["yes", "no", "no"]);
        assert_eq!(majority_vote(&ds), Some(Value::from("no")));
    }

    #[test]
    fn test_majority_vote_tie_goes_to_first_seen() {
        let ds = labels_only(&["b", "a", "a", "b"]);
        assert_eq!(majority_vote(&ds), Some(Value::from("b")));

        let ds = labels_only(&["a", "b", "b", "a"]);
        assert_eq!(majority_vote(&ds), Some(Value::from("a")));
    }

    #[test]
    fn test_majority_vote_of_empty_is_none() {
        assert_eq!(majority_vote(&Dataset::empty(1)), None);
    }
}
