//! Example demonstrating the error conditions of the ID3 decision tree.
//!
//! Each failure is reported as an `Id3Error` variant; nothing is silently
//! substituted with a default label.

use arbor_helpers::{Dataset, row};
use id3::{Id3Error, fit, persistence, sample};

fn main() {
    println!("ID3 Decision Tree Error Handling Examples");
    println!("=========================================");

    let (dataset, names) = sample::fish_dataset();

    // Example 1: feature names that do not match the columns
    println!("\n1. Fitting with too few feature names:");
    match fit(&dataset, &["no surfacing"]) {
        Ok(_) => println!("   Tree built"),
        Err(e @ Id3Error::ArityMismatch { .. }) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 2: nothing to learn from
    println!("\n2. Fitting an empty dataset:");
    match fit(&Dataset::empty(3), &names) {
        Ok(_) => println!("   Tree built"),
        Err(e @ Id3Error::EmptyDataset) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    let tree = match fit(&dataset, &names) {
        Ok(tree) => tree,
        Err(e) => {
            println!("   ✗ Failed to build the tree: {}", e);
            return;
        }
    };
    println!("\nLearned tree:\n{}", tree);

    // Example 3: the query lacks a feature the tree tests
    println!("3. Predicting without the \"no surfacing\" column:");
    match tree.predict(&["flippers"], &row![1]) {
        Ok(label) => println!("   Predicted label: {}", label),
        Err(e @ Id3Error::UnknownFeature(_)) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 4: a value never seen during training
    println!("\n4. Predicting with flippers = 2:");
    match tree.predict(&["no surfacing", "flippers"], &row![1, 2]) {
        Ok(label) => println!("   Predicted label: {}", label),
        Err(e @ Id3Error::UnseenValue { .. }) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 5: persistence failures
    println!("\n5. Loading trees that are missing or damaged:");
    match persistence::load("does-not-exist.json") {
        Ok(_) => println!("   Tree loaded"),
        Err(e @ Id3Error::NotFound(_)) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }
    let saved = match persistence::to_string(&tree) {
        Ok(saved) => saved,
        Err(e) => {
            println!("   ✗ Failed to serialize the tree: {}", e);
            return;
        }
    };
    match persistence::from_str(&saved[..saved.len() - 3]) {
        Ok(_) => println!("   Tree loaded"),
        Err(e @ Id3Error::CorruptTreeData(_)) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 6: propagation with `?`
    println!("\n6. Error propagation in functions:");

    fn classify() -> Result<String, Id3Error> {
        let (dataset, names) = sample::fish_dataset();
        let tree = fit(&dataset, &names)?;
        let label = tree.predict(&names, &row![1, 0])?;
        Ok(label.to_string())
    }

    match classify() {
        Ok(result) => println!("   ✓ Classification result: {}", result),
        Err(e) => println!("   ✗ Classification failed: {}", e),
    }

    println!("\nAll examples completed successfully!");
}
