// Fits an ID3 tree, prints it, classifies a few instances and round-trips it
// through a file.
//
// Usage: arbor [DATASET_JSON] [TREE_OUT]
use std::path::PathBuf;
use std::process::ExitCode;

use arbor::{AppError, Value, fit, load_dataset, logging, persistence, row, sample};
use tracing::info;

fn run() -> Result<(), AppError> {
    logging::init()?;

    let mut args = std::env::args().skip(1);
    let (dataset, names) = match args.next() {
        Some(path) => load_dataset(path)?,
        None => sample::fish_dataset(),
    };
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("arbor-tree.json"));

    info!(records = dataset.len(), features = names.len(), "training");
    let tree = fit(&dataset, &names)?;
    println!("{}", tree);
    println!("height = {}, leaves = {}", tree.height(), tree.leaf_count());
    println!(
        "training accuracy = {:.3}",
        tree.accuracy(&names, &dataset)?
    );

    if names == ["no surfacing", "flippers"] {
        let query = ["flippers", "no surfacing"];
        for values in [row![1, 1], row![0, 1]] {
            let label: &Value = tree.predict(&query, &values)?;
            println!("flippers = {}, no surfacing = {} => {}", values[0], values[1], label);
        }
    }

    persistence::save(&tree, &out)?;
    let restored = persistence::load(&out)?;
    println!(
        "restored from {} ({})",
        out.display(),
        if restored == tree { "identical" } else { "different" }
    );
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
