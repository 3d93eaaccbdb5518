use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use name_classifier::{
    evaluate_predictor, extract_features, learn_predictor_with, output_error_analysis,
    output_weights, read_examples, Error, SgdSolver,
};

/// Trains a person-name classifier and reports its error.
#[derive(Parser, Debug)]
#[clap(name = "name-classifier", version)]
struct Args {
    /// Training examples, one `<label> <left> <entity...> <right>` per line.
    #[clap(long, default_value = "names.train")]
    train: PathBuf,

    /// Development examples, evaluated after every epoch.
    #[clap(long, default_value = "names.dev")]
    dev: PathBuf,

    /// Test examples, evaluated once after training.
    #[clap(long)]
    test: Option<PathBuf>,

    /// Number of passes over the training set.
    #[clap(long, default_value = "10")]
    epochs: usize,

    /// Learning rate.
    #[clap(long, default_value = "0.1")]
    step_size: f64,

    /// Visits training examples in a random order seeded by this value.
    #[clap(long)]
    shuffle_seed: Option<u64>,

    /// A file to which the learned weights are written.
    #[clap(long, default_value = "weights")]
    weights_out: PathBuf,

    /// A file to which the per-example analysis of the dev set is written.
    #[clap(long, default_value = "error-analysis")]
    error_analysis_out: PathBuf,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let train = read_examples(&args.train)?;
    let dev = read_examples(&args.dev)?;

    let mut solver = SgdSolver::new(args.epochs, args.step_size);
    if let Some(seed) = args.shuffle_seed {
        solver = solver.shuffle(seed);
    }
    let model = learn_predictor_with(&solver, &train, &dev, extract_features)?;
    output_weights(&model, &args.weights_out)?;
    output_error_analysis(&dev, extract_features, &model, &args.error_analysis_out)?;

    if let Some(path) = &args.test {
        let test = read_examples(path)?;
        let test_error = evaluate_predictor(&test, |ex| {
            extract_features(ex).map(|phi| model.predict(&phi))
        })?;
        println!("test error = {}", test_error);
    }

    Ok(())
}
