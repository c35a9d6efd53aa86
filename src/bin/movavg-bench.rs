use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use movavg::batch::Strategy;
use movavg::dataset;
use movavg::harness::{
    measure_csv_stream, run_comparison, timed, verify_agreement, Comparison, CSV_STREAM_LABEL,
    DEFAULT_TOLERANCE,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compare moving-average engines on one dataset
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// CSV dataset with a header row and a single numeric column
    #[clap(long, env = "MOVAVG_INPUT")]
    input: Option<PathBuf>,

    /// Length of the synthetic series used when no input is given
    #[clap(long, env = "MOVAVG_GENERATE", default_value = "10000000")]
    generate: usize,

    /// Write the synthetic series to this path and load it back
    #[clap(long, conflicts_with = "input")]
    write_dataset: Option<PathBuf>,

    /// Window length; repeat to run several
    #[clap(long = "period", default_values_t = vec![7, 5000])]
    periods: Vec<usize>,

    /// Engine to run; repeat to pick several, the first is the reference
    #[clap(long = "strategy")]
    strategies: Vec<Strategy>,

    /// Largest accepted deviation from the reference, relative above 1
    #[clap(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Also average the CSV file in a single streaming pass
    #[clap(long)]
    stream_input: bool,
}

impl Cli {
    fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }

    fn dataset_path(&self) -> Option<&Path> {
        self.input.as_deref().or(self.write_dataset.as_deref())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(cli: &Cli) -> Result<Vec<f64>> {
    if let Some(path) = &cli.write_dataset {
        let values = dataset::generate(cli.generate);
        dataset::write_csv(path, &values)
            .with_context(|| format!("writing dataset to {}", path.display()))?;
    }

    match cli.dataset_path() {
        Some(path) => {
            let (values, load_time) = timed(|| dataset::read_csv(path));
            let values = values.with_context(|| format!("loading {}", path.display()))?;
            println!("csv load time   : {:.9} s", load_time.as_secs_f64());
            info!(path = %path.display(), len = values.len(), "dataset loaded");
            Ok(values)
        }
        None => {
            let (values, generate_time) = timed(|| dataset::generate(cli.generate));
            println!("generation time : {:.9} s", generate_time.as_secs_f64());
            info!(len = values.len(), "dataset generated");
            Ok(values)
        }
    }
}

fn report(comparison: &Comparison) {
    for measurement in &comparison.measurements {
        println!("{}\n", measurement);
    }
    for agreement in &comparison.agreements {
        println!(
            "{} agrees with the reference: max |diff| {:e}, sum |diff| {:e}",
            agreement.label, agreement.max_abs_diff, agreement.sum_abs_diff
        );
    }
    println!();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if cli.stream_input && cli.dataset_path().is_none() {
        bail!("--stream-input needs --input or --write-dataset");
    }

    let values = load(&cli)?;
    let strategies = cli.strategies();

    for &period in &cli.periods {
        let comparison = run_comparison(&values, period, &strategies, cli.tolerance)
            .with_context(|| format!("comparing engines with window length {}", period))?;
        report(&comparison);

        if let Some(path) = cli.dataset_path().filter(|_| cli.stream_input) {
            let (averages, measurement) = measure_csv_stream(path, period)
                .with_context(|| format!("streaming {}", path.display()))?;
            verify_agreement(
                CSV_STREAM_LABEL,
                &comparison.reference,
                &averages,
                cli.tolerance,
            )?;
            println!("{}\n", measurement);
        }
    }

    Ok(())
}
