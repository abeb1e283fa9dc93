//! Writes a two-spiral train/test dataset pair for labelplot.

use anyhow::Result;
use clap::Parser;
use labelplot::spiral::{self, SpiralConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate_spirals")]
#[command(about = "Generate a labeled two-spiral dataset", long_about = None)]
struct Args {
    /// Output train file
    train: PathBuf,

    /// Output test file
    test: PathBuf,

    /// Points per spiral
    #[arg(long, default_value_t = 3000)]
    points: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = SpiralConfig {
        points_per_spiral: args.points,
        ..SpiralConfig::default()
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let split = spiral::generate(&config, &mut rng)?;
    spiral::write_dataset_file(&args.train, &split.train)?;
    spiral::write_dataset_file(&args.test, &split.test)?;

    println!(
        "Wrote {} train records to {} and {} test records to {}",
        split.train.len(),
        args.train.display(),
        split.test.len(),
        args.test.display()
    );
    Ok(())
}
