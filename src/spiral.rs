//! Two-spiral dataset generation.
//!
//! Produces two interleaved noisy spirals labeled 0 and 1, shuffles them and
//! splits them into a train and a test set written in the format
//! [`DataReader`](crate::data::DataReader) reads.

use crate::data::Record;
use crate::error::{PlotError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parameters of the generated spirals.
#[derive(Debug, Clone)]
pub struct SpiralConfig {
    /// Points sampled along each of the two spirals.
    pub points_per_spiral: usize,
    /// Lower bound of the sampled radius (inclusive).
    pub min_radius: f64,
    /// Upper bound of the sampled radius (exclusive).
    pub max_radius: f64,
    /// Standard deviation of the Gaussian noise added to each coordinate.
    pub noise_std_dev: f64,
    /// Fraction of all points that go to the train split.
    pub train_fraction: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            points_per_spiral: 3000,
            min_radius: 1.0,
            max_radius: 15.0,
            noise_std_dev: 0.02,
            train_fraction: 0.8,
        }
    }
}

impl SpiralConfig {
    /// Check that the parameters describe a valid distribution and split.
    pub fn validate(&self) -> Result<()> {
        self.total_points()?;
        if !self.min_radius.is_finite()
            || !self.max_radius.is_finite()
            || !(self.max_radius - self.min_radius).is_finite()
        {
            return Err(PlotError::invalid_config(format!(
                "radius range [{}, {}) must be finite",
                self.min_radius, self.max_radius
            )));
        }
        if self.min_radius >= self.max_radius {
            return Err(PlotError::invalid_config(format!(
                "radius range [{}, {}) is empty",
                self.min_radius, self.max_radius
            )));
        }
        if self.noise_std_dev <= 0.0 || !self.noise_std_dev.is_finite() {
            return Err(PlotError::invalid_config(format!(
                "noise standard deviation must be positive, got {}",
                self.noise_std_dev
            )));
        }
        if !(0.0..=1.0).contains(&self.train_fraction) {
            return Err(PlotError::invalid_config(format!(
                "train fraction must be within [0, 1], got {}",
                self.train_fraction
            )));
        }
        Ok(())
    }

    /// Number of records across both spirals.
    pub fn total_points(&self) -> Result<usize> {
        self.points_per_spiral.checked_mul(2).ok_or_else(|| {
            PlotError::invalid_config(format!(
                "{} points per spiral is too many",
                self.points_per_spiral
            ))
        })
    }

    /// Number of records in the train split.
    pub fn train_size(&self) -> usize {
        let total = self.points_per_spiral.saturating_mul(2);
        ((total as f64 * self.train_fraction).ceil() as usize).min(total)
    }
}

/// Shuffled records divided into train and test sets.
#[derive(Debug, Clone)]
pub struct SpiralSplit {
    /// Train records.
    pub train: Vec<Record>,
    /// Test records.
    pub test: Vec<Record>,
}

/// Generate both spirals and split them.
pub fn generate<R: Rng>(config: &SpiralConfig, rng: &mut R) -> Result<SpiralSplit> {
    config.validate()?;
    let total = config.total_points()?;
    let noise = Normal::new(0.0, config.noise_std_dev)
        .map_err(|e| PlotError::invalid_config(e.to_string()))?;

    let mut records = Vec::with_capacity(total);
    for (label, sign) in [(0, 1.0), (1, -1.0)] {
        for _ in 0..config.points_per_spiral {
            let r: f64 = rng.random_range(config.min_radius..config.max_radius);
            let x = sign * r * r.cos() + noise.sample(rng);
            let y = sign * r * r.sin() + noise.sample(rng);
            records.push(Record::new(x, y, label));
        }
    }

    records.shuffle(rng);
    let test = records.split_off(config.train_size());

    tracing::debug!(
        "Generated {} train and {} test records",
        records.len(),
        test.len()
    );

    Ok(SpiralSplit {
        train: records,
        test,
    })
}

/// Write records under a `"<count> 2 1"` header line.
pub fn write_records<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    writeln!(writer, "{} 2 1", records.len())?;
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `records` into it.
pub fn write_dataset_file(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|e| PlotError::file_open(path, e))?;
    write_records(BufWriter::new(file), records)?;
    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
