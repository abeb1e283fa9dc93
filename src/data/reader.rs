//! Labeled point file reader.

use super::{LabeledDataset, Record};
use crate::error::{PlotError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for whitespace-delimited `<x> <y> <label>` files.
///
/// The first line of the input is a header and is skipped whatever it
/// contains.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a dataset file.
    pub fn read_file(path: &Path) -> Result<LabeledDataset> {
        let file = File::open(path).map_err(|e| PlotError::file_open(path, e))?;
        let dataset = Self::read_from(BufReader::new(file))?;

        tracing::info!(
            "Loaded {} points from {} ({} label 0, {} other)",
            dataset.len(),
            path.display(),
            dataset.class_zero.len(),
            dataset.class_other.len()
        );

        Ok(dataset)
    }

    /// Read a dataset from any buffered source.
    pub fn read_from<R: BufRead>(reader: R) -> Result<LabeledDataset> {
        let mut dataset = LabeledDataset::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if index == 0 {
                tracing::debug!("Skipping header: {:?}", line);
                continue;
            }
            dataset.insert(Record::parse(&line, index + 1)?);
        }

        Ok(dataset)
    }
}
