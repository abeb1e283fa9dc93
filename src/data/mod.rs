//! Dataset reading and representation.
//!
//! This module handles reading labeled point files and splitting their
//! records into the two classes that get plotted.

mod dataset;
mod point_set;
mod reader;
mod record;

pub use dataset::LabeledDataset;
pub use point_set::PointSet;
pub use reader::DataReader;
pub use record::Record;
