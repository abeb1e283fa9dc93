//! Labelplot - a terminal scatter-plot viewer for labeled 2D point datasets.
//!
//! A dataset file holds a header line followed by `<x> <y> <label>` records.
//! Points are split into two classes, label 0 and everything else, and shown
//! as a two-color scatter chart.
//!
//! # Example
//!
//! ```ignore
//! use labelplot::data::DataReader;
//! use labelplot::plot::{Renderer, TerminalRenderer};
//! use std::path::Path;
//!
//! let dataset = DataReader::read_file(Path::new("spiral_train.txt"))?;
//! TerminalRenderer::new("spiral_train.txt")
//!     .render(&dataset.class_zero, &dataset.class_other)?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod plot;
pub mod spiral;
pub mod ui;

pub use error::{PlotError, Result};

use data::DataReader;
use plot::Renderer;
use std::path::Path;

/// Load the dataset at `path` and hand both classes to `renderer` once.
///
/// Loading completes before the renderer is touched, so a malformed file
/// never reaches the display.
pub fn run<R: Renderer + ?Sized>(path: &Path, renderer: &mut R) -> Result<()> {
    let dataset = DataReader::read_file(path)?;
    renderer.render(&dataset.class_zero, &dataset.class_other)
}
