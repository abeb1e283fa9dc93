//! Rendering of the two point classes.
//!
//! A [`Renderer`] receives both classes once and is responsible for showing
//! them. [`TerminalRenderer`] is the interactive surface used by the binary;
//! [`HeadlessRenderer`] only records what it was given and is meant for
//! automated tests.

mod layout;
mod terminal;

pub use layout::{axis_ranges, AxisRange, PlotLayoutConfig};
pub use terminal::TerminalRenderer;

use crate::data::PointSet;
use crate::error::Result;

/// Something that can display the label-0 and other-label point classes.
pub trait Renderer {
    /// Display both classes.
    ///
    /// Interactive implementations block until the user dismisses the
    /// display.
    fn render(&mut self, class_zero: &PointSet, class_other: &PointSet) -> Result<()>;
}

/// Renderer that captures its input without opening any surface.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    /// Every (label 0, other) pair passed to [`Renderer::render`], in call order.
    pub captured: Vec<(PointSet, PointSet)>,
}

impl HeadlessRenderer {
    /// Create a renderer with nothing captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `render` was called.
    pub fn render_count(&self) -> usize {
        self.captured.len()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, class_zero: &PointSet, class_other: &PointSet) -> Result<()> {
        tracing::debug!(
            "Headless render of {} + {} points",
            class_zero.len(),
            class_other.len()
        );
        self.captured.push((class_zero.clone(), class_other.clone()));
        Ok(())
    }
}
