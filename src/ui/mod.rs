//! User interface rendering.

mod chart;
mod formatters;
mod status_bar;
mod theme;

use crate::data::PointSet;
use crate::plot::{axis_ranges, AxisRange, PlotLayoutConfig};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{format_axis_label, format_count};
pub use theme::ThemeColors;

/// Everything needed to draw one frame of the scatter view.
#[derive(Debug, Clone)]
pub struct PlotView {
    /// Chart title.
    pub title: String,
    /// Label-0 points as (x, y) pairs, in plotted units.
    pub class_zero: Vec<(f64, f64)>,
    /// Other-label points as (x, y) pairs, in plotted units.
    pub class_other: Vec<(f64, f64)>,
    /// X axis range.
    pub x_axis: AxisRange,
    /// Y axis range.
    pub y_axis: AxisRange,
    /// Whether to draw the class legend.
    pub show_legend: bool,
}

impl PlotView {
    /// Prepare a view of both classes.
    pub fn new(
        title: &str,
        class_zero: &PointSet,
        class_other: &PointSet,
        layout: &PlotLayoutConfig,
    ) -> Self {
        let (x_axis, y_axis) =
            axis_ranges([class_zero, class_other], layout.axis_padding_factor);
        let to_plot = |set: &PointSet| -> Vec<(f64, f64)> {
            set.iter()
                .map(|(x, y)| (x_axis.to_plot(x), y_axis.to_plot(y)))
                .collect()
        };

        Self {
            title: title.to_string(),
            class_zero: to_plot(class_zero),
            class_other: to_plot(class_other),
            x_axis,
            y_axis,
            show_legend: layout.show_legend,
        }
    }
}

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, view: &PlotView, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Chart
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    chart::draw_chart(f, chunks[0], view, colors);
    status_bar::draw_status(f, chunks[1], view, colors);
}
