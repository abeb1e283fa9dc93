//! Scatter chart component.

use super::{format_axis_label, PlotView, ThemeColors};
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

/// Draw both classes as a two-color scatter chart.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, view: &PlotView, colors: &ThemeColors) {
    let datasets = vec![
        Dataset::default()
            .name(format!("label 0 ({})", view.class_zero.len()))
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.class_zero))
            .data(&view.class_zero),
        Dataset::default()
            .name(format!("other ({})", view.class_other.len()))
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.class_other))
            .data(&view.class_other),
    ];

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.text))
        .bounds(view.x_axis.bounds)
        .labels(axis_labels(view.x_axis.label_bounds()));

    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.text))
        .bounds(view.y_axis.bounds)
        .labels(axis_labels(view.y_axis.label_bounds()));

    let legend_position = view.show_legend.then_some(LegendPosition::TopRight);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", view.title))
                .title_style(Style::default().fg(colors.heading)),
        )
        .style(Style::default().bg(colors.bg))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend_position);

    f.render_widget(chart, area);
}

fn axis_labels([min, max]: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}
