//! Status bar UI component.

use super::{format_count, PlotView, ThemeColors};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

const KEYMAP_TEXT: &str = "q/Esc: close";

/// Draw the point counts on the left and the dismissal keys on the right.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, view: &PlotView, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(KEYMAP_TEXT.len() as u16 + 1),
        ])
        .split(area);

    let total = view.class_zero.len() + view.class_other.len();
    let status = format!(
        " {} points: {} label 0, {} other",
        format_count(total),
        format_count(view.class_zero.len()),
        format_count(view.class_other.len())
    );
    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);

    f.render_widget(Paragraph::new(status).style(style), chunks[0]);
    f.render_widget(
        Paragraph::new(KEYMAP_TEXT)
            .style(style)
            .alignment(Alignment::Right),
        chunks[1],
    );
}
