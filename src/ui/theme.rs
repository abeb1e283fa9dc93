//! Colors for the UI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Marker color for label-0 points.
    pub class_zero: Color,
    /// Marker color for every other label.
    pub class_other: Color,
}

impl Default for ThemeColors {
    /// Gruvbox dark, with red and blue point markers.
    fn default() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),
            text: Color::Rgb(235, 219, 178),
            heading: Color::Rgb(251, 184, 108),
            border: Color::Rgb(102, 92, 84),
            status_fg: Color::Rgb(235, 219, 178),
            status_bg: Color::Rgb(60, 56, 54),
            class_zero: Color::Rgb(251, 73, 52),
            class_other: Color::Rgb(69, 133, 136),
        }
    }
}
