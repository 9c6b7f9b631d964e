//! Color themes for the UI.

use crate::app::Theme;
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
    /// Label text color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Monthly mean line.
    pub mean_line: Color,
    /// Linear trend line.
    pub trend_line: Color,
    /// Confidence band edges.
    pub band: Color,
    /// Storm event marker.
    pub marker: Color,
    /// Marker under the focus cursor.
    pub marker_focus: Color,
    /// Marker whose annotation is open.
    pub marker_active: Color,
    /// Disabled button text.
    pub disabled: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                mean_line: Color::Rgb(131, 165, 152),
                trend_line: Color::Rgb(211, 134, 155),
                band: Color::Rgb(124, 111, 100),
                marker: Color::Rgb(251, 73, 52),
                marker_focus: Color::Rgb(250, 189, 47),
                marker_active: Color::Rgb(142, 192, 124),
                disabled: Color::Rgb(102, 92, 84),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                mean_line: Color::Rgb(7, 102, 120),
                trend_line: Color::Rgb(143, 63, 113),
                band: Color::Rgb(168, 153, 132),
                marker: Color::Rgb(157, 0, 6),
                marker_focus: Color::Rgb(181, 118, 20),
                marker_active: Color::Rgb(66, 123, 88),
                disabled: Color::Rgb(189, 174, 147),
            },
        }
    }
}
