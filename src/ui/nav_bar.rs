//! Pagination buttons and year label.

use super::ThemeColors;
use crate::chart::{ButtonStates, NavAction};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the navigation controls with the year label between prev and next.
pub(super) fn draw_nav_bar(
    f: &mut Frame<'_>,
    area: Rect,
    buttons: &ButtonStates,
    year_label: &str,
    colors: &ThemeColors,
) {
    let mut spans = Vec::new();
    for action in NavAction::ALL {
        if action == NavAction::Next {
            spans.push(Span::styled(
                format!("  {}  ", year_label),
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(button(action, buttons.is_disabled(action), colors));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        );

    f.render_widget(paragraph, area);
}

fn button(action: NavAction, disabled: bool, colors: &ThemeColors) -> Span<'static> {
    let style = if disabled {
        Style::default()
            .fg(colors.disabled)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(colors.label).add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {} ]", action.label()), style)
}
