//! Storm event annotation popover.

use super::ThemeColors;
use crate::data::StormEvent;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Text of an open annotation, detached from the loaded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationCard {
    /// Event type.
    pub title: String,
    /// Begin date and event id.
    pub subtitle: String,
    /// Event narrative.
    pub event_narrative: Option<String>,
    /// Episode narrative.
    pub episode_narrative: Option<String>,
}

impl AnnotationCard {
    /// Build the card for an event.
    pub fn from_event(event: &StormEvent) -> Self {
        Self {
            title: event.event_type.clone(),
            subtitle: format!("{}  #{}", event.begin_date.format("%b %-d, %Y"), event.event_id),
            event_narrative: event.event_narrative.clone(),
            episode_narrative: event.episode_narrative.clone(),
        }
    }
}

/// Draw the popover next to the marker at column `anchor` inside `area`.
pub(super) fn draw_annotation(
    f: &mut Frame<'_>,
    area: Rect,
    anchor: u16,
    card: &AnnotationCard,
    colors: &ThemeColors,
) {
    let popup = popup_rect(area, anchor);
    if popup.width < 4 || popup.height < 3 {
        return;
    }

    let inner_width = popup.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            card.subtitle.clone(),
            Style::default().fg(colors.label),
        )),
        Line::from(""),
    ];
    let sections = [
        ("Event", card.event_narrative.as_deref()),
        ("Episode", card.episode_narrative.as_deref()),
    ];
    for (heading, text) in sections {
        let Some(text) = text else {
            continue;
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", heading),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(text.to_string()));
        lines.push(Line::from(""));
    }
    if card.event_narrative.is_none() && card.episode_narrative.is_none() {
        lines.push(Line::from("No narrative recorded"));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", truncate_to_width(&card.title, inner_width.saturating_sub(2))))
                .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.marker_active))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Popover placed beside the anchor column, on whichever side has more room.
fn popup_rect(area: Rect, anchor: u16) -> Rect {
    let width = (area.width / 2).min(60);
    let height = area.height.saturating_sub(2).min(16);
    let right_edge = area.x + area.width;

    let x = if anchor + 2 + width <= right_edge {
        anchor + 2
    } else {
        anchor.saturating_sub(width + 1).max(area.x)
    };
    Rect {
        x,
        y: area.y + 1,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_flips_to_the_left_near_the_right_edge() {
        let area = Rect::new(0, 0, 100, 30);

        let left = popup_rect(area, 10);
        assert_eq!(left.x, 12);
        assert_eq!(left.width, 50);

        let right = popup_rect(area, 90);
        assert_eq!(right.x, 39);
        assert!(right.x + right.width <= area.x + area.width);
    }
}
