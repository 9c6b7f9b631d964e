//! Plain-text chart renderer used by `--print`.

use super::events::{EventGroup, MarkerRecord};
use super::render::{Annotation, Axes, ChartRenderer, Series};
use crate::data::{month_short_name, EventId};
use crate::util::format_stat_value;
use std::fmt::Write as _;

/// Renders a scene as plain text.
#[derive(Debug, Default)]
pub struct TextRenderer {
    out: String,
}

impl TextRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text drawn so far.
    pub fn output(&self) -> &str {
        &self.out
    }
}

impl ChartRenderer for TextRenderer {
    fn clear(&mut self) {
        self.out.clear();
    }

    fn draw_axes(&mut self, axes: &Axes) {
        let _ = writeln!(
            self.out,
            "Sea level {}  [{} .. {}]",
            axes.year,
            format_stat_value(axes.y_domain.min),
            format_stat_value(axes.y_domain.max)
        );
    }

    fn draw_series(&mut self, series: &Series) {
        let values: Vec<String> = series
            .points
            .iter()
            .map(|&(x, y)| {
                let month = x.floor().max(0.0) as u32 + 1;
                format!("{} {}", month_short_name(month), format_stat_value(y))
            })
            .collect();
        let _ = writeln!(self.out, "{}: {}", series.kind.label(), values.join(", "));
    }

    fn draw_markers(
        &mut self,
        groups: &[EventGroup<'_>],
        _markers: &[MarkerRecord],
        active: Option<EventId>,
    ) {
        if groups.is_empty() {
            let _ = writeln!(self.out, "Storm events: none");
            return;
        }
        let _ = writeln!(self.out, "Storm events:");
        for group in groups {
            let _ = writeln!(self.out, "  {}", group.key);
            for event in &group.events {
                let flag = if active == Some(event.event_id) { " *" } else { "" };
                let _ = writeln!(
                    self.out,
                    "    {} {} {}{}",
                    event.begin_date, event.event_id, event.event_type, flag
                );
            }
        }
    }

    fn show_annotation(&mut self, annotation: Annotation<'_>) {
        let event = annotation.event;
        let _ = writeln!(
            self.out,
            "Annotation: {} on {}",
            event.event_type, event.begin_date
        );
        if let Some(ref text) = event.event_narrative {
            let _ = writeln!(self.out, "  {}", text);
        }
        if let Some(ref text) = event.episode_narrative {
            let _ = writeln!(self.out, "  {}", text);
        }
    }

    fn hide_annotation(&mut self) {}
}
