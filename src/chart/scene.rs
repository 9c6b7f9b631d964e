//! Per-year chart scene and the redraw routine.

use super::events::{group_events_for_year, layout_markers, month_position, EventGroup, MarkerRecord};
use super::pagination::ChartState;
use super::render::{Annotation, Axes, ChartRenderer, Series, SeriesKind};
use super::year_index::YDomain;
use crate::data::{ChartData, EventId, SeaLevelRecord, StormEvent};
use crate::util::ChartConfig;

/// Everything needed to draw one year.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    /// Year on display.
    pub year: i32,
    /// Sea level records of the year, source order.
    pub year_slice: Vec<&'a SeaLevelRecord>,
    /// Storm events of the year grouped by month.
    pub groups: Vec<EventGroup<'a>>,
    /// One marker per grouped event, in group order.
    pub markers: Vec<MarkerRecord>,
    /// Vertical domain across all years.
    pub y_domain: YDomain,
    /// Open annotation, if its event is on display.
    pub active: Option<EventId>,
}

impl<'a> Scene<'a> {
    /// Build the scene for the state's current year.
    pub fn build(data: &'a ChartData, state: &ChartState, config: &ChartConfig) -> Self {
        let index = data.year_index();
        let year = state.current_year;
        let y_domain = index.y_domain(config.y_padding_factor);
        let groups = group_events_for_year(&data.storms, year);
        let markers = layout_markers(&groups, y_domain, config.marker_offset, config.marker_spacing);
        let active = state
            .active_annotation
            .filter(|id| markers.iter().any(|m| m.event_id == *id));

        Self {
            year,
            year_slice: index.records_for_year(year).collect(),
            groups,
            markers,
            y_domain,
            active,
        }
    }

    /// Marker of an event on display.
    pub fn marker(&self, event_id: EventId) -> Option<MarkerRecord> {
        self.markers.iter().copied().find(|m| m.event_id == event_id)
    }

    /// Event on display with the given id.
    pub fn event(&self, event_id: EventId) -> Option<&'a StormEvent> {
        self.groups
            .iter()
            .flat_map(|g| g.events.iter().copied())
            .find(|e| e.event_id == event_id)
    }

    /// Points of one series for the year slice.
    pub fn series(&self, kind: SeriesKind) -> Series {
        let points = self
            .year_slice
            .iter()
            .map(|r| {
                let y = match kind {
                    SeriesKind::HighConfidence => r.high_confidence,
                    SeriesKind::LowConfidence => r.low_confidence,
                    SeriesKind::LinearTrend => r.linear_trend,
                    SeriesKind::MonthlyMean => r.monthly_mean,
                };
                (month_position(r.date), y)
            })
            .collect();
        Series { kind, points }
    }

    /// Clear the renderer and draw the whole scene.
    pub fn render<R: ChartRenderer>(&self, renderer: &mut R) {
        renderer.clear();
        renderer.draw_axes(&Axes {
            year: self.year,
            x_bounds: [0.0, 11.0],
            y_domain: self.y_domain,
        });

        for kind in [
            SeriesKind::HighConfidence,
            SeriesKind::LowConfidence,
            SeriesKind::LinearTrend,
            SeriesKind::MonthlyMean,
        ] {
            renderer.draw_series(&self.series(kind));
        }

        renderer.draw_markers(&self.groups, &self.markers, self.active);

        let annotation = self.active.and_then(|id| {
            Some(Annotation {
                event: self.event(id)?,
                marker: self.marker(id)?,
            })
        });
        match annotation {
            Some(annotation) => renderer.show_annotation(annotation),
            None => renderer.hide_annotation(),
        }
    }
}
