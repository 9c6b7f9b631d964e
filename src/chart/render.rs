//! Rendering collaborator interface.
//!
//! The scene drives a [`ChartRenderer`] through a full clear-and-redraw.
//! The terminal UI and the plain-text printer both implement it.

use super::events::{EventGroup, MarkerRecord};
use super::year_index::YDomain;
use crate::data::{EventId, StormEvent};

/// Axes of one year's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    /// Year on display.
    pub year: i32,
    /// Horizontal bounds (zero-based months).
    pub x_bounds: [f64; 2],
    /// Vertical domain.
    pub y_domain: YDomain,
}

/// Which line of the chart a series is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Upper edge of the confidence band.
    HighConfidence,
    /// Lower edge of the confidence band.
    LowConfidence,
    /// Linear trend.
    LinearTrend,
    /// Monthly mean sea level.
    MonthlyMean,
}

impl SeriesKind {
    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::HighConfidence => "High confidence",
            SeriesKind::LowConfidence => "Low confidence",
            SeriesKind::LinearTrend => "Linear trend",
            SeriesKind::MonthlyMean => "Monthly mean",
        }
    }
}

/// A line series. Points may contain NaN and renderers must skip them.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Which line this is.
    pub kind: SeriesKind,
    /// `(x, y)` points in data units.
    pub points: Vec<(f64, f64)>,
}

/// An open annotation.
#[derive(Debug, Clone, Copy)]
pub struct Annotation<'a> {
    /// Annotated event.
    pub event: &'a StormEvent,
    /// Marker the annotation is attached to.
    pub marker: MarkerRecord,
}

/// Drawing capability the chart needs from a backend.
pub trait ChartRenderer {
    /// Drop everything drawn so far.
    fn clear(&mut self);

    /// Draw the axes.
    fn draw_axes(&mut self, axes: &Axes);

    /// Draw one line series.
    fn draw_series(&mut self, series: &Series);

    /// Draw the event markers, grouped as in `groups`.
    fn draw_markers(
        &mut self,
        groups: &[EventGroup<'_>],
        markers: &[MarkerRecord],
        active: Option<EventId>,
    );

    /// Show the annotation popover for an event.
    fn show_annotation(&mut self, annotation: Annotation<'_>);

    /// Hide the annotation popover.
    fn hide_annotation(&mut self);
}
