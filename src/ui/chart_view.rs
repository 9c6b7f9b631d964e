//! Terminal chart renderer.

use super::annotation::{draw_annotation, AnnotationCard};
use super::ThemeColors;
use crate::chart::{
    Annotation, Axes, ChartRenderer, EventGroup, MarkerRecord, Series, SeriesKind,
};
use crate::data::{EventId, MONTH_NAMES};
use crate::util::format_axis_label;
use unicode_width::UnicodeWidthStr;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

/// Collects one scene and draws it as a ratatui [`Chart`].
#[derive(Debug)]
pub struct TerminalRenderer<'c> {
    colors: &'c ThemeColors,
    focus: Option<EventId>,
    axes: Option<Axes>,
    series: Vec<Series>,
    markers: Vec<MarkerRecord>,
    active: Option<EventId>,
    annotation: Option<(MarkerRecord, AnnotationCard)>,
}

impl<'c> TerminalRenderer<'c> {
    /// Create a renderer highlighting the `focus` marker.
    pub fn new(colors: &'c ThemeColors, focus: Option<EventId>) -> Self {
        Self {
            colors,
            focus,
            axes: None,
            series: Vec::new(),
            markers: Vec::new(),
            active: None,
            annotation: None,
        }
    }

    /// Draw the collected scene into `area`.
    pub fn finish(self, f: &mut Frame<'_>, area: Rect) {
        let colors = self.colors;
        let Some(axes) = self.axes.as_ref() else {
            f.render_widget(chart_block(" Sea level ", colors), area);
            return;
        };

        // Ratatui cannot draw NaN, so gaps are simply dropped.
        let lines: Vec<(SeriesKind, Vec<(f64, f64)>)> = self
            .series
            .iter()
            .map(|s| {
                let points = s
                    .points
                    .iter()
                    .copied()
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .collect();
                (s.kind, points)
            })
            .collect();

        let (active_id, focus_id) = (self.active, self.focus);
        let plain = marker_points(&self.markers, |id| id != active_id && id != focus_id);
        let focused = marker_points(&self.markers, |id| id == focus_id && id != active_id);
        let active = marker_points(&self.markers, |id| id == active_id);

        let mut datasets = Vec::new();
        for (kind, points) in &lines {
            let (color, marker) = match kind {
                SeriesKind::HighConfidence | SeriesKind::LowConfidence => (colors.band, Marker::Dot),
                SeriesKind::LinearTrend => (colors.trend_line, Marker::Braille),
                SeriesKind::MonthlyMean => (colors.mean_line, Marker::Braille),
            };
            // The band is drawn as two edges but listed once in the legend.
            let name = match kind {
                SeriesKind::LowConfidence => None,
                SeriesKind::HighConfidence => Some("Confidence band"),
                other => Some(other.label()),
            };
            let mut dataset = Dataset::default()
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(points);
            if let Some(name) = name {
                dataset = dataset.name(name);
            }
            datasets.push(dataset);
        }

        datasets.push(
            Dataset::default()
                .name("Storm events")
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.marker))
                .data(&plain),
        );
        if !focused.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(colors.marker_focus))
                    .data(&focused),
            );
        }
        if !active.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(colors.marker_active))
                    .data(&active),
            );
        }

        let x_axis = Axis::default()
            .title(axes.year.to_string())
            .style(Style::default().fg(colors.text))
            .bounds(axes.x_bounds)
            .labels(MONTH_NAMES.to_vec());

        let domain = axes.y_domain;
        let y_labels = vec![
            format_axis_label(domain.min),
            format_axis_label((domain.min + domain.max) / 2.0),
            format_axis_label(domain.max),
        ];
        let gutter = label_gutter(&y_labels, MONTH_NAMES[0]);
        let y_axis = Axis::default()
            .title("MSL [m]")
            .style(Style::default().fg(colors.text))
            .bounds([domain.min, domain.max])
            .labels(y_labels);

        let chart = Chart::new(datasets)
            .block(chart_block(&format!(" Monthly mean sea level, {} ", axes.year), colors))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        f.render_widget(chart, area);

        if let Some((marker, card)) = self.annotation.as_ref() {
            let anchor = marker_column(plot_columns(area, gutter), axes, marker);
            draw_annotation(f, area, anchor, card, colors);
        }
    }
}

impl ChartRenderer for TerminalRenderer<'_> {
    fn clear(&mut self) {
        self.axes = None;
        self.series.clear();
        self.markers.clear();
        self.active = None;
        self.annotation = None;
    }

    fn draw_axes(&mut self, axes: &Axes) {
        self.axes = Some(axes.clone());
    }

    fn draw_series(&mut self, series: &Series) {
        self.series.push(series.clone());
    }

    fn draw_markers(
        &mut self,
        _groups: &[EventGroup<'_>],
        markers: &[MarkerRecord],
        active: Option<EventId>,
    ) {
        self.markers = markers.to_vec();
        self.active = active;
    }

    fn show_annotation(&mut self, annotation: Annotation<'_>) {
        self.annotation = Some((annotation.marker, AnnotationCard::from_event(annotation.event)));
    }

    fn hide_annotation(&mut self) {
        self.annotation = None;
    }
}

fn marker_points(
    markers: &[MarkerRecord],
    keep: impl Fn(Option<EventId>) -> bool,
) -> Vec<(f64, f64)> {
    markers
        .iter()
        .filter(|m| keep(Some(m.event_id)))
        .map(|m| (m.x, m.y))
        .collect()
}

fn chart_block<'a>(title: &str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title.to_string())
        .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

/// Widest label left of the y axis. The first x label hangs left of the
/// axis by all but one column.
fn label_gutter(y_labels: &[String], first_x_label: &str) -> u16 {
    let y_width = y_labels.iter().map(|l| l.width()).max().unwrap_or(0);
    y_width.max(first_x_label.width().saturating_sub(1)) as u16
}

/// First column and width of the plotting area: inside the border, past the
/// label gutter (at most a third of the inner width) and the y axis line.
fn plot_columns(area: Rect, gutter: u16) -> (u16, u16) {
    let inner_x = area.x.saturating_add(1);
    let inner_width = area.width.saturating_sub(2);
    let start = inner_x + gutter.min(inner_width / 3) + 1;
    let end = inner_x + inner_width;
    (start.min(end), end.saturating_sub(start))
}

/// Terminal column of a marker inside the plotting area.
fn marker_column((start, width): (u16, u16), axes: &Axes, marker: &MarkerRecord) -> u16 {
    let [x_min, x_max] = axes.x_bounds;
    let t = if x_max > x_min {
        ((marker.x - x_min) / (x_max - x_min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    start + (t * width.saturating_sub(1) as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::YDomain;

    fn axes() -> Axes {
        Axes {
            year: 1996,
            x_bounds: [0.0, 11.0],
            y_domain: YDomain { min: -0.3, max: 0.2 },
        }
    }

    fn marker(x: f64) -> MarkerRecord {
        MarkerRecord { event_id: 1, x, y: 0.0 }
    }

    #[test]
    fn gutter_is_the_widest_left_label() {
        let labels = vec!["-0.30".to_string(), "-0.05".to_string(), "0.20".to_string()];
        assert_eq!(label_gutter(&labels, "Jan"), 5);
        assert_eq!(label_gutter(&["1".to_string()], "Jan"), 2);
    }

    #[test]
    fn markers_map_into_the_plot_not_the_whole_area() {
        let area = Rect::new(0, 0, 52, 20);
        let plot = plot_columns(area, 5);
        assert_eq!(plot, (7, 44));

        assert_eq!(marker_column(plot, &axes(), &marker(0.0)), 7);
        assert_eq!(marker_column(plot, &axes(), &marker(11.0)), 50);
        assert!(marker_column(plot, &axes(), &marker(5.5)) > 7 + 20);
    }

    #[test]
    fn gutter_is_capped_on_narrow_charts() {
        let area = Rect::new(10, 0, 14, 10);
        let (start, width) = plot_columns(area, 8);
        assert_eq!(start, 11 + 4 + 1);
        assert_eq!(start + width, 23);
    }
}
