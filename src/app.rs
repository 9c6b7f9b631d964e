//! Application state and logic.

use std::path::PathBuf;

use crate::chart::{ButtonStates, ChartState, MarkerRecord, NavAction, Scene};
use crate::data::{ChartData, DataReader, EventId, StormEvent};
use crate::util::{self, ChartConfig};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Loaded data together with the chart cursor.
#[derive(Debug)]
pub struct LoadedChart {
    /// Both tables.
    pub data: ChartData,
    /// Year cursor and open annotation.
    pub state: ChartState,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Sea level CSV path.
    pub sea_level_path: PathBuf,
    /// Storm events CSV path.
    pub storm_path: PathBuf,
    /// Chart configuration.
    pub config: ChartConfig,
    /// Chart, once both tables loaded.
    pub chart: Option<LoadedChart>,
    /// Pagination button flags, refreshed after every transition.
    pub buttons: ButtonStates,
    /// Index of the focused marker in the current scene.
    pub marker_focus: Option<usize>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create the application and load both tables.
    pub fn new(sea_level_path: PathBuf, storm_path: PathBuf, config: ChartConfig) -> Self {
        let mut app = Self {
            sea_level_path,
            storm_path,
            config,
            chart: None,
            buttons: ButtonStates::all_disabled(),
            marker_focus: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        };
        app.load();
        app
    }

    /// Create the application around data that is already loaded.
    pub fn with_data(data: ChartData, config: ChartConfig) -> Self {
        let sea_level_path = data.sea_level_path.clone().unwrap_or_default();
        let storm_path = data.storm_path.clone().unwrap_or_default();
        let mut app = Self {
            sea_level_path,
            storm_path,
            config,
            chart: None,
            buttons: ButtonStates::all_disabled(),
            marker_focus: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        };
        app.install(data);
        app
    }

    /// Load both tables. On failure the error is logged and the chart stays empty.
    pub fn load(&mut self) {
        match DataReader::load(&self.sea_level_path, &self.storm_path, &self.config) {
            Ok(data) => self.install(data),
            Err(e) => {
                tracing::error!("Error loading chart data: {}", e);
                self.chart = None;
                self.marker_focus = None;
                self.buttons = ButtonStates::all_disabled();
                self.status.clear();
            },
        }
    }

    fn install(&mut self, data: ChartData) {
        let state = ChartState::new(data.bounds(), self.config.initial_year);
        self.status = format!(
            "{} months, {} storm events ({}-{})",
            data.sea_level.len(),
            data.storms.len(),
            state.min_year,
            state.max_year
        );
        tracing::info!("Chart ready at {}", state.current_year);
        self.chart = Some(LoadedChart { data, state });
        self.marker_focus = None;
        self.sync_buttons();
    }

    /// Current chart state.
    pub fn state(&self) -> Option<ChartState> {
        self.chart.as_ref().map(|c| c.state)
    }

    /// Scene for the year on display.
    pub fn scene(&self) -> Option<Scene<'_>> {
        self.chart
            .as_ref()
            .map(|c| Scene::build(&c.data, &c.state, &self.config))
    }

    /// Press a pagination button.
    pub fn navigate(&mut self, action: NavAction) {
        if self.buttons.is_disabled(action) {
            return;
        }
        let Some(chart) = self.chart.as_mut() else {
            return;
        };

        let before = chart.state.current_year;
        chart.state = chart.state.apply(action);
        if chart.state.current_year != before {
            tracing::debug!("{:?}: {} -> {}", action, before, chart.state.current_year);
            self.marker_focus = None;
        }
        self.sync_buttons();
    }

    fn sync_buttons(&mut self) {
        self.buttons = match self.state() {
            Some(state) => ButtonStates::for_state(&state),
            None => ButtonStates::all_disabled(),
        };
    }

    /// Year label text.
    pub fn year_label(&self) -> String {
        self.state()
            .map(|s| s.current_year.to_string())
            .unwrap_or_else(|| "----".to_string())
    }

    /// Move marker focus forward, wrapping around.
    pub fn focus_next_marker(&mut self) {
        self.move_focus(true);
    }

    /// Move marker focus backward, wrapping around.
    pub fn focus_prev_marker(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let Some(scene) = self.scene() else {
            return;
        };
        let count = scene.markers.len();
        if count == 0 {
            self.status = format!("No storm events in {}", scene.year);
            return;
        }

        let focus = match (self.marker_focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        let label = scene
            .markers
            .get(focus)
            .and_then(|m| scene.event(m.event_id))
            .map(|e| format!("{} {}", e.begin_date, e.event_type));
        self.marker_focus = Some(focus);
        if let Some(label) = label {
            self.status = format!("Event {}/{}: {}", focus + 1, count, label);
        }
    }

    /// Marker under the focus cursor.
    pub fn focused_marker(&self) -> Option<MarkerRecord> {
        let scene = self.scene()?;
        scene.markers.get(self.marker_focus?).copied()
    }

    /// Click the focused marker.
    pub fn activate_focused_marker(&mut self) {
        match self.focused_marker() {
            Some(marker) => self.on_marker_click(marker.event_id),
            None => self.status = "No marker selected (Tab to select)".to_string(),
        }
    }

    /// Marker click callback: toggle the event's annotation.
    pub fn on_marker_click(&mut self, event_id: EventId) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        chart.state = chart.state.toggle_annotation(event_id);
        tracing::debug!("Annotation toggled: {:?}", chart.state.active_annotation);
        self.status = match chart.state.active_annotation {
            Some(id) => format!("Showing event {}", id),
            None => "Annotation closed".to_string(),
        };
    }

    /// Close the open annotation.
    pub fn close_annotation(&mut self) {
        if let Some(chart) = self.chart.as_mut() {
            chart.state = chart.state.clear_annotation();
        }
    }

    /// Event whose annotation is open.
    pub fn active_event(&self) -> Option<&StormEvent> {
        let chart = self.chart.as_ref()?;
        chart.data.event(chart.state.active_annotation?)
    }

    /// Copy the open annotation to the clipboard.
    pub fn copy_annotation(&mut self) {
        let result = match self.active_event() {
            Some(event) => util::copy_annotation(event).map(|_| event.event_id),
            None => {
                self.status = "No annotation open".to_string();
                return;
            },
        };
        self.status = match result {
            Ok(id) => format!("Copied event {}!", id),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
