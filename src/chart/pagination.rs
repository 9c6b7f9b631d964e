//! Year pagination and annotation selection state.
//!
//! [`ChartState`] is a small `Copy` value. Every transition takes the state
//! by value and returns the next one, so the controller can be exercised
//! without any rendering surface.

use super::year_index::YearBounds;
use crate::data::EventId;

/// A pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Jump to the first year.
    First,
    /// Step back one year.
    Prev,
    /// Step forward one year.
    Next,
    /// Jump to the last year.
    Last,
}

impl NavAction {
    /// All controls in display order.
    pub const ALL: [NavAction; 4] = [NavAction::First, NavAction::Prev, NavAction::Next, NavAction::Last];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            NavAction::First => "|<< First",
            NavAction::Prev => "< Prev",
            NavAction::Next => "Next >",
            NavAction::Last => "Last >>|",
        }
    }
}

/// Chart state: the year cursor and the selected annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartState {
    /// Year on display.
    pub current_year: i32,
    /// Earliest year with data.
    pub min_year: i32,
    /// Latest year with data.
    pub max_year: i32,
    /// Event whose annotation is open.
    pub active_annotation: Option<EventId>,
}

impl ChartState {
    /// Create the state for freshly loaded data, starting at `initial_year`
    /// clamped into the bounds.
    pub fn new(bounds: YearBounds, initial_year: i32) -> Self {
        Self {
            current_year: bounds.clamp(initial_year),
            min_year: bounds.min,
            max_year: bounds.max,
            active_annotation: None,
        }
    }

    /// Year bounds of this state.
    pub fn bounds(&self) -> YearBounds {
        YearBounds {
            min: self.min_year,
            max: self.max_year,
        }
    }

    /// Whether the cursor is on the first year.
    pub fn is_first(&self) -> bool {
        self.current_year == self.min_year
    }

    /// Whether the cursor is on the last year.
    pub fn is_last(&self) -> bool {
        self.current_year == self.max_year
    }

    /// Step forward one year; no-op on the last year.
    pub fn next(self) -> Self {
        if self.current_year < self.max_year {
            self.with_year(self.current_year + 1)
        } else {
            self
        }
    }

    /// Step back one year; no-op on the first year.
    pub fn prev(self) -> Self {
        if self.current_year > self.min_year {
            self.with_year(self.current_year - 1)
        } else {
            self
        }
    }

    /// Jump to the first year.
    pub fn first(self) -> Self {
        if self.current_year > self.min_year {
            self.with_year(self.min_year)
        } else {
            self
        }
    }

    /// Jump to the last year.
    pub fn last(self) -> Self {
        if self.current_year < self.max_year {
            self.with_year(self.max_year)
        } else {
            self
        }
    }

    /// Apply a pagination control.
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::First => self.first(),
            NavAction::Prev => self.prev(),
            NavAction::Next => self.next(),
            NavAction::Last => self.last(),
        }
    }

    /// Marker click: open the event's annotation, or close it if it is the
    /// one already open.
    pub fn toggle_annotation(self, event_id: EventId) -> Self {
        let active_annotation = if self.active_annotation == Some(event_id) {
            None
        } else {
            Some(event_id)
        };
        Self {
            active_annotation,
            ..self
        }
    }

    /// Close any open annotation.
    pub fn clear_annotation(self) -> Self {
        Self {
            active_annotation: None,
            ..self
        }
    }

    // A year change redraws the chart from scratch, so no annotation survives it.
    fn with_year(self, year: i32) -> Self {
        Self {
            current_year: year,
            active_annotation: None,
            ..self
        }
    }
}
