//! Enabled/disabled state of the pagination buttons.

use super::pagination::{ChartState, NavAction};

/// Disabled flags for the four pagination buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStates {
    /// `first-page` is disabled.
    pub first_disabled: bool,
    /// `prev` is disabled.
    pub prev_disabled: bool,
    /// `next` is disabled.
    pub next_disabled: bool,
    /// `last-page` is disabled.
    pub last_disabled: bool,
}

impl ButtonStates {
    /// Compute the flags for a cursor position.
    pub fn compute(current_year: i32, min_year: i32, max_year: i32) -> Self {
        Self {
            first_disabled: current_year == min_year,
            prev_disabled: current_year <= min_year,
            next_disabled: current_year >= max_year,
            last_disabled: current_year == max_year,
        }
    }

    /// Compute the flags for a chart state, whose year is always in bounds.
    pub fn for_state(state: &ChartState) -> Self {
        Self {
            first_disabled: state.is_first(),
            prev_disabled: state.is_first(),
            next_disabled: state.is_last(),
            last_disabled: state.is_last(),
        }
    }

    /// Every button disabled, used before data loads.
    pub fn all_disabled() -> Self {
        Self {
            first_disabled: true,
            prev_disabled: true,
            next_disabled: true,
            last_disabled: true,
        }
    }

    /// Whether the button for `action` is disabled.
    pub fn is_disabled(&self, action: NavAction) -> bool {
        match action {
            NavAction::First => self.first_disabled,
            NavAction::Prev => self.prev_disabled,
            NavAction::Next => self.next_disabled,
            NavAction::Last => self.last_disabled,
        }
    }
}
