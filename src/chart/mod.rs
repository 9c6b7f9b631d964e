//! Chart logic: year index, pagination, button state, event grouping and
//! the redraw routine.
//!
//! Nothing here touches the terminal. Drawing goes through the
//! [`ChartRenderer`] trait.

mod buttons;
mod events;
mod pagination;
mod render;
mod scene;
mod text;
mod year_index;

pub use buttons::ButtonStates;
pub use events::{group_events_for_year, layout_markers, month_position, EventGroup, GroupKey, MarkerRecord};
pub use pagination::{ChartState, NavAction};
pub use render::{Annotation, Axes, ChartRenderer, Series, SeriesKind};
pub use scene::Scene;
pub use text::TextRenderer;
pub use year_index::{YDomain, YearBounds, YearIndex};
