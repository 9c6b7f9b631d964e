//! Utility functions.
//!
//! This module provides chart configuration, value formatting and
//! clipboard helpers.

mod chart_config;
mod formatters;

pub use chart_config::{ChartConfig, INITIAL_YEAR, TWO_DIGIT_YEAR_PIVOT};
pub use formatters::{format_axis_label, format_stat_value, truncate_to_width};

use crate::clipboard;
use crate::data::StormEvent;
use crate::error::Result;

/// Plain-text annotation for a storm event.
pub fn annotation_text(event: &StormEvent) -> String {
    let mut text = format!("{} ({})\n", event.event_type, event.begin_date);
    text.push_str(&format!("Event ID: {}\n", event.event_id));

    if let Some(ref narrative) = event.event_narrative {
        text.push_str(&format!("\nEvent:\n{}\n", narrative));
    }
    if let Some(ref narrative) = event.episode_narrative {
        text.push_str(&format!("\nEpisode:\n{}\n", narrative));
    }
    text
}

/// Copy a storm event annotation to the clipboard.
pub fn copy_annotation(event: &StormEvent) -> Result<()> {
    clipboard::copy_to_clipboard(&annotation_text(event))
}
