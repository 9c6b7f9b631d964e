//! Storm event records.

use super::calendar::{month_short_name, parse_begin_date};
use super::columns::{csv_reader, field, line_of, optional_column, required_column, skip_row};
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

const TABLE: &str = "storm events";

/// Storm event identifier.
pub type EventId = u64;

/// CSV column names.
mod column {
    /// Unique event id.
    pub(super) const EVENT_ID: &str = "EVENT_ID";
    /// Begin date, `M/D/YY`.
    pub(super) const BEGIN_DATE: &str = "BEGIN_DATE";
    /// Event type, e.g. `Coastal Flood`.
    pub(super) const EVENT_TYPE: &str = "EVENT_TYPE";
    /// Narrative for this event.
    pub(super) const EVENT_NARRATIVE: &str = "EVENT_NARRATIVE";
    /// Narrative for the enclosing episode.
    pub(super) const EPISODE_NARRATIVE: &str = "EPISODE_NARRATIVE";
}

/// A recorded storm event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StormEvent {
    /// Unique event id.
    pub event_id: EventId,
    /// Day the event began.
    pub begin_date: NaiveDate,
    /// Event type.
    pub event_type: String,
    /// Event narrative, if any.
    pub event_narrative: Option<String>,
    /// Episode narrative, if any.
    pub episode_narrative: Option<String>,
}

impl StormEvent {
    /// Calendar year the event began in.
    pub fn year(&self) -> i32 {
        self.begin_date.year()
    }

    /// One-based month the event began in.
    pub fn month(&self) -> u32 {
        self.begin_date.month()
    }

    /// Short month name, e.g. `"Oct"`.
    pub fn month_name(&self) -> &'static str {
        month_short_name(self.month())
    }
}

/// Parse the storm events CSV.
///
/// Expected header: `EVENT_ID, BEGIN_DATE, EVENT_TYPE, EVENT_NARRATIVE, EPISODE_NARRATIVE`.
/// The narrative columns may be missing; empty narratives become `None`.
/// Two-digit years in `BEGIN_DATE` are expanded around `year_pivot`.
///
/// Rows whose `EVENT_ID` or `BEGIN_DATE` does not parse are logged and left
/// out. When an id repeats, the first row wins.
///
/// # Example CSV
/// ```text
/// EVENT_ID,BEGIN_DATE,EVENT_TYPE,EVENT_NARRATIVE,EPISODE_NARRATIVE
/// 5605123,10/24/05,Storm Surge/Tide,"Tides ran 2 feet above normal.","Hurricane Wilma crossed the Keys."
/// ```
pub fn parse_storm_csv(text: &str, year_pivot: u32) -> Result<Vec<StormEvent>> {
    let mut rdr = csv_reader(text);
    let headers = rdr.headers()?.clone();

    let id_idx = required_column(&headers, TABLE, column::EVENT_ID)?;
    let date_idx = required_column(&headers, TABLE, column::BEGIN_DATE)?;
    let type_idx = required_column(&headers, TABLE, column::EVENT_TYPE)?;
    let event_narrative_idx = optional_column(&headers, column::EVENT_NARRATIVE);
    let episode_narrative_idx = optional_column(&headers, column::EPISODE_NARRATIVE);

    let mut seen = HashSet::new();
    let mut events = Vec::new();
    for result in rdr.records() {
        let r = result?;
        let line = line_of(&r);

        let id_text = field(&r, id_idx);
        let Ok(event_id) = id_text.parse::<EventId>() else {
            skip_row(TABLE, line, column::EVENT_ID, id_text);
            continue;
        };

        let date_text = field(&r, date_idx);
        let Some(begin_date) = parse_begin_date(date_text, year_pivot) else {
            skip_row(TABLE, line, column::BEGIN_DATE, date_text);
            continue;
        };

        if !seen.insert(event_id) {
            tracing::warn!("Skipping storm event on line {}: duplicate id {}", line, event_id);
            continue;
        }

        let narrative = |idx: Option<usize>| {
            idx.map(|i| field(&r, i))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        events.push(StormEvent {
            event_id,
            begin_date,
            event_type: field(&r, type_idx).to_string(),
            event_narrative: narrative(event_narrative_idx),
            episode_narrative: narrative(episode_narrative_idx),
        });
    }

    tracing::debug!("Parsed {} storm events", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::TWO_DIGIT_YEAR_PIVOT;

    const HEADER: &str = "EVENT_ID,BEGIN_DATE,EVENT_TYPE,EVENT_NARRATIVE,EPISODE_NARRATIVE\n";

    #[test]
    fn parses_events_with_pivoted_years() {
        let csv = format!(
            "{HEADER}101,1/3/69,Coastal Flood,,\n102, 10/24/05 ,Storm Surge/Tide,\"Tides ran high, 2 ft.\",Wilma\n103,9/1/70,Hurricane,,\n"
        );
        let events = parse_storm_csv(&csv, TWO_DIGIT_YEAR_PIVOT).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].year(), 2069);
        assert_eq!(events[0].event_narrative, None);
        assert_eq!(events[1].begin_date, NaiveDate::from_ymd_opt(2005, 10, 24).unwrap());
        assert_eq!(events[1].month_name(), "Oct");
        assert_eq!(events[1].event_type, "Storm Surge/Tide");
        assert_eq!(events[1].event_narrative.as_deref(), Some("Tides ran high, 2 ft."));
        assert_eq!(events[1].episode_narrative.as_deref(), Some("Wilma"));
        assert_eq!(events[2].year(), 1970);
    }

    #[test]
    fn narrative_columns_are_optional() {
        let csv = "EVENT_ID,BEGIN_DATE,EVENT_TYPE\n7,2/2/99,High Wind\n";
        let events = parse_storm_csv(csv, TWO_DIGIT_YEAR_PIVOT).unwrap();

        assert_eq!(events[0].year(), 1999);
        assert_eq!(events[0].episode_narrative, None);
    }

    #[test]
    fn duplicate_ids_keep_the_first_row() {
        let csv = format!("{HEADER}5,1/1/01,Flood,,\n6,3/1/01,Flood,,\n5,1/2/01,High Surf,,\n");
        let events = parse_storm_csv(&csv, TWO_DIGIT_YEAR_PIVOT).unwrap();

        let ids: Vec<EventId> = events.iter().map(|e| e.event_id).collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(events[0].event_type, "Flood");
    }

    #[test]
    fn rows_with_bad_keys_are_skipped() {
        let csv = format!(
            "{HEADER}1,1/5/96,Flood,,\n5,someday,Flood,,\nabc,1/6/96,Flood,,\n7,,Flood,,\n8,2/7/96,High Wind,,\n   \n"
        );
        let events = parse_storm_csv(&csv, TWO_DIGIT_YEAR_PIVOT).unwrap();

        let ids: Vec<EventId> = events.iter().map(|e| e.event_id).collect();
        assert_eq!(ids, vec![1, 8]);
    }

    #[test]
    fn skipped_row_does_not_claim_its_id() {
        let csv = format!("{HEADER}5,someday,Flood,,\n5,4/1/99,Flood,,\n");
        let events = parse_storm_csv(&csv, TWO_DIGIT_YEAR_PIVOT).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].begin_date, NaiveDate::from_ymd_opt(1999, 4, 1).unwrap());
    }
}
