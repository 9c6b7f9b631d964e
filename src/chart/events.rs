//! Storm event grouping and marker layout.

use super::year_index::YDomain;
use crate::data::{month_short_name, EventId, StormEvent};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::fmt;

/// Month-and-year key of an event group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    /// One-based month.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl GroupKey {
    /// Key of the month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// First day of the keyed month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_short_name(self.month), self.year)
    }
}

/// Events sharing a month, earliest first.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup<'a> {
    /// Group key.
    pub key: GroupKey,
    /// Members ordered by begin date.
    pub events: Vec<&'a StormEvent>,
}

/// A placed event marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerRecord {
    /// Event this marker stands for.
    pub event_id: EventId,
    /// Horizontal position (zero-based month).
    pub x: f64,
    /// Vertical position in data units.
    pub y: f64,
}

/// Horizontal position of a date: zero-based month plus the fraction of the
/// month elapsed.
pub fn month_position(date: NaiveDate) -> f64 {
    let days_in_month = days_in_month(date.year(), date.month()).unwrap_or(30);
    date.month0() as f64 + date.day0() as f64 / days_in_month as f64
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Group the events of `year` by month.
///
/// Groups come out in the order their first member appears in `events`;
/// members within a group are sorted by begin date, ties keeping source order.
pub fn group_events_for_year(events: &[StormEvent], year: i32) -> Vec<EventGroup<'_>> {
    let mut groups: Vec<EventGroup<'_>> = Vec::new();
    let mut slots: HashMap<GroupKey, usize> = HashMap::new();

    for event in events.iter().filter(|e| e.year() == year) {
        let key = GroupKey::of(event.begin_date);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(EventGroup {
                key,
                events: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].events.push(event);
    }

    for group in &mut groups {
        group.events.sort_by_key(|e| e.begin_date);
    }
    groups
}

/// Place one marker per event.
///
/// Each group sits at the x of its month; its i-th member is
/// `offset + i * spacing` (fractions of the domain span) below the top.
pub fn layout_markers(
    groups: &[EventGroup<'_>],
    domain: YDomain,
    offset: f64,
    spacing: f64,
) -> Vec<MarkerRecord> {
    let span = domain.span();
    groups
        .iter()
        .flat_map(|group| {
            let x = group
                .key
                .first_day()
                .map(month_position)
                .unwrap_or(group.key.month.saturating_sub(1) as f64);
            group.events.iter().enumerate().map(move |(i, event)| MarkerRecord {
                event_id: event.event_id,
                x,
                y: domain.max - (offset + i as f64 * spacing) * span,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: EventId, y: i32, m: u32, d: u32) -> StormEvent {
        StormEvent {
            event_id: id,
            begin_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            event_type: "Coastal Flood".to_string(),
            event_narrative: None,
            episode_narrative: None,
        }
    }

    #[test]
    fn groups_by_month_in_first_seen_order() {
        let events = vec![
            event(1, 2001, 1, 3),
            event(2, 2001, 1, 1),
            event(3, 2001, 2, 1),
            event(4, 2002, 1, 1),
        ];
        let groups = group_events_for_year(&events, 2001);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key.to_string(), "Jan 2001");
        let ids: Vec<EventId> = groups[0].events.iter().map(|e| e.event_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(groups[1].key.to_string(), "Feb 2001");
        assert_eq!(groups[1].events.len(), 1);
    }

    #[test]
    fn group_order_is_not_sorted_by_key() {
        let events = vec![event(1, 2001, 9, 5), event(2, 2001, 3, 5), event(3, 2001, 9, 1)];
        let keys: Vec<String> = group_events_for_year(&events, 2001)
            .iter()
            .map(|g| g.key.to_string())
            .collect();
        assert_eq!(keys, vec!["Sep 2001", "Mar 2001"]);
    }

    #[test]
    fn markers_stack_down_from_the_top() {
        let events = vec![event(1, 2001, 3, 20), event(2, 2001, 3, 2), event(3, 2001, 7, 4)];
        let groups = group_events_for_year(&events, 2001);
        let domain = YDomain { min: 0.0, max: 10.0 };
        let markers = layout_markers(&groups, domain, 0.1, 0.2);

        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0], MarkerRecord { event_id: 2, x: 2.0, y: 9.0 });
        assert_eq!(markers[1].event_id, 1);
        assert_eq!(markers[1].x, 2.0);
        assert!((markers[1].y - 7.0).abs() < 1e-12);
        assert_eq!(markers[2], MarkerRecord { event_id: 3, x: 6.0, y: 9.0 });
    }

    #[test]
    fn month_position_advances_within_month() {
        let first = NaiveDate::from_ymd_opt(2001, 2, 1).unwrap();
        let mid = NaiveDate::from_ymd_opt(2001, 2, 15).unwrap();
        assert_eq!(month_position(first), 1.0);
        assert!((month_position(mid) - 1.5).abs() < 1e-12);
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2001, 12), Some(31));
    }
}
