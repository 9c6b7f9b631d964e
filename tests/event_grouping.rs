//! Storm event grouping through the public parsing and chart API.

use tideline::chart::{group_events_for_year, layout_markers, YDomain};
use tideline::data::{parse_storm_csv, EventId};
use tideline::util::{ChartConfig, TWO_DIGIT_YEAR_PIVOT};

const STORMS: &str = "\
EVENT_ID,BEGIN_DATE,EVENT_TYPE,EVENT_NARRATIVE,EPISODE_NARRATIVE
1,1/3/01,Coastal Flood,,
2,1/1/01,High Surf,,
3,2/1/01,Coastal Flood,,
4,1/1/02,Coastal Flood,,
5,12/31/00,Storm Surge/Tide,,
";

fn ids(events: &[&tideline::data::StormEvent]) -> Vec<EventId> {
    events.iter().map(|e| e.event_id).collect()
}

#[test]
fn january_and_february_2001() {
    let events = parse_storm_csv(STORMS, TWO_DIGIT_YEAR_PIVOT).unwrap();
    let groups = group_events_for_year(&events, 2001);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key.to_string(), "Jan 2001");
    assert_eq!(ids(&groups[0].events), vec![2, 1]);
    assert_eq!(groups[1].key.to_string(), "Feb 2001");
    assert_eq!(ids(&groups[1].events), vec![3]);
}

#[test]
fn only_the_requested_year_is_grouped() {
    let events = parse_storm_csv(STORMS, TWO_DIGIT_YEAR_PIVOT).unwrap();

    let groups = group_events_for_year(&events, 2000);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key.to_string(), "Dec 2000");

    assert!(group_events_for_year(&events, 1999).is_empty());
}

#[test]
fn every_grouped_event_gets_one_marker_inside_the_domain() {
    let events = parse_storm_csv(STORMS, TWO_DIGIT_YEAR_PIVOT).unwrap();
    let groups = group_events_for_year(&events, 2001);
    let config = ChartConfig::default();
    let domain = YDomain { min: -0.3, max: 0.2 };
    let markers = layout_markers(&groups, domain, config.marker_offset, config.marker_spacing);

    let marker_ids: Vec<EventId> = markers.iter().map(|m| m.event_id).collect();
    assert_eq!(marker_ids, vec![2, 1, 3]);

    // Same group, same column; later members sit lower.
    assert_eq!(markers[0].x, 0.0);
    assert_eq!(markers[0].x, markers[1].x);
    assert!(markers[1].y < markers[0].y);
    assert_eq!(markers[2].x, 1.0);
    assert_eq!(markers[2].y, markers[0].y);

    for m in &markers {
        assert!(m.y > domain.min && m.y < domain.max);
    }
}
