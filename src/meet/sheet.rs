use serde::Serialize;

use crate::model::{EventRecord, Placement};

/// All results of one event type at a meet, best place first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetGroup<'a> {
    pub event_type: &'a str,
    pub entries: Vec<&'a EventRecord>,
}

/// Group a meet's results by event type for a score sheet.
///
/// Groups appear in the order their event type first shows up; entries
/// within a group are sorted by place, keeping input order for equal places.
pub fn score_sheet<'a>(events: &'a [EventRecord], meet_id: &str) -> Vec<SheetGroup<'a>> {
    let mut groups: Vec<SheetGroup<'a>> = Vec::new();

    for ev in events.iter().filter(|ev| ev.meet_id.as_deref() == Some(meet_id)) {
        match groups.iter_mut().find(|g| g.event_type == ev.event_type) {
            Some(group) => group.entries.push(ev),
            None => groups.push(SheetGroup {
                event_type: &ev.event_type,
                entries: vec![ev],
            }),
        }
    }

    for group in &mut groups {
        group.entries.sort_by_key(|ev| ev.placement);
    }
    groups
}

/// English ordinal for a place: 1st, 2nd, 3rd, 4th, 11th, 22nd.
pub fn ordinal(place: Placement) -> String {
    let suffix = match (place.rem_euclid(100), place.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", place, suffix)
}
