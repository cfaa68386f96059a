use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::model::{EventCatalog, EventRecord, MeasurementKind};
use crate::performance::{format_performance, parse_performance};

/// An athlete's best result in one event type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalRecord {
    pub event_type: String,
    pub measurement: MeasurementKind,
    /// Normalized best value; `None` when no result could be read
    pub best: Option<f64>,
    /// Display form of `best`, empty when there is none
    pub display: String,
    pub achieved_at: Option<DateTime<Utc>>,
}

/// Best result per event type over one athlete's history.
///
/// Timed events keep the lowest value, measured events the highest. On ties
/// the earliest record in input order wins. Results that cannot be parsed
/// (DNF, blank, garbage) are skipped; an event type with nothing usable
/// still gets an entry with an empty display string.
pub fn personal_records<'a, I>(events: I, catalog: &EventCatalog) -> BTreeMap<String, PersonalRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut by_type: BTreeMap<&str, Vec<&EventRecord>> = BTreeMap::new();
    for event in events {
        by_type.entry(event.event_type.as_str()).or_default().push(event);
    }

    by_type
        .into_iter()
        .map(|(name, records)| {
            let measurement = catalog.resolve(name).measurement;
            let record = best_of(name, measurement, &records);
            (name.to_string(), record)
        })
        .collect()
}

/// Display-formatted PR per event type ("0:11.20", "19.7", or "" for none).
pub fn compute_prs<'a, I>(events: I, catalog: &EventCatalog) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    personal_records(events, catalog)
        .into_iter()
        .map(|(name, record)| (name, record.display))
        .collect()
}

fn best_of(name: &str, measurement: MeasurementKind, records: &[&EventRecord]) -> PersonalRecord {
    let mut best: Option<(f64, Option<DateTime<Utc>>)> = None;

    let entered = records
        .iter()
        .filter(|r| r.detail.as_ref().is_some_and(|d| !d.is_blank()));
    for record in entered {
        let Some(value) = parse_performance(record.detail.as_ref()).filter(|v| v.is_finite()) else {
            debug!(event = name, athlete = %record.athlete_id, detail = ?record.detail, "skipping unreadable result");
            continue;
        };

        let improves = match best {
            None => true,
            Some((current, _)) => match measurement {
                MeasurementKind::Timed => value < current,
                MeasurementKind::Measured => value > current,
            },
        };
        if improves {
            best = Some((value, record.timestamp));
        }
    }

    PersonalRecord {
        event_type: name.to_string(),
        measurement,
        best: best.map(|(value, _)| value),
        display: best
            .map(|(value, _)| format_performance(value, measurement))
            .unwrap_or_default(),
        achieved_at: best.and_then(|(_, at)| at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventKind, EventType};
    use chrono::TimeZone;

    fn event(event_type: &str, detail: &str) -> EventRecord {
        EventRecord::new("a1", event_type, 1).with_detail(detail)
    }

    #[test]
    fn test_timed_pr_is_minimum() {
        let events = vec![
            event("100m Dash", "11.5"),
            event("100m Dash", "11.2"),
            event("100m Dash", "DNF"),
        ];
        let prs = compute_prs(&events, &EventCatalog::new());
        assert_eq!(prs["100m Dash"], "0:11.20");
    }

    #[test]
    fn test_measured_pr_is_maximum() {
        let events = vec![event("Long Jump", "18.2"), event("Long Jump", "19.7")];
        let prs = compute_prs(&events, &EventCatalog::new());
        assert_eq!(prs["Long Jump"], "19.7");
    }

    #[test]
    fn test_timed_pr_over_a_minute() {
        let events = vec![event("400m Dash", "1:02.50"), event("400m Dash", "1:04.10")];
        let prs = compute_prs(&events, &EventCatalog::new());
        assert_eq!(prs["400m Dash"], "1:02.50");
    }

    #[test]
    fn test_empty_history() {
        let events: Vec<EventRecord> = vec![];
        assert!(compute_prs(&events, &EventCatalog::new()).is_empty());
    }

    #[test]
    fn test_no_details_gives_empty_pr() {
        let events = vec![
            EventRecord::new("a1", "Shot Put", 2),
            EventRecord::new("a1", "Shot Put", 1).with_detail("  "),
        ];
        let prs = compute_prs(&events, &EventCatalog::new());
        assert_eq!(prs["Shot Put"], "");
    }

    #[test]
    fn test_all_unparsable_gives_empty_pr() {
        let events = vec![event("800m Run", "DNF"), event("800m Run", "DNS")];
        let records = personal_records(&events, &EventCatalog::new());
        assert_eq!(records["800m Run"].display, "");
        assert_eq!(records["800m Run"].best, None);
    }

    #[test]
    fn test_multiple_event_types() {
        let events = vec![
            event("100m Dash", "12.0"),
            event("Long Jump", "17.5"),
            event("100m Dash", "11.9"),
        ];
        let prs = compute_prs(&events, &EventCatalog::new());
        assert_eq!(prs.len(), 2);
        assert_eq!(prs["100m Dash"], "0:11.90");
        assert_eq!(prs["Long Jump"], "17.5");
    }

    #[test]
    fn test_numeric_details() {
        let events = vec![
            EventRecord::new("a1", "Discus", 1).with_detail(120.5),
            EventRecord::new("a1", "Discus", 1).with_detail(131.0),
        ];
        let prs = compute_prs(&events, &EventCatalog::new());
        assert_eq!(prs["Discus"], "131");
    }

    #[test]
    fn test_catalog_overrides_classification() {
        let catalog = EventCatalog::from_types(vec![EventType {
            name: "Mile Run".to_string(),
            kind: EventKind::Individual,
            measurement: MeasurementKind::Timed,
        }]);
        let events = vec![event("Mile Run", "5:10.00"), event("Mile Run", "4:58.30")];

        let prs = compute_prs(&events, &catalog);
        assert_eq!(prs["Mile Run"], "4:58.30");

        // Without the declaration the name reads as a field event: highest wins, no time format
        let prs = compute_prs(&events, &EventCatalog::new());
        assert_eq!(prs["Mile Run"], "310");
    }

    #[test]
    fn test_achieved_at_tracks_best_record() {
        let early = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap();
        let events = vec![
            event("High Jump", "5.2").with_timestamp(early),
            event("High Jump", "5.6").with_timestamp(late),
        ];
        let records = personal_records(&events, &EventCatalog::new());
        let record = &records["High Jump"];
        assert_eq!(record.best, Some(5.6));
        assert_eq!(record.achieved_at, Some(late));
        assert_eq!(record.measurement, MeasurementKind::Measured);
    }

    #[test]
    fn test_tie_keeps_first_record() {
        let first = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2025, 3, 8, 12, 0, 0).unwrap();
        let events = vec![
            event("200m Dash", "24.10").with_timestamp(first),
            event("200m Dash", "24.1").with_timestamp(second),
        ];
        let records = personal_records(&events, &EventCatalog::new());
        assert_eq!(records["200m Dash"].achieved_at, Some(first));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let events = vec![event("100m Dash", "11.5")];
        let before = events.clone();
        let _ = compute_prs(&events, &EventCatalog::new());
        assert_eq!(events, before);
    }
}
