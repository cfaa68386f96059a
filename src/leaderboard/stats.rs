use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

use crate::model::EventRecord;

/// Column a leaderboard is ranked by, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    TotalPoints,
    PointsPerMeet,
    PointsPerEvent,
    NumMeets,
}

/// Aggregated results for one athlete. Rebuilt on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteStat {
    pub athlete_id: String,
    pub athlete_name: String,
    pub total_points: f64,
    pub event_count: usize,
    pub distinct_meet_count: usize,
    pub points_per_event: f64,
    pub points_per_meet: f64,
}

impl AthleteStat {
    pub fn sort_value(&self, key: SortKey) -> f64 {
        match key {
            SortKey::TotalPoints => self.total_points,
            SortKey::PointsPerMeet => self.points_per_meet,
            SortKey::PointsPerEvent => self.points_per_event,
            SortKey::NumMeets => self.distinct_meet_count as f64,
        }
    }
}

struct Tally<'a> {
    athlete_id: &'a str,
    athlete_name: &'a str,
    total_points: f64,
    event_count: usize,
    meets: HashSet<&'a str>,
}

/// Rank athletes by their aggregated results.
///
/// With a season filter only events recorded for that season count; events
/// without a season are dropped in that case. Athletes are grouped by id, so
/// two athletes with the same name stay separate. Missing points count as
/// zero and events without a meet still count as events.
///
/// Sorting is stable: athletes with equal sort values keep the order in which
/// they first appear in `events`.
pub fn build_leaderboard(
    events: &[EventRecord],
    season: Option<&str>,
    sort_key: SortKey,
) -> Vec<AthleteStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<Tally<'_>> = Vec::new();

    let in_season = events
        .iter()
        .filter(|ev| season.is_none() || ev.season_id.as_deref() == season);
    for ev in in_season {
        let slot = *index.entry(ev.athlete_id.as_str()).or_insert_with(|| {
            tallies.push(Tally {
                athlete_id: &ev.athlete_id,
                athlete_name: ev.display_name(),
                total_points: 0.0,
                event_count: 0,
                meets: HashSet::new(),
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[slot];
        tally.total_points += ev.points.unwrap_or(0.0);
        tally.event_count += 1;
        if let Some(meet_id) = ev.meet_id.as_deref() {
            tally.meets.insert(meet_id);
        }
    }

    let mut stats: Vec<AthleteStat> = tallies
        .into_iter()
        .map(|t| {
            let distinct_meet_count = t.meets.len();
            AthleteStat {
                athlete_id: t.athlete_id.to_string(),
                athlete_name: t.athlete_name.to_string(),
                total_points: t.total_points,
                event_count: t.event_count,
                distinct_meet_count,
                points_per_event: t.total_points / t.event_count.max(1) as f64,
                points_per_meet: t.total_points / distinct_meet_count.max(1) as f64,
            }
        })
        .collect();

    // sort_by is stable, which keeps first-seen order for ties
    stats.sort_by(|a, b| {
        b.sort_value(sort_key)
            .partial_cmp(&a.sort_value(sort_key))
            .unwrap_or(Ordering::Equal)
    });

    debug!(athletes = stats.len(), ?season, ?sort_key, "built leaderboard");
    stats
}

/// Distinct season ids present in an event stream, sorted.
pub fn distinct_seasons(events: &[EventRecord]) -> Vec<String> {
    events
        .iter()
        .filter_map(|ev| ev.season_id.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
