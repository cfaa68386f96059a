use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{EventCatalog, Placement};
use crate::scoring::{resolve_table, ScoringConfig, ScoringError};

/// Athletes per relay team.
pub const RELAY_LEGS: usize = 4;

/// One athlete's placement as entered for an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub athlete_id: String,
    pub placement: Placement,
}

impl Entry {
    pub fn new(athlete_id: &str, placement: Placement) -> Self {
        Self {
            athlete_id: athlete_id.to_string(),
            placement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEntry {
    pub athlete_id: String,
    pub placement: Placement,
    pub points: f64,
}

/// Score every entry of one event at a meet, keeping input order.
pub fn score_event(
    config: &ScoringConfig,
    catalog: &EventCatalog,
    event_name: &str,
    num_teams: u32,
    entries: &[Entry],
) -> Result<Vec<ScoredEntry>, ScoringError> {
    let event = catalog.resolve(event_name);
    let table = resolve_table(config, &event, num_teams)?;

    let scored: Vec<ScoredEntry> = entries
        .iter()
        .map(|entry| ScoredEntry {
            athlete_id: entry.athlete_id.clone(),
            placement: entry.placement,
            points: table.points_for(entry.placement),
        })
        .collect();

    debug!(event = event_name, num_teams, entries = scored.len(), "scored event");
    Ok(scored)
}

/// Spread relay team places over the team members.
///
/// Relay results are entered once per team; every leg of a team shares its
/// place. `[1, 2]` with four legs becomes `[1, 1, 1, 1, 2, 2, 2, 2]`.
pub fn expand_relay_places(team_places: &[Placement], legs: usize) -> Vec<Placement> {
    team_places
        .iter()
        .flat_map(|&place| std::iter::repeat(place).take(legs))
        .collect()
}
