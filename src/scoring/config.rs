use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::table::ScoringTable;

/// Point tables used to score meets.
///
/// Individual and relay tables are keyed by the number of competing teams.
/// Once `championship_min_teams` or more teams compete, every event uses the
/// championship table instead.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   individual:
///     2: [5, 3, 1]
///     3: [5, 3, 2, 1]
///     4: [6, 4, 3, 2, 1]
///   relay:
///     2: [5, 3]
///     3: [5, 3, 1]
///     4: [6, 4, 2]
///   championship: [10, 8, 6, 4, 2, 1]
///   championship_min_teams: 5
/// ```
///
/// Fields left out of the YAML keep their defaults. There is no default relay
/// table: relay values have to be chosen explicitly (see [`RelayPreset`]).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Individual event tables by team count
    pub individual: BTreeMap<u32, ScoringTable>,

    /// Relay event tables by team count
    pub relay: BTreeMap<u32, ScoringTable>,

    /// Table used for every event once enough teams compete
    pub championship: ScoringTable,

    /// Team count at which championship scoring takes over (default: 5)
    pub championship_min_teams: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let individual = BTreeMap::from([
            (2, ScoringTable::new(vec![5.0, 3.0, 1.0])),
            (3, ScoringTable::new(vec![5.0, 3.0, 2.0, 1.0])),
            (4, ScoringTable::new(vec![6.0, 4.0, 3.0, 2.0, 1.0])),
        ]);

        Self {
            individual,
            relay: BTreeMap::new(),
            championship: ScoringTable::new(vec![10.0, 8.0, 6.0, 4.0, 2.0, 1.0]),
            championship_min_teams: 5,
        }
    }
}

impl ScoringConfig {
    /// Replace the relay tables with one of the known presets.
    pub fn with_relay_preset(mut self, preset: RelayPreset) -> Self {
        self.relay = preset.tables();
        self
    }
}

/// Relay tables that have been used historically.
///
/// The two variants disagree, so neither is applied unless asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RelayPreset {
    /// Individual points split across four legs: 1.25/0.75/0.25 style
    Fractional,
    /// Whole points per relay team: 5/3/1 style
    #[value(name = "whole")]
    WholePoints,
}

impl RelayPreset {
    pub fn tables(self) -> BTreeMap<u32, ScoringTable> {
        match self {
            RelayPreset::Fractional => BTreeMap::from([
                (2, ScoringTable::new(vec![1.25, 0.75])),
                (3, ScoringTable::new(vec![1.25, 0.75, 0.25])),
                (4, ScoringTable::new(vec![1.5, 1.0, 0.5])),
            ]),
            RelayPreset::WholePoints => BTreeMap::from([
                (2, ScoringTable::new(vec![5.0, 3.0])),
                (3, ScoringTable::new(vec![5.0, 3.0, 1.0])),
                (4, ScoringTable::new(vec![6.0, 4.0, 2.0])),
            ]),
        }
    }
}
