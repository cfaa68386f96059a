use tracing::debug;

use super::config::ScoringConfig;
use super::error::ScoringError;
use super::table::{ScoringTable, TableKind};
use crate::model::{EventType, Placement};

/// Decide which table family applies, without looking the table up.
///
/// Championship scoring overrides relay/individual once enough teams compete.
pub fn table_kind(
    config: &ScoringConfig,
    event: &EventType,
    num_teams: u32,
) -> Result<TableKind, ScoringError> {
    if num_teams >= config.championship_min_teams {
        return Ok(TableKind::Championship);
    }
    if num_teams < 2 {
        return Err(ScoringError::InvalidTeamCount { num_teams });
    }
    if event.is_relay() {
        Ok(TableKind::Relay)
    } else {
        Ok(TableKind::Individual)
    }
}

/// Select the point table for an event given the number of competing teams.
///
/// Fails with [`ScoringError::InvalidTeamCount`] when fewer than two teams
/// compete, and with [`ScoringError::MissingTable`] when the configuration
/// has no table for that team count.
pub fn resolve_table<'a>(
    config: &'a ScoringConfig,
    event: &EventType,
    num_teams: u32,
) -> Result<&'a ScoringTable, ScoringError> {
    let kind = table_kind(config, event, num_teams)?;
    let table = match kind {
        TableKind::Championship => Some(&config.championship),
        TableKind::Relay => config.relay.get(&num_teams),
        TableKind::Individual => config.individual.get(&num_teams),
    };

    match table {
        Some(table) => {
            debug!(event = %event.name, num_teams, %kind, "resolved scoring table");
            Ok(table)
        }
        None => Err(ScoringError::MissingTable { kind, num_teams }),
    }
}

/// Map placements to points, one output per input in the same order.
///
/// Placements outside the table (including 0 and negatives) score zero.
pub fn score_placements(table: &ScoringTable, placements: &[Placement]) -> Vec<f64> {
    placements.iter().map(|&p| table.points_for(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RelayPreset;
    use proptest::prelude::*;

    fn config_with_relays() -> ScoringConfig {
        ScoringConfig::default().with_relay_preset(RelayPreset::WholePoints)
    }

    #[test]
    fn test_resolve_individual_table() {
        let config = config_with_relays();
        let table = resolve_table(&config, &EventType::classify("100m Dash"), 3).unwrap();
        assert_eq!(table.points(), &[5.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_resolve_relay_table() {
        let config = config_with_relays();
        let table = resolve_table(&config, &EventType::classify("4x100 Relay"), 3).unwrap();
        assert_eq!(table.points(), &[5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_resolve_championship_overrides_everything() {
        let config = config_with_relays();
        let expected = [10.0, 8.0, 6.0, 4.0, 2.0, 1.0];

        let table = resolve_table(&config, &EventType::classify("Long Jump"), 6).unwrap();
        assert_eq!(table.points(), &expected);
        let table = resolve_table(&config, &EventType::classify("4x400 Relay"), 5).unwrap();
        assert_eq!(table.points(), &expected);
    }

    #[test]
    fn test_resolve_rejects_too_few_teams() {
        let config = config_with_relays();
        let event = EventType::classify("100m Dash");

        assert_eq!(
            resolve_table(&config, &event, 1),
            Err(ScoringError::InvalidTeamCount { num_teams: 1 })
        );
        assert_eq!(
            resolve_table(&config, &event, 0),
            Err(ScoringError::InvalidTeamCount { num_teams: 0 })
        );
    }

    #[test]
    fn test_resolve_relay_without_configured_table() {
        // Default config deliberately carries no relay tables
        let config = ScoringConfig::default();
        let result = resolve_table(&config, &EventType::classify("4x400 Relay"), 2);
        assert_eq!(
            result,
            Err(ScoringError::MissingTable {
                kind: TableKind::Relay,
                num_teams: 2
            })
        );
    }

    #[test]
    fn test_resolve_missing_individual_table() {
        let mut config = ScoringConfig::default();
        config.individual.remove(&4);
        let err = resolve_table(&config, &EventType::classify("Shot Put"), 4).unwrap_err();
        assert_eq!(err.to_string(), "no individual scoring table configured for 4 teams");
    }

    #[test]
    fn test_custom_championship_threshold() {
        let mut config = ScoringConfig::default();
        config.championship_min_teams = 4;
        let event = EventType::classify("High Jump");
        assert_eq!(table_kind(&config, &event, 4), Ok(TableKind::Championship));
        assert_eq!(table_kind(&config, &event, 3), Ok(TableKind::Individual));
    }

    #[test]
    fn test_score_placements_basic() {
        let table = ScoringTable::new(vec![5.0, 3.0, 1.0]);
        assert_eq!(score_placements(&table, &[1, 2, 3, 4]), vec![5.0, 3.0, 1.0, 0.0]);
    }

    #[test]
    fn test_score_placements_preserves_order() {
        let table = ScoringTable::new(vec![6.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(score_placements(&table, &[3, 1, 0, 2, -1]), vec![3.0, 6.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn test_score_placements_empty() {
        let table = ScoringTable::new(vec![5.0, 3.0, 1.0]);
        assert!(score_placements(&table, &[]).is_empty());
    }

    #[test]
    fn test_score_relay_fractional() {
        let config = ScoringConfig::default().with_relay_preset(RelayPreset::Fractional);
        let table = resolve_table(&config, &EventType::classify("4x400 Relay"), 4).unwrap();
        assert_eq!(score_placements(table, &[1, 2, 3, 4]), vec![1.5, 1.0, 0.5, 0.0]);
    }

    proptest! {
        #[test]
        fn prop_score_placements_total(
            points in prop::collection::vec(0.0f64..20.0, 0..8),
            placements in prop::collection::vec(any::<i64>(), 0..32),
        ) {
            let table = ScoringTable::new(points.clone());
            let scored = score_placements(&table, &placements);

            prop_assert_eq!(scored.len(), placements.len());
            for (p, awarded) in placements.iter().zip(&scored) {
                if *p >= 1 && (*p as u64) <= points.len() as u64 {
                    prop_assert_eq!(*awarded, points[(*p - 1) as usize]);
                } else {
                    prop_assert_eq!(*awarded, 0.0);
                }
            }
        }

        #[test]
        fn prop_score_placements_idempotent(
            placements in prop::collection::vec(-5i64..10, 0..16),
        ) {
            let table = ScoringTable::new(vec![10.0, 8.0, 6.0, 4.0, 2.0, 1.0]);
            prop_assert_eq!(
                score_placements(&table, &placements),
                score_placements(&table, &placements)
            );
        }
    }
}
