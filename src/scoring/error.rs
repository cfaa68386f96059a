use thiserror::Error;

use super::table::TableKind;

/// Meet setup problems that make an event unscorable.
///
/// These are configuration errors, not data errors: callers should reject
/// the meet setup rather than record zero points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("invalid team count {num_teams}: at least 2 teams must compete")]
    InvalidTeamCount { num_teams: u32 },

    #[error("no {kind} scoring table configured for {num_teams} teams")]
    MissingTable { kind: TableKind, num_teams: u32 },
}
