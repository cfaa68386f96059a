//! Scoring and statistics for track & field meets.
//!
//! Maps placements to points through configurable tables, reads free-text
//! results into comparable numbers, extracts personal records and ranks
//! athletes on a leaderboard. Everything here is a pure computation over
//! caller-supplied records.

pub mod config;
pub mod leaderboard;
pub mod meet;
pub mod model;
pub mod output;
pub mod performance;
pub mod records;
pub mod scoring;

pub use leaderboard::{build_leaderboard, AthleteStat, SortKey};
pub use model::{EventCatalog, EventRecord, EventType, PerformanceDetail, Placement};
pub use performance::parse_performance;
pub use records::compute_prs;
pub use scoring::{resolve_table, score_placements, ScoringConfig, ScoringError, ScoringTable};
