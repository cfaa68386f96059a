pub mod stats;

pub use stats::{build_leaderboard, distinct_seasons, AthleteStat, SortKey};
