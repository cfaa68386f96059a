pub mod config;
pub mod engine;
pub mod error;
pub mod table;
pub mod validation;

pub use config::*;
pub use engine::{resolve_table, score_placements, table_kind};
pub use error::ScoringError;
pub use table::{ScoringTable, TableKind};
pub use validation::validate_scoring;
