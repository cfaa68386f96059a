pub mod entry;
pub mod sheet;

pub use entry::{expand_relay_places, score_event, Entry, ScoredEntry, RELAY_LEGS};
pub use sheet::{ordinal, score_sheet, SheetGroup};
