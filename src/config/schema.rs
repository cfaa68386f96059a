use serde::{Deserialize, Serialize};

use crate::model::{EventCatalog, EventType};
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scoring: ScoringConfig,
    /// Event types whose kind can't be read from the name alone
    pub event_types: Vec<EventType>,
}

impl Config {
    pub fn catalog(&self) -> EventCatalog {
        EventCatalog::from_types(self.event_types.iter().cloned())
    }
}
