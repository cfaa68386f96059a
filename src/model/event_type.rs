use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Whether an event is contested by single athletes or by relay teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Individual,
    Relay,
}

/// How a performance in an event is measured.
///
/// Timed events rank lower values higher, measured (field) events rank
/// higher values higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    Timed,
    Measured,
}

/// An event type definition with its kind tags resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EventType {
    pub name: String,
    pub kind: EventKind,
    pub measurement: MeasurementKind,
}

impl EventType {
    /// Classify an event type from its name alone.
    ///
    /// A name starting with a digit ("100m Dash", "4x400 Relay") is timed,
    /// anything else is measured. A name containing "relay" in any case is
    /// a relay event.
    pub fn classify(name: &str) -> Self {
        let measurement = if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            MeasurementKind::Timed
        } else {
            MeasurementKind::Measured
        };
        let kind = if name.to_lowercase().contains("relay") {
            EventKind::Relay
        } else {
            EventKind::Individual
        };

        Self {
            name: name.to_string(),
            kind,
            measurement,
        }
    }

    pub fn is_relay(&self) -> bool {
        self.kind == EventKind::Relay
    }

    pub fn is_timed(&self) -> bool {
        self.measurement == MeasurementKind::Timed
    }
}

/// Event types known up front, keyed by name.
///
/// Declared types win over name-based classification. A name that was never
/// declared is classified with [`EventType::classify`] on its first lookup and
/// the result is kept for later lookups.
#[derive(Debug, Default)]
pub struct EventCatalog {
    types: HashMap<String, EventType>,
    classified: RwLock<HashMap<String, EventType>>,
}

impl Clone for EventCatalog {
    fn clone(&self) -> Self {
        let classified = self
            .classified
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        Self {
            types: self.types.clone(),
            classified: RwLock::new(classified),
        }
    }
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_types<I>(types: I) -> Self
    where
        I: IntoIterator<Item = EventType>,
    {
        let mut catalog = Self::new();
        for event_type in types {
            catalog.insert(event_type);
        }
        catalog
    }

    /// Declare an event type, replacing any earlier declaration with the same name.
    pub fn insert(&mut self, event_type: EventType) {
        self.classified
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&event_type.name);
        self.types.insert(event_type.name.clone(), event_type);
    }

    /// Number of declared event types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn resolve(&self, name: &str) -> EventType {
        if let Some(declared) = self.types.get(name) {
            return declared.clone();
        }

        let cached = self
            .classified
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .cloned();
        if let Some(event_type) = cached {
            return event_type;
        }

        let event_type = EventType::classify(name);
        self.classified
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(name.to_string())
            .or_insert_with(|| event_type.clone());
        event_type
    }
}
