pub mod event_type;
pub mod record;

pub use event_type::{EventCatalog, EventKind, EventType, MeasurementKind};
pub use record::{EventRecord, PerformanceDetail, Placement};
