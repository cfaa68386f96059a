use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rank within one event at one meet. 1 is first place; 0 or below means
/// the athlete did not place.
pub type Placement = i64;

/// Raw result as entered: usually text ("11.32", "1:02.50", "DNF"),
/// sometimes already a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PerformanceDetail {
    Number(f64),
    Text(String),
}

impl From<&str> for PerformanceDetail {
    fn from(s: &str) -> Self {
        PerformanceDetail::Text(s.to_string())
    }
}

impl From<String> for PerformanceDetail {
    fn from(s: String) -> Self {
        PerformanceDetail::Text(s)
    }
}

impl From<f64> for PerformanceDetail {
    fn from(n: f64) -> Self {
        PerformanceDetail::Number(n)
    }
}

impl PerformanceDetail {
    /// True when there is nothing entered (empty or whitespace-only text).
    pub fn is_blank(&self) -> bool {
        match self {
            PerformanceDetail::Number(_) => false,
            PerformanceDetail::Text(s) => s.trim().is_empty(),
        }
    }
}

/// One athlete's placement in one event at one meet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub athlete_id: String,
    #[serde(default)]
    pub athlete_name: Option<String>,
    pub event_type: String,
    #[serde(default)]
    pub meet_id: Option<String>,
    #[serde(default)]
    pub season_id: Option<String>,
    pub placement: Placement,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub detail: Option<PerformanceDetail>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl EventRecord {
    pub fn new(athlete_id: &str, event_type: &str, placement: Placement) -> Self {
        Self {
            athlete_id: athlete_id.to_string(),
            athlete_name: None,
            event_type: event_type.to_string(),
            meet_id: None,
            season_id: None,
            placement,
            points: None,
            detail: None,
            timestamp: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.athlete_name = Some(name.to_string());
        self
    }

    pub fn with_meet(mut self, meet_id: &str) -> Self {
        self.meet_id = Some(meet_id.to_string());
        self
    }

    pub fn with_season(mut self, season_id: &str) -> Self {
        self.season_id = Some(season_id.to_string());
        self
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<PerformanceDetail>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Display name, falling back to a generic label when the store had none.
    pub fn display_name(&self) -> &str {
        self.athlete_name.as_deref().unwrap_or("Athlete")
    }
}
