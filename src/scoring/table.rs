use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Placement;

/// Which family of point tables applies to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Individual,
    Relay,
    Championship,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Individual => "individual",
            TableKind::Relay => "relay",
            TableKind::Championship => "championship",
        };
        f.write_str(name)
    }
}

/// Points awarded by placement. Index 0 holds first place.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScoringTable {
    points: Vec<f64>,
}

impl ScoringTable {
    pub fn new(points: Vec<f64>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points for a single placement; zero for anything outside `1..=len`.
    pub fn points_for(&self, placement: Placement) -> f64 {
        if placement < 1 {
            return 0.0;
        }
        usize::try_from(placement - 1)
            .ok()
            .and_then(|idx| self.points.get(idx))
            .copied()
            .unwrap_or(0.0)
    }
}

impl From<Vec<f64>> for ScoringTable {
    fn from(points: Vec<f64>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_in_range() {
        let table = ScoringTable::new(vec![5.0, 3.0, 1.0]);
        assert_eq!(table.points_for(1), 5.0);
        assert_eq!(table.points_for(2), 3.0);
        assert_eq!(table.points_for(3), 1.0);
    }

    #[test]
    fn test_points_for_out_of_range() {
        let table = ScoringTable::new(vec![5.0, 3.0, 1.0]);
        assert_eq!(table.points_for(4), 0.0);
        assert_eq!(table.points_for(0), 0.0);
        assert_eq!(table.points_for(-3), 0.0);
        assert_eq!(table.points_for(Placement::MAX), 0.0);
        assert_eq!(table.points_for(Placement::MIN), 0.0);
    }

    #[test]
    fn test_empty_table_scores_nothing() {
        let table = ScoringTable::default();
        assert!(table.is_empty());
        assert_eq!(table.points_for(1), 0.0);
    }

    #[test]
    fn test_table_kind_display() {
        assert_eq!(TableKind::Relay.to_string(), "relay");
        assert_eq!(TableKind::Championship.to_string(), "championship");
    }
}
