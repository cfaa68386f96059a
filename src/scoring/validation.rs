use std::collections::BTreeMap;
use tracing::warn;

use super::config::ScoringConfig;
use super::table::ScoringTable;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let min_teams = config.championship_min_teams;

    if min_teams < 2 {
        errors.push("scoring.championship_min_teams: must be at least 2".to_string());
    }

    if config.championship.is_empty() {
        errors.push("scoring.championship: must award points to at least one place".to_string());
    }
    check_points("scoring.championship", &config.championship, &mut errors);

    check_tables("scoring.individual", &config.individual, min_teams, &mut errors);
    // Every non-championship team count must be scorable for individual events
    check_coverage("scoring.individual", &config.individual, min_teams, &mut errors);

    if config.relay.is_empty() {
        warn!("no relay scoring tables configured; relay events cannot be scored below championship size");
    } else {
        check_tables("scoring.relay", &config.relay, min_teams, &mut errors);
        check_coverage("scoring.relay", &config.relay, min_teams, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_tables(
    path: &str,
    tables: &BTreeMap<u32, ScoringTable>,
    min_teams: u32,
    errors: &mut Vec<String>,
) {
    for (num_teams, table) in tables {
        let table_path = format!("{}[{}]", path, num_teams);
        if *num_teams < 2 {
            errors.push(format!("{}: team count must be at least 2", table_path));
        } else if *num_teams >= min_teams {
            errors.push(format!(
                "{}: unreachable, {} or more teams always use the championship table",
                table_path, min_teams
            ));
        }
        check_points(&table_path, table, errors);
    }
}

/// Team counts in `2..min_teams` without a table, as inclusive ranges.
fn missing_team_counts(tables: &BTreeMap<u32, ScoringTable>, min_teams: u32) -> Vec<(u32, u32)> {
    let mut gaps = Vec::new();
    let mut next = 2;
    for &num_teams in tables.keys().filter(|n| **n >= 2 && **n < min_teams) {
        if num_teams > next {
            gaps.push((next, num_teams - 1));
        }
        next = num_teams + 1;
    }
    if next < min_teams {
        gaps.push((next, min_teams - 1));
    }
    gaps
}

// One error per table family, however wide the gaps
fn check_coverage(
    path: &str,
    tables: &BTreeMap<u32, ScoringTable>,
    min_teams: u32,
    errors: &mut Vec<String>,
) {
    let gaps = missing_team_counts(tables, min_teams);
    match gaps.as_slice() {
        [] => {}
        [(low, high)] if low == high => {
            errors.push(format!("{}: missing table for {} teams", path, low));
        }
        _ => {
            let ranges = gaps
                .iter()
                .map(|(low, high)| {
                    if low == high {
                        low.to_string()
                    } else {
                        format!("{}..={}", low, high)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            errors.push(format!("{}: missing tables for {} teams", path, ranges));
        }
    }
}

fn check_points(path: &str, table: &ScoringTable, errors: &mut Vec<String>) {
    for (i, points) in table.points().iter().enumerate() {
        if !points.is_finite() || *points < 0.0 {
            errors.push(format!(
                "{}[{}]: invalid '{}' - points must be a non-negative number",
                path, i, points
            ));
        }
    }
}
