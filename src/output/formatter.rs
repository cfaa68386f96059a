use std::collections::BTreeMap;
use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::leaderboard::AthleteStat;
use crate::meet::{ordinal, ScoredEntry, SheetGroup};
use crate::model::PerformanceDetail;
use crate::records::PersonalRecord;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format points without a trailing ".0" (5, 1.25, 0.5)
pub fn format_points(points: f64) -> String {
    format!("{}", points)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a leaderboard as one line per athlete
/// Columns: Index, Name, Total, Events, Meets, Points/Event, Points/Meet
/// Averages always show two decimals.
pub fn format_leaderboard(stats: &[AthleteStat], use_colors: bool) -> String {
    if stats.is_empty() {
        return "No athletes found.".to_string();
    }

    // Index column 4, stat columns ~60
    let fixed_width = 4 + 60;
    let name_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => width - fixed_width,
        Some(_) => 20,
        None => usize::MAX,
    };

    stats
        .iter()
        .enumerate()
        .map(|(idx, stat)| {
            let index_str = format!("{:>2}.", idx + 1);
            let name = truncate_name(&stat.athlete_name, name_width);
            let numbers = format!(
                "Total Points: {} | Events: {} | Meets: {} | Points/Event: {:.2} | Points/Meet: {:.2}",
                format_points(stat.total_points),
                stat.event_count,
                stat.distinct_meet_count,
                stat.points_per_event,
                stat.points_per_meet
            );

            if use_colors {
                format!("{} {}  {}", index_str.dimmed(), name.bold(), numbers)
            } else {
                format!("{} {}  {}", index_str, name, numbers)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a leaderboard as tab-separated values for scripting
/// Columns: athlete_id, name, total, events, meets, points/event, points/meet
pub fn format_leaderboard_tsv(stats: &[AthleteStat]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{:.2}\t{:.2}",
                stat.athlete_id,
                stat.athlete_name,
                format_points(stat.total_points),
                stat.event_count,
                stat.distinct_meet_count,
                stat.points_per_event,
                stat.points_per_meet
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format personal records as "{event}: {pr}", "no PR" when none could be read
pub fn format_prs(records: &BTreeMap<String, PersonalRecord>, use_colors: bool) -> String {
    if records.is_empty() {
        return "No events recorded.".to_string();
    }

    records
        .values()
        .map(|record| {
            let value = if record.display.is_empty() {
                "no PR".to_string()
            } else {
                record.display.clone()
            };
            let when = record
                .achieved_at
                .map(|at| format!(" ({})", at.format("%Y-%m-%d")))
                .unwrap_or_default();

            if use_colors {
                format!("{}: {}{}", record.event_type.cyan(), value.bold(), when.dimmed())
            } else {
                format!("{}: {}{}", record.event_type, value, when)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_detail(detail: Option<&PerformanceDetail>) -> String {
    match detail {
        Some(PerformanceDetail::Text(s)) if !s.trim().is_empty() => s.clone(),
        Some(PerformanceDetail::Number(n)) => format!("{}", n),
        _ => "N/A".to_string(),
    }
}

/// Format a meet score sheet: one heading per event type, then one line
/// per result in place order
pub fn format_score_sheet(groups: &[SheetGroup], use_colors: bool) -> String {
    if groups.is_empty() {
        return "No results for this meet.".to_string();
    }

    groups
        .iter()
        .map(|group| {
            let heading = if use_colors {
                group.event_type.bold().to_string()
            } else {
                group.event_type.to_string()
            };
            let lines = group.entries.iter().map(|ev| {
                format!(
                    "  {} | {} Place | {} points | {}",
                    ev.display_name(),
                    ordinal(ev.placement),
                    format_points(ev.points.unwrap_or(0.0)),
                    format_detail(ev.detail.as_ref())
                )
            });
            std::iter::once(heading)
                .chain(lines)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format scored entries for one event as "{place} {athlete} {points}"
pub fn format_scored_entries(entries: &[ScoredEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{:>5}  {}  {}",
                ordinal(entry.placement),
                entry.athlete_id,
                format_points(entry.points)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
