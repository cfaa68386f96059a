pub mod formatter;

pub use formatter::{
    format_leaderboard, format_leaderboard_tsv, format_points, format_prs, format_score_sheet,
    format_scored_entries, should_use_colors,
};
