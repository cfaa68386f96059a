pub mod format;
pub mod parse;

pub use format::{format_measured, format_performance, format_timed};
pub use parse::{parse_performance, parse_performance_text};
