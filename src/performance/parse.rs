use crate::model::PerformanceDetail;

/// Normalize a raw result into a comparable number.
///
/// Numbers pass through unchanged. Text goes through [`parse_performance_text`].
/// Missing input yields `None`.
pub fn parse_performance(raw: Option<&PerformanceDetail>) -> Option<f64> {
    match raw? {
        PerformanceDetail::Number(n) => Some(*n),
        PerformanceDetail::Text(s) => parse_performance_text(s),
    }
}

/// Parse a free-text result.
///
/// - `"m:ss.hh"` becomes `m * 60 + ss.hh` seconds
/// - anything mentioning DNF or DNS is a non-finish
/// - otherwise every character except digits and `.` is dropped and the
///   rest is read as a number ("11.32s" -> 11.32)
///
/// Never fails: text that cannot be read yields `None`.
pub fn parse_performance_text(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some((minutes, seconds)) = s.split_once(':') {
        let minutes = parse_number(minutes)?;
        let seconds = parse_number(seconds)?;
        return Some(minutes * 60.0 + seconds);
    }

    let lower = s.to_ascii_lowercase();
    if lower.contains("dnf") || lower.contains("dns") {
        return None;
    }

    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    parse_number(&cleaned)
}

// f64::from_str accepts "inf" and "NaN", which are not results
fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_parse_plain_seconds() {
        assert!(approx(parse_performance_text("11.32"), 11.32));
    }

    #[test]
    fn test_parse_minutes_seconds() {
        assert!(approx(parse_performance_text("1:02.50"), 62.5));
        assert!(approx(parse_performance_text("4:30"), 270.0));
    }

    #[test]
    fn test_parse_minutes_seconds_non_numeric_part() {
        assert_eq!(parse_performance_text("a:02.50"), None);
        assert_eq!(parse_performance_text("1:xx"), None);
        assert_eq!(parse_performance_text("1:"), None);
        assert_eq!(parse_performance_text("1:02:03"), None);
    }

    #[test]
    fn test_parse_non_finish() {
        assert_eq!(parse_performance_text("DNF"), None);
        assert_eq!(parse_performance_text("dns"), None);
        assert_eq!(parse_performance_text("Fell - DNF"), None);
    }

    #[test]
    fn test_parse_strips_units() {
        assert!(approx(parse_performance_text("11.32s"), 11.32));
        assert!(approx(parse_performance_text("42.1 m"), 42.1));
    }

    #[test]
    fn test_parse_feet_inches_concatenates_digits() {
        // Only digits and decimal points survive
        assert!(approx(parse_performance_text("42-3"), 423.0));
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert_eq!(parse_performance_text(""), None);
        assert_eq!(parse_performance_text("   "), None);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_performance_text("fast"), None);
        assert_eq!(parse_performance_text("1.2.3"), None);
        assert_eq!(parse_performance_text("inf"), None);
        assert_eq!(parse_performance_text("NaN"), None);
    }

    #[test]
    fn test_parse_performance_number_passes_through() {
        let detail = PerformanceDetail::Number(42.1);
        assert_eq!(parse_performance(Some(&detail)), Some(42.1));
    }

    #[test]
    fn test_parse_performance_missing() {
        assert_eq!(parse_performance(None), None);
    }

    #[test]
    fn test_parse_performance_text_detail() {
        let detail = PerformanceDetail::from("1:02.50");
        assert!(approx(parse_performance(Some(&detail)), 62.5));
        let detail = PerformanceDetail::from("DNF");
        assert_eq!(parse_performance(Some(&detail)), None);
    }
}
