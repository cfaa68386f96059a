use crate::model::MeasurementKind;

/// Format seconds as `m:ss.hh` ("1:02.50", "0:11.20").
pub fn format_timed(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let hundredths = (seconds.abs() * 100.0).round() as u64;
    let minutes = hundredths / 6000;
    let secs = (hundredths % 6000) / 100;
    let frac = hundredths % 100;
    format!("{}{}:{:02}.{:02}", sign, minutes, secs, frac)
}

/// Format a field mark as its plain number, no unit ("19.7", "20").
pub fn format_measured(value: f64) -> String {
    format!("{}", value)
}

pub fn format_performance(value: f64, measurement: MeasurementKind) -> String {
    match measurement {
        MeasurementKind::Timed => format_timed(value),
        MeasurementKind::Measured => format_measured(value),
    }
}
