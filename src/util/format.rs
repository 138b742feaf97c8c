//! Formatting for timestamps, sizes, and rates coming off the wire.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Date part of an ISO-8601 timestamp, for table cells.
pub fn format_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Timestamp with the seconds-and-below noise trimmed off.
pub fn format_datetime(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, time)) => {
            let hhmm: String = time.chars().take(5).collect();
            format!("{date} {hhmm}")
        }
        None => timestamp.to_owned(),
    }
}

/// File size in KB with one decimal, matching the upload list.
pub fn format_size_kb(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1024.0)
}

/// A 0..=1 confidence as a whole percentage.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

/// A signed percentage rate with one decimal, e.g. `+4.2%`.
pub fn format_trend(rate: f64) -> String {
    format!("{rate:+.1}%")
}
