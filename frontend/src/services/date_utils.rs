use chrono::{DateTime, NaiveDate};

/// Format a raw x-axis label as short month plus numeric year, e.g.
/// "Mar 2024". Accepts epoch timestamps (seconds or milliseconds) and
/// ISO-style date strings; anything unrecognized is returned verbatim.
pub fn format_month_year(raw: &str) -> String {
    match parse_label(raw) {
        Some(date) => date.format("%b %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_label(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(timestamp) = trimmed.parse::<i64>() {
        return timestamp_to_date(timestamp);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return timestamp_to_date(value as i64);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    // "2024-03" style month labels
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d") {
        return Some(date);
    }

    None
}

/// Epoch values from JavaScript are milliseconds; treat magnitudes too
/// large for a plausible seconds timestamp as millis.
fn timestamp_to_date(timestamp: i64) -> Option<NaiveDate> {
    let seconds = if timestamp.abs() >= 100_000_000_000 {
        timestamp / 1000
    } else {
        timestamp
    };
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_seconds() {
        // 2024-03-15T00:00:00Z
        assert_eq!(format_month_year("1710460800"), "Mar 2024");
    }

    #[test]
    fn formats_epoch_milliseconds() {
        assert_eq!(format_month_year("1710460800000"), "Mar 2024");
    }

    #[test]
    fn formats_iso_dates_and_months() {
        assert_eq!(format_month_year("2024-03-15"), "Mar 2024");
        assert_eq!(format_month_year("2024-03"), "Mar 2024");
        assert_eq!(format_month_year("2024-01-01"), "Jan 2024");
    }

    #[test]
    fn passes_through_unrecognized_labels() {
        assert_eq!(format_month_year("opening balance"), "opening balance");
        assert_eq!(format_month_year("0"), "Jan 1970");
    }
}
