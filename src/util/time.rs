//! Date handling for store timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Renders a record timestamp as `dd/mm/yyyy`, `-` when missing or
/// unreadable.
///
/// The store has written several shapes over time: RFC 3339, a
/// space-separated UTC form, and bare dates coming straight from the date
/// inputs. All of them are accepted.
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return "-".to_string();
    };
    match parse_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.fZ") {
        return Some(parsed.date());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
