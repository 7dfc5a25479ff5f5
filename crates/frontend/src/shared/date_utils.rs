/// Utilities for date formatting
///
/// Rows carry ISO dates (`YYYY-MM-DD`); tables show them as `MM/DD/YYYY`.
use chrono::NaiveDate;

const ISO_DATE: &str = "%Y-%m-%d";

pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part, ISO_DATE).ok()
}

/// Format ISO date string to MM/DD/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "03/15/2024"
pub fn format_date(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => date.format("%m/%d/%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Range as the timeline column shows it: "01/15/2024 - 06/30/2024"
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}
