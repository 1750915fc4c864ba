/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Placeholder for a missing date
pub const NO_DATE: &str = "—";

/// Format a timestamp as DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

/// Format a timestamp as DD.MM.YYYY
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}
