use chrono::{NaiveDate, NaiveDateTime};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date using `format`, also accepting an ISO timestamp
/// (`2024-01-15T09:30:00`) whose date part matches the default format.
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, format) {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|dt| dt.date())
}

/// Check that `format` can render a date, which is enough to reject garbage specifiers.
pub fn is_valid_format(format: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
