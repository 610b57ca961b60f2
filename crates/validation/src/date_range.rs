//! Date-range ordering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::result::ValidationResult;

/// Parse `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp.
/// Plain dates and naive timestamps are read as UTC.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Both ends are optional; each present end must parse, and when both parse
/// the start must not be after the end.
pub fn validate_date_range(start: Option<&str>, end: Option<&str>) -> ValidationResult {
    let mut errors = Vec::new();

    let start = present(start).map(parse_date);
    let end = present(end).map(parse_date);

    if let Some(None) = start {
        errors.push("Invalid start date".to_string());
    }
    if let Some(None) = end {
        errors.push("Invalid end date".to_string());
    }
    if let (Some(Some(s)), Some(Some(e))) = (start, end) {
        if s > e {
            errors.push("Start date must be before end date".to_string());
        }
    }

    ValidationResult::from_errors(errors)
}
