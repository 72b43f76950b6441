//! Boundary checks shared by the create/update payloads.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::ModelError;

pub fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::invalid(format!("{field} is required")));
    }
    Ok(())
}

/// Rejects an explicitly provided but blank value.
pub fn require_text_opt(field: &str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}

pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), ModelError> {
    if !allowed.contains(&value) {
        return Err(ModelError::invalid(format!(
            "{field} must be one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

/// Parse an event date sent by the site's forms.
///
/// Accepts RFC 3339 (`2024-06-01T10:00:00Z`), a naive date-time
/// (`2024-06-01T10:00` or with seconds) taken as UTC, or a plain date
/// (`2024-06-01`) at midnight UTC. Blank input yields `None`.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
