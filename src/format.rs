//! Date/time formatting helpers
//!
//! Pure conversions between the backend's timestamp strings
//! (`YYYY-MM-DDTHH:MM:SS`, RFC 3339 tolerated), display strings, and the
//! values of `<input type="date">` / `<input type="time">` fields.
//! Validation failures return i18n keys so the caller can render them in
//! the active language.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a backend timestamp, tolerating an RFC 3339 offset suffix.
pub fn parse_wire(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, WIRE_FORMAT) {
        return Some(parsed);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.naive_local())
        .ok()
}

/// Wire representation of a timestamp.
pub fn to_wire(value: &NaiveDateTime) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// Display form "31/12/2026 14:30"; falls back to the raw string when the
/// timestamp does not parse, so a bad record still shows something.
pub fn format_datetime(raw: &str) -> String {
    match parse_wire(raw) {
        Some(value) => value.format("%d/%m/%Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Display form "31/12/2026"; also accepts bare dates.
pub fn format_date(raw: &str) -> String {
    if let Some(value) = parse_wire(raw) {
        return value.format("%d/%m/%Y").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Display form "14:30".
pub fn format_time(raw: &str) -> String {
    match parse_wire(raw) {
        Some(value) => value.format("%H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Value for an `<input type="date">` pre-fill.
pub fn date_input_value(raw: &str) -> String {
    match parse_wire(raw) {
        Some(value) => value.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Value for an `<input type="time">` pre-fill.
pub fn time_input_value(raw: &str) -> String {
    match parse_wire(raw) {
        Some(value) => value.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Combine separately-entered date and time-of-day fields into one
/// timestamp. Empty or malformed fields are a local validation error.
pub fn combine_date_time(date: &str, time: &str) -> Result<NaiveDateTime, String> {
    let combined = format!("{date}T{time}:00");
    NaiveDateTime::parse_from_str(&combined, WIRE_FORMAT)
        .map_err(|_| "error.invalid_datetime".to_string())
}

/// End must be strictly after start.
pub fn validate_time_range(start: &NaiveDateTime, end: &NaiveDateTime) -> Result<(), String> {
    if end > start {
        Ok(())
    } else {
        Err("error.end_before_start".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_and_rfc3339_timestamps() {
        assert!(parse_wire("2026-03-01T09:00:00").is_some());
        assert!(parse_wire("2026-03-01T09:00:00+02:00").is_some());
        assert!(parse_wire("pas une date").is_none());
    }

    #[test]
    fn formats_display_strings() {
        assert_eq!(format_datetime("2026-03-01T09:05:00"), "01/03/2026 09:05");
        assert_eq!(format_date("2026-03-01"), "01/03/2026");
        assert_eq!(format_time("2026-03-01T09:05:00"), "09:05");
        // unparseable input is shown verbatim, never hidden
        assert_eq!(format_datetime("???"), "???");
    }

    #[test]
    fn input_field_values_round_trip() {
        let raw = "2026-03-01T09:05:00";
        assert_eq!(date_input_value(raw), "2026-03-01");
        assert_eq!(time_input_value(raw), "09:05");
        let combined = combine_date_time(&date_input_value(raw), &time_input_value(raw)).unwrap();
        assert_eq!(to_wire(&combined), raw);
    }

    #[test]
    fn rejects_missing_or_malformed_fields() {
        assert_eq!(
            combine_date_time("", "09:00").unwrap_err(),
            "error.invalid_datetime"
        );
        assert_eq!(
            combine_date_time("2026-03-01", "").unwrap_err(),
            "error.invalid_datetime"
        );
    }

    #[test]
    fn end_must_be_strictly_after_start() {
        let start = combine_date_time("2026-03-01", "10:00").unwrap();
        let same = combine_date_time("2026-03-01", "10:00").unwrap();
        let later = combine_date_time("2026-03-01", "10:30").unwrap();
        let earlier = combine_date_time("2026-03-01", "09:30").unwrap();

        assert!(validate_time_range(&start, &later).is_ok());
        assert_eq!(
            validate_time_range(&start, &same).unwrap_err(),
            "error.end_before_start"
        );
        assert_eq!(
            validate_time_range(&start, &earlier).unwrap_err(),
            "error.end_before_start"
        );
    }
}
