//! Date handling for sheet cells
//!
//! Cells are untyped strings; the gateway serializes spreadsheet dates as
//! ISO date-times, which are shown as a plain local date in the table and
//! edited through `<input type="date">` (yyyy-mm-dd).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATETIME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T").expect("valid ISO prefix pattern"));

/// True for values starting like `2024-03-15T...`
pub fn is_iso_datetime(raw: &str) -> bool {
    ISO_DATETIME_PREFIX.is_match(raw)
}

/// Text shown in a table cell.
/// Example: "2024-03-15T12:00:00.000Z" -> local date, "Ana" -> "Ana"
pub fn display_cell(raw: &str) -> String {
    if !is_iso_datetime(raw) {
        return raw.to_string();
    }
    locale_date(raw).unwrap_or_else(|| raw.to_string())
}

#[cfg(target_arch = "wasm32")]
fn locale_date(raw: &str) -> Option<String> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return None;
    }
    Some(
        date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into(),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_date(raw: &str) -> Option<String> {
    parse_local_date(raw).map(|d| d.format("%d.%m.%Y").to_string())
}

/// Calendar date of `raw` in local time, time and zone stripped.
pub fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Value for a date input (yyyy-mm-dd).
///
/// Unparseable values are passed through unchanged with a warning.
pub fn date_input_value(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_local_date(raw) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            log::warn!("Could not parse date: {}", raw);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_prefix() {
        assert!(is_iso_datetime("2024-03-15T14:02:26.123Z"));
        assert!(is_iso_datetime("2024-03-15Tgarbage"));
        assert!(!is_iso_datetime("2024-03-15"));
        assert!(!is_iso_datetime("15.03.2024"));
        assert!(!is_iso_datetime(" 2024-03-15T10:00:00Z"));
    }

    #[test]
    fn test_display_cell() {
        // midday UTC stays on the same calendar day in every zone within +-11h
        let shown = display_cell("2024-03-15T12:00:00.000Z");
        assert_ne!(shown, "2024-03-15T12:00:00.000Z");
        assert!(shown.contains("2024") && shown.contains("15"));
        assert!(!shown.contains('T'));
        assert_eq!(display_cell("Ana"), "Ana");
        assert_eq!(display_cell("2024-03-15"), "2024-03-15");
        assert_eq!(display_cell(""), "");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_locale_date_format() {
        assert_eq!(locale_date("2024-03-15T12:00:00.000Z").as_deref(), Some("15.03.2024"));
    }

    #[test]
    fn test_display_cell_unparseable_iso_is_verbatim() {
        assert_eq!(display_cell("2024-13-45Tnope"), "2024-13-45Tnope");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2024-03-15T12:00:00.000Z"), "2024-03-15");
        assert_eq!(date_input_value("2024-03-15T08:30"), "2024-03-15");
        assert_eq!(date_input_value("2024-03-15"), "2024-03-15");
        assert_eq!(date_input_value(""), "");
    }

    #[test]
    fn test_date_input_value_falls_back_to_raw() {
        assert_eq!(date_input_value("next tuesday"), "next tuesday");
    }
}
