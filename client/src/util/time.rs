//! Timestamp display for notification metadata.
//!
//! TRADE-OFFS
//! ==========
//! The browser's own locale formatting is used when available. Native builds
//! and unparseable values fall back to a lightly tidied copy of the raw text.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Render a server timestamp in the viewer's locale.
pub fn display_timestamp(raw: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    tidy_iso(raw)
}

/// `2024-03-01T08:15:00.000Z` -> `2024-03-01 08:15:00`.
fn tidy_iso(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_zone = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    let without_fraction = without_zone.split_once('.').map_or(without_zone, |(head, _)| head);
    without_fraction.replacen('T', " ", 1)
}
