use std::fmt::Display;

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "--";

/// Text shown for a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

pub fn or_placeholder<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Reading value exactly as given, spelled the way a browser prints a
/// number: shortest round-trip digits, `-0` as `0`, and exponent form
/// (`1e+21`, `1e-7`) outside [1e-6, 1e21).
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        return v.to_string();
    }
    // `{:e}` gives the shortest mantissa; the exponent needs an explicit `+`
    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

pub fn format_reading(value: Option<f64>) -> String {
    or_placeholder(value.map(format_number))
}

/// Confidence in [0, 1] as a percentage with one decimal: 0.85 -> "85.0%".
/// Values outside the range go through the same formula.
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", to_fixed_1(confidence * 100.0))
}

/// One-decimal rendering with the browser's `toFixed(1)` rules: exact
/// halfway values round away from zero, `-0` prints unsigned, and
/// magnitudes from 1e21 up fall back to plain number text.
fn to_fixed_1(v: f64) -> String {
    if !v.is_finite() || v.abs() >= 1e21 {
        return format_number(v);
    }
    if v == 0.0 {
        return "0.0".to_string();
    }
    // A value sits exactly between two tenths only when it is an odd
    // multiple of 0.25 (x.25 or x.75); scaling by 4 is exact.
    let quarters = v.abs() * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0 && quarters < 2f64.powi(52);
    if !is_tie {
        return format!("{v:.1}");
    }
    let tenths = (v.abs() * 10.0).round() as u64;
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}

pub fn format_timestamp(iso: Option<&str>) -> String {
    match iso {
        Some(s) if !s.is_empty() => format_local(s),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(all(feature = "web"))]
pub fn format_local(iso: &str) -> String {
    use js_sys::Date;
    use wasm_bindgen::JsValue;
    let d = Date::new(&JsValue::from_str(iso));
    // An unparsable input yields the browser's own "Invalid Date".
    d.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[cfg(not(all(feature = "web")))]
pub fn format_local(iso: &str) -> String {
    use chrono::Local;
    match parse_iso(iso) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Accepts RFC 3339, an offset-less date-time (read as local time), or a
/// bare date (read as UTC midnight).
#[cfg(not(all(feature = "web")))]
pub fn parse_iso(iso: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
    let s = iso.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
