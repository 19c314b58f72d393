//! Numeric and text coercion for loosely-typed layout fields
//!
//! Layout documents come from an editor that does not guarantee field types.
//! Every helper here is total: malformed input degrades to a default instead
//! of an error, so the exporter never has to fail.

use serde_json::Value;

/// Coerce any JSON value to a finite number
///
/// Numbers are kept, strings are parsed after trimming, everything else
/// (including NaN and infinities) becomes `0`.
pub fn number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => finite(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => s.trim().parse::<f64>().map(finite).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerce an optional field, treating `None` as `0`
pub fn number_or_zero(value: Option<&Value>) -> f64 {
    value.map(number).unwrap_or(0.0)
}

/// Map NaN and infinities to `0`, and negative zero to positive zero
#[inline]
pub fn finite(n: f64) -> f64 {
    if n.is_finite() && n != 0.0 {
        n
    } else {
        0.0
    }
}

/// Render a number the way the script expects it (`10`, `10.5`, `-3.25`)
pub fn format_number(n: f64) -> String {
    format!("{}", finite(n))
}

/// Read a value as text
///
/// Strings pass through, numbers and booleans use their JSON text.
/// `null`, arrays and objects count as absent.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read an optional numeric field, keeping absence distinct from zero
pub fn optional_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(number(v)),
    }
}
