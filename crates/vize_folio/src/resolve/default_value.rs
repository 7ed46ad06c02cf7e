//! Default value resolution.

use serde_json::Value;

use crate::types::PropDefault;

/// Resolve a declared default to its documentation text.
///
/// Absent defaults are the text `"undefined"`. Factories are invoked once and
/// their result is serialized; literals are serialized as they are.
pub fn resolve_default(default: Option<&PropDefault>) -> String {
    match default {
        None => "undefined".to_string(),
        Some(default) => to_json_text(&default.value()),
    }
}

/// Serialize a value the way `JSON.stringify` would.
fn to_json_text(value: &Value) -> String {
    if has_integral_float(value) {
        integral_floats_as_ints(value.clone()).to_string()
    } else {
        value.to_string()
    }
}

/// Largest integer an f64 represents exactly (2^53).
const MAX_SAFE_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

fn is_integral_float(n: &serde_json::Number) -> bool {
    n.is_f64()
        && n
            .as_f64()
            .is_some_and(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_FLOAT_INT)
}

fn has_integral_float(value: &Value) -> bool {
    match value {
        Value::Number(n) => is_integral_float(n),
        Value::Array(items) => items.iter().any(has_integral_float),
        Value::Object(map) => map.values().any(has_integral_float),
        _ => false,
    }
}

/// `100.0` prints as `100` in JavaScript.
fn integral_floats_as_ints(value: Value) -> Value {
    match value {
        Value::Number(n) if is_integral_float(&n) => match n.as_f64() {
            Some(f) => Value::from(f as i64),
            None => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(integral_floats_as_ints).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, integral_floats_as_ints(value)))
                .collect(),
        ),
        other => other,
    }
}
