//! Subset equality between two JSON trees.
//!
//! Values are compared either loosely, with the scalar coercions of abstract
//! equality (`1 == "1"`, `true == 1`, `null == absent`), or strictly, by
//! structural `Value` equality.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::parse_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equality {
    #[default]
    Loose,
    Strict,
}

/// Loosely compare `a` and `b` on `keys`, or on all of `a`'s own keys when
/// `keys` is `None`. An empty key list is vacuously equal.
pub fn equal_for_keys(a: &Value, b: &Value, keys: Option<&[&str]>) -> bool {
    equal_for_keys_with(a, b, keys, Equality::Loose)
}

/// [`equal_for_keys`] with an explicit comparison mode.
///
/// Keys are checked in order and the first mismatch stops the comparison.
pub fn equal_for_keys_with(
    a: &Value,
    b: &Value,
    keys: Option<&[&str]>,
    mode: Equality,
) -> bool {
    match keys {
        Some(keys) => keys.iter().all(|key| key_matches(a, b, key, mode)),
        None => own_keys(a)
            .iter()
            .all(|key| key_matches(a, b, key, mode)),
    }
}

/// Own keys of a node: object keys, or array indices as strings.
pub fn own_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

fn key_matches(a: &Value, b: &Value, key: &str, mode: Equality) -> bool {
    let left = lookup(a, key);
    let right = lookup(b, key);
    match mode {
        Equality::Loose => loose_eq(left, right),
        Equality::Strict => left == right,
    }
}

fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => parse_index(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Loose equality where `None` stands for an absent value.
pub fn loose_eq(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => true,
        (None | Some(Value::Null), _) | (_, None | Some(Value::Null)) => false,
        (Some(a), Some(b)) => loose_eq_values(a, b),
    }
}

fn loose_eq_values(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => number_of(x) == number_of(y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| loose_eq(Some(l), Some(r)))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len() && x.iter().all(|(k, v)| loose_eq(Some(v), y.get(k)))
        }
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => {
            loose_eq_values(&Value::from(u8::from(*flag)), other)
        }
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            number_of(n) == string_to_number(s)
        }
        (container @ (Value::Array(_) | Value::Object(_)), scalar)
        | (scalar, container @ (Value::Array(_) | Value::Object(_))) => {
            loose_eq_values(&Value::String(primitive_string(container)), scalar)
        }
        _ => false,
    }
}

fn number_of(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// String-to-number coercion: whitespace is trimmed, empty is 0, radix
/// prefixes and signed `Infinity` are accepted, anything else is NaN.
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| trimmed.strip_prefix(p)) {
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }

    let numeric_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric_chars {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// String form a container takes when compared against a scalar.
fn primitive_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(primitive_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_string(n: &serde_json::Number) -> String {
    if n.is_f64() {
        let f = number_of(n);
        if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
            return format!("{:.0}", f);
        }
        return f.to_string();
    }
    n.to_string()
}
