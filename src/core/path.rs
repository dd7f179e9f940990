//! Delimited path access into JSON trees.
//!
//! A path like `a.b.0.c` is split on a delimiter into segments. Each segment
//! addresses an object key or an array index. Reads never fail: a missing
//! segment yields the caller's default. Writes create the containers they
//! need along the way.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

pub const DEFAULT_DELIMITER: &str = ".";

/// Largest segment value treated as an array index. Larger numbers are plain keys.
pub const MAX_ARRAY_INDEX: usize = 4_294_967_294;

/// How far past its end a single write may extend an array.
pub const MAX_ARRAY_PADDING: usize = 65_536;

/// Split a path into segments. An empty delimiter keeps the path whole.
pub fn segments<'a>(path: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![path];
    }
    path.split(delimiter).collect()
}

/// True when the segment is a canonical non-negative integer (`0`, `7`, `42`).
///
/// Leading zeros and signs are rejected, so `"01"` and `"-1"` stay object keys.
pub fn is_index_segment(segment: &str) -> bool {
    parse_index(segment).is_some()
}

pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| *index <= MAX_ARRAY_INDEX)
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Resolve a path, returning `None` as soon as a segment is not owned by the
/// current node.
pub fn find<'a>(root: &'a Value, path: &str, delimiter: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments(path, delimiter) {
        current = child(current, segment)?;
    }
    Some(current)
}

/// Read the value at a `.`-delimited path, or `default` when any segment is missing.
pub fn get<'a>(root: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get_delimited(root, path, default, DEFAULT_DELIMITER)
}

/// [`get`] with a custom delimiter.
pub fn get_delimited<'a>(
    root: &'a Value,
    path: &str,
    default: &'a Value,
    delimiter: &str,
) -> &'a Value {
    find(root, path, delimiter).unwrap_or(default)
}

/// Write `value` at a `.`-delimited path, creating intermediate containers.
///
/// Returns the mutated root.
pub fn set<'a>(root: &'a mut Value, path: &str, value: Value) -> Result<&'a mut Value> {
    set_delimited(root, path, value, DEFAULT_DELIMITER)
}

/// [`set`] with a custom delimiter.
///
/// Walking all but the last segment, any slot that is absent or holds a
/// non-container is replaced by an array when the following segment is an
/// index, otherwise by an object. A `null` root is promoted the same way
/// using the first segment; a scalar root is rejected.
pub fn set_delimited<'a>(
    root: &'a mut Value,
    path: &str,
    value: Value,
    delimiter: &str,
) -> Result<&'a mut Value> {
    let segments = segments(path, delimiter);
    let Some((last, walk)) = segments.split_last() else {
        return Ok(root);
    };

    if root.is_null() {
        *root = container_for(segments[0]);
    }
    if !is_container(root) {
        return Err(Error::path_not_container(path, segments[0], root));
    }

    {
        let mut parent: &mut Value = &mut *root;
        for (i, segment) in walk.iter().enumerate() {
            let slot = slot_mut(parent, segment, path)?;
            if !is_container(slot) {
                *slot = container_for(segments[i + 1]);
            }
            parent = slot;
        }
        *slot_mut(parent, last, path)? = value;
    }

    Ok(root)
}

/// Remove the value at a `.`-delimited path, returning it if it existed.
pub fn remove(root: &mut Value, path: &str) -> Option<Value> {
    remove_delimited(root, path, DEFAULT_DELIMITER)
}

/// [`remove`] with a custom delimiter. Array elements after a removed index shift down.
pub fn remove_delimited(root: &mut Value, path: &str, delimiter: &str) -> Option<Value> {
    let segments = segments(path, delimiter);
    let (last, walk) = segments.split_last()?;

    let mut current = root;
    for segment in walk {
        current = child_mut(current, segment)?;
    }

    match current {
        Value::Object(map) => map.remove(*last),
        Value::Array(items) => {
            let index = parse_index(last)?;
            if index < items.len() {
                Some(items.remove(index))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => match parse_index(segment) {
            Some(index) => items.get_mut(index),
            None => None,
        },
        _ => None,
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn container_for(next_segment: &str) -> Value {
    if is_index_segment(next_segment) {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Borrow the child slot for `segment`, inserting `null` if it does not exist.
/// Arrays are padded with `null` up to the requested index.
fn slot_mut<'a>(parent: &'a mut Value, segment: &str, path: &str) -> Result<&'a mut Value> {
    match parent {
        Value::Object(map) => Ok(map.entry(segment).or_insert(Value::Null)),
        Value::Array(items) => {
            let index =
                parse_index(segment).ok_or_else(|| Error::path_invalid_segment(path, segment))?;
            if index >= items.len() {
                let len = index
                    .checked_add(1)
                    .filter(|len| *len - items.len() <= MAX_ARRAY_PADDING)
                    .ok_or_else(|| {
                        Error::path_invalid_segment(path, segment).with_hint(format!(
                            "A write may extend an array by at most {} elements",
                            MAX_ARRAY_PADDING
                        ))
                    })?;
                items.resize(len, Value::Null);
            }
            Ok(&mut items[index])
        }
        other => Err(Error::path_not_container(path, segment, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn get_reads_nested_value() {
        let root = json!({"a": {"b": {"c": 5}}});
        assert_eq!(get(&root, "a.b.c", &Value::Null), &json!(5));
    }

    #[test]
    fn get_returns_default_for_missing_path() {
        let root = json!({"a": 1});
        let default = json!("D");
        assert_eq!(get(&root, "x.y", &default), &default);
    }

    #[test]
    fn get_returns_default_at_any_depth() {
        let root = json!({"a": {"b": {}}});
        let default = json!("fallback");
        assert_eq!(get(&root, "a.b.c.d", &default), &default);
    }

    #[test]
    fn get_through_scalar_returns_default() {
        let root = json!({"a": "text"});
        let default = json!(0);
        assert_eq!(get(&root, "a.0", &default), &default);
    }

    #[test]
    fn get_indexes_arrays() {
        let root = json!({"items": [{"name": "x"}, {"name": "y"}]});
        assert_eq!(get(&root, "items.1.name", &Value::Null), &json!("y"));
        assert_eq!(get(&root, "items.2.name", &json!(false)), &json!(false));
        assert_eq!(get(&root, "items.01.name", &json!(false)), &json!(false));
    }

    #[test]
    fn get_returns_present_null_rather_than_default() {
        let root = json!({"a": null});
        assert_eq!(get(&root, "a", &json!(1)), &Value::Null);
    }

    #[test]
    fn get_with_custom_delimiter() {
        let root = json!({"a.b": {"c": 1}});
        assert_eq!(get_delimited(&root, "a.b/c", &Value::Null, "/"), &json!(1));
    }

    #[test]
    fn empty_delimiter_keeps_path_whole() {
        let root = json!({"a.b": 2});
        assert_eq!(get_delimited(&root, "a.b", &Value::Null, ""), &json!(2));
    }

    #[test]
    fn find_distinguishes_missing_from_null() {
        let root = json!({"a": null});
        assert_eq!(find(&root, "a", "."), Some(&Value::Null));
        assert_eq!(find(&root, "b", "."), None);
    }

    #[test]
    fn set_creates_nested_objects() {
        let mut root = json!({});
        set(&mut root, "a.b.c", json!(5)).unwrap();
        assert_eq!(root, json!({"a": {"b": {"c": 5}}}));
    }

    #[test]
    fn set_creates_array_for_index_segment() {
        let mut root = json!({});
        set(&mut root, "a.0.c", json!(5)).unwrap();
        assert_eq!(root, json!({"a": [{"c": 5}]}));
    }

    #[test]
    fn set_returns_the_root() {
        let mut root = json!({"keep": true});
        let returned = set(&mut root, "x", json!(1)).unwrap();
        assert_eq!(returned, &json!({"keep": true, "x": 1}));
    }

    #[test]
    fn set_overwrites_scalar_on_the_way() {
        let mut root = json!({"a": 1});
        set(&mut root, "a.b", json!(2)).unwrap();
        assert_eq!(root, json!({"a": {"b": 2}}));
    }

    #[test]
    fn set_keeps_existing_siblings() {
        let mut root = json!({"a": {"x": 1}});
        set(&mut root, "a.y", json!(2)).unwrap();
        assert_eq!(root, json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn set_pads_arrays_with_null() {
        let mut root = json!({"a": []});
        set(&mut root, "a.2", json!("z")).unwrap();
        assert_eq!(root, json!({"a": [null, null, "z"]}));
    }

    #[test]
    fn set_single_segment_writes_on_root() {
        let mut root = json!({});
        set(&mut root, "0", json!(1)).unwrap();
        assert_eq!(root, json!({"0": 1}));
    }

    #[test]
    fn set_promotes_null_root_by_first_segment() {
        let mut root = Value::Null;
        set(&mut root, "0.name", json!("a")).unwrap();
        assert_eq!(root, json!([{"name": "a"}]));

        let mut root = Value::Null;
        set(&mut root, "name", json!("a")).unwrap();
        assert_eq!(root, json!({"name": "a"}));
    }

    #[test]
    fn set_rejects_scalar_root() {
        let mut root = json!(3);
        let err = set(&mut root, "a", json!(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::PathNotContainer);
        assert_eq!(root, json!(3));
    }

    #[test]
    fn set_rejects_key_segment_on_array() {
        let mut root = json!({"a": [1]});
        let err = set(&mut root, "a.name", json!(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::PathInvalidSegment);
    }

    #[test]
    fn set_treats_oversized_number_as_object_key() {
        let mut root = json!({});
        set(&mut root, "a.18446744073709551615", json!(1)).unwrap();
        assert_eq!(root, json!({"a": {"18446744073709551615": 1}}));
        assert!(!is_index_segment("4294967295"));
        assert!(is_index_segment("4294967294"));
    }

    #[test]
    fn set_rejects_oversized_index_on_existing_array() {
        let mut root = json!({"a": [1]});
        let err = set(&mut root, "a.18446744073709551615", json!(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::PathInvalidSegment);
        assert_eq!(root, json!({"a": [1]}));
    }

    #[test]
    fn set_rejects_padding_past_limit() {
        let mut root = json!({"a": [1]});
        let err = set(&mut root, "a.100000000", json!(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::PathInvalidSegment);
        assert_eq!(err.hints.len(), 2);
        assert_eq!(root, json!({"a": [1]}));

        let edge = MAX_ARRAY_PADDING.to_string();
        set(&mut root, &format!("a.{}", edge), json!(2)).unwrap();
        assert_eq!(root["a"].as_array().map(Vec::len), Some(MAX_ARRAY_PADDING + 1));
    }

    #[test]
    fn set_then_get_with_custom_delimiter() {
        let mut root = json!({});
        set_delimited(&mut root, "a/b", json!(true), "/").unwrap();
        assert_eq!(root, json!({"a": {"b": true}}));
        assert_eq!(get_delimited(&root, "a/b", &Value::Null, "/"), &json!(true));
    }

    #[test]
    fn remove_deletes_nested_key() {
        let mut root = json!({"a": {"b": 1, "c": 2}});
        assert_eq!(remove(&mut root, "a.b"), Some(json!(1)));
        assert_eq!(root, json!({"a": {"c": 2}}));
    }

    #[test]
    fn remove_shifts_array_elements() {
        let mut root = json!({"a": [1, 2, 3]});
        assert_eq!(remove(&mut root, "a.0"), Some(json!(1)));
        assert_eq!(root, json!({"a": [2, 3]}));
    }

    #[test]
    fn remove_missing_path_is_none() {
        let mut root = json!({"a": 1});
        assert_eq!(remove(&mut root, "a.b.c"), None);
        assert_eq!(remove(&mut root, "x"), None);
        assert_eq!(root, json!({"a": 1}));
    }

    #[test]
    fn index_segment_detection() {
        assert!(is_index_segment("0"));
        assert!(is_index_segment("42"));
        assert!(!is_index_segment(""));
        assert!(!is_index_segment("01"));
        assert!(!is_index_segment("-1"));
        assert!(!is_index_segment("1.5"));
        assert!(!is_index_segment("a"));
    }
}
