use serde_json::{json, Value};
use treekit::path::{self, get, get_delimited, set, set_delimited};
use treekit::ErrorCode;

#[test]
fn get_reads_through_objects_and_arrays() {
    let root = json!({"a": {"b": [{"c": 5}]}});
    assert_eq!(get(&root, "a.b.0.c", &Value::Null), &json!(5));
}

#[test]
fn get_falls_back_to_default() {
    let root = json!({"a": 1});
    assert_eq!(get(&root, "x.y", &json!("D")), &json!("D"));
    assert_eq!(get(&root, "a.b", &json!("D")), &json!("D"));
}

#[test]
fn get_is_idempotent() {
    let root = json!({"a": {"b": 2}});
    let default = json!(null);
    let first = get(&root, "a.b", &default).clone();
    let second = get(&root, "a.b", &default).clone();
    assert_eq!(first, second);
    assert_eq!(root, json!({"a": {"b": 2}}));
}

#[test]
fn get_handles_deep_paths() {
    let mut root = json!({});
    let segments: Vec<String> = (0..200).map(|i| format!("k{}", i)).collect();
    let deep_path = segments.join(".");

    set(&mut root, &deep_path, json!("bottom")).unwrap();
    assert_eq!(get(&root, &deep_path, &Value::Null), &json!("bottom"));
}

#[test]
fn set_builds_objects_and_arrays() {
    let mut root = json!({});
    set(&mut root, "a.b.c", json!(5)).unwrap();
    assert_eq!(root, json!({"a": {"b": {"c": 5}}}));

    let mut root = json!({});
    set(&mut root, "a.0.c", json!(5)).unwrap();
    assert_eq!(root, json!({"a": [{"c": 5}]}));
}

#[test]
fn set_with_custom_delimiter_matches_dotted() {
    let mut dotted = json!({});
    let mut slashed = json!({});
    set(&mut dotted, "a.b", json!(1)).unwrap();
    set_delimited(&mut slashed, "a/b", json!(1), "/").unwrap();
    assert_eq!(dotted, slashed);
}

#[test]
fn set_then_get_round_trips_through_mixed_containers() {
    let mut root = json!({"users": []});
    set(&mut root, "users.1.roles.0", json!("admin")).unwrap();

    assert_eq!(root, json!({"users": [null, {"roles": ["admin"]}]}));
    assert_eq!(
        get_delimited(&root, "users|1|roles|0", &Value::Null, "|"),
        &json!("admin")
    );
}

#[test]
fn set_errors_leave_error_codes() {
    let mut root = json!("scalar");
    assert_eq!(
        set(&mut root, "a", json!(1)).unwrap_err().code,
        ErrorCode::PathNotContainer
    );

    let mut root = json!({"list": [1, 2]});
    assert_eq!(
        set(&mut root, "list.first", json!(1)).unwrap_err().code,
        ErrorCode::PathInvalidSegment
    );
}

#[test]
fn remove_then_get_returns_default() {
    let mut root = json!({"a": {"b": 1}});
    assert_eq!(path::remove(&mut root, "a.b"), Some(json!(1)));
    assert_eq!(get(&root, "a.b", &json!("gone")), &json!("gone"));
}
