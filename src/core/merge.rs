//! Deep defaults: fill absent fields of a destination tree from source trees.

use serde_json::Value;

/// Apply each source in order, filling only what is still absent.
///
/// A field defined by the destination or by an earlier source is never
/// replaced by a later one. Returns the destination.
pub fn defaults_deep<'a>(dest: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    for source in sources {
        defaults_deep_one(dest, source);
    }
    dest
}

/// Fill absent fields of `dest` from a single `source`.
///
/// Objects recurse key by key, arrays index by index. Any other pairing
/// leaves `dest` untouched; a present `null` counts as defined.
pub fn defaults_deep_one(dest: &mut Value, source: &Value) {
    match (dest, source) {
        (Value::Object(dest_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match dest_map.get_mut(key) {
                    Some(existing) => defaults_deep_one(existing, source_value),
                    None => {
                        dest_map.insert(key.clone(), source_value.clone());
                    }
                }
            }
        }
        (Value::Array(dest_items), Value::Array(source_items)) => {
            for (index, source_value) in source_items.iter().enumerate() {
                match dest_items.get_mut(index) {
                    Some(existing) => defaults_deep_one(existing, source_value),
                    None => dest_items.push(source_value.clone()),
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fills_missing_top_level_keys() {
        let mut dest = json!({"a": 1});
        defaults_deep(&mut dest, &[json!({"a": 2, "b": 3})]);
        assert_eq!(dest, json!({"a": 1, "b": 3}));
    }

    #[test]
    fn fills_nested_keys_without_overwriting() {
        let mut dest = json!({"user": {"name": "x"}});
        defaults_deep(
            &mut dest,
            &[json!({"user": {"name": "default", "age": 30}})],
        );
        assert_eq!(dest, json!({"user": {"name": "x", "age": 30}}));
    }

    #[test]
    fn earlier_source_wins_over_later() {
        let mut dest = json!({});
        defaults_deep(
            &mut dest,
            &[json!({"a": {"b": 1}}), json!({"a": {"b": 2, "c": 3}})],
        );
        assert_eq!(dest, json!({"a": {"b": 1, "c": 3}}));
    }

    #[test]
    fn scalar_is_not_replaced_by_later_object() {
        let mut dest = json!({"a": 1});
        defaults_deep(&mut dest, &[json!({"a": {"nested": true}})]);
        assert_eq!(dest, json!({"a": 1}));
    }

    #[test]
    fn present_null_is_kept() {
        let mut dest = json!({"a": null});
        defaults_deep(&mut dest, &[json!({"a": 5})]);
        assert_eq!(dest, json!({"a": null}));
    }

    #[test]
    fn arrays_fill_by_index() {
        let mut dest = json!({"list": [{"id": 1}]});
        defaults_deep(
            &mut dest,
            &[json!({"list": [{"id": 9, "tag": "t"}, {"id": 2}]})],
        );
        assert_eq!(dest, json!({"list": [{"id": 1, "tag": "t"}, {"id": 2}]}));
    }

    #[test]
    fn non_container_destination_is_untouched() {
        let mut dest = json!("text");
        defaults_deep(&mut dest, &[json!({"a": 1})]);
        assert_eq!(dest, json!("text"));
    }

    #[test]
    fn no_sources_is_identity() {
        let mut dest = json!({"a": 1});
        let result = defaults_deep(&mut dest, &[]).clone();
        assert_eq!(result, json!({"a": 1}));
    }
}
