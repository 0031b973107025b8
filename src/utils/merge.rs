use serde_json::Value;

/// Recursively merge `overrides` into `base`.
///
/// Objects merge key by key; any other value in `overrides` replaces the
/// value in `base` outright.
pub fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_nested_merge_keeps_siblings() {
        let mut base = json!({"font": {"color": "#FFFFFF", "size": 16}});
        merge_json(&mut base, json!({"font": {"size": 12}}));
        assert_eq!(base, json!({"font": {"color": "#FFFFFF", "size": 12}}));
    }

    #[test]
    fn test_new_keys_are_added() {
        let mut base = json!({"title": {"x": 0.05}});
        merge_json(&mut base, json!({"title": {"text": "Standings"}, "height": 600}));
        assert_eq!(
            base,
            json!({"title": {"x": 0.05, "text": "Standings"}, "height": 600})
        );
    }

    #[test]
    fn test_scalar_replaces_object() {
        let mut base = json!({"xaxis": {"showgrid": true}});
        merge_json(&mut base, json!({"xaxis": null}));
        assert_eq!(base, json!({"xaxis": null}));
    }
}
