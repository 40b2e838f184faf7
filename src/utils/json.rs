//! Defensive accessors over untyped result documents. Runners are not
//! consistent, so every field is checked for presence and shape.

use serde_json::Value;

pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// First non-empty string field among `keys`.
pub fn first_str_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| str_field(value, key))
        .find(|field| !field.is_empty())
}

pub fn array_field<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key).and_then(Value::as_array)
}

/// Elements of an array field; absent or non-array fields yield nothing.
pub fn items<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    array_field(value, key).into_iter().flatten()
}

/// Milliseconds, or zero when the field is missing or not a number.
pub fn duration_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Free text that may be given as one string or as a list of lines.
pub fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Array(parts) => {
            let lines: Vec<&str> = parts.iter().filter_map(Value::as_str).collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_are_narrowed_by_shape() {
        let value = json!({
            "name": "login",
            "empty": "",
            "count": 3,
            "steps": [1, 2],
            "notsteps": {"a": 1},
            "duration": 1.5,
            "text": ["line one", "line two"],
        });
        assert_eq!(str_field(&value, "name"), Some("login"));
        assert_eq!(str_field(&value, "count"), None);
        assert_eq!(first_str_field(&value, &["missing", "empty", "name"]), Some("login"));
        assert_eq!(first_str_field(&value, &["missing", "empty"]), None);
        assert_eq!(items(&value, "steps").count(), 2);
        assert_eq!(items(&value, "notsteps").count(), 0);
        assert_eq!(items(&value, "missing").count(), 0);
        assert_eq!(duration_field(&value, "duration"), 1.5);
        assert_eq!(duration_field(&value, "name"), 0.0);
        assert_eq!(text_field(&value, "text"), Some("line one\nline two".to_owned()));
        assert_eq!(text_field(&value, "name"), Some("login".to_owned()));
        assert_eq!(text_field(&value, "count"), None);
    }
}
