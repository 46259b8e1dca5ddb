//! Loosely-typed field access over `serde_json::Value`.
//!
//! Producers of non-compliant SARIF put arbitrary shapes in arbitrary places.
//! Every probe here is total: a value of the wrong shape yields `None` (or
//! `false`) instead of an error, and the cleaners decide what that means.

use serde_json::{Map, Value};

/// JSON object, as produced by `serde_json`.
pub type Object = Map<String, Value>;

/// Field `key` of `obj`, if it is itself an object.
pub fn object_field<'a>(obj: &'a Object, key: &str) -> Option<&'a Object> {
    obj.get(key).and_then(Value::as_object)
}

/// Field `key` of `obj`, if it is an array.
pub fn array_field<'a>(obj: &'a Object, key: &str) -> Option<&'a [Value]> {
    obj.get(key).and_then(Value::as_array).map(Vec::as_slice)
}

/// Truthiness of a loosely-typed value.
///
/// `null`, `false`, zero, the empty string and empty containers are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Whether field `key` is present and truthy.
pub fn has_truthy(obj: &Object, key: &str) -> bool {
    obj.get(key).is_some_and(is_truthy)
}

/// String form of a scalar or container. `null` has none.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Field `key` stringified, when present.
pub fn string_field(obj: &Object, key: &str) -> Option<String> {
    obj.get(key).and_then(stringify)
}

/// Field `key` stringified, only when present and truthy.
pub fn truthy_string_field(obj: &Object, key: &str) -> Option<String> {
    obj.get(key).filter(|v| is_truthy(v)).and_then(stringify)
}

/// A JSON integer `>= 0`. Floats and booleans do not qualify.
pub fn non_negative_int(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}

/// A JSON integer `>= min`. Floats and booleans do not qualify.
pub fn int_at_least(value: &Value, min: u64) -> Option<u64> {
    non_negative_int(value).filter(|n| *n >= min)
}

/// Whether `value` is a JSON integer of any sign.
pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_i64() || n.is_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_emptiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(-1), json!(0.5), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn stringify_keeps_strings_verbatim_and_renders_others() {
        assert_eq!(stringify(&json!("a.py")), Some("a.py".to_string()));
        assert_eq!(stringify(&json!(42)), Some("42".to_string()));
        assert_eq!(stringify(&json!(true)), Some("true".to_string()));
        assert_eq!(stringify(&json!({"k": 1})), Some("{\"k\":1}".to_string()));
        assert_eq!(stringify(&json!(null)), None);
    }

    #[test]
    fn integer_probes_reject_floats_bools_and_negatives() {
        assert_eq!(non_negative_int(&json!(0)), Some(0));
        assert_eq!(non_negative_int(&json!(-1)), None);
        assert_eq!(non_negative_int(&json!(3.0)), None);
        assert_eq!(non_negative_int(&json!(true)), None);
        assert_eq!(non_negative_int(&json!("3")), None);

        assert_eq!(int_at_least(&json!(0), 1), None);
        assert_eq!(int_at_least(&json!(3), 1), Some(3));

        assert!(is_integer(&json!(-7)));
        assert!(!is_integer(&json!(1.5)));
    }

    #[test]
    fn truthy_string_field_skips_empty_values() {
        let obj = json!({"a": "", "b": "x", "c": 0, "d": 5});
        let obj = obj.as_object().unwrap();

        assert_eq!(truthy_string_field(obj, "a"), None);
        assert_eq!(truthy_string_field(obj, "b"), Some("x".to_string()));
        assert_eq!(truthy_string_field(obj, "c"), None);
        assert_eq!(truthy_string_field(obj, "d"), Some("5".to_string()));
        assert_eq!(truthy_string_field(obj, "missing"), None);
    }
}
