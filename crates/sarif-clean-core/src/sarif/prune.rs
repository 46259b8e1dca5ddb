use serde_json::{Map, Value};

/// Vendor properties that strict consumers reject, removed at any depth.
pub const FORBIDDEN_PROPERTIES: [&str; 7] = [
    "sarifNodeKind",
    "propertyNames",
    "tags",
    "moniker",
    "isBinaryRegion",
    "isLineColumnBasedTextRegion",
    "isOffsetBasedTextRegion",
];

pub fn is_forbidden(key: &str) -> bool {
    FORBIDDEN_PROPERTIES.contains(&key)
}

/// Whether a value is pruned when it appears directly under an object key.
pub fn is_prunable(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

/// Recursively strip forbidden keys and empty leftovers from a subtree.
///
/// - objects: children are pruned first, then forbidden keys and keys whose
///   value is `null`, `{}` or `[]` are dropped
/// - arrays: `null` elements are dropped, the rest are pruned
/// - scalars are returned unchanged
///
/// Elements of an array that become empty after pruning are kept; only
/// object members are subject to the emptiness rule.
pub fn prune(value: &Value) -> Value {
    match value {
        Value::Object(obj) => {
            let cleaned: Map<String, Value> = obj
                .iter()
                .filter(|(key, _)| !is_forbidden(key))
                .map(|(key, child)| (key.clone(), prune(child)))
                .filter(|(_, child)| !is_prunable(child))
                .collect();
            Value::Object(cleaned)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(prune)
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}
