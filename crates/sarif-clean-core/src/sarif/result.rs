use std::collections::BTreeMap;

use serde_json::Value;

use super::enums::{BaselineState, Kind, Level};
use super::location::clean_location;
use super::model::{Location, Message, SarifResult};
use super::prune::prune;
use super::value::{
    array_field, int_at_least, is_truthy, non_negative_int, object_field, string_field, stringify,
    truthy_string_field,
};

/// Clean one raw result.
///
/// A result without a non-empty `ruleId` is rejected outright; every other
/// member is kept, coerced or silently omitted.
pub fn clean_result(raw: &Value) -> Option<SarifResult> {
    let obj = raw.as_object()?;

    let Some(rule_id) = string_field(obj, "ruleId").filter(|id| !id.is_empty()) else {
        tracing::debug!("dropping result without ruleId");
        return None;
    };

    let baseline_state = obj.get("baselineState").and_then(|state| {
        let coerced = BaselineState::coerce(state);
        if coerced.is_none() {
            tracing::debug!(
                rule_id = %rule_id,
                state = %state,
                "dropping unrecognized baselineState"
            );
        }
        coerced
    });

    Some(SarifResult {
        rule_index: obj.get("ruleIndex").and_then(non_negative_int),
        level: obj.get("level").map(Level::coerce),
        kind: obj.get("kind").map(Kind::coerce),
        message: object_field(obj, "message").and_then(Message::with_markdown),
        locations: array_field(obj, "locations").and_then(clean_locations),
        fingerprints: obj.get("fingerprints").and_then(clean_fingerprints),
        partial_fingerprints: obj.get("partialFingerprints").and_then(clean_fingerprints),
        baseline_state,
        occurrence_count: obj.get("occurrenceCount").and_then(|n| int_at_least(n, 1)),
        guid: truthy_string_field(obj, "guid"),
        correlation_guid: truthy_string_field(obj, "correlationGuid"),
        rule_id,
    })
}

fn clean_locations(raw: &[Value]) -> Option<Vec<Location>> {
    let cleaned: Vec<Location> = raw.iter().filter_map(clean_location).collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Fingerprint maps are opaque string→string tables. Values are stringified,
/// falsy values dropped, and the map omitted if nothing survives.
fn clean_fingerprints(raw: &Value) -> Option<BTreeMap<String, String>> {
    if !raw.is_object() {
        return None;
    }

    let pruned = prune(raw);
    let cleaned: BTreeMap<String, String> = pruned
        .as_object()?
        .iter()
        .filter(|(_, v)| is_truthy(v))
        .filter_map(|(k, v)| stringify(v).map(|s| (k.clone(), s)))
        .collect();

    (!cleaned.is_empty()).then_some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cleaned(raw: Value) -> Value {
        serde_json::to_value(clean_result(&raw).expect("result kept")).unwrap()
    }

    #[test]
    fn missing_or_empty_rule_id_drops_result() {
        assert_eq!(clean_result(&json!({"level": 1})), None);
        assert_eq!(clean_result(&json!({"ruleId": "", "level": 1})), None);
        assert_eq!(clean_result(&json!({"ruleId": null})), None);
        assert_eq!(clean_result(&json!(["ruleId", "R1"])), None);
    }

    #[test]
    fn rule_id_is_stringified() {
        assert_eq!(cleaned(json!({"ruleId": 1001})), json!({"ruleId": "1001"}));
    }

    #[test]
    fn enums_are_coerced_when_present() {
        let out = cleaned(json!({"ruleId": "R", "level": 3, "kind": 5, "baselineState": 1}));
        assert_eq!(
            out,
            json!({"ruleId": "R", "level": "error", "kind": "review", "baselineState": "unchanged"})
        );

        let out = cleaned(json!({"ruleId": "R", "level": "bogus", "kind": 99, "baselineState": "nonsense"}));
        assert_eq!(out, json!({"ruleId": "R", "level": "warning", "kind": "open"}));
    }

    #[test]
    fn absent_enums_stay_absent() {
        let result = clean_result(&json!({"ruleId": "R"})).unwrap();
        assert_eq!(result.level, None);
        assert_eq!(result.kind, None);
        assert_eq!(result.baseline_state, None);
    }

    #[test]
    fn numeric_members_respect_their_domain() {
        let out = cleaned(json!({"ruleId": "R", "ruleIndex": -1, "occurrenceCount": 0}));
        assert_eq!(out, json!({"ruleId": "R"}));

        let out = cleaned(json!({"ruleId": "R", "ruleIndex": 0, "occurrenceCount": 3}));
        assert_eq!(out, json!({"ruleId": "R", "ruleIndex": 0, "occurrenceCount": 3}));
    }

    #[test]
    fn message_keeps_truthy_markdown() {
        let out = cleaned(json!({
            "ruleId": "R",
            "message": {"text": 5, "markdown": "`5`", "arguments": ["x"]}
        }));
        assert_eq!(out["message"], json!({"text": "5", "markdown": "`5`"}));

        let out = cleaned(json!({"ruleId": "R", "message": {"text": "t", "markdown": ""}}));
        assert_eq!(out["message"], json!({"text": "t"}));

        let out = cleaned(json!({"ruleId": "R", "message": {"id": "default"}}));
        assert!(out.get("message").is_none());
    }

    #[test]
    fn locations_drop_empty_entries_and_empty_lists() {
        let out = cleaned(json!({
            "ruleId": "R",
            "locations": [null, {"id": -1}, {"id": 2}]
        }));
        assert_eq!(out["locations"], json!([{"id": 2}]));

        let out = cleaned(json!({"ruleId": "R", "locations": [{"tags": ["x"]}]}));
        assert!(out.get("locations").is_none());
    }

    #[test]
    fn fingerprints_are_stringified_and_pruned() {
        let out = cleaned(json!({
            "ruleId": "R",
            "fingerprints": {"primary": "abc", "secondary": 7, "empty": "", "tags": "t"},
            "partialFingerprints": {"none": null}
        }));

        assert_eq!(out["fingerprints"], json!({"primary": "abc", "secondary": "7"}));
        assert!(out.get("partialFingerprints").is_none());
    }

    #[test]
    fn guids_require_truthy_values() {
        let out = cleaned(json!({"ruleId": "R", "guid": "", "correlationGuid": "c-1"}));
        assert_eq!(out, json!({"ruleId": "R", "correlationGuid": "c-1"}));
    }
}
