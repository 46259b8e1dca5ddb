use serde_json::Value;

use super::enums::Level;
use super::model::{Message, Rule, RuleConfiguration};
use super::value::{Object, is_truthy, object_field, string_field, truthy_string_field};

/// Clean one raw `reportingDescriptor`. Rules without an `id` are dropped.
pub fn clean_rule(raw: &Value) -> Option<Rule> {
    let obj = raw.as_object()?;

    let Some(id) = string_field(obj, "id").filter(|id| !id.is_empty()) else {
        tracing::debug!("dropping rule without id");
        return None;
    };

    Some(Rule {
        id,
        name: truthy_string_field(obj, "name"),
        help_uri: truthy_string_field(obj, "helpUri"),
        short_description: object_field(obj, "shortDescription").and_then(Message::truthy_rich),
        full_description: object_field(obj, "fullDescription").and_then(Message::truthy_rich),
        help: object_field(obj, "help").and_then(Message::truthy_rich),
        default_configuration: object_field(obj, "defaultConfiguration")
            .and_then(clean_configuration),
    })
}

fn clean_configuration(raw: &Object) -> Option<RuleConfiguration> {
    let config = RuleConfiguration {
        enabled: raw.get("enabled").map(is_truthy),
        level: raw.get("level").map(Level::coerce),
        rank: raw
            .get("rank")
            .and_then(Value::as_f64)
            .filter(|rank| *rank >= 0.0),
    };

    if config == RuleConfiguration::default() {
        return None;
    }
    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cleaned(raw: Value) -> Value {
        serde_json::to_value(clean_rule(&raw).expect("rule kept")).unwrap()
    }

    #[test]
    fn rule_without_id_is_dropped() {
        assert_eq!(clean_rule(&json!({"name": "NoId"})), None);
        assert_eq!(clean_rule(&json!({"id": ""})), None);
        assert_eq!(clean_rule(&json!("R1")), None);
    }

    #[test]
    fn vendor_members_are_stripped() {
        let out = cleaned(json!({
            "id": "R1",
            "tags": ["t"],
            "properties": {"precision": "high"},
            "moniker": "m"
        }));
        assert_eq!(out, json!({"id": "R1"}));
    }

    #[test]
    fn optional_strings_require_truthy_values() {
        let out = cleaned(json!({"id": 12, "name": "", "helpUri": "https://example.test/R12"}));
        assert_eq!(out, json!({"id": "12", "helpUri": "https://example.test/R12"}));
    }

    #[test]
    fn descriptions_keep_truthy_text_and_markdown() {
        let out = cleaned(json!({
            "id": "R1",
            "shortDescription": {"text": "short"},
            "fullDescription": {"text": "", "markdown": ""},
            "help": {"text": "help", "markdown": "**help**", "sarifNodeKind": 1}
        }));

        assert_eq!(out["shortDescription"], json!({"text": "short"}));
        assert!(out.get("fullDescription").is_none());
        assert_eq!(out["help"], json!({"text": "help", "markdown": "**help**"}));
    }

    #[test]
    fn default_configuration_is_coerced() {
        let out = cleaned(json!({
            "id": "R1",
            "defaultConfiguration": {"enabled": 1, "level": 3, "rank": 50}
        }));
        assert_eq!(
            out["defaultConfiguration"],
            json!({"enabled": true, "level": "error", "rank": 50.0})
        );
    }

    #[test]
    fn default_configuration_drops_invalid_rank_and_empty_result() {
        let out = cleaned(json!({"id": "R1", "defaultConfiguration": {"rank": -1.0}}));
        assert!(out.get("defaultConfiguration").is_none());

        let out = cleaned(json!({"id": "R1", "defaultConfiguration": {"rank": "high", "enabled": false}}));
        assert_eq!(out["defaultConfiguration"], json!({"enabled": false}));
    }
}
