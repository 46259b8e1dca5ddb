use serde_json::Value;

use super::enums::ColumnKind;
use super::model::{AutomationDetails, Driver, Message, Rule, Run, Tool};
use super::result::clean_result;
use super::rule::clean_rule;
use super::value::{
    Object, array_field, has_truthy, object_field, string_field, truthy_string_field,
};

/// Encoding written whenever the source run declares any default encoding.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Clean one raw run. Non-object runs are skipped.
pub fn clean_run(raw: &Value) -> Option<Run> {
    let obj = raw.as_object()?;

    let results = array_field(obj, "results").map(|raw_results| {
        let kept: Vec<_> = raw_results.iter().filter_map(clean_result).collect();
        if kept.len() < raw_results.len() {
            tracing::debug!(
                kept = kept.len(),
                dropped = raw_results.len() - kept.len(),
                "filtered run results"
            );
        }
        kept
    });

    Some(Run {
        tool: object_field(obj, "tool").and_then(clean_tool),
        results,
        automation_details: object_field(obj, "automationDetails")
            .and_then(clean_automation_details),
        column_kind: obj.get("columnKind").and_then(ColumnKind::coerce),
        default_encoding: has_truthy(obj, "defaultEncoding").then(|| DEFAULT_ENCODING.to_string()),
    })
}

fn clean_tool(raw: &Object) -> Option<Tool> {
    let driver = object_field(raw, "driver")
        .map(clean_driver)
        .filter(|driver| *driver != Driver::default())?;

    Some(Tool {
        driver: Some(driver),
    })
}

/// Driver descriptions keep plain text only; markdown is not carried over.
fn clean_driver(raw: &Object) -> Driver {
    let text = |key: &str| truthy_string_field(raw, key);

    Driver {
        name: string_field(raw, "name"),
        organization: text("organization"),
        product: text("product"),
        version: text("version"),
        semantic_version: text("semanticVersion"),
        full_name: text("fullName"),
        download_uri: text("downloadUri"),
        information_uri: text("informationUri"),
        short_description: object_field(raw, "shortDescription").and_then(Message::truthy_text),
        full_description: object_field(raw, "fullDescription").and_then(Message::truthy_text),
        rules: array_field(raw, "rules").and_then(clean_rules),
    }
}

fn clean_rules(raw: &[Value]) -> Option<Vec<Rule>> {
    let cleaned: Vec<Rule> = raw.iter().filter_map(clean_rule).collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

fn clean_automation_details(raw: &Object) -> Option<AutomationDetails> {
    let details = AutomationDetails {
        id: truthy_string_field(raw, "id"),
        guid: truthy_string_field(raw, "guid"),
        description: object_field(raw, "description").and_then(Message::truthy_text),
    };

    if details == AutomationDetails::default() {
        return None;
    }
    Some(details)
}
