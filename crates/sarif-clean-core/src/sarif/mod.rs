//! SARIF narrowing for strict consumers.
//!
//! The input is an arbitrary JSON tree that loosely follows the SARIF shape.
//! The output is a [`model::SarifLog`] restricted to a whitelist of members,
//! with ordinal enums rewritten to their canonical names. Cleaning is a single
//! recursive descent over the input and never fails; anything that does not
//! fit is omitted rather than reported.
//!
//! Two members are mandatory: `result.ruleId` and `rule.id`. A result or rule
//! lacking one is dropped together with its subtree.

pub mod enums;
pub mod location;
pub mod model;
pub mod prune;
pub mod result;
pub mod rule;
pub mod run;
pub mod value;

use serde_json::Value;

use model::SarifLog;
use value::array_field;

/// Produce a strict SARIF 2.1.0 log from a loosely-typed document.
///
/// `$schema` and `version` are always rewritten. `runs` is emitted when the
/// input declares a `runs` array; non-object runs are skipped.
pub fn sanitize(document: &Value) -> SarifLog {
    let runs = document
        .as_object()
        .and_then(|obj| array_field(obj, "runs"))
        .map(|raw_runs| raw_runs.iter().filter_map(run::clean_run).collect());

    SarifLog {
        runs,
        ..SarifLog::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SARIF_SCHEMA_URI, SARIF_VERSION};
    use serde_json::json;

    #[test]
    fn header_is_overwritten() {
        let log = sanitize(&json!({"$schema": "http://old", "version": "2.0.0", "runs": []}));

        assert_eq!(log.schema, SARIF_SCHEMA_URI);
        assert_eq!(log.version, SARIF_VERSION);
        assert_eq!(log.runs, Some(vec![]));
    }

    #[test]
    fn runs_absent_when_not_declared() {
        let out = serde_json::to_value(sanitize(&json!({"version": 2}))).unwrap();
        assert_eq!(out, json!({"$schema": SARIF_SCHEMA_URI, "version": "2.1.0"}));

        let out = serde_json::to_value(sanitize(&json!([1, 2, 3]))).unwrap();
        assert!(out.get("runs").is_none());
    }

    #[test]
    fn non_object_runs_are_skipped() {
        let log = sanitize(&json!({"runs": [null, "x", {"results": []}]}));
        assert_eq!(log.runs().len(), 1);
        assert!(log.runs()[0].results().is_empty());
    }
}
