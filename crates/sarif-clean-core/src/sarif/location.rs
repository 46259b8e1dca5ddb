use serde_json::Value;

use super::model::{ArtifactLocation, Location, LogicalLocation, Message, PhysicalLocation, Region};
use super::value::{
    Object, array_field, int_at_least, non_negative_int, object_field, string_field,
    truthy_string_field,
};

/// Clean one raw location.
///
/// Returns `None` for non-objects and for locations where none of `id`,
/// `physicalLocation`, `logicalLocations` or `message` survives.
pub fn clean_location(raw: &Value) -> Option<Location> {
    let obj = raw.as_object()?;

    let id = obj.get("id").and_then(|id| {
        let kept = non_negative_int(id);
        if kept.is_none() {
            // Some exporters emit 64-bit ids as `{"value": ..}`-style objects.
            tracing::debug!(id = %id, "dropping non-integer location id");
        }
        kept
    });

    let location = Location {
        id,
        physical_location: object_field(obj, "physicalLocation").and_then(clean_physical_location),
        logical_locations: array_field(obj, "logicalLocations").and_then(clean_logical_locations),
        message: object_field(obj, "message").and_then(Message::text_only),
    };

    if location.is_empty() {
        tracing::debug!("dropping location with no surviving members");
        return None;
    }
    Some(location)
}

fn clean_physical_location(raw: &Object) -> Option<PhysicalLocation> {
    let artifact_location = object_field(raw, "artifactLocation").and_then(clean_artifact_location);
    let region = object_field(raw, "region").and_then(clean_region);

    if artifact_location.is_none() && region.is_none() {
        return None;
    }
    Some(PhysicalLocation {
        artifact_location,
        region,
    })
}

/// `uri`, `uriBaseId` and `index` only; `description` and the rest are dropped.
fn clean_artifact_location(raw: &Object) -> Option<ArtifactLocation> {
    let artifact = ArtifactLocation {
        uri: string_field(raw, "uri"),
        uri_base_id: truthy_string_field(raw, "uriBaseId"),
        index: raw.get("index").and_then(non_negative_int),
    };

    if artifact == ArtifactLocation::default() {
        return None;
    }
    Some(artifact)
}

/// Line/column bounds only, each kept if a positive integer.
fn clean_region(raw: &Object) -> Option<Region> {
    let bound = |key: &str| raw.get(key).and_then(|v| int_at_least(v, 1));

    let region = Region {
        start_line: bound("startLine"),
        start_column: bound("startColumn"),
        end_line: bound("endLine"),
        end_column: bound("endColumn"),
    };

    if region == Region::default() {
        return None;
    }
    Some(region)
}

fn clean_logical_locations(entries: &[Value]) -> Option<Vec<LogicalLocation>> {
    let cleaned: Vec<LogicalLocation> = entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| LogicalLocation {
            name: string_field(entry, "name"),
            fully_qualified_name: string_field(entry, "fullyQualifiedName"),
            kind: string_field(entry, "kind"),
        })
        .filter(|entry| *entry != LogicalLocation::default())
        .collect();

    (!cleaned.is_empty()).then_some(cleaned)
}
