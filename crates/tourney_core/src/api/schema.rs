//! JSON Schema export for API request bodies.

use schemars::schema_for;
use serde_json::json;

use super::json_api::{AuditScheduleRequest, RecomputeStandingsRequest, ValidateMatchRequest};

/// Pretty-printed object keyed by entry point name.
pub fn request_schema_json() -> Result<String, String> {
    let schemas = json!({
        "validateMatch": schema_for!(ValidateMatchRequest),
        "recomputeStandings": schema_for!(RecomputeStandingsRequest),
        "auditSchedule": schema_for!(AuditScheduleRequest),
    });
    serde_json::to_string_pretty(&schemas).map_err(|e| format!("Failed to serialize schema: {}", e))
}
