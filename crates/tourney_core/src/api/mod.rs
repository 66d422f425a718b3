pub mod json_api;
pub mod schema;

mod config_env;

pub use json_api::{
    audit_schedule_json, recompute_standings_json, validate_match_json, ApiError,
    AuditScheduleRequest, AuditScheduleResponse, RecomputeStandingsRequest,
    RecomputeStandingsResponse, ScheduleContextData, ValidateMatchRequest, ValidateMatchResponse,
};
pub use schema::request_schema_json;
