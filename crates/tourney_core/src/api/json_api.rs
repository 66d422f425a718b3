//! JSON API
//!
//! String-in / string-out entry points for callers that hold records as JSON
//! (document store exports, scripting hosts). Transport errors (bad JSON,
//! unsupported schema version) come back as `Err(String)`; validation outcomes
//! are part of a successful response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config_env::scoring_from_env;
use crate::config::ScoringConfig;
use crate::error::ValidationError;
use crate::models::{
    MatchDraft, MatchRecord, PoolRecord, ScheduleBreakRecord, StandingsTable, TeamRecord,
};
use crate::schedule::{audit_schedule, MatchValidator, ScheduleIssueReport, ValidationContext};
use crate::standings::recompute_with;
use crate::SCHEMA_VERSION;

/// Owned form of [`ValidationContext`].
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleContextData {
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default)]
    pub pools: Vec<PoolRecord>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub breaks: Vec<ScheduleBreakRecord>,
}

impl ScheduleContextData {
    pub fn view(&self) -> ValidationContext<'_> {
        ValidationContext {
            matches: &self.matches,
            pools: &self.pools,
            teams: &self.teams,
            breaks: &self.breaks,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateMatchRequest {
    pub schema_version: u32,
    pub draft: MatchDraft,
    #[serde(default)]
    pub context: ScheduleContextData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub recoverable: bool,
}

impl From<&ValidationError> for ApiError {
    fn from(e: &ValidationError) -> Self {
        Self { code: e.code().to_string(), message: e.to_string(), recoverable: e.is_recoverable() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateMatchResponse {
    pub schema_version: u32,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecomputeStandingsRequest {
    pub schema_version: u32,
    pub teams: Vec<TeamRecord>,
    pub matches: Vec<MatchRecord>,
    /// Falls back to `TOURNEY_CONFIG_PATH`, then the two-point default
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecomputeStandingsResponse {
    pub schema_version: u32,
    #[serde(flatten)]
    pub table: StandingsTable,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditScheduleRequest {
    pub schema_version: u32,
    pub context: ScheduleContextData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditScheduleResponse {
    pub schema_version: u32,
    pub issues: Vec<ScheduleIssueReport>,
}

fn check_schema_version(version: u32) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

pub fn validate_match_json(request_json: &str) -> Result<String, String> {
    let request: ValidateMatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let error = MatchValidator::validate(&request.draft, &request.context.view()).err();
    if let Some(e) = &error {
        debug!(match_number = request.draft.match_number, code = e.code(), "draft rejected");
    }

    let response = ValidateMatchResponse {
        schema_version: SCHEMA_VERSION,
        success: error.is_none(),
        error: error.as_ref().map(ApiError::from),
    };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

pub fn recompute_standings_json(request_json: &str) -> Result<String, String> {
    let request: RecomputeStandingsRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let scoring = match request.scoring {
        Some(scoring) => scoring,
        None => scoring_from_env()?.unwrap_or_default(),
    };
    scoring.validate().map_err(|e| e.to_string())?;

    let table = recompute_with(&request.teams, &request.matches, &scoring);
    info!(
        teams = table.standings.len(),
        matches_counted = table.matches_counted,
        "standings recomputed"
    );

    let response = RecomputeStandingsResponse { schema_version: SCHEMA_VERSION, table };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

pub fn audit_schedule_json(request_json: &str) -> Result<String, String> {
    let request: AuditScheduleRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let issues = audit_schedule(&request.context.view());
    let response = AuditScheduleResponse {
        schema_version: SCHEMA_VERSION,
        issues: issues.iter().map(ScheduleIssueReport::from).collect(),
    };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
