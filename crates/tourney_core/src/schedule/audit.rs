//! Whole-schedule audit: every stored match re-validated against the rest.

use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{MatchDraft, MatchStatus};
use crate::schedule::{MatchValidator, ValidationContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleIssue {
    pub match_id: String,
    pub match_number: u32,
    pub error: ValidationError,
}

/// Wire form of a [`ScheduleIssue`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleIssueReport {
    pub match_id: String,
    pub match_number: u32,
    pub code: String,
    pub message: String,
}

impl From<&ScheduleIssue> for ScheduleIssueReport {
    fn from(issue: &ScheduleIssue) -> Self {
        Self {
            match_id: issue.match_id.clone(),
            match_number: issue.match_number,
            code: issue.error.code().to_string(),
            message: issue.error.to_string(),
        }
    }
}

/// Validate each non-cancelled match of `ctx.matches` as if it were being
/// edited, in input order. Cancelled matches are not audited but still take
/// part as existing matches, exactly as the validator sees them.
///
/// A conflicting pair is reported from both sides.
pub fn audit_schedule(ctx: &ValidationContext<'_>) -> Vec<ScheduleIssue> {
    let issues: Vec<ScheduleIssue> = ctx
        .matches
        .iter()
        .filter(|m| m.status != MatchStatus::Cancelled)
        .filter_map(|m| {
            MatchValidator::validate(&MatchDraft::from(m), ctx).err().map(|error| ScheduleIssue {
                match_id: m.id.clone(),
                match_number: m.match_number,
                error,
            })
        })
        .collect();

    tracing::info!(matches = ctx.matches.len(), issues = issues.len(), "schedule audit finished");
    issues
}
