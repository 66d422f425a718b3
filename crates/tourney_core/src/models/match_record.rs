//! Match records as supplied by the calling layer.
//!
//! `scheduled_time` stays in its stored `HH:MM` form; parsing happens in
//! [`crate::schedule::interval`] so malformed values surface as
//! [`InputFormatError`] instead of failing deserialization of a whole batch.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InputFormatError;
use crate::schedule::TimeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Final,
    Forfeit,
    Cancelled,
}

impl MatchStatus {
    /// Final, forfeit and cancelled matches are history.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Final | MatchStatus::Forfeit | MatchStatus::Cancelled)
    }

    /// Transitions allowed through normal score entry.
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        match self {
            MatchStatus::Scheduled => matches!(
                next,
                MatchStatus::InProgress
                    | MatchStatus::Final
                    | MatchStatus::Forfeit
                    | MatchStatus::Cancelled
            ),
            MatchStatus::InProgress => {
                matches!(next, MatchStatus::Final | MatchStatus::Forfeit | MatchStatus::Cancelled)
            }
            MatchStatus::Final | MatchStatus::Forfeit | MatchStatus::Cancelled => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub pool_id: String,
    pub division_id: String,
    pub scheduled_date: NaiveDate,
    /// Time of day, `HH:MM`
    pub scheduled_time: String,
    /// Minutes
    pub duration: u32,
    pub dark_team_id: String,
    pub light_team_id: String,
    #[serde(default)]
    pub dark_score: Option<u32>,
    #[serde(default)]
    pub light_score: Option<u32>,
    pub status: MatchStatus,
    pub match_number: u32,
}

impl MatchRecord {
    /// Scores of a match that counts towards standings: final with both
    /// scores present. Returns `(dark, light)`.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if self.status != MatchStatus::Final {
            return None;
        }
        match (self.dark_score, self.light_score) {
            (Some(dark), Some(light)) => Some((dark, light)),
            _ => None,
        }
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.dark_team_id == team_id || self.light_team_id == team_id
    }

    /// `[start, start + duration)` in minutes since midnight.
    pub fn window(&self) -> Result<TimeWindow, InputFormatError> {
        TimeWindow::parse(&self.scheduled_time, self.duration)
    }
}

/// A match being created or edited.
///
/// `id` is `None` for a match that does not exist yet; when editing, it names
/// the stored match so the checkers skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub pool_id: String,
    pub division_id: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: String,
    pub duration: u32,
    pub dark_team_id: String,
    pub light_team_id: String,
    pub match_number: u32,
}

impl MatchDraft {
    pub fn exclude_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl From<&MatchRecord> for MatchDraft {
    fn from(record: &MatchRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            pool_id: record.pool_id.clone(),
            division_id: record.division_id.clone(),
            scheduled_date: record.scheduled_date,
            scheduled_time: record.scheduled_time.clone(),
            duration: record.duration,
            dark_team_id: record.dark_team_id.clone(),
            light_team_id: record.light_team_id.clone(),
            match_number: record.match_number,
        }
    }
}
