use chrono::NaiveDate;
use thiserror::Error;

use crate::models::MatchStatus;
use crate::schedule::TimeWindow;

/// Malformed input detected before any conflict check runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    #[error("Malformed time '{value}': expected HH:MM")]
    MalformedTime { value: String },

    #[error("Time '{value}' is out of range: hours must be 00-23 and minutes 00-59")]
    TimeOutOfRange { value: String },

    #[error("Match duration must be a positive number of minutes")]
    NonPositiveDuration,

    #[error("Match duration of {duration} minutes exceeds 24 hours")]
    DurationOutOfRange { duration: u32 },

    #[error("Match number must be a positive integer")]
    NonPositiveMatchNumber,
}

/// Outcome of validating a draft match against its schedule context.
///
/// At most one error is ever reported; when several violations exist the
/// variant with the highest precedence wins (see
/// [`MatchValidator`](crate::schedule::MatchValidator)).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    InputFormat(#[from] InputFormatError),

    #[error("A team cannot play against itself ({team_name})")]
    SameTeam { team_id: String, team_name: String },

    #[error("Match number {match_number} is already used by match {existing_match_id}")]
    DuplicateMatchNumber { match_number: u32, existing_match_id: String },

    #[error(
        "{pool_name} is already booked on {date} from {window} by match #{conflicting_match_number}"
    )]
    PoolTimeConflict {
        pool_id: String,
        pool_name: String,
        date: NaiveDate,
        conflicting_match_id: String,
        conflicting_match_number: u32,
        window: TimeWindow,
    },

    #[error(
        "{team_name} is already playing match #{conflicting_match_number} on {date} at {time}"
    )]
    TeamDoubleBooking {
        team_id: String,
        team_name: String,
        date: NaiveDate,
        time: String,
        conflicting_match_id: String,
        conflicting_match_number: u32,
    },

    #[error("{pool_name} is blocked from {window} ({reason})")]
    ScheduleBreakConflict {
        pool_id: String,
        pool_name: String,
        reason: String,
        window: TimeWindow,
    },
}

impl ValidationError {
    /// Domain violations can be fixed by moving or renumbering the match;
    /// malformed input has to be corrected at the source.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ValidationError::InputFormat(_))
    }

    /// Stable identifier used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InputFormat(_) => "INPUT_FORMAT",
            ValidationError::SameTeam { .. } => "SAME_TEAM",
            ValidationError::DuplicateMatchNumber { .. } => "DUPLICATE_MATCH_NUMBER",
            ValidationError::PoolTimeConflict { .. } => "POOL_TIME_CONFLICT",
            ValidationError::TeamDoubleBooking { .. } => "TEAM_DOUBLE_BOOKING",
            ValidationError::ScheduleBreakConflict { .. } => "SCHEDULE_BREAK_CONFLICT",
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Rejected attempt to merge a [`MatchPatch`](crate::models::MatchPatch).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("Match {match_id} is {status:?} and can only be changed by an administrative correction")]
    Locked { match_id: String, status: MatchStatus },

    #[error("Illegal status transition {from:?} -> {to:?}")]
    IllegalTransition { from: MatchStatus, to: MatchStatus },

    #[error("Scores must be entered for both teams or neither")]
    PartialScore,

    #[error("A final match needs a score for both teams")]
    MissingFinalScore,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid scoring: {0}")]
    InvalidScoring(String),

    #[error("Invalid config JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::InvalidJson(e.to_string())
    }
}
