//! Match validation: structural checks plus the three conflict checkers, in a
//! fixed precedence.
//!
//! | order | check                     | error                      |
//! |-------|---------------------------|----------------------------|
//! | 0     | time / duration / number  | `InputFormat`              |
//! | 1     | dark team == light team   | `SameTeam`                 |
//! | 2     | match number reused       | `DuplicateMatchNumber`     |
//! | 3     | pool window overlap       | `PoolTimeConflict`         |
//! | 4     | team at same date + time  | `TeamDoubleBooking`        |
//! | 5     | pool break overlap        | `ScheduleBreakConflict`    |
//!
//! Only the first failing check is reported.

use crate::error::{InputFormatError, ValidationError, ValidationResult};
use crate::models::team::team_name;
use crate::models::{MatchDraft, MatchRecord, PoolRecord, ScheduleBreakRecord, TeamRecord};
use crate::schedule::break_conflict::{find_break_conflict, BreakCandidate};
use crate::schedule::pool_conflict::{find_pool_conflict, PoolCandidate};
use crate::schedule::team_conflict::{find_team_conflict, TeamCandidate};
use crate::schedule::TimeWindow;

/// Everything a draft is checked against. Read-only; supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// Non-deleted matches of the tournament
    pub matches: &'a [MatchRecord],
    pub pools: &'a [PoolRecord],
    pub teams: &'a [TeamRecord],
    pub breaks: &'a [ScheduleBreakRecord],
}

impl ValidationContext<'_> {
    /// Display name for a pool id, falling back to the id itself.
    pub fn pool_name<'b>(&'b self, pool_id: &'b str) -> &'b str {
        self.pools.iter().find(|p| p.id == pool_id).map(|p| p.name.as_str()).unwrap_or(pool_id)
    }

    pub fn team_name<'b>(&'b self, team_id: &'b str) -> &'b str {
        team_name(self.teams, team_id)
    }
}

pub struct MatchValidator;

impl MatchValidator {
    pub fn validate(draft: &MatchDraft, ctx: &ValidationContext<'_>) -> ValidationResult {
        let window = Self::check_format(draft)?;

        if draft.dark_team_id == draft.light_team_id {
            return Err(ValidationError::SameTeam {
                team_id: draft.dark_team_id.clone(),
                team_name: ctx.team_name(&draft.dark_team_id).to_string(),
            });
        }

        if let Some(existing) = ctx
            .matches
            .iter()
            .find(|m| m.match_number == draft.match_number && draft.exclude_id() != Some(m.id.as_str()))
        {
            return Err(ValidationError::DuplicateMatchNumber {
                match_number: draft.match_number,
                existing_match_id: existing.id.clone(),
            });
        }

        let pool_candidate = PoolCandidate {
            pool_id: &draft.pool_id,
            date: draft.scheduled_date,
            window,
            exclude_id: draft.exclude_id(),
        };
        if let Some(conflict) = find_pool_conflict(&pool_candidate, ctx.matches) {
            return Err(ValidationError::PoolTimeConflict {
                pool_id: draft.pool_id.clone(),
                pool_name: ctx.pool_name(&draft.pool_id).to_string(),
                date: draft.scheduled_date,
                conflicting_match_id: conflict.existing.id.clone(),
                conflicting_match_number: conflict.existing.match_number,
                window: conflict.window,
            });
        }

        let team_candidate = TeamCandidate {
            dark_team_id: &draft.dark_team_id,
            light_team_id: &draft.light_team_id,
            date: draft.scheduled_date,
            time: window.start,
            exclude_id: draft.exclude_id(),
        };
        if let Some(conflict) = find_team_conflict(&team_candidate, ctx.matches) {
            return Err(ValidationError::TeamDoubleBooking {
                team_id: conflict.team_id.to_string(),
                team_name: ctx.team_name(conflict.team_id).to_string(),
                date: draft.scheduled_date,
                time: conflict.existing.scheduled_time.clone(),
                conflicting_match_id: conflict.existing.id.clone(),
                conflicting_match_number: conflict.existing.match_number,
            });
        }

        let break_candidate = BreakCandidate { pool_id: &draft.pool_id, window };
        if let Some(conflict) = find_break_conflict(&break_candidate, ctx.breaks) {
            return Err(ValidationError::ScheduleBreakConflict {
                pool_id: draft.pool_id.clone(),
                pool_name: ctx.pool_name(&draft.pool_id).to_string(),
                reason: conflict.schedule_break.reason.clone(),
                window: conflict.window,
            });
        }

        tracing::debug!(
            match_number = draft.match_number,
            pool_id = %draft.pool_id,
            date = %draft.scheduled_date,
            %window,
            "match draft accepted"
        );
        Ok(())
    }

    /// Runs before any conflict check; returns the draft's window.
    fn check_format(draft: &MatchDraft) -> Result<TimeWindow, InputFormatError> {
        if draft.duration == 0 {
            return Err(InputFormatError::NonPositiveDuration);
        }
        if draft.match_number == 0 {
            return Err(InputFormatError::NonPositiveMatchNumber);
        }
        TimeWindow::parse(&draft.scheduled_time, draft.duration)
    }
}
