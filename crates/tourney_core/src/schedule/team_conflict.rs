use chrono::NaiveDate;

use crate::models::MatchRecord;
use crate::schedule::interval::parse_time;

#[derive(Debug, Clone, Copy)]
pub struct TeamCandidate<'a> {
    pub dark_team_id: &'a str,
    pub light_team_id: &'a str,
    pub date: NaiveDate,
    /// Minutes since midnight
    pub time: u32,
    pub exclude_id: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamConflict<'a> {
    pub existing: &'a MatchRecord,
    pub team_id: &'a str,
}

/// First match on the same date starting at exactly the same time that
/// involves either candidate team.
///
/// Start-time equality only: a team booked 08:00-08:55 is not flagged for a
/// match at 08:30. Pool windows use overlap; this check does not.
pub fn find_team_conflict<'a>(
    candidate: &TeamCandidate<'a>,
    existing: &'a [MatchRecord],
) -> Option<TeamConflict<'a>> {
    existing
        .iter()
        .filter(|m| candidate.exclude_id != Some(m.id.as_str()))
        .filter(|m| m.scheduled_date == candidate.date)
        .filter(|m| match parse_time(&m.scheduled_time) {
            Ok(time) => time == candidate.time,
            Err(e) => {
                tracing::warn!(match_id = %m.id, error = %e, "skipping match with unusable time");
                false
            }
        })
        .find_map(|m| {
            [candidate.dark_team_id, candidate.light_team_id]
                .into_iter()
                .find(|team| m.involves(team))
                .map(|team_id| TeamConflict { existing: m, team_id })
        })
}
