use chrono::NaiveDate;

use crate::models::MatchRecord;
use crate::schedule::TimeWindow;

/// The slot a candidate match wants in a pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolCandidate<'a> {
    pub pool_id: &'a str,
    pub date: NaiveDate,
    pub window: TimeWindow,
    pub exclude_id: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConflict<'a> {
    pub existing: &'a MatchRecord,
    pub window: TimeWindow,
}

/// First match (in `existing` order) occupying an overlapping window in the
/// same pool on the same date.
pub fn find_pool_conflict<'a>(
    candidate: &PoolCandidate<'_>,
    existing: &'a [MatchRecord],
) -> Option<PoolConflict<'a>> {
    existing
        .iter()
        .filter(|m| candidate.exclude_id != Some(m.id.as_str()))
        .filter(|m| m.pool_id == candidate.pool_id && m.scheduled_date == candidate.date)
        .find_map(|m| {
            let window = match m.window() {
                Ok(window) => window,
                Err(e) => {
                    tracing::warn!(match_id = %m.id, error = %e, "skipping match with unusable time");
                    return None;
                }
            };
            candidate.window.overlaps(&window).then_some(PoolConflict { existing: m, window })
        })
}
