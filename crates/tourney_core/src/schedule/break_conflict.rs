use crate::models::ScheduleBreakRecord;
use crate::schedule::TimeWindow;

#[derive(Debug, Clone, Copy)]
pub struct BreakCandidate<'a> {
    pub pool_id: &'a str,
    pub window: TimeWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakConflict<'a> {
    pub schedule_break: &'a ScheduleBreakRecord,
    pub window: TimeWindow,
}

/// First break of the candidate's pool whose window overlaps the candidate.
///
/// The break's `date` is not consulted: a break blocks its window on every
/// day of the pool.
pub fn find_break_conflict<'a>(
    candidate: &BreakCandidate<'_>,
    breaks: &'a [ScheduleBreakRecord],
) -> Option<BreakConflict<'a>> {
    breaks.iter().filter(|b| b.pool_id == candidate.pool_id).find_map(|b| {
        let window = match b.window() {
            Ok(window) if !window.is_empty() => window,
            Ok(window) => {
                tracing::warn!(pool_id = %b.pool_id, %window, "skipping break that ends before it starts");
                return None;
            }
            Err(e) => {
                tracing::warn!(pool_id = %b.pool_id, error = %e, "skipping break with unusable time");
                return None;
            }
        };
        candidate
            .window
            .overlaps(&window)
            .then_some(BreakConflict { schedule_break: b, window })
    })
}
