//! # Standings
//!
//! Two-stage pipeline: [`aggregator::aggregate`] folds final results into
//! counters, [`ranker::rank`] orders them. A table is always rebuilt from the
//! full set of a division's matches; there is no incremental update path.

pub mod aggregator;
pub mod ranker;


use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::config::ScoringConfig;
use crate::models::{MatchRecord, MatchStatus, StandingsTable, TeamRecord};

/// Above this many divisions, [`recompute_all`] fans out over rayon.
const PARALLEL_DIVISION_THRESHOLD: usize = 8;

/// Rebuild a division table with the default two-point scoring.
pub fn recompute(teams: &[TeamRecord], matches: &[MatchRecord]) -> StandingsTable {
    recompute_with(teams, matches, &ScoringConfig::default())
}

pub fn recompute_with(
    teams: &[TeamRecord],
    matches: &[MatchRecord],
    scoring: &ScoringConfig,
) -> StandingsTable {
    let aggregate = aggregator::aggregate(teams, matches, scoring);
    let (standings, tiebreaker_notes) = ranker::rank(aggregate.standings);

    StandingsTable {
        standings,
        tiebreaker_notes,
        matches_counted: aggregate.matches_counted,
        matches_skipped: aggregate.matches_skipped,
    }
}

/// Recompute every division found in `teams`, keyed by division id.
///
/// Matches are routed by their `division_id`; matches of a division without
/// teams are dropped.
pub fn recompute_all(
    teams: &[TeamRecord],
    matches: &[MatchRecord],
    scoring: &ScoringConfig,
) -> BTreeMap<String, StandingsTable> {
    let mut divisions: BTreeMap<&str, (Vec<TeamRecord>, Vec<MatchRecord>)> = BTreeMap::new();
    for team in teams {
        divisions.entry(team.division_id.as_str()).or_default().0.push(team.clone());
    }
    for m in matches {
        match divisions.get_mut(m.division_id.as_str()) {
            Some((_, division_matches)) => division_matches.push(m.clone()),
            None => {
                tracing::debug!(match_id = %m.id, division_id = %m.division_id, "match has no division teams")
            }
        }
    }

    let compute = |(division_id, (teams, matches)): (&&str, &(Vec<TeamRecord>, Vec<MatchRecord>))| {
        (division_id.to_string(), recompute_with(teams, matches, scoring))
    };

    if divisions.len() > PARALLEL_DIVISION_THRESHOLD {
        divisions.par_iter().map(compute).collect()
    } else {
        divisions.iter().map(compute).collect()
    }
}

/// Whether changing `before` into `after` invalidates the division table:
/// entering or leaving final, or a score change on a final match.
pub fn requires_recompute(before: &MatchRecord, after: &MatchRecord) -> bool {
    let was_final = before.status == MatchStatus::Final;
    let is_final = after.status == MatchStatus::Final;

    match (was_final, is_final) {
        (false, false) => false,
        (true, true) => {
            before.final_score() != after.final_score()
                || before.dark_team_id != after.dark_team_id
                || before.light_team_id != after.light_team_id
        }
        _ => true,
    }
}
