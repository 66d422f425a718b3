//! Folds final results into per-team counters.

use std::collections::HashMap;

use crate::config::ScoringConfig;
use crate::models::{MatchRecord, TeamRecord, TeamStanding};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    /// One row per team, in `teams` order, not yet ranked
    pub standings: Vec<TeamStanding>,
    pub matches_counted: usize,
    pub matches_skipped: usize,
}

/// Every team gets a row, even without games. Matches that are not final,
/// lack a score, or reference a team outside `teams` are skipped as a whole.
pub fn aggregate(teams: &[TeamRecord], matches: &[MatchRecord], scoring: &ScoringConfig) -> Aggregate {
    let mut standings: Vec<TeamStanding> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for team in teams {
        if index.contains_key(team.id.as_str()) {
            tracing::warn!(team_id = %team.id, "duplicate team record ignored");
            continue;
        }
        index.insert(team.id.as_str(), standings.len());
        standings.push(TeamStanding::new(team.id.as_str(), team.name.as_str()));
    }

    let mut matches_counted = 0;
    let mut matches_skipped = 0;
    for m in matches {
        let Some((dark_score, light_score)) = m.final_score() else {
            matches_skipped += 1;
            continue;
        };
        let (Some(&dark), Some(&light)) =
            (index.get(m.dark_team_id.as_str()), index.get(m.light_team_id.as_str()))
        else {
            tracing::warn!(
                match_id = %m.id,
                dark_team_id = %m.dark_team_id,
                light_team_id = %m.light_team_id,
                "final match references a team outside the division; skipped"
            );
            matches_skipped += 1;
            continue;
        };

        standings[dark].record(dark_score, light_score);
        standings[light].record(light_score, dark_score);
        matches_counted += 1;
    }

    for standing in &mut standings {
        standing.derive(scoring);
    }

    tracing::debug!(
        teams = standings.len(),
        matches_counted,
        matches_skipped,
        "standings aggregated"
    );
    Aggregate { standings, matches_counted, matches_skipped }
}
