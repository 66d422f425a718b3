use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;

/// One row of a division table.
///
/// `goal_diff` and `points` are derived; call [`TeamStanding::derive`] after
/// touching the raw counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: String,
    pub team_name: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
    pub points: u32,
    /// 1-based; 0 until ranked
    pub rank: u32,
}

impl TeamStanding {
    pub fn new(team_id: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            team_name: team_name.into(),
            games: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
            rank: 0,
        }
    }

    /// Record one finished game from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.games = self.games.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        let counter = match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => &mut self.wins,
            std::cmp::Ordering::Less => &mut self.losses,
            std::cmp::Ordering::Equal => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn derive(&mut self, scoring: &ScoringConfig) {
        self.goal_diff = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points = scoring.points_for(self.wins, self.draws, self.losses);
    }

    /// Equal on points, goal difference and goals for: shares a rank.
    pub fn is_true_tie(&self, other: &TeamStanding) -> bool {
        self.points == other.points
            && self.goal_diff == other.goal_diff
            && self.goals_for == other.goals_for
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsTable {
    /// Ranked order
    pub standings: Vec<TeamStanding>,
    pub tiebreaker_notes: Vec<String>,
    pub matches_counted: usize,
    /// Not final, missing a score, or referencing an unknown team
    pub matches_skipped: usize,
}

impl StandingsTable {
    pub fn get(&self, team_id: &str) -> Option<&TeamStanding> {
        self.standings.iter().find(|s| s.team_id == team_id)
    }

    pub fn leader(&self) -> Option<&TeamStanding> {
        self.standings.first()
    }
}
