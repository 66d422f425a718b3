//! Tie-break chain, rank assignment and audit notes.
//!
//! Sort order: points (desc), goal difference (desc), goals for (desc),
//! goals against (asc), team name (asc). Ranks are shared only on a true tie
//! (points, goal difference and goals for all equal) and the next distinct
//! team takes its 1-based position, so ranks can skip: 1, 2, 2, 4.

use std::cmp::Ordering;

use crate::models::TeamStanding;

type CmpFunc = fn(&TeamStanding, &TeamStanding) -> Ordering;

fn compare_points(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_goal_diff(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.goal_diff.cmp(&a.goal_diff)
}

fn compare_goals_for(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.goals_for.cmp(&a.goals_for)
}

// Lower is better.
fn compare_goals_against(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    a.goals_against.cmp(&b.goals_against)
}

fn compare_name(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    a.team_name.cmp(&b.team_name).then_with(|| a.team_id.cmp(&b.team_id))
}

const TIE_BREAK_CHAIN: [CmpFunc; 5] =
    [compare_points, compare_goal_diff, compare_goals_for, compare_goals_against, compare_name];

pub fn compare(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    TIE_BREAK_CHAIN.iter().fold(Ordering::Equal, |acc, cmp| acc.then_with(|| cmp(a, b)))
}

/// Sort, assign ranks and write notes in a single walk.
pub fn rank(mut standings: Vec<TeamStanding>) -> (Vec<TeamStanding>, Vec<String>) {
    standings.sort_by(compare);

    let mut notes = Vec::new();
    for i in 0..standings.len() {
        if i == 0 {
            standings[i].rank = 1;
            continue;
        }

        let (before, after) = standings.split_at_mut(i);
        let prev = &before[i - 1];
        let cur = &mut after[0];

        cur.rank = if cur.is_true_tie(prev) { prev.rank } else { i as u32 + 1 };

        if cur.points == prev.points {
            notes.push(tiebreak_note(prev, cur));
        }
    }

    (standings, notes)
}

fn tiebreak_note(above: &TeamStanding, below: &TeamStanding) -> String {
    if above.goal_diff != below.goal_diff {
        format!(
            "{} ranked above {} on goal difference ({} vs {}), both on {} pts",
            above.team_name,
            below.team_name,
            signed(above.goal_diff),
            signed(below.goal_diff),
            above.points
        )
    } else if above.goals_for != below.goals_for {
        format!(
            "{} ranked above {} on goals for ({} vs {}), both on {} pts and goal difference {}",
            above.team_name,
            below.team_name,
            above.goals_for,
            below.goals_for,
            above.points,
            signed(above.goal_diff)
        )
    } else {
        format!(
            "{} and {} are tied on {} pts, goal difference {} and {} goals for; \
             they share rank {} and are listed by goals against, then name",
            above.team_name,
            below.team_name,
            above.points,
            signed(above.goal_diff),
            above.goals_for,
            below.rank
        )
    }
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
