//! Test Fixtures Module
//!
//! Record builders shared by the schedule and standings tests. Every match
//! lands on [`day()`] in division `div-a` unless a test changes it.

use chrono::NaiveDate;

use crate::models::{
    MatchDraft, MatchRecord, MatchStatus, PoolRecord, ScheduleBreakRecord, TeamRecord,
};

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn scheduled_match(
    id: &str,
    match_number: u32,
    pool_id: &str,
    time: &str,
    duration: u32,
    dark: &str,
    light: &str,
) -> MatchRecord {
    MatchRecord {
        id: id.to_string(),
        pool_id: pool_id.to_string(),
        division_id: "div-a".to_string(),
        scheduled_date: day(),
        scheduled_time: time.to_string(),
        duration,
        dark_team_id: dark.to_string(),
        light_team_id: light.to_string(),
        dark_score: None,
        light_score: None,
        status: MatchStatus::Scheduled,
        match_number,
    }
}

/// Final match at 08:00 for 55 minutes in `pool-1`.
pub fn final_match(
    id: &str,
    match_number: u32,
    dark: &str,
    light: &str,
    dark_score: u32,
    light_score: u32,
) -> MatchRecord {
    MatchRecord {
        dark_score: Some(dark_score),
        light_score: Some(light_score),
        status: MatchStatus::Final,
        ..scheduled_match(id, match_number, "pool-1", "08:00", 55, dark, light)
    }
}

/// New (id-less) draft in `div-a` on [`day()`].
pub fn draft(
    match_number: u32,
    pool_id: &str,
    time: &str,
    duration: u32,
    dark: &str,
    light: &str,
) -> MatchDraft {
    MatchDraft {
        id: None,
        pool_id: pool_id.to_string(),
        division_id: "div-a".to_string(),
        scheduled_date: day(),
        scheduled_time: time.to_string(),
        duration,
        dark_team_id: dark.to_string(),
        light_team_id: light.to_string(),
        match_number,
    }
}

pub fn team(id: &str, name: &str) -> TeamRecord {
    team_in(id, name, "div-a")
}

pub fn team_in(id: &str, name: &str, division_id: &str) -> TeamRecord {
    TeamRecord { id: id.to_string(), name: name.to_string(), division_id: division_id.to_string() }
}

pub fn pool(id: &str, name: &str) -> PoolRecord {
    PoolRecord { id: id.to_string(), name: name.to_string() }
}

pub fn schedule_break(pool_id: &str, start: &str, end: &str, reason: &str) -> ScheduleBreakRecord {
    ScheduleBreakRecord {
        pool_id: pool_id.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        reason: reason.to_string(),
        date: None,
    }
}
