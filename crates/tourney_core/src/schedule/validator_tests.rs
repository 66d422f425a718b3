//! Precedence and message tests for MatchValidator

use super::*;
use crate::error::{InputFormatError, ValidationError};
use crate::test_fixtures::{draft, pool, schedule_break, scheduled_match, team};

fn base_matches() -> Vec<crate::models::MatchRecord> {
    vec![
        scheduled_match("m1", 1, "pool-1", "08:00", 55, "sharks", "eels"),
        scheduled_match("m5", 5, "pool-2", "10:00", 55, "rays", "orcas"),
    ]
}

#[test]
fn test_free_slot_accepted() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    let d = draft(2, "pool-1", "08:55", 55, "rays", "orcas");
    assert_eq!(MatchValidator::validate(&d, &ctx), Ok(()));
}

#[test]
fn test_input_format_checked_first() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    // Same team AND bad time: format wins
    let d = draft(2, "pool-1", "8h00", 55, "sharks", "sharks");
    let err = MatchValidator::validate(&d, &ctx).unwrap_err();
    assert!(matches!(err, ValidationError::InputFormat(InputFormatError::MalformedTime { .. })));
    assert!(!err.is_recoverable());

    let d = draft(2, "pool-1", "09:00", 0, "rays", "orcas");
    assert_eq!(
        MatchValidator::validate(&d, &ctx),
        Err(ValidationError::InputFormat(InputFormatError::NonPositiveDuration))
    );

    let d = draft(0, "pool-1", "09:00", 55, "rays", "orcas");
    assert_eq!(
        MatchValidator::validate(&d, &ctx),
        Err(ValidationError::InputFormat(InputFormatError::NonPositiveMatchNumber))
    );
}

#[test]
fn test_oversized_duration_rejected_as_input_format() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    let d = draft(2, "pool-1", "08:00", u32::MAX, "rays", "orcas");
    let err = MatchValidator::validate(&d, &ctx).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InputFormat(InputFormatError::DurationOutOfRange { duration: u32::MAX })
    );
    assert_eq!(err.code(), "INPUT_FORMAT");
}

#[test]
fn test_stored_match_with_oversized_duration_holds_no_slot() {
    let mut matches = base_matches();
    matches.push(scheduled_match("huge", 9, "pool-3", "06:00", u32::MAX, "pike", "carp"));
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    let d = draft(2, "pool-3", "07:00", 55, "rays", "orcas");
    assert_eq!(MatchValidator::validate(&d, &ctx), Ok(()));
}

#[test]
fn test_same_team_uses_team_name() {
    let teams = vec![team("sharks", "Harbour Sharks")];
    let ctx = ValidationContext { teams: &teams, ..Default::default() };

    let err = MatchValidator::validate(&draft(3, "pool-1", "09:00", 55, "sharks", "sharks"), &ctx)
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::SameTeam {
            team_id: "sharks".to_string(),
            team_name: "Harbour Sharks".to_string()
        }
    );
    assert!(err.to_string().contains("Harbour Sharks"));
    assert!(err.is_recoverable());
}

#[test]
fn test_duplicate_match_number_for_new_match() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    let d = draft(5, "pool-3", "14:00", 55, "a", "b");
    assert_eq!(
        MatchValidator::validate(&d, &ctx),
        Err(ValidationError::DuplicateMatchNumber {
            match_number: 5,
            existing_match_id: "m5".to_string()
        })
    );
}

#[test]
fn test_own_edit_keeps_match_number() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    let mut d = draft(5, "pool-2", "10:00", 55, "rays", "orcas");
    d.id = Some("m5".to_string());
    assert_eq!(MatchValidator::validate(&d, &ctx), Ok(()));
}

#[test]
fn test_duplicate_number_beats_pool_conflict() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    // Number 5 is taken AND pool-1 is busy at 08:30
    let d = draft(5, "pool-1", "08:30", 55, "a", "b");
    assert!(matches!(
        MatchValidator::validate(&d, &ctx),
        Err(ValidationError::DuplicateMatchNumber { .. })
    ));
}

#[test]
fn test_pool_conflict_message() {
    let matches = base_matches();
    let pools = vec![pool("pool-1", "Main Pool")];
    let ctx = ValidationContext { matches: &matches, pools: &pools, ..Default::default() };

    let err = MatchValidator::validate(&draft(9, "pool-1", "08:30", 55, "a", "b"), &ctx)
        .unwrap_err();
    match &err {
        ValidationError::PoolTimeConflict { conflicting_match_number, window, .. } => {
            assert_eq!(*conflicting_match_number, 1);
            assert_eq!(*window, TimeWindow::new(480, 535));
        }
        other => panic!("expected pool conflict, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Main Pool is already booked on 2024-06-01 from 08:00 to 08:55 by match #1"
    );
}

#[test]
fn test_back_to_back_in_pool_accepted() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    // ends exactly when m1 starts
    let d = draft(9, "pool-1", "07:05", 55, "a", "b");
    assert_eq!(MatchValidator::validate(&d, &ctx), Ok(()));
}

#[test]
fn test_pool_conflict_beats_team_conflict() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    // Same pool + same time + same team: pool reported
    let d = draft(9, "pool-1", "08:00", 55, "sharks", "rays");
    assert!(matches!(
        MatchValidator::validate(&d, &ctx),
        Err(ValidationError::PoolTimeConflict { .. })
    ));
}

#[test]
fn test_team_double_booking_in_other_pool() {
    let matches = base_matches();
    let teams = vec![team("eels", "River Eels")];
    let ctx = ValidationContext { matches: &matches, teams: &teams, ..Default::default() };

    let d = draft(9, "pool-3", "08:00", 55, "rays", "eels");
    let err = MatchValidator::validate(&d, &ctx).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TeamDoubleBooking {
            team_id: "eels".to_string(),
            team_name: "River Eels".to_string(),
            date: crate::test_fixtures::day(),
            time: "08:00".to_string(),
            conflicting_match_id: "m1".to_string(),
            conflicting_match_number: 1,
        }
    );
}

#[test]
fn test_team_in_overlapping_but_later_match_is_allowed() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    // sharks play 08:00-08:55 in pool-1; 08:30 elsewhere passes the equality rule
    let d = draft(9, "pool-3", "08:30", 55, "sharks", "rays");
    assert_eq!(MatchValidator::validate(&d, &ctx), Ok(()));
}

#[test]
fn test_team_conflict_beats_break_conflict() {
    let matches = base_matches();
    let breaks = vec![schedule_break("pool-3", "07:30", "09:00", "Warm-up")];
    let ctx = ValidationContext { matches: &matches, breaks: &breaks, ..Default::default() };

    let d = draft(9, "pool-3", "08:00", 55, "sharks", "rays");
    assert!(matches!(
        MatchValidator::validate(&d, &ctx),
        Err(ValidationError::TeamDoubleBooking { .. })
    ));
}

#[test]
fn test_break_conflict_message() {
    let breaks = vec![schedule_break("pool-1", "12:00", "13:00", "Opening ceremony")];
    let pools = vec![pool("pool-1", "Main Pool")];
    let ctx = ValidationContext { pools: &pools, breaks: &breaks, ..Default::default() };

    let err = MatchValidator::validate(&draft(9, "pool-1", "11:30", 55, "a", "b"), &ctx)
        .unwrap_err();
    assert_eq!(err.code(), "SCHEDULE_BREAK_CONFLICT");
    assert_eq!(err.to_string(), "Main Pool is blocked from 12:00 to 13:00 (Opening ceremony)");
}

#[test]
fn test_editing_match_ignores_itself() {
    let matches = base_matches();
    let ctx = ValidationContext { matches: &matches, ..Default::default() };

    // m1 shifted by 10 minutes overlaps only its old self
    let mut d = draft(1, "pool-1", "08:10", 55, "sharks", "eels");
    d.id = Some("m1".to_string());
    assert_eq!(MatchValidator::validate(&d, &ctx), Ok(()));
}
