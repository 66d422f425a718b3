//! # Schedule Conflict Detection
//!
//! One module for every scheduling entry point (create, edit, drag-and-drop,
//! audit). Inputs are explicit slices of records; nothing is cached between
//! calls.

pub mod audit;
pub mod break_conflict;
pub mod interval;
pub mod pool_conflict;
pub mod team_conflict;
pub mod validator;

#[cfg(test)]
mod validator_tests;

pub use audit::{audit_schedule, ScheduleIssue, ScheduleIssueReport};
pub use break_conflict::{find_break_conflict, BreakCandidate, BreakConflict};
pub use interval::{format_minutes, overlaps, parse_time, TimeWindow};
pub use pool_conflict::{find_pool_conflict, PoolCandidate, PoolConflict};
pub use team_conflict::{find_team_conflict, TeamCandidate, TeamConflict};
pub use validator::{MatchValidator, ValidationContext};
