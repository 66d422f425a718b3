//! # tourney_core - Tournament Integrity Engine
//!
//! Pure, deterministic core for a multi-division tournament:
//!
//! - **Schedule conflict detection**: a candidate match is checked against pool
//!   occupancy, team double-booking and blocked pool windows, in a fixed
//!   precedence ([`MatchValidator`]).
//! - **Standings ranking**: finalized results are folded into per-team counters
//!   and ranked with a multi-key tie-break chain, shared ranks and audit notes
//!   ([`recompute`]).
//!
//! Nothing in this crate performs I/O except the optional config loader; the
//! calling layer fetches records, invokes the core and persists the output.

// Validation messages carry several detail fields per variant
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod standings;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use api::{
    audit_schedule_json, recompute_standings_json, request_schema_json, validate_match_json,
};
pub use config::{ScoringConfig, TournamentConfig};
pub use error::{ConfigError, InputFormatError, PatchError, ValidationError, ValidationResult};
pub use models::{
    Authority, MatchDraft, MatchPatch, MatchRecord, MatchStatus, PoolRecord,
    ScheduleBreakRecord, StandingsTable, TeamRecord, TeamStanding,
};
pub use schedule::{audit_schedule, MatchValidator, ScheduleIssue, TimeWindow, ValidationContext};
pub use standings::{recompute, recompute_all, recompute_with, requires_recompute};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u32 = 1;
