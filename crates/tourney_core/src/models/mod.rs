pub mod match_record;
pub mod patch;
pub mod pool;
pub mod standings;
pub mod team;

pub use match_record::{MatchDraft, MatchRecord, MatchStatus};
pub use patch::{Authority, MatchPatch};
pub use pool::{PoolRecord, ScheduleBreakRecord};
pub use standings::{StandingsTable, TeamStanding};
pub use team::TeamRecord;
