use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InputFormatError;
use crate::schedule::{interval::parse_time, TimeWindow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    pub id: String,
    pub name: String,
}

/// A reserved window in a pool (ceremony, maintenance...).
///
/// `date` is carried for storage round-trips only. The conflict check applies
/// every break to every day of its pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBreakRecord {
    pub pool_id: String,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ScheduleBreakRecord {
    pub fn window(&self) -> Result<TimeWindow, InputFormatError> {
        Ok(TimeWindow::new(parse_time(&self.start_time)?, parse_time(&self.end_time)?))
    }
}
