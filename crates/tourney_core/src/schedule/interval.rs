//! Time-of-day parsing and half-open interval math.
//!
//! All windows are `[start, end)` in minutes since midnight. A window that
//! ends exactly when another starts does NOT overlap it: back-to-back matches
//! in one pool are legal.

use std::fmt;

use chrono::{format::ParseErrorKind, NaiveTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InputFormatError;

/// Longest window a match may occupy.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Parse `HH:MM` into minutes since midnight. Both fields must be two digits.
pub fn parse_time(value: &str) -> Result<u32, InputFormatError> {
    let bytes = value.as_bytes();
    let two_digit_fields = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !two_digit_fields {
        return Err(InputFormatError::MalformedTime { value: value.to_string() });
    }

    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| match e.kind() {
        ParseErrorKind::OutOfRange => InputFormatError::TimeOutOfRange { value: value.to_string() },
        _ => InputFormatError::MalformedTime { value: value.to_string() },
    })?;
    Ok(time.hour() * 60 + time.minute())
}

/// Strict overlap of `[start_a, end_a)` and `[start_b, end_b)`.
#[inline]
pub fn overlaps(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    start_a < end_b && end_a > start_b
}

/// `HH:MM`; values past midnight keep counting hours (`24:30`).
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TimeWindow {
    pub start: u32,
    pub end: u32,
}

impl TimeWindow {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Saturates instead of wrapping; [`TimeWindow::parse`] rejects durations
    /// above [`MAX_DURATION_MINUTES`] before they get here.
    pub fn from_start_and_duration(start: u32, duration: u32) -> Self {
        Self { start, end: start.saturating_add(duration) }
    }

    pub fn parse(time: &str, duration: u32) -> Result<Self, InputFormatError> {
        if duration > MAX_DURATION_MINUTES {
            return Err(InputFormatError::DurationOutOfRange { duration });
        }
        Ok(Self::from_start_and_duration(parse_time(time)?, duration))
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", format_minutes(self.start), format_minutes(self.end))
    }
}
