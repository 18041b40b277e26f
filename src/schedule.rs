// src/schedule.rs
//
// The schedule document contract. Written by the scrape pipeline, read back
// by the provider; camelCase on the wire.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Day index 0 = Monday … 6 = Sunday.
pub const DAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// One contiguous family-swim window at a facility.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub pool: String,
    /// 0–6, Monday first. Values outside the range survive parsing and are
    /// excluded at grid build.
    pub day: u8,
    /// "HH:MM", 24-hour, zero-padded
    pub start_time: String,
    /// "HH:MM", exclusive
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
}

impl Session {
    /// Layout eligibility: day in range, both times well shaped, start < end.
    /// The string comparison is sound because the times are fixed-width.
    pub fn is_well_formed(&self) -> bool {
        self.day <= 6
            && is_clock(&self.start_time)
            && is_clock(&self.end_time)
            && self.start_time < self.end_time
    }
}

/// "HH:MM" with a real hour and minute.
fn is_clock(t: &str) -> bool {
    let b = t.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return false;
    }
    let digits = [b[0], b[1], b[3], b[4]].iter().all(u8::is_ascii_digit);
    if !digits {
        return false;
    }
    let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
    let minute = (b[3] - b'0') * 10 + (b[4] - b'0');
    hour < 24 && minute < 60
}

/// One facility's extraction result. A failed pool keeps its slot in the
/// document: empty sessions, `error` set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolSchedule {
    pub pool_name: String,
    pub sessions: Vec<Session>,
    pub last_updated: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    pub last_updated: String,
    pub total_pools: usize,
    pub total_sessions: usize,
    pub pools: Vec<PoolSchedule>,
}

impl ScheduleDocument {
    /// The fail-soft shape: a valid document with nothing in it.
    pub fn empty() -> Self {
        Self {
            last_updated: Utc::now().to_rfc3339(),
            total_pools: 0,
            total_sessions: 0,
            pools: Vec::new(),
        }
    }

    /// Assemble the combined document, recomputing the header totals.
    pub fn from_pools(pools: Vec<PoolSchedule>) -> Self {
        let total_sessions = pools.iter().map(|p| p.sessions.len()).sum();
        Self {
            last_updated: Utc::now().to_rfc3339(),
            total_pools: pools.len(),
            total_sessions,
            pools,
        }
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
