//! Error types for schedule validation.
//!
//! Every error is a structured value; `Display` impls exist for logging and
//! quick diagnostics, but presentation layers are expected to read the
//! fields and format/localize on their own.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conflict::Conflict;

/// A malformed request. Never retried; always a caller bug or unvalidated
/// user input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidInput {
    #[error("weekday set is empty")]
    EmptyWeekdays,

    #[error("total sessions must be at least 1")]
    ZeroSessions,

    #[error("end time {end} is not after start time {start}")]
    EmptyTimeRange { start: NaiveTime, end: NaiveTime },
}

/// A failed repository read (connectivity, timeout). The one fault a caller
/// may reasonably retry.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("slot repository read failed: {reason}")]
pub struct PersistenceError {
    pub reason: String,
}

impl PersistenceError {
    pub fn new(reason: impl Into<String>) -> Self {
        PersistenceError {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The resolver walked past its safety horizon without collecting the
    /// requested number of sessions.
    #[error("no schedule reaches the requested session count within {horizon_days} days of {start_date}")]
    Unresolvable {
        start_date: NaiveDate,
        horizon_days: i64,
    },

    #[error("{0}")]
    Conflict(Conflict),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
