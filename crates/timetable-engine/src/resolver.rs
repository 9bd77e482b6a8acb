//! Recurring weekly schedule resolution.
//!
//! Walks the calendar one day at a time from the start date: holidays are
//! skipped, days whose weekday is in the requested set are counted, and the
//! walk stops when the requested session count is reached. The last counted
//! day is the end date.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result, ScheduleError};
use crate::holiday::HolidayOracle;
use crate::types::WeekdaySet;

/// Walk limit. A schedule that cannot be satisfied within five years of its
/// start date is rejected rather than searched forever — this guards
/// against a holiday calendar that blocks every selected weekday
/// indefinitely.
pub const HORIZON_MONTHS: u32 = 60;

/// The outcome of a successful resolution: the derived end date and the
/// full session calendar, in date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSchedule {
    /// Date of the last session. Equals `session_dates.last()`.
    pub end_date: NaiveDate,
    /// One date per session, strictly increasing. Length equals the
    /// requested session count.
    pub session_dates: Vec<NaiveDate>,
}

/// Derive the end date and session calendar of a recurring weekly class.
///
/// The start date itself counts as session 1 when it falls on a selected
/// weekday and is not a holiday. Pure and deterministic: the same inputs
/// always produce the same schedule, so this function is the single source
/// of truth for a class's end date.
///
/// # Errors
///
/// - [`ScheduleError::InvalidInput`] when `total_sessions` is zero or
///   `weekdays` is empty; nothing is walked.
/// - [`ScheduleError::Unresolvable`] when the walk passes
///   `start_date + 5 years` before collecting `total_sessions` dates.
pub fn resolve(
    start_date: NaiveDate,
    total_sessions: u32,
    weekdays: &WeekdaySet,
    holidays: &dyn HolidayOracle,
) -> Result<ResolvedSchedule> {
    if total_sessions == 0 {
        return Err(InvalidInput::ZeroSessions.into());
    }
    if weekdays.is_empty() {
        return Err(InvalidInput::EmptyWeekdays.into());
    }

    let horizon = start_date
        .checked_add_months(Months::new(HORIZON_MONTHS))
        .unwrap_or(NaiveDate::MAX);

    let mut session_dates = Vec::with_capacity(total_sessions as usize);
    let mut day = start_date;
    loop {
        if day > horizon {
            return Err(unresolvable(start_date, horizon));
        }
        // A holiday is skipped before the weekday pattern is consulted, so
        // it never counts even on a selected weekday.
        if !holidays.is_holiday(day) && weekdays.contains(day.weekday()) {
            session_dates.push(day);
            if session_dates.len() == total_sessions as usize {
                return Ok(ResolvedSchedule {
                    end_date: day,
                    session_dates,
                });
            }
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => return Err(unresolvable(start_date, horizon)),
        };
    }
}

fn unresolvable(start_date: NaiveDate, horizon: NaiveDate) -> ScheduleError {
    ScheduleError::Unresolvable {
        start_date,
        horizon_days: (horizon - start_date).num_days(),
    }
}
