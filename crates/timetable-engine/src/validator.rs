//! Validation pipeline for a candidate class schedule.
//!
//! Resolution runs before conflict checking because conflicts are evaluated
//! against the resolved calendar period, which is only known once the end
//! date has been computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::conflict::{find_conflicts, PeriodOverlapPolicy};
use crate::error::{InvalidInput, PersistenceError, ScheduleError};
use crate::holiday::HolidayOracle;
use crate::repo::ExistingSlotRepository;
use crate::resolver::resolve;
use crate::types::{ClassScheduleRequest, SchedulePeriod};

/// The aggregated outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// The schedule is well-formed and conflict-free. The caller persists
    /// the class using the derived end date and session calendar.
    Resolved {
        end_date: NaiveDate,
        session_dates: Vec<NaiveDate>,
    },
    /// The schedule was rejected; every problem found is listed.
    Rejected { errors: Vec<ScheduleError> },
}

impl ValidationResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ValidationResult::Resolved { .. })
    }

    /// The rejection errors, or an empty slice for a resolved schedule.
    pub fn errors(&self) -> &[ScheduleError] {
        match self {
            ValidationResult::Resolved { .. } => &[],
            ValidationResult::Rejected { errors } => errors,
        }
    }
}

/// Orchestrates resolution and conflict checking behind a single entry
/// point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleValidator {
    pub period_policy: PeriodOverlapPolicy,
}

impl ScheduleValidator {
    pub fn new() -> Self {
        ScheduleValidator::default()
    }

    pub fn with_policy(period_policy: PeriodOverlapPolicy) -> Self {
        ScheduleValidator { period_policy }
    }

    /// Validate a candidate class schedule against the holiday calendar and
    /// the committed slots of its room.
    ///
    /// Domain rejections come back as `Ok(Rejected { .. })`; only a failed
    /// repository read is an `Err`, since that is the one fault a caller
    /// may want to retry. Validation is read-only and has no partial
    /// outcomes.
    ///
    /// The verdict is advisory: validation and the eventual insert are two
    /// separate operations, so the commit path must re-check conflicts
    /// inside a serializable transaction, or rely on a room/weekday/time
    /// uniqueness constraint, to rule out a double booking slipping in
    /// between.
    pub fn validate(
        &self,
        request: &ClassScheduleRequest,
        holidays: &dyn HolidayOracle,
        repository: &dyn ExistingSlotRepository,
    ) -> Result<ValidationResult, PersistenceError> {
        // Structural checks first; a malformed request never reaches the
        // resolver or the repository.
        let mut errors: Vec<ScheduleError> = Vec::new();
        if request.weekdays.is_empty() {
            errors.push(InvalidInput::EmptyWeekdays.into());
        }
        if request.total_sessions == 0 {
            errors.push(InvalidInput::ZeroSessions.into());
        }
        if !request.time_range.is_well_formed() {
            errors.push(
                InvalidInput::EmptyTimeRange {
                    start: request.time_range.start,
                    end: request.time_range.end,
                }
                .into(),
            );
        }
        if !errors.is_empty() {
            return Ok(ValidationResult::Rejected { errors });
        }

        let resolved = match resolve(
            request.start_date,
            request.total_sessions,
            &request.weekdays,
            holidays,
        ) {
            Ok(resolved) => resolved,
            Err(err) => return Ok(ValidationResult::Rejected { errors: vec![err] }),
        };

        let period = SchedulePeriod::new(request.start_date, resolved.end_date);

        let slots = repository.load(&request.room_id)?;

        let conflicts = find_conflicts(request, &period, &slots, self.period_policy);
        if conflicts.is_empty() {
            Ok(ValidationResult::Resolved {
                end_date: resolved.end_date,
                session_dates: resolved.session_dates,
            })
        } else {
            Ok(ValidationResult::Rejected {
                errors: conflicts.into_iter().map(ScheduleError::Conflict).collect(),
            })
        }
    }
}
