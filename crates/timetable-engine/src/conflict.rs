//! Room/time collision detection between a candidate class and committed
//! weekly slots.
//!
//! Two weekly slots conflict when they share a room and a weekday and their
//! time ranges overlap. Adjacent ranges (one ends exactly when the other
//! starts) are NOT conflicts. All conflicts are collected, never fail-fast,
//! so the caller can report every problem in one pass.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::types::{ClassScheduleRequest, ExistingSlot, SchedulePeriod, TimeRange};

/// One detected collision. Carries the raw fields a presentation layer
/// needs to build a message; no text is formatted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub weekday: Weekday,
    pub conflicting_class_id: String,
    pub conflicting_time_range: TimeRange,
    pub room_id: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} is already booked on {} {}-{} by class {}",
            self.room_id,
            self.weekday,
            self.conflicting_time_range.start,
            self.conflicting_time_range.end,
            self.conflicting_class_id
        )
    }
}

/// Whether two classes must also overlap in calendar time to conflict.
///
/// The product question is open: does a past course block a future course
/// from reusing its slot? Until that is settled, both readings are
/// available and the caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodOverlapPolicy {
    /// Any two classes sharing room, weekday and time conflict, no matter
    /// when their calendar periods run.
    #[default]
    IgnorePeriods,
    /// Additionally require the two schedule periods to share at least one
    /// calendar day, so non-overlapping courses can reuse a slot.
    RequireOverlap,
}

/// Find every collision between a candidate schedule and the committed
/// slots of its room.
///
/// The check runs once per weekday in `candidate.weekdays`; a slot matching
/// `candidate.exclude_class_id` is skipped, so editing a class never flags
/// the class against itself. Detection is symmetric: swapping candidate and
/// existing roles finds the same overlaps.
pub fn find_conflicts(
    candidate: &ClassScheduleRequest,
    period: &SchedulePeriod,
    existing: &[ExistingSlot],
    policy: PeriodOverlapPolicy,
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for weekday in candidate.weekdays.iter() {
        for slot in existing {
            if slot.room_id != candidate.room_id || slot.weekday != weekday {
                continue;
            }
            if candidate.exclude_class_id.as_deref() == Some(slot.class_id.as_str()) {
                continue;
            }
            if !candidate.time_range.overlaps(&slot.time_range) {
                continue;
            }
            if policy == PeriodOverlapPolicy::RequireOverlap && !period.overlaps(&slot.period) {
                continue;
            }
            conflicts.push(Conflict {
                weekday,
                conflicting_class_id: slot.class_id.clone(),
                conflicting_time_range: slot.time_range,
                room_id: slot.room_id.clone(),
            });
        }
    }

    conflicts
}
