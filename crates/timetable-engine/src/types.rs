//! Shared value types for schedule resolution and conflict checking.
//!
//! Everything here is a plain value: created per validation call, compared
//! by field, discarded afterwards. No type in this module owns persistent
//! state.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All weekdays, Monday first. Fixes the iteration order of [`WeekdaySet`].
const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The weekdays a class meets on, stored as a 7-bit mask.
///
/// A valid schedule request needs a non-empty set; emptiness is reported by
/// the resolver/validator rather than enforced here, so a request can be
/// assembled field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// The set containing no weekdays.
    pub const fn empty() -> Self {
        WeekdaySet { bits: 0 }
    }

    /// Build a set from a slice of weekdays. Duplicates are harmless.
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().copied().collect()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.bits |= 1 << day.num_days_from_monday();
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.bits & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate the contained weekdays in Monday→Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let bits = self.bits;
        ALL_WEEKDAYS
            .into_iter()
            .filter(move |day| bits & (1 << day.num_days_from_monday()) != 0)
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

// On the wire a weekday set is a list of weekday names, not a bitmask.
impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        Ok(days.into_iter().collect())
    }
}

/// A wall-clock time range within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        TimeRange { start, end }
    }

    /// Half-open interval overlap: `a.start < b.end && b.start < a.end`.
    /// Ranges that merely touch (one ends exactly when the other starts)
    /// do NOT overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// A range must end strictly after it starts to hold a session.
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }
}

/// The calendar span of a class, from its start date to its resolved end
/// date. The end date is always derived by resolution, never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SchedulePeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        SchedulePeriod {
            start_date,
            end_date,
        }
    }

    /// Inclusive-date overlap: true when the two periods share at least one
    /// calendar day.
    pub fn overlaps(&self, other: &SchedulePeriod) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

/// A candidate class schedule as assembled by the caller for one validation
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassScheduleRequest {
    /// First calendar day considered for a session.
    pub start_date: NaiveDate,
    /// Number of sessions the class must hold. Must be at least 1.
    pub total_sessions: u32,
    /// Weekdays the class meets on. Must be non-empty.
    pub weekdays: WeekdaySet,
    /// Daily time slot, identical on every selected weekday.
    pub time_range: TimeRange,
    /// Room the class is booked into.
    pub room_id: String,
    /// When editing an existing class, its id — so the class does not
    /// conflict with its own committed slot.
    pub exclude_class_id: Option<String>,
}

/// One already-committed recurring weekly slot, as read from the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingSlot {
    pub class_id: String,
    pub room_id: String,
    pub weekday: Weekday,
    pub time_range: TimeRange,
    pub period: SchedulePeriod,
}
