//! Property-based tests for resolution and conflict detection.
//!
//! These verify invariants that must hold for *any* valid input, not just
//! the worked examples in the other test files.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use proptest::prelude::*;
use timetable_engine::resolver::resolve;
use timetable_engine::{
    find_conflicts, ClassScheduleRequest, ExistingSlot, HolidayFn, HolidayOracle, NoHolidays,
    PeriodOverlapPolicy, SchedulePeriod, TimeRange, WeekdaySet,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Day capped at 28 to avoid invalid month/day combos.
    (2024i32..=2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    (0usize..7).prop_map(|i| ALL_WEEKDAYS[i])
}

fn arb_weekday_set() -> impl Strategy<Value = WeekdaySet> {
    proptest::collection::vec(arb_weekday(), 1..=7).prop_map(|days| days.into_iter().collect())
}

fn arb_sessions() -> impl Strategy<Value = u32> {
    1u32..=60
}

/// A well-formed daytime range: starts before 20:00, runs 15-180 minutes.
fn arb_time_range() -> impl Strategy<Value = TimeRange> {
    (360u32..1200, 15u32..=180).prop_map(|(start_min, dur)| {
        TimeRange::new(
            NaiveTime::from_hms_opt(start_min / 60, start_min % 60, 0).unwrap(),
            NaiveTime::from_hms_opt((start_min + dur) / 60, (start_min + dur) % 60, 0).unwrap(),
        )
    })
}

/// Deterministic pseudo-holiday pattern that can never block a weekday
/// forever (at most a few days per month are holidays).
fn pseudo_holidays() -> HolidayFn<impl Fn(NaiveDate) -> bool> {
    HolidayFn(|d: NaiveDate| d.day() % 7 == 0)
}

fn candidate(weekday: Weekday, time_range: TimeRange, exclude: Option<&str>) -> ClassScheduleRequest {
    ClassScheduleRequest {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        total_sessions: 10,
        weekdays: WeekdaySet::from_days(&[weekday]),
        time_range,
        room_id: "P101".to_string(),
        exclude_class_id: exclude.map(str::to_string),
    }
}

fn slot(class_id: &str, weekday: Weekday, time_range: TimeRange) -> ExistingSlot {
    ExistingSlot {
        class_id: class_id.to_string(),
        room_id: "P101".to_string(),
        weekday,
        time_range,
        period: SchedulePeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        ),
    }
}

fn shared_period() -> SchedulePeriod {
    SchedulePeriod::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    )
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Resolution is deterministic
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn resolve_is_deterministic(
        start in arb_date(),
        sessions in arb_sessions(),
        weekdays in arb_weekday_set(),
    ) {
        let holidays = pseudo_holidays();
        let first = resolve(start, sessions, &weekdays, &holidays);
        let second = resolve(start, sessions, &weekdays, &holidays);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Session count matches the request, dates strictly increase
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn session_calendar_has_exact_count_in_order(
        start in arb_date(),
        sessions in arb_sessions(),
        weekdays in arb_weekday_set(),
    ) {
        let resolved = resolve(start, sessions, &weekdays, &NoHolidays).unwrap();

        prop_assert_eq!(resolved.session_dates.len(), sessions as usize);
        prop_assert_eq!(resolved.end_date, *resolved.session_dates.last().unwrap());
        for window in resolved.session_dates.windows(2) {
            prop_assert!(window[0] < window[1], "session dates must strictly increase");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Every session lands on a selected, non-holiday weekday
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn sessions_respect_weekdays_and_holidays(
        start in arb_date(),
        sessions in arb_sessions(),
        weekdays in arb_weekday_set(),
    ) {
        let holidays = pseudo_holidays();
        let resolved = resolve(start, sessions, &weekdays, &holidays).unwrap();

        for d in &resolved.session_dates {
            prop_assert!(*d >= start, "no session may precede the start date");
            prop_assert!(weekdays.contains(d.weekday()));
            prop_assert!(!holidays.is_holiday(*d));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Adjacent time ranges never conflict
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn adjacent_ranges_never_conflict(
        weekday in arb_weekday(),
        first in arb_time_range(),
        dur in 15u32..=45,
    ) {
        // Second range starts exactly where the first ends.
        let end_min = first.end.hour() * 60 + first.end.minute();
        let second = TimeRange::new(
            first.end,
            NaiveTime::from_hms_opt((end_min + dur) / 60, (end_min + dur) % 60, 0).unwrap(),
        );

        let conflicts = find_conflicts(
            &candidate(weekday, first, None),
            &shared_period(),
            &[slot("X", weekday, second)],
            PeriodOverlapPolicy::default(),
        );
        prop_assert!(conflicts.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 5: A class never conflicts with its own slot when excluded
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn self_exclusion_never_conflicts(
        weekday in arb_weekday(),
        time_range in arb_time_range(),
    ) {
        let conflicts = find_conflicts(
            &candidate(weekday, time_range, Some("X")),
            &shared_period(),
            &[slot("X", weekday, time_range)],
            PeriodOverlapPolicy::default(),
        );
        prop_assert!(conflicts.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Conflict detection is symmetric
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn conflict_detection_is_symmetric(
        weekday in arb_weekday(),
        range_a in arb_time_range(),
        range_b in arb_time_range(),
    ) {
        let a_vs_b = find_conflicts(
            &candidate(weekday, range_a, None),
            &shared_period(),
            &[slot("B", weekday, range_b)],
            PeriodOverlapPolicy::default(),
        );
        let b_vs_a = find_conflicts(
            &candidate(weekday, range_b, None),
            &shared_period(),
            &[slot("A", weekday, range_a)],
            PeriodOverlapPolicy::default(),
        );

        prop_assert_eq!(
            a_vs_b.is_empty(),
            b_vs_a.is_empty(),
            "overlap of {:?} and {:?} must not depend on direction",
            range_a,
            range_b
        );
    }
}
