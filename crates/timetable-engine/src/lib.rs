//! # timetable-engine
//!
//! Recurring weekly schedule resolution and room conflict detection for
//! class timetables.
//!
//! Given a start date, a required session count, a weekday pattern and a
//! holiday calendar, the engine derives the concrete end date and session
//! dates of a class, then checks the candidate room/time slot against the
//! weekly slots already committed for that room. It is a pure library: the
//! only I/O is a single repository read behind a trait, and nothing here
//! touches a database or a UI.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime, Weekday};
//! use timetable_engine::{
//!     ClassScheduleRequest, InMemorySlotRepository, NoHolidays, ScheduleValidator,
//!     TimeRange, ValidationResult, WeekdaySet,
//! };
//!
//! let request = ClassScheduleRequest {
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     total_sessions: 3,
//!     weekdays: WeekdaySet::from_days(&[Weekday::Mon, Weekday::Wed]),
//!     time_range: TimeRange::new(
//!         NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
//!         NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
//!     ),
//!     room_id: "P101".to_string(),
//!     exclude_class_id: None,
//! };
//!
//! let repository = InMemorySlotRepository::default();
//! let result = ScheduleValidator::new()
//!     .validate(&request, &NoHolidays, &repository)
//!     .unwrap();
//!
//! match result {
//!     ValidationResult::Resolved { end_date, session_dates } => {
//!         assert_eq!(end_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
//!         assert_eq!(session_dates.len(), 3);
//!     }
//!     ValidationResult::Rejected { .. } => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] — start date + session count + weekday pattern → end date
//! - [`conflict`] — room/weekday/time collision detection
//! - [`validator`] — the orchestration entry point, [`ScheduleValidator`]
//! - [`holiday`] — the [`HolidayOracle`] seam and shipped calendars
//! - [`repo`] — the committed-slot read boundary
//! - [`types`] — shared value types
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod holiday;
pub mod repo;
pub mod resolver;
pub mod types;
pub mod validator;

pub use conflict::{find_conflicts, Conflict, PeriodOverlapPolicy};
pub use error::{InvalidInput, PersistenceError, Result, ScheduleError};
pub use holiday::{HolidayCalendar, HolidayFn, HolidayOracle, NoHolidays};
pub use repo::{ExistingSlotRepository, InMemorySlotRepository};
pub use resolver::{resolve, ResolvedSchedule};
pub use types::{ClassScheduleRequest, ExistingSlot, SchedulePeriod, TimeRange, WeekdaySet};
pub use validator::{ScheduleValidator, ValidationResult};
