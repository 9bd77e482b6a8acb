//! Holiday lookup as an explicit dependency.
//!
//! The resolver consults the oracle for every calendar day it visits, so an
//! implementation should answer from memory, not from I/O.

use std::collections::HashSet;

use chrono::NaiveDate;

/// Answers "is this date a non-instructional day?".
pub trait HolidayOracle {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Oracle that never reports a holiday.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayOracle for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Holiday calendar backed by an explicit date set.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        HolidayCalendar {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn add(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayOracle for HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Adapter turning any `Fn(NaiveDate) -> bool` predicate into an oracle.
pub struct HolidayFn<F>(pub F);

impl<F> HolidayOracle for HolidayFn<F>
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        (self.0)(date)
    }
}
