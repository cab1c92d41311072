//! Clock
//!
//! Source of "today". The controller never reads the system time directly so
//! day rollover can be driven by tests.

use chrono::{Days, Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

use crate::domain::DayStamp;

pub trait Clock {
    fn today(&self) -> DayStamp;
}

/// Local wall-clock time. On wasm32 chrono reads it from JS `Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayStamp {
        DayStamp::from_date(Local::now().date_naive())
    }
}

/// Settable clock; clones share the same date
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date: Rc::new(Cell::new(date)) }
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    pub fn advance_days(&self, days: u64) {
        let current = self.date.get();
        self.date.set(current.checked_add_days(Days::new(days)).unwrap_or(current));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> DayStamp {
        DayStamp::from_date(self.date.get())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> DayStamp {
        (**self).today()
    }
}
