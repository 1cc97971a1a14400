// Clock port.
//
// Purpose
// - Give use cases "today" without reading the wall clock inside the reports core.
//
// Testing guidance
// - Use FixedClock to pin the reference date.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;

    /// Current instant in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    now_millis: i64,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        let now_millis = today
            .and_hms_opt(12, 0, 0)
            .map(|at| at.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self { today, now_millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.now_millis
    }
}
