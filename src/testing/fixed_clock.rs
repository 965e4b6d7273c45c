use chrono::{NaiveDate, NaiveDateTime};

use crate::ports::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[allow(dead_code)]
impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let instant = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .expect("valid fixed timestamp");
        Self(instant)
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(2025, 7, 11, 9, 30, 0)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
