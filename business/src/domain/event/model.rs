use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A multi-day catering event. Both `start` and `end` are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Event {
    /// Number of days between the first and the last day of the event.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }

    /// Days elapsed since the first day of the event (negative before it).
    pub fn days_from_start(&self, day: NaiveDate) -> i64 {
        (day - self.start).num_days()
    }
}
