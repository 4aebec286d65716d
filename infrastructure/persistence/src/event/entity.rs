use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use business::domain::event::model::Event;

#[derive(Debug, Clone, Deserialize)]
pub struct EventEntity {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl EventEntity {
    pub fn into_domain(self) -> Event {
        Event {
            id: self.id,
            name: self.name,
            start: self.start,
            end: self.end,
        }
    }
}
