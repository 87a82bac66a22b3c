use super::{date_codec::gtfs, EntityKind, FeedEntity, ScopedId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// a row of calendar.txt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCalendarRecord {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    #[serde(
        serialize_with = "gtfs::serialize_naive_date",
        deserialize_with = "gtfs::deserialize_naive_date"
    )]
    pub start_date: NaiveDate,
    #[serde(
        serialize_with = "gtfs::serialize_naive_date",
        deserialize_with = "gtfs::deserialize_naive_date"
    )]
    pub end_date: NaiveDate,
}

/// weekly service pattern of a service id. the end date is the one
/// attribute the filter may overwrite; it is not part of the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCalendar {
    pub service_id: ScopedId,
    pub record: ServiceCalendarRecord,
}

impl ServiceCalendar {
    /// a calendar running every day between the two dates.
    pub fn daily(service_id: ScopedId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let record = ServiceCalendarRecord {
            service_id: service_id.id.clone(),
            monday: 1,
            tuesday: 1,
            wednesday: 1,
            thursday: 1,
            friday: 1,
            saturday: 1,
            sunday: 1,
            start_date,
            end_date,
        };
        ServiceCalendar { service_id, record }
    }

    pub fn end_date(&self) -> NaiveDate {
        self.record.end_date
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.record.end_date = end_date;
    }
}

impl FeedEntity for ServiceCalendar {
    type Key = ScopedId;

    const KIND: EntityKind = EntityKind::ServiceCalendar;

    fn key(&self) -> Self::Key {
        self.service_id.clone()
    }
}
