use super::{date_codec::gtfs, EntityKind, FeedEntity, ScopedId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// a row of calendar_dates.txt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCalendarDateRecord {
    pub service_id: String,
    #[serde(
        serialize_with = "gtfs::serialize_naive_date",
        deserialize_with = "gtfs::deserialize_naive_date"
    )]
    pub date: NaiveDate,
    /// 1 when service is added on `date`, 2 when it is removed
    pub exception_type: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCalendarDate {
    pub service_id: ScopedId,
    pub record: ServiceCalendarDateRecord,
}

impl ServiceCalendarDate {
    pub fn new(service_id: ScopedId, date: NaiveDate, exception_type: u8) -> Self {
        let record = ServiceCalendarDateRecord {
            service_id: service_id.id.clone(),
            date,
            exception_type,
        };
        ServiceCalendarDate { service_id, record }
    }
}

impl FeedEntity for ServiceCalendarDate {
    type Key = (ScopedId, NaiveDate);

    const KIND: EntityKind = EntityKind::ServiceCalendarDate;

    fn key(&self) -> Self::Key {
        (self.service_id.clone(), self.record.date)
    }
}
