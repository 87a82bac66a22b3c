use super::{EntityKind, FeedEntity, ScopedId};
use serde::{Deserialize, Serialize};

/// a row of trips.txt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub trip_headsign: Option<String>,
    pub trip_short_name: Option<String>,
    pub direction_id: Option<String>,
    pub block_id: Option<String>,
    pub shape_id: Option<String>,
    pub wheelchair_accessible: Option<String>,
    pub bikes_allowed: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: ScopedId,
    pub route_id: ScopedId,
    /// links the trip to calendar.txt and calendar_dates.txt entries, which
    /// the trip does not own
    pub service_id: ScopedId,
    pub record: TripRecord,
}

impl Trip {
    pub fn new(id: ScopedId, route_id: ScopedId, service_id: ScopedId) -> Trip {
        let record = TripRecord {
            route_id: route_id.id.clone(),
            service_id: service_id.id.clone(),
            trip_id: id.id.clone(),
            ..Default::default()
        };
        Trip {
            id,
            route_id,
            service_id,
            record,
        }
    }
}

impl FeedEntity for Trip {
    type Key = ScopedId;

    const KIND: EntityKind = EntityKind::Trip;

    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}
