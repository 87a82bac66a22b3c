use super::{EntityKind, FeedEntity, LocationType, ScopedId};
use serde::{Deserialize, Serialize};

/// a row of stops.txt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_code: Option<String>,
    pub stop_name: Option<String>,
    pub stop_desc: Option<String>,
    pub stop_lat: Option<f64>,
    pub stop_lon: Option<f64>,
    pub zone_id: Option<String>,
    pub stop_url: Option<String>,
    pub location_type: Option<u8>,
    pub parent_station: Option<String>,
    pub stop_timezone: Option<String>,
    pub wheelchair_boarding: Option<String>,
    pub platform_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: ScopedId,
    pub record: StopRecord,
}

impl Stop {
    /// creates a quay, optionally placed inside the station with id `parent_station`.
    pub fn quay(id: ScopedId, lat: f64, lon: f64, parent_station: Option<&str>) -> Stop {
        let record = StopRecord {
            stop_id: id.id.clone(),
            stop_lat: Some(lat),
            stop_lon: Some(lon),
            location_type: Some(0),
            parent_station: parent_station.map(String::from),
            ..Default::default()
        };
        Stop { id, record }
    }

    pub fn station(id: ScopedId, lat: f64, lon: f64) -> Stop {
        let record = StopRecord {
            stop_id: id.id.clone(),
            stop_lat: Some(lat),
            stop_lon: Some(lon),
            location_type: Some(1),
            ..Default::default()
        };
        Stop { id, record }
    }

    pub fn location_type(&self) -> LocationType {
        LocationType::from(self.record.location_type)
    }

    pub fn is_quay(&self) -> bool {
        self.location_type() == LocationType::Quay
    }

    pub fn is_station(&self) -> bool {
        self.location_type() == LocationType::Station
    }

    /// the parent station id. the reference is by stop id only, and
    /// an empty value is no reference.
    pub fn parent_station(&self) -> Option<&str> {
        self.record
            .parent_station
            .as_deref()
            .filter(|parent| !parent.is_empty())
    }

    /// (lat, lon), if the stop has both coordinates
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.record.stop_lat, self.record.stop_lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

impl FeedEntity for Stop {
    type Key = ScopedId;

    const KIND: EntityKind = EntityKind::Stop;

    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}
