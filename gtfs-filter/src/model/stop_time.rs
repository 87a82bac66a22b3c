use super::{EntityKind, FeedEntity, ScopedId};
use serde::{Deserialize, Serialize};

/// a row of stop_times.txt. times are kept as written since GTFS allows
/// values past 24:00:00.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopTimeRecord {
    pub trip_id: String,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub stop_id: String,
    pub stop_sequence: u32,
    pub stop_headsign: Option<String>,
    pub pickup_type: Option<String>,
    pub drop_off_type: Option<String>,
    pub shape_dist_traveled: Option<String>,
    pub timepoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopTime {
    pub trip_id: ScopedId,
    pub stop_id: ScopedId,
    pub record: StopTimeRecord,
}

impl StopTime {
    pub fn new(trip_id: ScopedId, stop_id: ScopedId, stop_sequence: u32) -> StopTime {
        let record = StopTimeRecord {
            trip_id: trip_id.id.clone(),
            stop_id: stop_id.id.clone(),
            stop_sequence,
            ..Default::default()
        };
        StopTime {
            trip_id,
            stop_id,
            record,
        }
    }

    pub fn stop_sequence(&self) -> u32 {
        self.record.stop_sequence
    }
}

impl FeedEntity for StopTime {
    type Key = (ScopedId, u32);

    const KIND: EntityKind = EntityKind::StopTime;

    fn key(&self) -> Self::Key {
        (self.trip_id.clone(), self.stop_sequence())
    }
}
