use super::{EntityKind, FeedEntity, ScopedId};
use serde::{Deserialize, Serialize};

/// a row of transfers.txt. every endpoint column is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from_stop_id: Option<String>,
    pub to_stop_id: Option<String>,
    pub from_route_id: Option<String>,
    pub to_route_id: Option<String>,
    pub from_trip_id: Option<String>,
    pub to_trip_id: Option<String>,
    pub transfer_type: Option<u8>,
    pub min_transfer_time: Option<u32>,
}

/// a transfer rule. transfers have no id in GTFS, so they are identified by
/// their row position in transfers.txt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transfer {
    pub index: usize,
    pub from_stop: Option<ScopedId>,
    pub to_stop: Option<ScopedId>,
    pub from_route: Option<ScopedId>,
    pub to_route: Option<ScopedId>,
    pub from_trip: Option<ScopedId>,
    pub to_trip: Option<ScopedId>,
    pub record: TransferRecord,
}

impl Transfer {
    /// a transfer without endpoints.
    pub fn new(index: usize) -> Transfer {
        Transfer {
            index,
            ..Default::default()
        }
    }

    pub fn with_stops(mut self, from: Option<ScopedId>, to: Option<ScopedId>) -> Transfer {
        self.record.from_stop_id = from.as_ref().map(|s| s.id.clone());
        self.record.to_stop_id = to.as_ref().map(|s| s.id.clone());
        self.from_stop = from;
        self.to_stop = to;
        self
    }

    pub fn with_routes(mut self, from: Option<ScopedId>, to: Option<ScopedId>) -> Transfer {
        self.record.from_route_id = from.as_ref().map(|r| r.id.clone());
        self.record.to_route_id = to.as_ref().map(|r| r.id.clone());
        self.from_route = from;
        self.to_route = to;
        self
    }

    pub fn with_trips(mut self, from: Option<ScopedId>, to: Option<ScopedId>) -> Transfer {
        self.record.from_trip_id = from.as_ref().map(|t| t.id.clone());
        self.record.to_trip_id = to.as_ref().map(|t| t.id.clone());
        self.from_trip = from;
        self.to_trip = to;
        self
    }
}

impl FeedEntity for Transfer {
    type Key = usize;

    const KIND: EntityKind = EntityKind::Transfer;

    fn key(&self) -> Self::Key {
        self.index
    }
}
