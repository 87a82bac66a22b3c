use serde::{Deserialize, Serialize};

/// GTFS `location_type` of a stop. an empty value means [`LocationType::Quay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    /// stop or platform where passengers board or alight (0)
    Quay,
    /// physical structure grouping quays (1)
    Station,
    Entrance,
    GenericNode,
    BoardingArea,
    Other(u8),
}

impl LocationType {
    pub fn code(&self) -> u8 {
        match self {
            LocationType::Quay => 0,
            LocationType::Station => 1,
            LocationType::Entrance => 2,
            LocationType::GenericNode => 3,
            LocationType::BoardingArea => 4,
            LocationType::Other(code) => *code,
        }
    }
}

impl From<Option<u8>> for LocationType {
    fn from(value: Option<u8>) -> Self {
        match value {
            None | Some(0) => LocationType::Quay,
            Some(1) => LocationType::Station,
            Some(2) => LocationType::Entrance,
            Some(3) => LocationType::GenericNode,
            Some(4) => LocationType::BoardingArea,
            Some(code) => LocationType::Other(code),
        }
    }
}
