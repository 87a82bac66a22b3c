use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of a GTFS entity together with the id of the agency that scopes it.
/// stops, routes, trips and service ids are only unique within an agency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopedId {
    pub agency_id: String,
    pub id: String,
}

impl ScopedId {
    pub fn new(agency_id: impl Into<String>, id: impl Into<String>) -> ScopedId {
        ScopedId {
            agency_id: agency_id.into(),
            id: id.into(),
        }
    }
}

impl Display for ScopedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.agency_id, self.id)
    }
}
