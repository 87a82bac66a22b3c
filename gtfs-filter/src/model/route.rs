use super::{EntityKind, FeedEntity, ScopedId};
use serde::{Deserialize, Serialize};

/// a row of routes.txt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    pub agency_id: Option<String>,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub route_desc: Option<String>,
    pub route_type: String,
    pub route_url: Option<String>,
    pub route_color: Option<String>,
    pub route_text_color: Option<String>,
    pub route_sort_order: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: ScopedId,
    /// id of the [`super::Agency`] operating this route
    pub agency_id: String,
    pub record: RouteRecord,
}

impl Route {
    /// creates a bus route for the agency that scopes `id`.
    pub fn new(id: ScopedId, short_name: &str) -> Route {
        let record = RouteRecord {
            route_id: id.id.clone(),
            agency_id: Some(id.agency_id.clone()),
            route_short_name: Some(short_name.to_string()),
            route_type: String::from("3"),
            ..Default::default()
        };
        Route {
            agency_id: id.agency_id.clone(),
            id,
            record,
        }
    }

    pub fn short_name(&self) -> Option<&str> {
        self.record.route_short_name.as_deref()
    }
}

impl FeedEntity for Route {
    type Key = ScopedId;

    const KIND: EntityKind = EntityKind::Route;

    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}
