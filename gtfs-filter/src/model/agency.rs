use super::{EntityKind, FeedEntity};
use serde::{Deserialize, Serialize};

/// a row of agency.txt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyRecord {
    pub agency_id: Option<String>,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
    pub agency_lang: Option<String>,
    pub agency_phone: Option<String>,
    pub agency_fare_url: Option<String>,
    pub agency_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agency {
    /// agency id, or the feed's default agency id when the row has none
    pub id: String,
    pub record: AgencyRecord,
}

impl Agency {
    pub fn new(id: &str, name: &str) -> Agency {
        Agency {
            id: id.to_string(),
            record: AgencyRecord {
                agency_id: Some(id.to_string()),
                agency_name: name.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.record.agency_name
    }
}

impl FeedEntity for Agency {
    type Key = String;

    const KIND: EntityKind = EntityKind::Agency;

    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}
