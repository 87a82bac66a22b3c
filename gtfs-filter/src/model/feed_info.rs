use super::{EntityKind, FeedEntity};
use serde::{Deserialize, Serialize};

/// a row of feed_info.txt, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedInfoRecord {
    pub feed_publisher_name: String,
    pub feed_publisher_url: String,
    pub feed_lang: String,
    pub default_lang: Option<String>,
    pub feed_start_date: Option<String>,
    pub feed_end_date: Option<String>,
    pub feed_version: Option<String>,
    pub feed_contact_email: Option<String>,
    pub feed_contact_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedInfo {
    /// row position in feed_info.txt
    pub index: usize,
    pub record: FeedInfoRecord,
}

impl FeedEntity for FeedInfo {
    type Key = usize;

    const KIND: EntityKind = EntityKind::FeedInfo;

    fn key(&self) -> Self::Key {
        self.index
    }
}
