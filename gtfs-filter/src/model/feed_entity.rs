use serde::{Deserialize, Serialize};
use std::{fmt::Debug, hash::Hash};

/// the kinds of entities found in a GTFS feed. only the first nine are
/// managed by the filter, the remaining kinds are always passed through empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    FeedInfo,
    Agency,
    ServiceCalendar,
    ServiceCalendarDate,
    Route,
    Trip,
    StopTime,
    Stop,
    Transfer,
    FareAttribute,
    FareRule,
    Frequency,
    Pathway,
    ShapePoint,
}

impl EntityKind {
    /// managed kinds in the order their collections are summarized.
    pub const MANAGED: [EntityKind; 9] = [
        EntityKind::FeedInfo,
        EntityKind::Agency,
        EntityKind::ServiceCalendar,
        EntityKind::ServiceCalendarDate,
        EntityKind::Route,
        EntityKind::Trip,
        EntityKind::StopTime,
        EntityKind::Stop,
        EntityKind::Transfer,
    ];

    pub fn is_managed(&self) -> bool {
        EntityKind::MANAGED.contains(self)
    }

    /// true for files that must be present in a GTFS archive.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            EntityKind::Agency
                | EntityKind::Route
                | EntityKind::Trip
                | EntityKind::StopTime
                | EntityKind::Stop
        )
    }

    /// name of the GTFS file holding rows of this kind.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityKind::FeedInfo => "feed_info.txt",
            EntityKind::Agency => "agency.txt",
            EntityKind::ServiceCalendar => "calendar.txt",
            EntityKind::ServiceCalendarDate => "calendar_dates.txt",
            EntityKind::Route => "routes.txt",
            EntityKind::Trip => "trips.txt",
            EntityKind::StopTime => "stop_times.txt",
            EntityKind::Stop => "stops.txt",
            EntityKind::Transfer => "transfers.txt",
            EntityKind::FareAttribute => "fare_attributes.txt",
            EntityKind::FareRule => "fare_rules.txt",
            EntityKind::Frequency => "frequencies.txt",
            EntityKind::Pathway => "pathways.txt",
            EntityKind::ShapePoint => "shapes.txt",
        }
    }

    /// name of the collection holding entities of this kind.
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::FeedInfo => "feedInfos",
            EntityKind::Agency => "agencies",
            EntityKind::ServiceCalendar => "calendars",
            EntityKind::ServiceCalendarDate => "calendarDates",
            EntityKind::Route => "routes",
            EntityKind::Trip => "trips",
            EntityKind::StopTime => "stopTimes",
            EntityKind::Stop => "stops",
            EntityKind::Transfer => "transfers",
            EntityKind::FareAttribute => "fareAttributes",
            EntityKind::FareRule => "fareRules",
            EntityKind::Frequency => "frequencies",
            EntityKind::Pathway => "pathways",
            EntityKind::ShapePoint => "shapePoints",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection_name())
    }
}

/// an entity held in one of the managed collections of a feed. the key is the
/// identity of the entity: two entities with equal keys are the same entity,
/// regardless of their other attributes.
pub trait FeedEntity: Clone + Debug {
    type Key: Clone + Eq + Hash + Ord + Debug;

    const KIND: EntityKind;

    fn key(&self) -> Self::Key;
}
