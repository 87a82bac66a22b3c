use super::{ChangeSummary, FilterError, TrackedCollection};
use crate::model::{
    Agency, EntityKind, FeedCollections, FeedEntity, FeedInfo, Route, ServiceCalendar,
    ServiceCalendarDate, Stop, StopTime, Transfer, Trip,
};

/// the in-memory entity graph of a feed. references between entities are held
/// as keys and resolved against the live collections when checked, so
/// removing an entity never leaves a dangling pointer behind.
#[derive(Debug, Clone, Default)]
pub struct FeedGraph {
    pub(crate) feed_infos: TrackedCollection<FeedInfo>,
    pub(crate) agencies: TrackedCollection<Agency>,
    pub(crate) calendars: TrackedCollection<ServiceCalendar>,
    pub(crate) calendar_dates: TrackedCollection<ServiceCalendarDate>,
    pub(crate) routes: TrackedCollection<Route>,
    pub(crate) trips: TrackedCollection<Trip>,
    pub(crate) stop_times: TrackedCollection<StopTime>,
    pub(crate) stops: TrackedCollection<Stop>,
    pub(crate) transfers: TrackedCollection<Transfer>,
}

/// bulk access to the live collection of one entity type.
pub trait EntityStore<T: FeedEntity> {
    fn collection(&self) -> &TrackedCollection<T>;
}

macro_rules! entity_store {
    ($entity:ty, $field:ident) => {
        impl EntityStore<$entity> for FeedGraph {
            fn collection(&self) -> &TrackedCollection<$entity> {
                &self.$field
            }
        }
    };
}

entity_store!(FeedInfo, feed_infos);
entity_store!(Agency, agencies);
entity_store!(ServiceCalendar, calendars);
entity_store!(ServiceCalendarDate, calendar_dates);
entity_store!(Route, routes);
entity_store!(Trip, trips);
entity_store!(StopTime, stop_times);
entity_store!(Stop, stops);
entity_store!(Transfer, transfers);

impl FeedGraph {
    /// the live collection for entity type `T`, e.g. `graph.entities::<Route>()`.
    pub fn entities<T: FeedEntity>(&self) -> &TrackedCollection<T>
    where
        Self: EntityStore<T>,
    {
        <Self as EntityStore<T>>::collection(self)
    }

    /// number of entities of the given kind. kinds the filter does not
    /// manage are always empty.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::FeedInfo => self.feed_infos.len(),
            EntityKind::Agency => self.agencies.len(),
            EntityKind::ServiceCalendar => self.calendars.len(),
            EntityKind::ServiceCalendarDate => self.calendar_dates.len(),
            EntityKind::Route => self.routes.len(),
            EntityKind::Trip => self.trips.len(),
            EntityKind::StopTime => self.stop_times.len(),
            EntityKind::Stop => self.stops.len(),
            EntityKind::Transfer => self.transfers.len(),
            EntityKind::FareAttribute
            | EntityKind::FareRule
            | EntityKind::Frequency
            | EntityKind::Pathway
            | EntityKind::ShapePoint => 0,
        }
    }

    pub fn total_entities(&self) -> usize {
        EntityKind::MANAGED.iter().map(|k| self.count(*k)).sum()
    }

    /// lookup of a single entity by id. the filter only manages bulk
    /// collections, so this always fails with [`FilterError::UnsupportedOperation`].
    pub fn entity_for_id<T: FeedEntity>(&self, id: &T::Key) -> Result<&T, FilterError> {
        Err(FilterError::UnsupportedOperation(format!(
            "lookup of {} by id {:?}",
            T::KIND,
            id
        )))
    }

    /// checkpoints every collection, logging the ones that changed since
    /// their previous checkpoint.
    pub fn summary(&mut self) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        let changes = [
            self.feed_infos.checkpoint(),
            self.agencies.checkpoint(),
            self.calendars.checkpoint(),
            self.calendar_dates.checkpoint(),
            self.routes.checkpoint(),
            self.trips.checkpoint(),
            self.stop_times.checkpoint(),
            self.stops.checkpoint(),
            self.transfers.checkpoint(),
        ];
        for change in changes.into_iter().flatten() {
            log::info!("{change}");
            summary.push(change);
        }
        summary
    }

    /// owned copy of the current collections, ordered by identity. later
    /// mutation of the graph does not affect the snapshot.
    pub fn snapshot(&self) -> FeedCollections {
        FeedCollections {
            feed_infos: self.feed_infos.to_vec(),
            agencies: self.agencies.to_vec(),
            calendars: self.calendars.to_vec(),
            calendar_dates: self.calendar_dates.to_vec(),
            routes: self.routes.to_vec(),
            trips: self.trips.to_vec(),
            stop_times: self.stop_times.to_vec(),
            stops: self.stops.to_vec(),
            transfers: self.transfers.to_vec(),
        }
    }
}

impl From<FeedCollections> for FeedGraph {
    fn from(collections: FeedCollections) -> Self {
        FeedGraph {
            feed_infos: TrackedCollection::from_entities(collections.feed_infos),
            agencies: TrackedCollection::from_entities(collections.agencies),
            calendars: TrackedCollection::from_entities(collections.calendars),
            calendar_dates: TrackedCollection::from_entities(collections.calendar_dates),
            routes: TrackedCollection::from_entities(collections.routes),
            trips: TrackedCollection::from_entities(collections.trips),
            stop_times: TrackedCollection::from_entities(collections.stop_times),
            stops: TrackedCollection::from_entities(collections.stops),
            transfers: TrackedCollection::from_entities(collections.transfers),
        }
    }
}

/// copies the collections into a new graph, leaving the source untouched.
impl From<&FeedCollections> for FeedGraph {
    fn from(collections: &FeedCollections) -> Self {
        FeedGraph::from(collections.clone())
    }
}
