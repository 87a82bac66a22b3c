use super::{
    Agency, FeedInfo, Route, ServiceCalendar, ServiceCalendarDate, Stop, StopTime, Transfer, Trip,
};

/// the nine managed collections of a feed as plain owned values. this is what
/// the feed reader produces and what the feed writer consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedCollections {
    pub feed_infos: Vec<FeedInfo>,
    pub agencies: Vec<Agency>,
    pub calendars: Vec<ServiceCalendar>,
    pub calendar_dates: Vec<ServiceCalendarDate>,
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    pub stops: Vec<Stop>,
    pub transfers: Vec<Transfer>,
}

impl FeedCollections {
    pub fn total_entities(&self) -> usize {
        self.feed_infos.len()
            + self.agencies.len()
            + self.calendars.len()
            + self.calendar_dates.len()
            + self.routes.len()
            + self.trips.len()
            + self.stop_times.len()
            + self.stops.len()
            + self.transfers.len()
    }
}
