//! builders for small in-memory feeds used by the filter tests.
use super::FeedGraph;
use crate::model::{
    Agency, FeedCollections, FeedInfo, FeedInfoRecord, Route, ScopedId, ServiceCalendar,
    ServiceCalendarDate, Stop, StopTime, Transfer, Trip,
};
use chrono::NaiveDate;

/// agency id scoping stops, trips and service ids in test feeds
pub(crate) const FEED: &str = "feed";

/// id of a stop, trip or service in a test feed
pub(crate) fn sid(id: &str) -> ScopedId {
    ScopedId::new(FEED, id)
}

/// id of a route operated by `agency`
pub(crate) fn rid(agency: &str, id: &str) -> ScopedId {
    ScopedId::new(agency, id)
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[derive(Default)]
pub(crate) struct GraphBuilder {
    collections: FeedCollections,
}

impl GraphBuilder {
    pub fn feed_info(mut self, publisher: &str) -> Self {
        let index = self.collections.feed_infos.len();
        self.collections.feed_infos.push(FeedInfo {
            index,
            record: FeedInfoRecord {
                feed_publisher_name: publisher.to_string(),
                feed_publisher_url: String::from("https://example.com"),
                feed_lang: String::from("no"),
                ..Default::default()
            },
        });
        self
    }

    pub fn agency(mut self, id: &str, name: &str) -> Self {
        self.collections.agencies.push(Agency::new(id, name));
        self
    }

    pub fn route(mut self, agency: &str, id: &str, short_name: &str) -> Self {
        self.collections
            .routes
            .push(Route::new(rid(agency, id), short_name));
        self
    }

    pub fn trip(mut self, id: &str, route: ScopedId, service_id: &str) -> Self {
        self.collections
            .trips
            .push(Trip::new(sid(id), route, sid(service_id)));
        self
    }

    /// one stop time per stop, with stop sequences 1, 2, 3, ...
    pub fn stop_times(mut self, trip_id: &str, stop_ids: &[&str]) -> Self {
        for (idx, stop_id) in stop_ids.iter().enumerate() {
            self.collections.stop_times.push(StopTime::new(
                sid(trip_id),
                sid(stop_id),
                idx as u32 + 1,
            ));
        }
        self
    }

    pub fn quay(mut self, id: &str, lat: f64, lon: f64) -> Self {
        self.collections
            .stops
            .push(Stop::quay(sid(id), lat, lon, None));
        self
    }

    pub fn quay_in(mut self, id: &str, lat: f64, lon: f64, parent_station: &str) -> Self {
        self.collections
            .stops
            .push(Stop::quay(sid(id), lat, lon, Some(parent_station)));
        self
    }

    pub fn station(mut self, id: &str, lat: f64, lon: f64) -> Self {
        self.collections.stops.push(Stop::station(sid(id), lat, lon));
        self
    }

    pub fn calendar(mut self, service_id: &str) -> Self {
        self.collections.calendars.push(ServiceCalendar::daily(
            sid(service_id),
            date(2024, 1, 1),
            date(2024, 12, 31),
        ));
        self
    }

    pub fn calendar_date(mut self, service_id: &str, on: NaiveDate) -> Self {
        self.collections
            .calendar_dates
            .push(ServiceCalendarDate::new(sid(service_id), on, 1));
        self
    }

    pub fn transfer(mut self, transfer: Transfer) -> Self {
        self.collections.transfers.push(transfer);
        self
    }

    pub fn collections(self) -> FeedCollections {
        self.collections
    }

    pub fn build(self) -> FeedGraph {
        FeedGraph::from(self.collections)
    }
}

/// two agencies, each with one route, one trip and its own stops.
///
/// agency A ("Ruter") runs route R1 ("1") with trip T1 over quays Q1, Q2, Q3.
/// quays Q1 and Q2 belong to station S1. agency B ("Vy") runs route R2 ("2")
/// with trip T2 over quays Q4, Q5. all stops lie in [59.90, 59.94) x [10.70, 10.79)
/// except Q5.
pub(crate) fn two_agency_graph() -> GraphBuilder {
    GraphBuilder::default()
        .feed_info("test")
        .agency("A", "Ruter")
        .agency("B", "Vy")
        .route("A", "R1", "1")
        .route("B", "R2", "2")
        .trip("T1", rid("A", "R1"), "WEEKDAY")
        .trip("T2", rid("B", "R2"), "WEEKEND")
        .calendar("WEEKDAY")
        .calendar("WEEKEND")
        .calendar_date("WEEKDAY", date(2024, 5, 17))
        .calendar_date("WEEKEND", date(2024, 5, 18))
        .station("S1", 59.911, 10.75)
        .quay_in("Q1", 59.911, 10.751, "S1")
        .quay_in("Q2", 59.912, 10.752, "S1")
        .quay("Q3", 59.92, 10.76)
        .quay("Q4", 59.93, 10.71)
        .quay("Q5", 60.5, 11.2)
        .stop_times("T1", &["Q1", "Q2", "Q3"])
        .stop_times("T2", &["Q4", "Q5"])
}
