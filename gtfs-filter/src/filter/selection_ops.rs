//! user-driven selection filters. each filter removes entities from the graph,
//! cascades where the removal leaves dependents behind, and logs a summary
//! of what changed.
use super::{BoundingBox, ChangeSummary, FeedGraph, FilterError};
use chrono::NaiveDate;
use itertools::Itertools;
use std::collections::HashSet;

/// removes every agency whose name is not in `names`, then cascades the
/// removal to routes, trips and stop times.
pub fn retain_agencies<S: AsRef<str>>(graph: &mut FeedGraph, names: &[S]) -> ChangeSummary {
    let names: HashSet<&str> = names.iter().map(|s| s.as_ref()).collect();
    log::info!(
        "remove all agencies except: [{}]",
        names.iter().sorted().join(", ")
    );
    graph.agencies.retain(|a| names.contains(a.name()));
    cascade_agencies_removed(graph);
    graph.summary()
}

/// removes every route whose short name is not in `short_names`, then cascades
/// the removal to trips and stop times. routes without a short name are removed.
pub fn retain_routes<S: AsRef<str>>(graph: &mut FeedGraph, short_names: &[S]) -> ChangeSummary {
    let short_names: HashSet<&str> = short_names.iter().map(|s| s.as_ref()).collect();
    log::info!(
        "remove all routes except: [{}]",
        short_names.iter().sorted().join(", ")
    );
    graph.routes.retain(|r| {
        r.short_name()
            .map(|name| short_names.contains(name))
            .unwrap_or(false)
    });
    cascade_routes_removed(graph);
    graph.summary()
}

/// removes every stop outside the box. stop times referencing the removed
/// stops are left for the cleanup.
pub fn retain_stops(graph: &mut FeedGraph, bbox: &BoundingBox) -> ChangeSummary {
    log::info!("remove stops outside box: {bbox}");
    graph.stops.retain(|s| bbox.contains_stop(s));
    graph.summary()
}

/// overwrites the end date of every service calendar.
pub fn set_service_end_date(
    graph: &mut FeedGraph,
    year: i32,
    month: u32,
    day: u32,
) -> Result<(), FilterError> {
    let end_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(FilterError::InvalidServiceDate { year, month, day })?;
    log::info!("set service end date to {end_date}");
    for calendar in graph.calendars.values_mut() {
        calendar.set_end_date(end_date);
    }
    Ok(())
}

pub(crate) fn cascade_agencies_removed(graph: &mut FeedGraph) {
    let agencies = &graph.agencies;
    graph.routes.retain(|r| agencies.contains_key(&r.agency_id));
    cascade_routes_removed(graph);
}

pub(crate) fn cascade_routes_removed(graph: &mut FeedGraph) {
    let routes = &graph.routes;
    graph.trips.retain(|t| routes.contains_key(&t.route_id));
    cascade_trips_removed(graph);
}

pub(crate) fn cascade_trips_removed(graph: &mut FeedGraph) {
    let trips = &graph.trips;
    graph.stop_times.retain(|st| trips.contains_key(&st.trip_id));
}
