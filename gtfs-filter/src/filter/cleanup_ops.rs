//! repairs referential integrity after the selection filters by removing
//! entities which lost their dependencies, repeating until nothing changes.
use super::selection_ops::cascade_trips_removed;
use super::{ChangeSummary, CleanupReport, FeedGraph, TrackedCollection};
use crate::model::{FeedEntity, ScopedId, Transfer};
use std::collections::{HashMap, HashSet};

/// minimum number of stop times a trip needs to be kept
const MIN_TRIP_STOP_TIMES: usize = 2;

/// runs cleanup passes until a pass leaves every collection unchanged.
/// each pass can only shrink the graph, so the loop ends after at most
/// one pass per entity plus the final pass which confirms the fixed point.
pub fn cleanup_all(graph: &mut FeedGraph) -> CleanupReport {
    let mut report = CleanupReport::default();
    loop {
        let pass = cleanup_pass(graph);
        let changed = pass.has_changes();
        report.passes.push(pass);
        if !changed {
            break;
        }
    }
    log::info!(
        "cleanup reached a fixed point after {} passes, {} entities removed",
        report.pass_count(),
        report.total_removed()
    );
    report
}

/// a single run of the cleanup steps, in order. returns the changes of all steps.
pub fn cleanup_pass(graph: &mut FeedGraph) -> ChangeSummary {
    let mut pass = ChangeSummary::default();

    log::info!("remove all stop times where there is no stop");
    remove_stop_times_without_stop(graph);
    pass.extend(graph.summary());

    log::info!("remove all trips with 0 or 1 stop time (cascade to stop times)");
    remove_short_trips(graph);
    pass.extend(graph.summary());

    log::info!("remove all routes without trips");
    remove_routes_without_trips(graph);
    pass.extend(graph.summary());

    log::info!("remove all services without trips");
    remove_services_without_trips(graph);
    pass.extend(graph.summary());

    log::info!("remove all stops with missing parent station");
    remove_quays_with_missing_parent(graph);
    pass.extend(graph.summary());

    log::info!("remove all stops without stop times");
    remove_unused_stops(graph);
    pass.extend(graph.summary());

    log::info!("remove stop times without trip");
    cascade_trips_removed(graph);
    pass.extend(graph.summary());

    log::info!("remove transfers without stop, route or trip");
    remove_dangling_transfers(graph);
    pass.extend(graph.summary());

    pass
}

fn remove_stop_times_without_stop(graph: &mut FeedGraph) {
    let stops = &graph.stops;
    graph.stop_times.retain(|st| stops.contains_key(&st.stop_id));
}

fn remove_short_trips(graph: &mut FeedGraph) {
    let mut trip_counts: HashMap<&ScopedId, usize> = HashMap::new();
    for stop_time in graph.stop_times.values() {
        *trip_counts.entry(&stop_time.trip_id).or_insert(0) += 1;
    }
    graph.trips.retain(|t| {
        trip_counts.get(&t.id).copied().unwrap_or(0) >= MIN_TRIP_STOP_TIMES
    });
    cascade_trips_removed(graph);
}

fn remove_routes_without_trips(graph: &mut FeedGraph) {
    let routes_in_trips: HashSet<&ScopedId> = graph.trips.values().map(|t| &t.route_id).collect();
    graph.routes.retain(|r| routes_in_trips.contains(&r.id));
}

fn remove_services_without_trips(graph: &mut FeedGraph) {
    let service_ids: HashSet<&ScopedId> = graph.trips.values().map(|t| &t.service_id).collect();
    graph
        .calendars
        .retain(|c| service_ids.contains(&c.service_id));
    graph
        .calendar_dates
        .retain(|c| service_ids.contains(&c.service_id));
}

/// quays name their parent station by stop id only, so the reference
/// resolves against the ids of the surviving stations.
fn remove_quays_with_missing_parent(graph: &mut FeedGraph) {
    let station_ids: HashSet<String> = graph
        .stops
        .values()
        .filter(|s| s.is_station())
        .map(|s| s.id.id.clone())
        .collect();
    graph.stops.retain(|s| match s.parent_station() {
        Some(parent) if s.is_quay() => station_ids.contains(parent),
        _ => true,
    });
}

/// removes quays no stop time visits, then stations no remaining quay
/// points to as its parent.
fn remove_unused_stops(graph: &mut FeedGraph) {
    let stop_times = &graph.stop_times;
    let visited: HashSet<&ScopedId> = stop_times.values().map(|st| &st.stop_id).collect();
    graph
        .stops
        .retain(|s| !s.is_quay() || visited.contains(&s.id));

    let parent_refs: HashSet<String> = graph
        .stops
        .values()
        .filter(|s| s.is_quay())
        .filter_map(|s| s.parent_station().map(String::from))
        .collect();
    graph
        .stops
        .retain(|s| !s.is_station() || parent_refs.contains(&s.id.id));
}

fn remove_dangling_transfers(graph: &mut FeedGraph) {
    let (stops, routes, trips) = (&graph.stops, &graph.routes, &graph.trips);
    graph.transfers.retain(|t: &Transfer| {
        !(optional_ref_missing(t.from_stop.as_ref(), stops)
            || optional_ref_missing(t.to_stop.as_ref(), stops)
            || optional_ref_missing(t.from_route.as_ref(), routes)
            || optional_ref_missing(t.to_route.as_ref(), routes)
            || optional_ref_missing(t.from_trip.as_ref(), trips)
            || optional_ref_missing(t.to_trip.as_ref(), trips))
    });
}

/// an absent reference is never missing.
fn optional_ref_missing<T>(key: Option<&T::Key>, collection: &TrackedCollection<T>) -> bool
where
    T: FeedEntity,
{
    key.map(|k| !collection.contains_key(k)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_graph::{rid, sid, two_agency_graph, GraphBuilder};
    use crate::filter::{retain_agencies, retain_stops, BoundingBox};
    use crate::model::{
        EntityKind, FeedCollections, Route, ServiceCalendar, ServiceCalendarDate, Stop, StopTime,
        Trip,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn oslo() -> BoundingBox {
        BoundingBox::new("oslo", 59.90, 10.70, 59.94, 10.79)
    }

    #[test]
    fn test_consistent_feed_is_fixed_point() {
        let mut graph = two_agency_graph().build();
        let before = graph.snapshot();
        let report = cleanup_all(&mut graph);
        assert_eq!(report.pass_count(), 1);
        assert_eq!(report.removal_passes(), 0);
        assert_eq!(graph.snapshot(), before);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = FeedGraph::default();
        let report = cleanup_all(&mut graph);
        assert_eq!(report.pass_count(), 1);
        assert_eq!(graph.total_entities(), 0);
    }

    #[test]
    fn test_trip_length_pruning() {
        let mut graph = GraphBuilder::default()
            .agency("A", "A")
            .route("A", "R1", "1")
            .route("A", "R2", "2")
            .trip("LONG", rid("A", "R1"), "S1")
            .trip("SHORT", rid("A", "R2"), "S2")
            .calendar("S1")
            .calendar("S2")
            .quay("Q1", 59.91, 10.71)
            .quay("Q2", 59.92, 10.72)
            .quay("Q3", 59.93, 10.73)
            .stop_times("LONG", &["Q1", "Q2"])
            .stop_times("SHORT", &["Q3"])
            .build();

        let report = cleanup_all(&mut graph);

        assert!(graph.entities::<Trip>().contains_key(&sid("LONG")));
        assert!(!graph.entities::<Trip>().contains_key(&sid("SHORT")));
        assert!(!graph.entities::<Route>().contains_key(&rid("A", "R2")));
        assert!(!graph
            .entities::<ServiceCalendar>()
            .contains_key(&sid("S2")));
        assert!(!graph.entities::<Stop>().contains_key(&sid("Q3")));
        assert_eq!(graph.count(EntityKind::StopTime), 2);
        assert_eq!(report.removed(EntityKind::Trip), 1);
        assert_eq!(report.removed(EntityKind::StopTime), 1);
    }

    #[test]
    fn test_stop_removal_cascades_through_cleanup() {
        let mut graph = two_agency_graph().build();
        retain_stops(&mut graph, &oslo());
        let report = cleanup_all(&mut graph);

        // T2 lost Q5 and with it its second stop time
        assert!(!graph.entities::<Trip>().contains_key(&sid("T2")));
        assert!(!graph.entities::<Route>().contains_key(&rid("B", "R2")));
        assert!(!graph.entities::<Stop>().contains_key(&sid("Q4")));
        assert!(!graph
            .entities::<ServiceCalendarDate>()
            .values()
            .any(|c| c.service_id == sid("WEEKEND")));
        assert!(graph.entities::<Stop>().contains_key(&sid("S1")));
        // agencies are not re-checked against their routes
        assert_eq!(graph.count(EntityKind::Agency), 2);
        assert_eq!(report.pass_count(), 2);
    }

    #[test]
    fn test_agency_filter_then_cleanup() {
        let mut graph = two_agency_graph().build();
        retain_agencies(&mut graph, &["Ruter"]);
        cleanup_all(&mut graph);

        let stops = graph.entities::<Stop>();
        let mut ids: Vec<&str> = stops.values().map(|s| s.id.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["Q1", "Q2", "Q3", "S1"]);
        assert_eq!(graph.count(EntityKind::ServiceCalendar), 1);
        assert_eq!(graph.count(EntityKind::ServiceCalendarDate), 1);
    }

    #[test]
    fn test_quay_parent_resolution() {
        let mut graph = two_agency_graph()
            .quay_in("ORPHAN", 59.915, 10.755, "MISSING")
            .quay_in("WRONG_PARENT", 59.916, 10.756, "Q3")
            .stop_times("T1", &["Q1", "Q2", "Q3", "ORPHAN", "WRONG_PARENT"])
            .build();
        cleanup_all(&mut graph);
        let stops = graph.entities::<Stop>();
        assert!(!stops.contains_key(&sid("ORPHAN")));
        assert!(!stops.contains_key(&sid("WRONG_PARENT")));
        assert!(stops.contains_key(&sid("Q1")));
        assert_eq!(graph.count(EntityKind::StopTime), 5);
    }

    #[test]
    fn test_station_without_quays_is_removed() {
        let mut graph = two_agency_graph().station("EMPTY", 59.92, 10.72).build();
        cleanup_all(&mut graph);
        assert!(!graph.entities::<Stop>().contains_key(&sid("EMPTY")));
        assert!(graph.entities::<Stop>().contains_key(&sid("S1")));
    }

    #[test]
    fn test_transfer_null_safety() {
        let mut graph = two_agency_graph()
            .transfer(Transfer::new(0))
            .transfer(Transfer::new(1).with_stops(Some(sid("Q1")), None))
            .transfer(Transfer::new(2).with_routes(Some(rid("A", "R1")), Some(rid("B", "R2"))))
            .transfer(Transfer::new(3).with_trips(Some(sid("T1")), Some(sid("T2"))))
            .transfer(Transfer::new(4).with_stops(Some(sid("Q1")), Some(sid("Q5"))))
            .build();
        retain_stops(&mut graph, &oslo());
        cleanup_all(&mut graph);

        let transfers = graph.entities::<Transfer>();
        assert!(transfers.contains_key(&0));
        assert!(transfers.contains_key(&1));
        assert!(!transfers.contains_key(&2));
        assert!(!transfers.contains_key(&3));
        assert!(!transfers.contains_key(&4));
    }

    #[test]
    fn test_transfer_with_removed_stop_is_removed() {
        let mut graph = two_agency_graph()
            .transfer(Transfer::new(0).with_stops(Some(sid("Q5")), None))
            .transfer(Transfer::new(1).with_stops(None, Some(sid("Q5"))))
            .transfer(Transfer::new(2).with_stops(Some(sid("Q4")), None))
            .build();
        retain_stops(&mut graph, &oslo());
        let report = cleanup_all(&mut graph);

        let transfers = graph.entities::<Transfer>();
        assert!(!transfers.contains_key(&0));
        assert!(!transfers.contains_key(&1));
        // Q4 loses its only trip once Q5 is gone
        assert!(!graph.entities::<Stop>().contains_key(&sid("Q4")));
        assert!(!transfers.contains_key(&2));
        assert_eq!(report.removed(EntityKind::Transfer), 3);
    }

    #[test]
    fn test_transfer_with_removed_route_is_removed() {
        let mut graph = two_agency_graph()
            .transfer(Transfer::new(0).with_routes(Some(rid("B", "R2")), None))
            .transfer(Transfer::new(1).with_routes(None, Some(rid("A", "R1"))))
            .build();
        retain_agencies(&mut graph, &["Ruter"]);
        cleanup_all(&mut graph);

        let transfers = graph.entities::<Transfer>();
        assert!(!transfers.contains_key(&0));
        assert!(transfers.contains_key(&1));
    }

    /// builds a feed of loosely connected entities, including references to
    /// stops, services and stations that do not exist. trips always name an
    /// existing route, as the reader drops those which do not.
    fn random_feed(rng: &mut StdRng) -> FeedCollections {
        let mut builder = GraphBuilder::default().agency("A", "A").agency("B", "B");
        let n_routes = rng.random_range(1..5);
        let mut routes = Vec::with_capacity(n_routes);
        for r in 0..n_routes {
            let agency = if rng.random_bool(0.5) { "A" } else { "B" };
            let route = format!("R{r}");
            builder = builder.route(agency, &route, &r.to_string());
            routes.push(rid(agency, &route));
        }
        let n_services = rng.random_range(1..4);
        for s in 0..n_services {
            builder = builder.calendar(&format!("S{s}"));
        }
        let n_stations = rng.random_range(0..4);
        for st in 0..n_stations {
            builder = builder.station(&format!("ST{st}"), 59.91, 10.71 + st as f64 * 0.01);
        }
        let n_quays = rng.random_range(1..12);
        for q in 0..n_quays {
            let id = format!("Q{q}");
            let lat = rng.random_range(59.85..59.99);
            let lon = rng.random_range(10.65..10.85);
            builder = match rng.random_range(0..4) {
                0 => builder.quay_in(&id, lat, lon, "NOWHERE"),
                1 if n_stations > 0 => {
                    let parent = format!("ST{}", rng.random_range(0..n_stations));
                    builder.quay_in(&id, lat, lon, &parent)
                }
                _ => builder.quay(&id, lat, lon),
            };
        }
        let n_trips = rng.random_range(0..10);
        for t in 0..n_trips {
            let trip = format!("T{t}");
            let route = routes[rng.random_range(0..n_routes)].clone();
            let service = format!("S{}", rng.random_range(0..n_services + 1));
            builder = builder.trip(&trip, route, &service);
            let n_stop_times = rng.random_range(0..5);
            let stops: Vec<String> = (0..n_stop_times)
                .map(|_| format!("Q{}", rng.random_range(0..n_quays + 1)))
                .collect();
            let stops: Vec<&str> = stops.iter().map(String::as_str).collect();
            builder = builder.stop_times(&trip, &stops);
        }
        for i in 0..rng.random_range(0..5) {
            let from = sid(&format!("Q{}", rng.random_range(0..n_quays)));
            let to = sid(&format!("Q{}", rng.random_range(0..n_quays)));
            let route = routes[rng.random_range(0..n_routes)].clone();
            let transfer = match rng.random_range(0..4) {
                0 => Transfer::new(i).with_stops(Some(from), Some(to)),
                1 => Transfer::new(i).with_trips(Some(sid("T0")), None),
                2 => Transfer::new(i).with_routes(None, Some(route)),
                _ => Transfer::new(i),
            };
            builder = builder.transfer(transfer);
        }
        builder.collections()
    }

    fn assert_referential_closure(graph: &FeedGraph) {
        let stop_times = graph.entities::<StopTime>();
        let trips = graph.entities::<Trip>();
        let stops = graph.entities::<Stop>();
        let routes = graph.entities::<Route>();
        for st in stop_times.values() {
            assert!(trips.contains_key(&st.trip_id), "dangling trip {}", st.trip_id);
            assert!(stops.contains_key(&st.stop_id), "dangling stop {}", st.stop_id);
        }
        for trip in trips.values() {
            let n = stop_times.values().filter(|st| st.trip_id == trip.id).count();
            assert!(n >= MIN_TRIP_STOP_TIMES, "trip {} has {n} stop times", trip.id);
            assert!(routes.contains_key(&trip.route_id), "dangling route {}", trip.route_id);
        }
        for route in routes.values() {
            assert!(trips.values().any(|t| t.route_id == route.id));
        }
        for calendar in graph.entities::<ServiceCalendar>().values() {
            assert!(trips.values().any(|t| t.service_id == calendar.service_id));
        }
        for stop in stops.values() {
            if stop.is_quay() {
                assert!(stop_times.values().any(|st| st.stop_id == stop.id));
                if let Some(parent) = stop.parent_station() {
                    assert!(stops
                        .values()
                        .any(|s| s.is_station() && s.id.id == parent));
                }
            }
            if stop.is_station() {
                assert!(stops
                    .values()
                    .any(|s| s.is_quay() && s.parent_station() == Some(stop.id.id.as_str())));
            }
        }
        for transfer in graph.entities::<Transfer>().values() {
            for stop in [&transfer.from_stop, &transfer.to_stop].into_iter().flatten() {
                assert!(stops.contains_key(stop));
            }
            for trip in [&transfer.from_trip, &transfer.to_trip].into_iter().flatten() {
                assert!(trips.contains_key(trip));
            }
            for route in [&transfer.from_route, &transfer.to_route].into_iter().flatten() {
                assert!(routes.contains_key(route));
            }
        }
    }

    #[test]
    fn test_cleanup_properties_on_random_feeds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let source = random_feed(&mut rng);
            let mut graph = FeedGraph::from(&source);
            if rng.random_bool(0.5) {
                retain_stops(&mut graph, &oslo());
            }
            let size = graph.total_entities();
            let before = graph.snapshot();

            let report = cleanup_all(&mut graph);

            // convergence bound
            assert!(report.pass_count() <= size + 1);
            assert!(report.removal_passes() <= size);
            assert!(!report.passes.last().expect("at least one pass").has_changes());

            // monotonic shrink
            for change in report.passes.iter().flat_map(|p| p.changes()) {
                assert!(change.after <= change.before);
            }
            let after = graph.snapshot();
            assert!(after.stops.iter().all(|s| before.stops.contains(s)));
            assert!(after.trips.iter().all(|t| before.trips.contains(t)));
            assert!(after.stop_times.iter().all(|st| before.stop_times.contains(st)));
            assert_eq!(
                size as i64 - graph.total_entities() as i64,
                report.total_removed()
            );

            assert_referential_closure(&graph);

            // idempotence
            let again = cleanup_all(&mut graph);
            assert_eq!(again.pass_count(), 1);
            assert_eq!(graph.snapshot(), after);
        }
    }
}
