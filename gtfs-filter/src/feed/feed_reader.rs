use super::FeedError;
use crate::model::{
    Agency, AgencyRecord, EntityKind, FeedCollections, FeedInfo, FeedInfoRecord, Route,
    RouteRecord, ScopedId, ServiceCalendar, ServiceCalendarDate, ServiceCalendarDateRecord,
    ServiceCalendarRecord, Stop, StopRecord, StopTime, StopTimeRecord, Transfer, TransferRecord,
    Trip, TripRecord,
};
use kdam::tqdm;
use serde::de::DeserializeOwned;
use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use zip::ZipArchive;

/// reads a GTFS feed stored either as a zip archive or as a directory of
/// GTFS text files. only the files of the managed entity kinds are read.
pub fn read_feed(path: &Path) -> Result<FeedCollections, FeedError> {
    log::info!("reading GTFS feed {}", path.display());
    let mut source = FeedSource::open(path)?;

    let agencies: Vec<AgencyRecord> = source.read_required(EntityKind::Agency)?;
    let routes: Vec<RouteRecord> = source.read_required(EntityKind::Route)?;
    let trips: Vec<TripRecord> = source.read_required(EntityKind::Trip)?;
    let stop_times: Vec<StopTimeRecord> = source.read_required(EntityKind::StopTime)?;
    let stops: Vec<StopRecord> = source.read_required(EntityKind::Stop)?;
    let calendars: Vec<ServiceCalendarRecord> = source.read_optional(EntityKind::ServiceCalendar)?;
    let calendar_dates: Vec<ServiceCalendarDateRecord> =
        source.read_optional(EntityKind::ServiceCalendarDate)?;
    let transfers: Vec<TransferRecord> = source.read_optional(EntityKind::Transfer)?;
    let feed_infos: Vec<FeedInfoRecord> = source.read_optional(EntityKind::FeedInfo)?;

    let scope = FeedScope::new(&agencies, &routes);
    let (trips, stop_times) = drop_trips_without_route(&scope, trips, stop_times);
    let collections = FeedCollections {
        feed_infos: feed_infos
            .into_iter()
            .enumerate()
            .map(|(index, record)| FeedInfo { index, record })
            .collect(),
        agencies: agencies.into_iter().map(|r| scope.agency(r)).collect(),
        calendars: calendars
            .into_iter()
            .map(|record| ServiceCalendar {
                service_id: scope.scoped(&record.service_id),
                record,
            })
            .collect(),
        calendar_dates: calendar_dates
            .into_iter()
            .map(|record| ServiceCalendarDate {
                service_id: scope.scoped(&record.service_id),
                record,
            })
            .collect(),
        routes: routes.into_iter().map(|r| scope.route(r)).collect(),
        trips: trips
            .into_iter()
            .map(|record| Trip {
                id: scope.scoped(&record.trip_id),
                route_id: scope.route_ref(&record.route_id),
                service_id: scope.scoped(&record.service_id),
                record,
            })
            .collect(),
        stop_times: stop_times
            .into_iter()
            .map(|record| StopTime {
                trip_id: scope.scoped(&record.trip_id),
                stop_id: scope.scoped(&record.stop_id),
                record,
            })
            .collect(),
        stops: stops
            .into_iter()
            .map(|record| Stop {
                id: scope.scoped(&record.stop_id),
                record,
            })
            .collect(),
        transfers: transfers
            .into_iter()
            .enumerate()
            .map(|(index, record)| scope.transfer(index, record))
            .collect(),
    };
    log::info!(
        "read {} entities from {}",
        collections.total_entities(),
        path.display()
    );
    Ok(collections)
}

/// trips naming a route missing from routes.txt can never be resolved, so they
/// are dropped together with their stop times.
fn drop_trips_without_route(
    scope: &FeedScope,
    trips: Vec<TripRecord>,
    stop_times: Vec<StopTimeRecord>,
) -> (Vec<TripRecord>, Vec<StopTimeRecord>) {
    let (trips, unresolved): (Vec<TripRecord>, Vec<TripRecord>) = trips
        .into_iter()
        .partition(|t| scope.resolves_route(&t.route_id));
    if unresolved.is_empty() {
        return (trips, stop_times);
    }
    for trip in unresolved.iter() {
        log::warn!(
            "dropping trip {} which references unknown route {}",
            trip.trip_id,
            trip.route_id
        );
    }
    let kept: HashSet<&str> = trips.iter().map(|t| t.trip_id.as_str()).collect();
    let dropped: HashSet<&str> = unresolved
        .iter()
        .map(|t| t.trip_id.as_str())
        .filter(|id| !kept.contains(id))
        .collect();
    let stop_times = stop_times
        .into_iter()
        .filter(|st| !dropped.contains(st.trip_id.as_str()))
        .collect();
    (trips, stop_times)
}

/// resolves the raw ids of a feed into agency-scoped ids.
///
/// the default agency id is the id of the first agency, or its name when the
/// id column is empty. routes are scoped by their own agency, every other id
/// by the default agency.
struct FeedScope {
    default_agency_id: String,
    route_ids: HashMap<String, ScopedId>,
}

impl FeedScope {
    fn new(agencies: &[AgencyRecord], routes: &[RouteRecord]) -> FeedScope {
        let default_agency_id = agencies
            .first()
            .map(|a| {
                non_empty(&a.agency_id)
                    .unwrap_or(a.agency_name.as_str())
                    .to_string()
            })
            .unwrap_or_default();
        let mut scope = FeedScope {
            default_agency_id,
            route_ids: HashMap::new(),
        };
        let route_ids: HashMap<String, ScopedId> = routes
            .iter()
            .map(|r| (r.route_id.clone(), scope.route_scoped_id(r)))
            .collect();
        scope.route_ids = route_ids;
        scope
    }

    fn scoped(&self, id: &str) -> ScopedId {
        ScopedId::new(self.default_agency_id.as_str(), id)
    }

    fn route_agency_id<'a>(&'a self, record: &'a RouteRecord) -> &'a str {
        non_empty(&record.agency_id).unwrap_or(self.default_agency_id.as_str())
    }

    fn route_scoped_id(&self, record: &RouteRecord) -> ScopedId {
        ScopedId::new(self.route_agency_id(record), record.route_id.as_str())
    }

    fn resolves_route(&self, route_id: &str) -> bool {
        self.route_ids.contains_key(route_id)
    }

    /// a reference to a route by its bare id. ids not found in routes.txt are
    /// scoped by the default agency and stay unresolved.
    fn route_ref(&self, route_id: &str) -> ScopedId {
        self.route_ids
            .get(route_id)
            .cloned()
            .unwrap_or_else(|| self.scoped(route_id))
    }

    fn agency(&self, record: AgencyRecord) -> Agency {
        let id = non_empty(&record.agency_id)
            .unwrap_or(self.default_agency_id.as_str())
            .to_string();
        Agency { id, record }
    }

    fn route(&self, record: RouteRecord) -> Route {
        Route {
            id: self.route_scoped_id(&record),
            agency_id: self.route_agency_id(&record).to_string(),
            record,
        }
    }

    fn transfer(&self, index: usize, record: TransferRecord) -> Transfer {
        Transfer {
            index,
            from_stop: non_empty(&record.from_stop_id).map(|id| self.scoped(id)),
            to_stop: non_empty(&record.to_stop_id).map(|id| self.scoped(id)),
            from_route: non_empty(&record.from_route_id).map(|id| self.route_ref(id)),
            to_route: non_empty(&record.to_route_id).map(|id| self.route_ref(id)),
            from_trip: non_empty(&record.from_trip_id).map(|id| self.scoped(id)),
            to_trip: non_empty(&record.to_trip_id).map(|id| self.scoped(id)),
            record,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

enum FeedSource {
    Directory(PathBuf),
    Archive {
        path: PathBuf,
        archive: ZipArchive<File>,
    },
}

impl FeedSource {
    fn open(path: &Path) -> Result<FeedSource, FeedError> {
        if path.is_dir() {
            return Ok(FeedSource::Directory(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|e| FeedError::io(path, e))?;
        let archive = ZipArchive::new(file)?;
        Ok(FeedSource::Archive {
            path: path.to_path_buf(),
            archive,
        })
    }

    fn path(&self) -> &Path {
        match self {
            FeedSource::Directory(path) => path,
            FeedSource::Archive { path, .. } => path,
        }
    }

    fn read_required<T: DeserializeOwned>(&mut self, kind: EntityKind) -> Result<Vec<T>, FeedError> {
        match self.read_rows(kind)? {
            Some(rows) => Ok(rows),
            None => Err(FeedError::MissingFile {
                filename: kind.filename().to_string(),
                feed: self.path().to_path_buf(),
            }),
        }
    }

    /// rows of an optional file; an absent file has no rows.
    fn read_optional<T: DeserializeOwned>(&mut self, kind: EntityKind) -> Result<Vec<T>, FeedError> {
        let rows = self.read_rows(kind)?;
        if rows.is_none() {
            log::debug!("{} not found, treating it as empty", kind.filename());
        }
        Ok(rows.unwrap_or_default())
    }

    /// the rows of the file for `kind`, or None when the feed has no such file.
    fn read_rows<T: DeserializeOwned>(
        &mut self,
        kind: EntityKind,
    ) -> Result<Option<Vec<T>>, FeedError> {
        let filename = kind.filename();
        match self {
            FeedSource::Directory(directory) => {
                let path = directory.join(filename);
                match File::open(&path) {
                    Ok(file) => deserialize_rows(file, filename).map(Some),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(FeedError::io(path, e)),
                }
            }
            FeedSource::Archive { archive, .. } => {
                let entry = archive
                    .file_names()
                    .find(|name| is_entry_for(name, filename))
                    .map(String::from);
                match entry {
                    Some(name) => deserialize_rows(archive.by_name(&name)?, filename).map(Some),
                    None => Ok(None),
                }
            }
        }
    }
}

/// archives sometimes nest the feed inside a directory, so an entry matches
/// on its file name alone.
fn is_entry_for(entry_name: &str, filename: &str) -> bool {
    entry_name == filename || entry_name.ends_with(&format!("/{filename}"))
}

fn deserialize_rows<T, R>(reader: R, filename: &str) -> Result<Vec<T>, FeedError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let rows = tqdm!(
        csv_reader.deserialize::<T>(),
        desc = format!("reading {filename}")
    )
    .collect::<Result<Vec<T>, csv::Error>>()
    .map_err(|e| FeedError::csv(filename, e))?;
    eprintln!();
    log::debug!("read {} rows from {filename}", rows.len());
    Ok(rows)
}
