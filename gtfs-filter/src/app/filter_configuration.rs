use super::FilterAppError;
use crate::filter::{
    cleanup_all, retain_agencies, retain_routes, retain_stops, set_service_end_date, BoundingBox,
    CleanupReport, FeedGraph, FilterError,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// which parts of a feed to keep. every filter is optional; the cleanup
/// always runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfiguration {
    /// names the output archive, gtfs-{name}.zip
    #[serde(default)]
    pub name: Option<String>,
    /// agency names to keep
    #[serde(default)]
    pub agencies: Option<Vec<String>>,
    /// route short names to keep
    #[serde(default)]
    pub routes: Option<Vec<String>>,
    /// stops outside this box are removed
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
    /// new end date for every service calendar, as YYYY-MM-DD
    #[serde(default)]
    pub service_end_date: Option<NaiveDate>,
}

impl FilterConfiguration {
    /// name used for the output archive: the configured name, else the
    /// bounding box name.
    pub fn output_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.bounding_box.as_ref().map(|b| b.name.clone()))
            .unwrap_or_else(|| String::from("filtered"))
    }

    /// runs the configured filters in order: agencies, routes, stops, then the
    /// cleanup, and finally the service end date.
    pub fn apply(&self, graph: &mut FeedGraph) -> Result<CleanupReport, FilterError> {
        if let Some(agencies) = &self.agencies {
            retain_agencies(graph, agencies);
        }
        if let Some(routes) = &self.routes {
            retain_routes(graph, routes);
        }
        if let Some(bbox) = &self.bounding_box {
            retain_stops(graph, bbox);
        }
        let report = cleanup_all(graph);
        if let Some(end_date) = self.service_end_date {
            set_service_end_date(graph, end_date.year(), end_date.month(), end_date.day())?;
        }
        Ok(report)
    }
}

impl TryFrom<&String> for FilterConfiguration {
    type Error = FilterAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = || {
            std::fs::read_to_string(f).map_err(|e| {
                FilterAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        if f.ends_with(".toml") {
            toml::from_str(&read()?).map_err(|e| {
                FilterAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            serde_json::from_str(&read()?).map_err(|e| {
                FilterAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(FilterAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
