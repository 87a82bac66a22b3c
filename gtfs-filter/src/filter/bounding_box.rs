use crate::model::Stop;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// named geographic box with half-open extents: a point is inside when
/// `min_lat <= lat < max_lat` and `min_lon <= lon < max_lon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default = "default_name")]
    pub name: String,
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

fn default_name() -> String {
    String::from("bbox")
}

impl BoundingBox {
    pub fn new(name: &str, min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            name: name.to_string(),
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        between(lat, self.min_lat, self.max_lat) && between(lon, self.min_lon, self.max_lon)
    }

    /// a stop without coordinates is outside every box.
    pub fn contains_stop(&self, stop: &Stop) -> bool {
        stop.coordinates()
            .map(|(lat, lon)| self.contains(lat, lon))
            .unwrap_or(false)
    }
}

fn between(v: f64, min: f64, max: f64) -> bool {
    min <= v && v < max
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [({:5.2}, {:5.2}), ({:5.2}, {:5.2})]",
            self.name, self.min_lat, self.min_lon, self.max_lat, self.max_lon
        )
    }
}

/// parses a box from the command line in the form
/// `[name:]min_lat,min_lon,max_lat,max_lon`.
pub fn parse_bbox(s: &str) -> Result<BoundingBox, String> {
    let (name, extent) = match s.split_once(':') {
        Some((name, extent)) if !name.trim().is_empty() => (name.trim().to_string(), extent),
        Some((_, extent)) => (default_name(), extent),
        None => (default_name(), s),
    };
    let parts: Vec<&str> = extent.split(',').collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected format: [name:]min_lat,min_lon,max_lat,max_lon, got: {s}"
        ));
    }

    let min_lat = parse_coordinate(parts[0], "latitude", 90.0)?;
    let min_lon = parse_coordinate(parts[1], "longitude", 180.0)?;
    let max_lat = parse_coordinate(parts[2], "latitude", 90.0)?;
    let max_lon = parse_coordinate(parts[3], "longitude", 180.0)?;

    if !(min_lat < max_lat) {
        Err(format!(
            "bbox: min_lat must be less than max_lat, but found [{min_lat},{max_lat}]"
        ))
    } else if !(min_lon < max_lon) {
        Err(format!(
            "bbox: min_lon must be less than max_lon, but found [{min_lon},{max_lon}]"
        ))
    } else {
        Ok(BoundingBox {
            name,
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        })
    }
}

/// a coordinate in degrees, within `[-limit, limit]`.
fn parse_coordinate(s: &str, axis: &str, limit: f64) -> Result<f64, String> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid {axis}: not a number: {s}"))?;
    if (-limit..=limit).contains(&v) {
        Ok(v)
    } else {
        Err(format!(
            "invalid {axis}: '{v}' must be in range [-{limit},{limit}]"
        ))
    }
}
