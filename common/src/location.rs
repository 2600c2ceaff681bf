//! Location related module
//!
//! v1: parsing of free-form coordinates ("40.7128 N"), observer position and great-circle
//!     distance.
//! v2: added named locations (`locations.hcl`) and the search bounding box.
//!
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::path::Path;
use std::str::FromStr;

use eyre::Result;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use tabled::builder::Builder;
use tabled::settings::Style;
use thiserror::Error;
use tracing::trace;

use crate::{ConfigFile, Versioned};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6_371.009;

/// Relative slack added to a search radius so that rounding never prunes an equal-distance point.
const SLACK: f64 = 1e-9;

/// Custom error type for coordinates and locations.
///
#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown location {0}")]
    UnknownLocation(String),
}

/// One of the four cardinal letters that can follow (or precede) a coordinate.
///
#[derive(Clone, Copy, Debug, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Hemisphere {
    N,
    E,
    S,
    W,
}

impl Hemisphere {
    /// North and East are positive, South and West negative.
    ///
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::N | Hemisphere::E => 1.,
            Hemisphere::S | Hemisphere::W => -1.,
        }
    }
}

/// Parse something like "40.7128 N" or "W 74.0060" into signed decimal degrees.
///
/// The first token that is a finite number gives the magnitude, the first hemisphere letter
/// gives the sign.  Without a letter, the value is taken as North/East.
///
#[tracing::instrument]
pub fn parse_coordinate(input: &str) -> Result<f64, LocationError> {
    trace!("enter");

    let tokens: Vec<&str> = input.split_whitespace().collect();

    let value = tokens
        .iter()
        .filter_map(|tok| tok.parse::<f64>().ok())
        .find(|v| v.is_finite())
        .ok_or_else(|| LocationError::InvalidInput(format!("no value in {input:?}")))?;

    let sign = tokens
        .iter()
        .find_map(|tok| Hemisphere::from_str(tok).ok())
        .map_or(1., Hemisphere::sign);

    Ok(value * sign)
}

/// Great-circle distance in km between two points given in decimal degrees (haversine).
///
/// Deltas are taken as absolute values so the result does not depend on the order of the
/// points.
///
#[inline]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let d_lat = (lat1 - lat2).abs();
    let d_lon = (lon1 - lon2).abs();

    let hav_lat = (d_lat / 2.).sin().powi(2);
    let hav_lon = (d_lon / 2.).sin().powi(2);
    let a = (hav_lat + lat1.cos() * lat2.cos() * hav_lon).min(1.);

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());
    c * EARTH_RADIUS_KM
}

/// Where we look from, validated.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Observer {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

impl Observer {
    /// Check bounds
    ///
    pub fn new(lat: f64, lon: f64) -> Result<Self, LocationError> {
        if !(-90. ..=90.).contains(&lat) {
            return Err(LocationError::InvalidInput(format!(
                "latitude {lat} not in [-90, 90]"
            )));
        }
        if !(-180. ..=180.).contains(&lon) {
            return Err(LocationError::InvalidInput(format!(
                "longitude {lon} not in [-180, 180]"
            )));
        }
        Ok(Observer { lat, lon })
    }

    /// Build from two human-entered strings.
    ///
    #[tracing::instrument]
    pub fn parse(lat: &str, lon: &str) -> Result<Self, LocationError> {
        Self::new(parse_coordinate(lat)?, parse_coordinate(lon)?)
    }

    /// Distance in km to the given point
    ///
    #[inline]
    pub fn distance_to(&self, lat: f64, lon: f64) -> f64 {
        haversine(self.lat, self.lon, lat, lon)
    }
}

impl TryFrom<&Location> for Observer {
    type Error = LocationError;

    fn try_from(value: &Location) -> Result<Self, Self::Error> {
        Observer::new(value.lat, value.lon)
    }
}

/// Named location
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Location {
    /// Plus code encoded location
    pub code: Option<String>,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

/// Bounding box around a point.
///
/// Every point outside the box is strictly farther from the centre than the radius the box
/// was built with, so it can be skipped without computing its real distance.
///
#[derive(Debug)]
pub struct BB {
    /// Longitude - X0
    pub min_lon: f64,
    /// Latitude - Y0
    pub min_lat: f64,
    /// Longitude - X1
    pub max_lon: f64,
    /// Latitude - Y1
    pub max_lat: f64,
}

impl BB {
    /// Take an observer and create a bounding box of `dist` km around it.
    ///
    #[tracing::instrument]
    pub fn from_observer(value: &Observer, dist: f64) -> Self {
        Self::from_lat_lon(value.lat, value.lon, dist)
    }

    /// Take a lat lon tuple and create a bounding box of `dist` km around it.
    ///
    /// The latitude half-width is the arc of `dist` km along a meridian, since the haversine
    /// term for latitude alone is already a lower bound for the whole distance.
    ///
    /// For longitude, any point inside the latitude band has `cos(lat) >= cos_min` so the
    /// longitude term is bounded by `cos(lat0) * cos_min * hav(dlon)`; we solve that for
    /// `dlon`.  When no such bound exists the box spans every longitude.
    ///
    /// NOTE: `dist` is in km
    ///
    pub fn from_lat_lon(lat: f64, lon: f64, dist: f64) -> Self {
        let theta = dist / EARTH_RADIUS_KM * (1. + SLACK);
        if theta >= PI {
            return Self::world();
        }

        let d_lat = theta.to_degrees();
        let (min_lat, max_lat) = ((lat - d_lat).max(-90.), (lat + d_lat).min(90.));

        let cos_min = min_lat.abs().max(max_lat.abs()).to_radians().cos();
        let k = lat.to_radians().cos() * cos_min;
        let hav_theta = (theta / 2.).sin().powi(2);

        let d_lon = if k <= 0. || hav_theta >= k {
            180.
        } else {
            (2. * (hav_theta / k).sqrt().asin()).to_degrees()
        };

        Self {
            min_lon: lon - d_lon,
            min_lat,
            max_lon: lon + d_lon,
            max_lat,
        }
    }

    /// Box covering the whole globe
    ///
    pub fn world() -> Self {
        Self {
            min_lon: -180.,
            min_lat: -90.,
            max_lon: 180.,
            max_lat: 90.,
        }
    }

    /// Check whether a point is inside, longitudes wrapping around the antimeridian.
    ///
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if lat < self.min_lat || lat > self.max_lat {
            return false;
        }
        let half = (self.max_lon - self.min_lon) / 2.;
        if half >= 180. {
            return true;
        }
        let centre = self.min_lon + half;
        let d_lon = (lon - centre).rem_euclid(360.);
        d_lon.min(360. - d_lon) <= half
    }

    /// Generate an array with the four points in a BB
    ///
    pub fn to_polygon(&self) -> [(f64, f64); 4] {
        [
            (self.min_lon, self.min_lat),
            (self.min_lon, self.max_lat),
            (self.max_lon, self.max_lat),
            (self.max_lon, self.min_lat),
        ]
    }
}

/// Default locations filename
const LOCATIONS: &str = "locations.hcl";

/// On-disk structure for the locations file
///
#[derive(Debug, Deserialize)]
struct LocationsFile {
    /// Version number for safety
    version: usize,
    /// List of locations
    location: BTreeMap<String, Location>,
}

impl Versioned for LocationsFile {
    const VERSION: usize = 1;

    fn version(&self) -> usize {
        self.version
    }
}

/// Load all locations, from the given file, the one in the config directory or the
/// built-in list.
///
#[tracing::instrument]
pub fn load_locations(fname: Option<&Path>) -> Result<BTreeMap<String, Location>> {
    trace!("enter");

    let cfg = ConfigFile::<LocationsFile>::load(fname, LOCATIONS, include_str!("locations.hcl"))?;
    Ok(cfg.into_inner().location)
}

/// Find a named location and turn it into an observer.
///
pub fn find_location(
    data: &BTreeMap<String, Location>,
    name: &str,
) -> Result<Observer, LocationError> {
    match data.get(name) {
        Some(loc) => Observer::try_from(loc),
        None => Err(LocationError::UnknownLocation(name.to_string())),
    }
}

/// List loaded locations with the box `dist` km around each of them.
///
#[tracing::instrument(skip(data))]
pub fn list_locations(data: &BTreeMap<String, Location>, dist: f64) -> Result<String> {
    trace!("enter");
    let header = vec!["Location", "Plus Code", "Lat/Lon", "Polygon"];

    let mut builder = Builder::default();
    builder.push_record(header);

    data.iter().for_each(|(name, loc)| {
        let code = loc.code.clone().unwrap_or("Unknown".to_string());
        let poly = BB::from_lat_lon(loc.lat, loc.lon, dist);
        let point = format!("{:.2}, {:.2}", loc.lat, loc.lon);
        let poly = format!(
            "{:.2}, {:.2}, {:.2}, {:.2}",
            poly.min_lat, poly.min_lon, poly.max_lat, poly.max_lon
        );
        builder.push_record([name.clone(), code, point, poly]);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("List all locations ({dist} km):\n{allf}"))
}
