//! One aircraft as seen in a snapshot.
//!

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::AircraftError;

/// Validated aircraft position.
///
/// `distance` is relative to whoever looked for it, so it starts unset and only a search
/// fills it in.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Aircraft {
    /// ICAO ID (24-bit transponder code, hex)
    pub icao24: String,
    /// Call-sign, as sent (often padded with spaces)
    pub callsign: String,
    /// Origin Country
    pub origin_country: String,
    /// Position
    pub latitude: f64,
    pub longitude: f64,
    /// Geometric altitude in metres
    pub geo_altitude: f64,
    /// Distance to the observer in km
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
}

impl Aircraft {
    pub fn new(
        icao24: &str,
        callsign: &str,
        origin_country: &str,
        latitude: f64,
        longitude: f64,
        geo_altitude: f64,
    ) -> Self {
        Aircraft {
            icao24: icao24.to_owned(),
            callsign: callsign.to_owned(),
            origin_country: origin_country.to_owned(),
            latitude,
            longitude,
            geo_altitude,
            distance: None,
        }
    }

    /// Distance to the observer, only available once a search has computed it.
    ///
    pub fn distance(&self) -> Result<f64, AircraftError> {
        self.distance
            .ok_or(AircraftError::UninitializedField("distance"))
    }

    /// Record the distance to the observer of the current search.
    ///
    /// A new search on the same aircraft replaces the previous value.
    ///
    #[inline]
    pub fn set_distance(&mut self, km: f64) {
        self.distance = Some(km);
    }

    #[inline]
    pub fn has_distance(&self) -> bool {
        self.distance.is_some()
    }

    /// Call-sign without the padding
    ///
    #[inline]
    pub fn callsign(&self) -> &str {
        self.callsign.trim()
    }
}

impl Display for Aircraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) from {} at {:.4}, {:.4}",
            self.icao24,
            self.callsign(),
            self.origin_country,
            self.latitude,
            self.longitude
        )
    }
}
