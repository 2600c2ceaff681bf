//! Module to load and process the data coming from the Opensky site and turn it into a list
//! of `Aircraft`.
//!
//! XXX they send out an array of arrays, each representing a specific state vector, and any
//!     field of these can be `null`.  We only look at the few fields we need and skip the
//!     records where one of them is missing or of the wrong type.
//!
//! Documentation is taken from [The Opensky site](https://openskynetwork.github.io/opensky-api/rest.html)
//!

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::IntoStaticStr;
use tracing::{debug, trace};

use crate::{Aircraft, RecordError};

/// Index of the fields we use inside a state vector.
///
#[derive(Clone, Copy, Debug, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
enum Field {
    Icao24 = 0,
    Callsign = 1,
    OriginCountry = 2,
    Longitude = 5,
    Latitude = 6,
    GeoAltitude = 7,
}

impl Field {
    #[inline]
    fn name(self) -> &'static str {
        self.into()
    }
}

/// This is the main container for packets sent by the API.
/// It includes a UNIX timestamp and a set of state vectors.
///
/// `states` is `null` when there is nothing to report.
///
#[derive(Debug, Deserialize)]
pub struct StateList {
    /// UNIX timestamp
    pub time: i64,
    /// The state vectors
    pub states: Option<Vec<RawState>>,
}

impl StateList {
    /// Deserialize from json
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        trace!("statelist::from_json");

        let data: StateList = serde_json::from_str(input)?;
        trace!("{} points", data.len());
        Ok(data)
    }

    /// Snapshot time
    ///
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    pub fn len(&self) -> usize {
        self.states.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform all valid state vectors into `Aircraft`, skipping the others.
    ///
    #[tracing::instrument(skip(self))]
    pub fn to_aircraft(&self) -> Vec<Aircraft> {
        trace!("statelist::to_aircraft");

        match &self.states {
            Some(states) => to_aircraft(states),
            None => vec![],
        }
    }
}

/// Convert a batch of state vectors, keeping the order and dropping malformed ones.
///
pub fn to_aircraft(states: &[RawState]) -> Vec<Aircraft> {
    let list: Vec<Aircraft> = states
        .iter()
        .filter_map(|state| match Aircraft::try_from(state) {
            Ok(aircraft) => Some(aircraft),
            Err(e) => {
                debug!("skipping {}: {}", state.icao24().unwrap_or("?"), e);
                None
            }
        })
        .collect();

    debug!(
        "{} aircraft, {} rejected",
        list.len(),
        states.len() - list.len()
    );
    list
}

/// Opensky sends out loosely-typed tuples we need to match with real field names.
///
/// XXX This is a terrible way to return named data
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawState(pub Vec<Value>);

impl RawState {
    /// Best effort, for logging
    ///
    pub fn icao24(&self) -> Option<&str> {
        self.0.get(Field::Icao24 as usize).and_then(Value::as_str)
    }

    fn field(&self, field: Field) -> Result<&Value, RecordError> {
        match self.0.get(field as usize) {
            None => Err(RecordError::Missing(field.name())),
            Some(Value::Null) => Err(RecordError::Null(field.name())),
            Some(v) => Ok(v),
        }
    }

    fn text(&self, field: Field) -> Result<&str, RecordError> {
        let v = self.field(field)?;
        v.as_str().ok_or_else(|| RecordError::WrongType {
            name: field.name(),
            want: "string",
            got: kind(v).to_string(),
        })
    }

    fn number(&self, field: Field) -> Result<f64, RecordError> {
        let v = self.field(field)?;
        v.as_f64().ok_or_else(|| RecordError::WrongType {
            name: field.name(),
            want: "number",
            got: kind(v).to_string(),
        })
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<&RawState> for Aircraft {
    type Error = RecordError;

    /// Generate an `Aircraft` from a state vector
    ///
    fn try_from(state: &RawState) -> Result<Self, Self::Error> {
        let icao24 = state.text(Field::Icao24)?;
        let callsign = state.text(Field::Callsign)?;
        let origin = state.text(Field::OriginCountry)?;
        let longitude = state.number(Field::Longitude)?;
        let latitude = state.number(Field::Latitude)?;
        let geo_altitude = state.number(Field::GeoAltitude)?;

        if !(-90. ..=90.).contains(&latitude) {
            return Err(RecordError::OutOfRange {
                name: Field::Latitude.name(),
                value: latitude,
            });
        }
        if !(-180. ..=180.).contains(&longitude) {
            return Err(RecordError::OutOfRange {
                name: Field::Longitude.name(),
                value: longitude,
            });
        }

        Ok(Aircraft::new(
            icao24,
            callsign,
            origin,
            latitude,
            longitude,
            geo_altitude,
        ))
    }
}
