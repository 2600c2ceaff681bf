//! Display the result of a search.
//!

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use planespot_common::Observer;
use planespot_formats::{Aircraft, AircraftError};

/// What we print about the nearest aircraft.
///
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub observer: &'a Observer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub aircraft: &'a Aircraft,
    /// km
    pub distance: f64,
}

impl<'a> Report<'a> {
    /// The aircraft must come out of a search, otherwise its distance is unknown.
    ///
    pub fn new(
        observer: &'a Observer,
        aircraft: &'a Aircraft,
        time: Option<DateTime<Utc>>,
    ) -> Result<Self, AircraftError> {
        Ok(Report {
            observer,
            time,
            aircraft,
            distance: aircraft.distance()?,
        })
    }

    /// JSON version, for scripts
    ///
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let a = self.aircraft;

        writeln!(f, "From:")?;
        writeln!(f, "Latitude: {} degrees", self.observer.lat)?;
        writeln!(f, "Longitude: {} degrees", self.observer.lon)?;
        writeln!(f, "The closest aeroplane is:")?;
        writeln!(f, "Latitude: {} degrees", a.latitude)?;
        writeln!(f, "Longitude: {} degrees", a.longitude)?;
        writeln!(f, "Relative distance: {:.3} km", self.distance)?;
        writeln!(f, "Geometric Altitude: {} m", a.geo_altitude)?;
        writeln!(f, "Callsign: {}", a.callsign())?;
        writeln!(f, "ICAO24 ID: {}", a.icao24)?;
        write!(f, "Country of origin: {}", a.origin_country)?;
        if let Some(time) = self.time {
            write!(f, "\nSnapshot time: {}", time.to_rfc3339())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn found() -> Aircraft {
        let mut a = Aircraft::new("a1b2c3", "DAL123  ", "United States", 40.1, -74.1, 3000.);
        a.set_distance(14.003_12);
        a
    }

    #[test]
    fn test_report_needs_distance() {
        let obs = Observer::new(40., -74.).unwrap();
        let a = Aircraft::new("a1b2c3", "DAL123", "United States", 40.1, -74.1, 3000.);

        let r = Report::new(&obs, &a, None);
        assert_eq!(
            AircraftError::UninitializedField("distance"),
            r.unwrap_err()
        );
    }

    #[test]
    fn test_report_display() {
        let obs = Observer::new(40., -74.).unwrap();
        let a = found();
        let time = Utc.timestamp_opt(1_700_000_000, 0).single();

        let r = Report::new(&obs, &a, time).unwrap();
        let str = r.to_string();

        let lines: Vec<_> = str.lines().collect();
        assert_eq!("From:", lines[0]);
        assert_eq!("Latitude: 40 degrees", lines[1]);
        assert_eq!("Longitude: -74 degrees", lines[2]);
        assert_eq!("The closest aeroplane is:", lines[3]);
        assert_eq!("Relative distance: 14.003 km", lines[6]);
        assert_eq!("Geometric Altitude: 3000 m", lines[7]);
        assert_eq!("Callsign: DAL123", lines[8]);
        assert_eq!("ICAO24 ID: a1b2c3", lines[9]);
        assert_eq!("Country of origin: United States", lines[10]);
        assert_eq!("Snapshot time: 2023-11-14T22:13:20+00:00", lines[11]);
    }

    #[test]
    fn test_report_json() {
        let obs = Observer::new(40., -74.).unwrap();
        let a = found();

        let r = Report::new(&obs, &a, None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!("a1b2c3", json["aircraft"]["icao24"]);
        assert_eq!(40., json["observer"]["lat"]);
        assert!(json.get("time").is_none());
    }
}
