//! This is the module handling the `nearest` sub-command.
//!

use std::collections::BTreeMap;
use std::fs;

use eyre::{eyre, Result};
use tracing::{info, trace};

use planespot_common::{find_location, Location, Observer};
use planespot_formats::StateList;
use planespot_sources::{fetch_states, Site, Sources};

use crate::{nearest, NearestOpts, Report};

/// Figure out where we are, either from coordinates or a named location.
///
pub fn observer_from(nopts: &NearestOpts, locs: &BTreeMap<String, Location>) -> Result<Observer> {
    let obs = match (&nopts.location, &nopts.lat, &nopts.lon) {
        (Some(name), _, _) => find_location(locs, name)?,
        (None, Some(lat), Some(lon)) => Observer::parse(lat, lon)?,
        _ => return Err(eyre!("need either a location or both latitude and longitude")),
    };
    Ok(obs)
}

/// Get one snapshot, from the saved file if any or from the network site.
///
#[tracing::instrument(skip(srcs))]
pub fn snapshot_from(nopts: &NearestOpts, srcs: &Sources) -> Result<StateList> {
    trace!("enter");

    let states = match &nopts.input {
        Some(fname) => {
            info!("Reading snapshot from {:?}", fname);

            let data = fs::read_to_string(fname)?;
            StateList::from_json(&data)?
        }
        None => {
            info!("Fetching from network site {}", nopts.site);

            let site = Site::load(&nopts.site, srcs)?;
            fetch_states(site.as_ref())?
        }
    };
    Ok(states)
}

/// Whole `nearest` query: position, snapshot, search and report.
///
#[tracing::instrument(skip(srcs, locs))]
pub fn find_nearest(
    nopts: &NearestOpts,
    srcs: &Sources,
    locs: &BTreeMap<String, Location>,
) -> Result<String> {
    trace!("enter");

    let obs = observer_from(nopts, locs)?;
    let states = snapshot_from(nopts, srcs)?;

    let list = states.to_aircraft();
    info!("{} usable aircraft out of {}", list.len(), states.len());

    let found = nearest(&obs, list, nopts.strategy())?;
    let report = Report::new(&obs, &found.aircraft, states.timestamp())?;

    let str = if nopts.json {
        report.to_json()?
    } else {
        report.to_string()
    };
    Ok(str)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use planespot_common::load_locations;

    use super::*;

    fn opts(lat: &str, lon: &str) -> NearestOpts {
        NearestOpts {
            site: "opensky".to_string(),
            location: None,
            input: Some(PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/testdata/states.json"
            ))),
            exhaustive: false,
            json: false,
            lat: Some(lat.to_string()),
            lon: Some(lon.to_string()),
        }
    }

    #[test]
    fn test_find_nearest_from_file() -> Result<()> {
        let srcs = Sources::default();
        let locs = BTreeMap::new();

        let str = find_nearest(&opts("40.0 N", "74.0 W"), &srcs, &locs)?;
        assert!(str.contains("ICAO24 ID: a1b2c3"));
        assert!(str.contains("Relative distance: 14.003 km"));
        assert!(str.contains("Callsign: DAL123"));
        Ok(())
    }

    #[test]
    fn test_find_nearest_json() -> Result<()> {
        let srcs = Sources::default();
        let locs = BTreeMap::new();
        let mut nopts = opts("40.0 N", "74.0 W");
        nopts.json = true;

        let str = find_nearest(&nopts, &srcs, &locs)?;
        let json: serde_json::Value = serde_json::from_str(&str)?;
        assert_eq!("a1b2c3", json["aircraft"]["icao24"]);
        Ok(())
    }

    #[test]
    fn test_find_nearest_location() -> Result<()> {
        let srcs = Sources::default();
        let locs = load_locations(None)?;
        let mut nopts = opts("", "");
        nopts.location = Some("bxl".to_string());

        let str = find_nearest(&nopts, &srcs, &locs)?;
        assert!(str.contains("ICAO24 ID: 44a8f1"));
        Ok(())
    }

    #[test]
    fn test_find_nearest_bad_coordinates() {
        let srcs = Sources::default();
        let locs = BTreeMap::new();

        assert!(find_nearest(&opts("north", "74.0 W"), &srcs, &locs).is_err());
    }

    #[test]
    fn test_find_nearest_unknown_site() {
        let srcs = Sources::default();
        let locs = BTreeMap::new();
        let mut nopts = opts("40.0 N", "74.0 W");
        nopts.input = None;
        nopts.site = "nowhere".to_string();

        assert!(find_nearest(&nopts, &srcs, &locs).is_err());
    }
}
