//! Nearest aircraft search.
//!
//! We scan the whole list once, keeping the closest aircraft seen so far.  With
//! `Strategy::Pruned`, a bounding box built from the current best distance lets us skip
//! aircraft that can not possibly be closer without computing their distance.
//!

use tracing::{debug, trace};

use planespot_common::{Observer, BB};
use planespot_formats::Aircraft;

use crate::SearchError;

/// How to scan the list
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strategy {
    /// Skip aircraft outside the current bounding box
    #[default]
    Pruned,
    /// Compute the distance of every aircraft
    Exhaustive,
}

/// How much work the search did
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Distance computed
    pub evaluated: usize,
    /// Skipped by the bounding box
    pub skipped: usize,
}

/// Result of a search, `aircraft` always has its distance set.
///
#[derive(Clone, Debug)]
pub struct Nearest {
    pub aircraft: Aircraft,
    pub stats: SearchStats,
}

/// Find the aircraft closest to `observer`.
///
/// On equal distances the first one seen wins.
///
#[tracing::instrument(skip(aircraft))]
pub fn nearest<I>(
    observer: &Observer,
    aircraft: I,
    strategy: Strategy,
) -> Result<Nearest, SearchError>
where
    I: IntoIterator<Item = Aircraft>,
{
    trace!("enter");

    let mut iter = aircraft.into_iter();

    // The first one is always evaluated
    //
    let mut best = iter.next().ok_or(SearchError::NotFound)?;
    let mut best_dist = observer.distance_to(best.latitude, best.longitude);
    best.set_distance(best_dist);

    let mut stats = SearchStats {
        evaluated: 1,
        skipped: 0,
    };
    let mut bb = BB::from_observer(observer, best_dist);

    for mut cand in iter {
        if strategy == Strategy::Pruned && !bb.contains(cand.latitude, cand.longitude) {
            stats.skipped += 1;
            continue;
        }

        let dist = observer.distance_to(cand.latitude, cand.longitude);
        cand.set_distance(dist);
        stats.evaluated += 1;

        if dist < best_dist {
            best = cand;
            best_dist = dist;
            if strategy == Strategy::Pruned {
                bb = BB::from_observer(observer, best_dist);
            }
        }
    }

    debug!(
        "nearest={} at {:.3} km, evaluated={} skipped={}",
        best.icao24, best_dist, stats.evaluated, stats.skipped
    );
    Ok(Nearest {
        aircraft: best,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec as fleet_of;
    use proptest::{prop_assert_eq, proptest};
    use rstest::rstest;

    use super::*;

    fn plane(id: &str, lat: f64, lon: f64) -> Aircraft {
        Aircraft::new(id, id, "Nowhere", lat, lon, 1000.)
    }

    fn nyc() -> Observer {
        Observer::parse("40.0 N", "74.0 W").unwrap()
    }

    #[rstest]
    #[case(Strategy::Pruned)]
    #[case(Strategy::Exhaustive)]
    fn test_nearest_two(#[case] strategy: Strategy) {
        let list = vec![plane("A", 41.0, -74.0), plane("B", 40.1, -74.1)];

        let r = nearest(&nyc(), list, strategy).unwrap();
        assert_eq!("B", r.aircraft.icao24);
        let d = r.aircraft.distance().unwrap();
        assert!((d - 14.003).abs() < 1e-2, "got {d}");
        assert_eq!(2, r.stats.evaluated);
    }

    #[test]
    fn test_nearest_a_alone() {
        let r = nearest(&nyc(), vec![plane("A", 41.0, -74.0)], Strategy::Pruned).unwrap();
        let d = r.aircraft.distance().unwrap();
        assert!((d - 111.2).abs() < 0.1, "got {d}");
    }

    #[test]
    fn test_nearest_same_place() {
        let obs = Observer::new(50.8, 4.4).unwrap();
        let r = nearest(&obs, vec![plane("X", 50.8, 4.4)], Strategy::Pruned).unwrap();
        assert_eq!(Ok(0.), r.aircraft.distance());
    }

    #[rstest]
    #[case(Strategy::Pruned)]
    #[case(Strategy::Exhaustive)]
    fn test_nearest_empty(#[case] strategy: Strategy) {
        let r = nearest(&nyc(), vec![], strategy);
        assert_eq!(SearchError::NotFound, r.unwrap_err());
    }

    #[test]
    fn test_nearest_tie_first_wins() {
        let list = vec![
            plane("far", 45., -74.),
            plane("first", 40.5, -74.),
            plane("second", 40.5, -74.),
        ];
        let r = nearest(&nyc(), list, Strategy::Pruned).unwrap();
        assert_eq!("first", r.aircraft.icao24);
    }

    #[test]
    fn test_nearest_pruned_skips() {
        let list = vec![
            plane("close", 40.01, -74.01),
            plane("europe", 50.8, 4.4),
            plane("australia", -33.8, 151.2),
            plane("north", 41., -74.),
        ];
        let r = nearest(&nyc(), list.clone(), Strategy::Pruned).unwrap();
        assert_eq!("close", r.aircraft.icao24);
        assert_eq!(1, r.stats.evaluated);
        assert_eq!(3, r.stats.skipped);

        let r = nearest(&nyc(), list, Strategy::Exhaustive).unwrap();
        assert_eq!("close", r.aircraft.icao24);
        assert_eq!(4, r.stats.evaluated);
        assert_eq!(0, r.stats.skipped);
    }

    #[test]
    fn test_nearest_closer_in_longitude_only() {
        // Further in latitude but not in longitude, then the opposite: the closest one is
        // outside a box made of the first one's coordinate deltas.
        let list = vec![plane("lat", 41., -74.), plane("lon", 40., -74.5)];
        let r = nearest(&nyc(), list, Strategy::Pruned).unwrap();
        assert_eq!("lon", r.aircraft.icao24);
    }

    #[test]
    fn test_nearest_across_antimeridian() {
        let obs = Observer::new(0., 179.9).unwrap();
        let list = vec![plane("west", 0., 178.), plane("east", 0., -179.9)];
        let r = nearest(&obs, list, Strategy::Pruned).unwrap();
        assert_eq!("east", r.aircraft.icao24);
    }

    fn fleet() -> impl proptest::strategy::Strategy<Value = Vec<(f64, f64)>> {
        fleet_of((-90.0..=90.0f64, -180.0..=180.0f64), 1..60)
    }

    proptest! {
        #[test]
        fn prop_pruned_is_exhaustive(
            lat in -90.0..=90.0f64,
            lon in -180.0..=180.0f64,
            points in fleet(),
        ) {
            let obs = Observer::new(lat, lon).unwrap();
            let list: Vec<Aircraft> = points
                .iter()
                .enumerate()
                .map(|(i, (la, lo))| plane(&i.to_string(), *la, *lo))
                .collect();

            let pruned = nearest(&obs, list.clone(), Strategy::Pruned).unwrap();
            let full = nearest(&obs, list.clone(), Strategy::Exhaustive).unwrap();

            prop_assert_eq!(&pruned.aircraft.icao24, &full.aircraft.icao24);
            prop_assert_eq!(pruned.aircraft.distance(), full.aircraft.distance());

            let min = list
                .iter()
                .map(|a| obs.distance_to(a.latitude, a.longitude))
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!(Ok(min), pruned.aircraft.distance());
        }

        #[test]
        fn prop_order_does_not_matter(
            lat in -90.0..=90.0f64,
            lon in -180.0..=180.0f64,
            points in fleet(),
        ) {
            let obs = Observer::new(lat, lon).unwrap();
            let list: Vec<Aircraft> = points
                .iter()
                .enumerate()
                .map(|(i, (la, lo))| plane(&i.to_string(), *la, *lo))
                .collect();
            let reversed: Vec<Aircraft> = list.iter().rev().cloned().collect();

            let a = nearest(&obs, list, Strategy::Pruned).unwrap();
            let b = nearest(&obs, reversed, Strategy::Pruned).unwrap();
            prop_assert_eq!(a.aircraft.distance(), b.aircraft.distance());
        }
    }
}
