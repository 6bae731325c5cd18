//! Haversine distance and generic nearest-neighbor search
//!
//! One parameterized implementation serves every matcher in the engine:
//! capability fallback, spot-to-location resolution, and weather-station
//! lookup all go through [`nearest`] with their own filter predicates.

use serde::Serialize;
use std::cmp::Ordering;
use zwemwater_shared::models::{Coordinate, Location, WeatherStation};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Anything with a stable id and a coordinate can be searched
pub trait Positioned {
    fn id(&self) -> &str;
    fn coordinate(&self) -> &Coordinate;
}

impl Positioned for Location {
    fn id(&self) -> &str {
        &self.id
    }

    fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

impl Positioned for WeatherStation {
    fn id(&self) -> &str {
        &self.code
    }

    fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

/// A search hit with its distance from the origin
///
/// `distance_km` is rounded to 2 decimals; ranking happens on the raw
/// distance before rounding.
#[derive(Debug, Clone, Serialize)]
pub struct GeoCandidate<T> {
    pub item: T,
    pub distance_km: f64,
}

/// Haversine great-circle distance in kilometers
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Nearest candidates to `origin`, ascending by distance
///
/// Filtering order: exclude self by id, then the caller-supplied predicate.
/// The sort is stable, so ties keep catalog iteration order. No match yields
/// an empty vec, never an error.
pub fn nearest<T, F>(
    origin: &Coordinate,
    exclude_id: Option<&str>,
    candidates: &[T],
    filter: F,
    limit: usize,
) -> Vec<GeoCandidate<T>>
where
    T: Positioned + Clone,
    F: Fn(&T) -> bool,
{
    let mut ranked: Vec<(f64, &T)> = candidates
        .iter()
        .filter(|c| exclude_id != Some(c.id()))
        .filter(|c| filter(c))
        .map(|c| (distance_km(origin, c.coordinate()), c))
        .collect();

    ranked.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(limit)
        .map(|(distance, item)| GeoCandidate {
            item: item.clone(),
            distance_km: round_2dp(distance),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use zwemwater_shared::models::WaterBodyType;

    fn location(id: &str, latitude: f64, longitude: f64) -> Location {
        Location {
            id: id.to_string(),
            name: id.to_string(),
            coordinate: Coordinate::new(latitude, longitude),
            water_body_type: WaterBodyType::Sea,
            capabilities: Default::default(),
        }
    }

    #[test]
    fn test_known_distance() {
        // Scheveningen to IJmuiden, roughly 44 km
        let scheveningen = Coordinate::new(52.1038, 4.2599);
        let ijmuiden = Coordinate::new(52.4622, 4.5548);
        let d = distance_km(&scheveningen, &ijmuiden);
        assert!((d - 44.6).abs() < 1.0, "unexpected distance: {}", d);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: distance is symmetric
        #[test]
        fn prop_distance_symmetric(
            lat_a in -85.0f64..85.0, lon_a in -180.0f64..180.0,
            lat_b in -85.0f64..85.0, lon_b in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat_a, lon_a);
            let b = Coordinate::new(lat_b, lon_b);
            prop_assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
        }

        /// Property: distance to self is zero
        #[test]
        fn prop_distance_to_self_is_zero(lat in -85.0f64..85.0, lon in -180.0f64..180.0) {
            let a = Coordinate::new(lat, lon);
            prop_assert!(distance_km(&a, &a).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nearest_excludes_self() {
        let origin = location("A", 52.0, 4.0);
        let catalog = vec![origin.clone(), location("B", 52.1, 4.1)];
        let hits = nearest(&origin.coordinate, Some("A"), &catalog, |_| true, 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item.id, "B");
    }

    #[test]
    fn test_nearest_orders_ascending_and_limits() {
        let origin = Coordinate::new(52.0, 4.0);
        let catalog = vec![
            location("far", 54.0, 6.0),
            location("near", 52.05, 4.05),
            location("mid", 52.5, 4.5),
        ];
        let hits = nearest(&origin, None, &catalog, |_| true, 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].item.id, "near");
        assert_eq!(hits[1].item.id, "mid");
        assert!(hits[0].distance_km < hits[1].distance_km);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let origin = Coordinate::new(52.0, 4.0);
        // Same point twice: identical distances
        let catalog = vec![location("first", 52.2, 4.2), location("second", 52.2, 4.2)];
        let hits = nearest(&origin, None, &catalog, |_| true, 2);
        assert_eq!(hits[0].item.id, "first");
        assert_eq!(hits[1].item.id, "second");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let origin = Coordinate::new(52.0, 4.0);
        let catalog = vec![location("A", 52.1, 4.1)];
        let hits = nearest(&origin, None, &catalog, |_| false, 1);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_distance_rounded_to_two_decimals() {
        let origin = Coordinate::new(52.0, 4.0);
        let catalog = vec![location("A", 52.123, 4.137)];
        let hits = nearest(&origin, None, &catalog, |_| true, 1);
        let d = hits[0].distance_km;
        assert_eq!(d, (d * 100.0).round() / 100.0);
    }
}
