//! Capability-aware fallback search over the RWS location catalog
//!
//! The four-part candidate filter here is domain policy and is reproduced
//! exactly: not the source itself, not blacklisted, same (known) water-body
//! type, and carrying the requested capability. Relaxing the water-type rule
//! would silently let a river gauge stand in for a sea buoy.

use crate::matching::geo::{nearest, GeoCandidate};
use crate::providers::Blacklist;
use zwemwater_shared::models::{Capability, Coordinate, Location, WaterBodyType, WeatherStation};

/// Nearest catalog locations sharing the source's water-body type and
/// reporting `capability`
///
/// An `Unknown` water-body type never participates, on either side.
pub fn find_nearest_with_capability(
    source: &Location,
    catalog: &[Location],
    capability: Capability,
    blacklist: &dyn Blacklist,
    limit: usize,
) -> Vec<GeoCandidate<Location>> {
    if source.water_body_type == WaterBodyType::Unknown {
        return Vec::new();
    }

    nearest(
        &source.coordinate,
        Some(&source.id),
        catalog,
        |candidate| {
            !blacklist.is_blacklisted(&candidate.id)
                && candidate.water_body_type == source.water_body_type
                && candidate.has_capability(capability)
        },
        limit,
    )
}

/// Nearest non-blacklisted RWS location to a coordinate
///
/// Used to resolve a swimming spot's primary measurement point: no
/// capability or water-type filtering, single nearest only.
pub fn nearest_rws_location(
    origin: &Coordinate,
    catalog: &[Location],
    blacklist: &dyn Blacklist,
) -> Option<GeoCandidate<Location>> {
    nearest(origin, None, catalog, |c| !blacklist.is_blacklisted(&c.id), 1)
        .into_iter()
        .next()
}

/// Nearest weather station to a coordinate, no filtering
pub fn nearest_weather_station(
    origin: &Coordinate,
    stations: &[WeatherStation],
) -> Option<GeoCandidate<WeatherStation>> {
    nearest(origin, None, stations, |_| true, 1).into_iter().next()
}
