//! Geospatial and textual matchers
//!
//! One Haversine core with pluggable filters, the capability-fallback policy
//! layered on top, and the separate fuzzy station-name matcher.

pub mod capability;
pub mod geo;
pub mod station_name;

pub use capability::{find_nearest_with_capability, nearest_rws_location, nearest_weather_station};
pub use geo::{distance_km, nearest, GeoCandidate, Positioned};
pub use station_name::{match_station, normalize_name};
