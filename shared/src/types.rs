//! Assembled result bundles
//!
//! These are the structured outputs of the conditions engine. Exact
//! serialization for a given presentation layer (JSON field layout, CLI
//! tables) is decided there; these types are the language-neutral contract.

use crate::conditions::{TideInfo, WaterConditions, WeatherConditions};
use crate::models::{Location, SwimmingSpot};
use crate::scoring::CalculatedMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error-map key for the water domain
pub const ERROR_KEY_WATER: &str = "water";
/// Error-map key for the weather domain
pub const ERROR_KEY_WEATHER: &str = "weather";
/// Error-map key for the tides domain
pub const ERROR_KEY_TIDES: &str = "tides";

/// A single value substituted from a nearby station, with full provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackValue {
    pub station_id: String,
    pub station_name: String,
    pub distance_km: f64,
    pub value: f64,
    pub measured_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Per-field wave fallbacks; a `None` field means no eligible substitute
/// existed, which is deliberately not an error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveFallbacks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<FallbackValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<FallbackValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<FallbackValue>,
}

/// Identity of the station that supplied tide data when the primary had none
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TideFallback {
    pub station_id: String,
    pub station_name: String,
    pub distance_km: f64,
}

/// A nearby location with its distance from the search origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub location: Location,
    pub distance_km: f64,
}

/// Everything the engine could determine for one subject
///
/// Partial failures surface through `errors` (keys `water`/`weather`/`tides`;
/// an absent key means that domain succeeded) while the rest of the bundle is
/// still populated best-effort. Metrics are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<WaterConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tides: Option<TideInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tide_fallback: Option<TideFallback>,
    pub wave_fallbacks: WaveFallbacks,
    pub metrics: CalculatedMetrics,
    pub errors: BTreeMap<String, String>,
}

/// Conditions resolved for a direct RWS location lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConditions {
    pub location: Location,
    #[serde(flatten)]
    pub report: ConditionsReport,
}

/// Conditions resolved for a swimming spot
///
/// `rws_location` is the nearest monitoring point the spot was resolved to;
/// `None` means no candidate existed, which is reported through the error map
/// rather than failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotConditions {
    pub spot: SwimmingSpot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rws_location: Option<ResolvedLocation>,
    #[serde(flatten)]
    pub report: ConditionsReport,
}
