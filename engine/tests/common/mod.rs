//! Common test utilities for integration tests
//!
//! In-memory, scripted provider implementations plus fixture builders. The
//! catalog counts its `find_all` calls so tests can assert the one-snapshot-
//! per-request property.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use zwemwater_engine::error::ProviderError;
use zwemwater_engine::providers::{
    LocationCatalog, TidalProvider, WaterProvider, WeatherProvider,
};
use zwemwater_shared::conditions::{TideSample, WaterConditions, WeatherConditions};
use zwemwater_shared::measurements::Reading;
use zwemwater_shared::models::{
    Capability, Coordinate, Location, SwimmingSpot, WaterBodyType,
};

// ============================================================================
// Fixtures
// ============================================================================

pub fn measured_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
}

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 11, 0, 0).unwrap()
}

pub fn location_of(
    id: &str,
    latitude: f64,
    longitude: f64,
    water_body_type: WaterBodyType,
    capabilities: &[Capability],
) -> Location {
    Location {
        id: id.to_string(),
        name: id.to_string(),
        coordinate: Coordinate::new(latitude, longitude),
        water_body_type,
        capabilities: capabilities.iter().copied().collect(),
    }
}

pub fn sea_location(id: &str, latitude: f64, longitude: f64, capabilities: &[Capability]) -> Location {
    location_of(id, latitude, longitude, WaterBodyType::Sea, capabilities)
}

pub fn spot(id: &str, latitude: f64, longitude: f64) -> SwimmingSpot {
    SwimmingSpot {
        id: id.to_string(),
        name: id.to_string(),
        coordinate: Coordinate::new(latitude, longitude),
    }
}

pub fn water_at(
    location: &Location,
    temperature: Option<f64>,
    wave_height: Option<f64>,
    wave_period: Option<f64>,
    wave_direction: Option<f64>,
) -> WaterConditions {
    WaterConditions {
        location: location.clone(),
        temperature_c: Reading::from_option(temperature),
        wave_height_m: Reading::from_option(wave_height),
        wave_period_s: Reading::from_option(wave_period),
        wave_direction_deg: Reading::from_option(wave_direction),
        measured_at: measured_at(),
        raw: Some(format!("raw:{}", location.id)),
    }
}

pub fn fair_weather() -> WeatherConditions {
    WeatherConditions {
        station: None,
        air_temperature_c: Reading::known(22.0),
        wind_speed_kmh: Reading::known(5.0),
        wind_direction_deg: Reading::known(240.0),
        uv_index: Reading::known(4.0),
        sun_power_wm2: Reading::known(610.0),
        measured_at: measured_at(),
    }
}

/// `[100, 150, 120]` centered on [`reference_time`]: exactly one High there
pub fn simple_tide_series() -> Vec<TideSample> {
    vec![
        TideSample {
            time: Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
            height_cm: 100,
        },
        TideSample { time: reference_time(), height_cm: 150 },
        TideSample {
            time: Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            height_cm: 120,
        },
    ]
}

// ============================================================================
// Scripted Providers
// ============================================================================

/// Catalog over a fixed location list, counting `find_all` calls
pub struct StaticCatalog {
    pub locations: Vec<Location>,
    pub find_all_calls: AtomicUsize,
}

impl StaticCatalog {
    pub fn new(locations: Vec<Location>) -> Arc<Self> {
        Arc::new(Self { locations, find_all_calls: AtomicUsize::new(0) })
    }
}

#[async_trait]
impl LocationCatalog for StaticCatalog {
    async fn find_all(&self) -> Result<Vec<Location>, ProviderError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.locations.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, ProviderError> {
        Ok(self.locations.iter().find(|l| l.id == id).cloned())
    }
}

/// Water provider with per-location scripted responses; unknown locations
/// answer [`ProviderError::NoData`]
#[derive(Default)]
pub struct ScriptedWater {
    responses: HashMap<String, Result<WaterConditions, ProviderError>>,
}

impl ScriptedWater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, response: Result<WaterConditions, ProviderError>) -> Self {
        self.responses.insert(id.to_string(), response);
        self
    }
}

#[async_trait]
impl WaterProvider for ScriptedWater {
    async fn conditions_for(
        &self,
        location: &Location,
    ) -> Result<WaterConditions, ProviderError> {
        self.responses
            .get(&location.id)
            .cloned()
            .unwrap_or(Err(ProviderError::NoData))
    }
}

/// Weather provider that always answers the same response
pub struct ScriptedWeather {
    response: Result<WeatherConditions, ProviderError>,
}

impl ScriptedWeather {
    pub fn ok(conditions: WeatherConditions) -> Self {
        Self { response: Ok(conditions) }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self { response: Err(error) }
    }
}

#[async_trait]
impl WeatherProvider for ScriptedWeather {
    async fn conditions_at(
        &self,
        _coordinate: &Coordinate,
    ) -> Result<WeatherConditions, ProviderError> {
        self.response.clone()
    }
}

/// Tidal provider with per-location scripted series; unknown locations
/// answer [`ProviderError::NoData`]
#[derive(Default)]
pub struct ScriptedTides {
    responses: HashMap<String, Result<Vec<TideSample>, ProviderError>>,
}

impl ScriptedTides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, response: Result<Vec<TideSample>, ProviderError>) -> Self {
        self.responses.insert(id.to_string(), response);
        self
    }
}

#[async_trait]
impl TidalProvider for ScriptedTides {
    async fn water_height_series(
        &self,
        location: &Location,
    ) -> Result<Vec<TideSample>, ProviderError> {
        self.responses
            .get(&location.id)
            .cloned()
            .unwrap_or(Err(ProviderError::NoData))
    }
}
