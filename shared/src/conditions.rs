//! Measured condition sets and tide information
//!
//! `WaterConditions` and `WeatherConditions` are a location/station plus a bag
//! of [`Reading`]s with a measurement timestamp. `TideInfo` is derived from a
//! prediction series by the engine and never persisted.

use crate::measurements::Reading;
use crate::models::{Location, WeatherStation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Water-side measurements reported by an RWS location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterConditions {
    pub location: Location,
    /// Water temperature in degrees Celsius
    pub temperature_c: Reading,
    /// Significant wave height in meters (Hm0)
    pub wave_height_m: Reading,
    /// Mean wave period in seconds (Tm02)
    pub wave_period_s: Reading,
    /// Wave direction in degrees (Th3)
    pub wave_direction_deg: Reading,
    pub measured_at: DateTime<Utc>,
    /// Raw upstream payload fragment, kept for provenance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Weather measurements for a coordinate, usually from a KNMI station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<WeatherStation>,
    /// Air temperature in degrees Celsius
    pub air_temperature_c: Reading,
    /// Wind speed in km/h
    pub wind_speed_kmh: Reading,
    /// Wind direction in degrees
    pub wind_direction_deg: Reading,
    /// UV index
    pub uv_index: Reading,
    /// Global radiation in W/m2
    pub sun_power_wm2: Reading,
    pub measured_at: DateTime<Utc>,
}

/// One point of a water-height prediction series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TideSample {
    pub time: DateTime<Utc>,
    pub height_cm: i32,
}

/// High or low water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideType {
    High,
    Low,
}

/// A detected tide extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TideEvent {
    pub tide_type: TideType,
    pub time: DateTime<Utc>,
    pub height_cm: i32,
}

/// Tide extrema around a reference time
///
/// Events are ordered by time. All previous/next queries are strict in both
/// directions: an event at exactly the reference time is neither previous
/// nor next.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TideInfo {
    pub events: Vec<TideEvent>,
    pub reference_time: DateTime<Utc>,
}

impl TideInfo {
    pub fn new(events: Vec<TideEvent>, reference_time: DateTime<Utc>) -> Self {
        Self { events, reference_time }
    }

    /// The last event of any type strictly before the reference time
    pub fn previous_tide(&self) -> Option<&TideEvent> {
        self.previous_matching(|_| true)
    }

    /// The first event of any type strictly after the reference time
    pub fn next_tide(&self) -> Option<&TideEvent> {
        self.next_matching(|_| true)
    }

    /// The last high water strictly before the reference time
    pub fn previous_high(&self) -> Option<&TideEvent> {
        self.previous_matching(|e| e.tide_type == TideType::High)
    }

    /// The first high water strictly after the reference time
    pub fn next_high(&self) -> Option<&TideEvent> {
        self.next_matching(|e| e.tide_type == TideType::High)
    }

    /// The last low water strictly before the reference time
    pub fn previous_low(&self) -> Option<&TideEvent> {
        self.previous_matching(|e| e.tide_type == TideType::Low)
    }

    /// The first low water strictly after the reference time
    pub fn next_low(&self) -> Option<&TideEvent> {
        self.next_matching(|e| e.tide_type == TideType::Low)
    }

    fn previous_matching<F>(&self, predicate: F) -> Option<&TideEvent>
    where
        F: Fn(&TideEvent) -> bool,
    {
        self.events
            .iter()
            .filter(|e| e.time < self.reference_time && predicate(e))
            .next_back()
    }

    fn next_matching<F>(&self, predicate: F) -> Option<&TideEvent>
    where
        F: Fn(&TideEvent) -> bool,
    {
        self.events
            .iter()
            .find(|e| e.time > self.reference_time && predicate(e))
    }
}
