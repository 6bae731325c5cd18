//! Swim safety and comfort scoring
//!
//! Pure functions over optional water/weather condition sets. Every function
//! here degrades gracefully: with zero input data the metrics still resolve
//! (safety at least Yellow, comfort at the neutral default of 5).
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No side effects, no I/O, no clock access
//! 2. **Best-Effort**: Missing or unknown readings never abort scoring
//! 3. **Fixed Tables**: Thresholds are part of the contract, not config

use crate::conditions::{WaterConditions, WeatherConditions};
use crate::measurements::Reading;
use serde::{Deserialize, Serialize};

/// Neutral comfort index returned when no factor is available
pub const DEFAULT_COMFORT_INDEX: u8 = 5;

// ============================================================================
// Result Types
// ============================================================================

/// Traffic-light swim safety classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyScore {
    Green,
    Yellow,
    Red,
}

impl SafetyScore {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SafetyScore::Green => "Safe to swim",
            SafetyScore::Yellow => "Swim with caution",
            SafetyScore::Red => "Swimming not advised",
        }
    }
}

/// When to go for a swim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Now,
    LaterToday,
    Tomorrow,
    NotRecommended,
}

/// A swim recommendation with its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwimRecommendation {
    pub kind: RecommendationKind,
    pub explanation: String,
}

/// All derived metrics for one assessment
///
/// Producible even with zero input data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatedMetrics {
    pub safety: SafetyScore,
    /// Comfort index, always in [1, 10]
    pub comfort: u8,
    pub recommendation: SwimRecommendation,
}

// ============================================================================
// Safety Score
// ============================================================================

/// Classify swim safety from the available readings
///
/// Three independent triggers: cold water, high waves, strong wind. Any red
/// trigger wins over any yellow. Entirely missing water conditions force at
/// least Yellow; missing weather contributes nothing.
pub fn safety_score(
    water: Option<&WaterConditions>,
    weather: Option<&WeatherConditions>,
) -> SafetyScore {
    let mut score = SafetyScore::Green;

    match water {
        Some(water) => {
            if let Some(temp) = water.temperature_c.value() {
                if temp < 10.0 {
                    score = score.max(SafetyScore::Red);
                } else if temp < 15.0 {
                    score = score.max(SafetyScore::Yellow);
                }
            }
            if let Some(height) = water.wave_height_m.value() {
                if height > 2.0 {
                    score = score.max(SafetyScore::Red);
                } else if height > 1.0 {
                    score = score.max(SafetyScore::Yellow);
                }
            }
        }
        None => {
            // No water data at all: never Green, but never Red on that alone
            score = score.max(SafetyScore::Yellow);
        }
    }

    if let Some(weather) = weather {
        if let Some(wind) = weather.wind_speed_kmh.value() {
            if wind > 40.0 {
                score = score.max(SafetyScore::Red);
            } else if wind > 20.0 {
                score = score.max(SafetyScore::Yellow);
            }
        }
    }

    score
}

// ============================================================================
// Comfort Index
// ============================================================================

/// Per-factor weights; renormalized over whichever factors are available
const WEIGHT_WATER_TEMPERATURE: f64 = 0.4;
const WEIGHT_WAVE_HEIGHT: f64 = 0.1;
const WEIGHT_AIR_TEMPERATURE: f64 = 0.2;
const WEIGHT_WIND_SPEED: f64 = 0.2;
const WEIGHT_UV_INDEX: f64 = 0.1;

fn score_water_temperature(celsius: f64) -> f64 {
    if (18.0..=22.0).contains(&celsius) {
        10.0
    } else if (16.0..=24.0).contains(&celsius) {
        8.0
    } else if (14.0..=26.0).contains(&celsius) {
        6.0
    } else if (12.0..=28.0).contains(&celsius) {
        4.0
    } else if celsius >= 10.0 {
        2.0
    } else {
        1.0
    }
}

fn score_wave_height(meters: f64) -> f64 {
    if meters < 0.3 {
        10.0
    } else if meters < 0.5 {
        8.0
    } else if meters < 1.0 {
        6.0
    } else if meters < 1.5 {
        4.0
    } else {
        2.0
    }
}

fn score_air_temperature(celsius: f64) -> f64 {
    if (20.0..=25.0).contains(&celsius) {
        10.0
    } else if (18.0..=28.0).contains(&celsius) {
        8.0
    } else if (15.0..=30.0).contains(&celsius) {
        6.0
    } else if (10.0..=35.0).contains(&celsius) {
        4.0
    } else {
        2.0
    }
}

fn score_wind_speed(kmh: f64) -> f64 {
    if kmh < 10.0 {
        10.0
    } else if kmh < 15.0 {
        8.0
    } else if kmh < 25.0 {
        6.0
    } else if kmh < 35.0 {
        4.0
    } else {
        2.0
    }
}

fn score_uv_index(uv: f64) -> f64 {
    if (3.0..=5.0).contains(&uv) {
        10.0
    } else if (2.0..=6.0).contains(&uv) {
        8.0
    } else if uv <= 7.0 {
        6.0
    } else if uv <= 9.0 {
        4.0
    } else {
        2.0
    }
}

/// Weighted comfort index over the available factors
///
/// A factor is available only when its condition set is present and the
/// reading is known. Weights are renormalized to sum to 1 over the available
/// subset; the weighted average is rounded and clamped to [1, 10]. With no
/// factors at all the index is exactly [`DEFAULT_COMFORT_INDEX`].
pub fn comfort_index(
    water: Option<&WaterConditions>,
    weather: Option<&WeatherConditions>,
) -> u8 {
    let mut factors: Vec<(f64, f64)> = Vec::with_capacity(5);

    let mut push = |reading: Reading, weight: f64, table: fn(f64) -> f64| {
        if let Some(value) = reading.value() {
            factors.push((weight, table(value)));
        }
    };

    if let Some(water) = water {
        push(water.temperature_c, WEIGHT_WATER_TEMPERATURE, score_water_temperature);
        push(water.wave_height_m, WEIGHT_WAVE_HEIGHT, score_wave_height);
    }
    if let Some(weather) = weather {
        push(weather.air_temperature_c, WEIGHT_AIR_TEMPERATURE, score_air_temperature);
        push(weather.wind_speed_kmh, WEIGHT_WIND_SPEED, score_wind_speed);
        push(weather.uv_index, WEIGHT_UV_INDEX, score_uv_index);
    }

    let total_weight: f64 = factors.iter().map(|(w, _)| w).sum();
    if total_weight == 0.0 {
        return DEFAULT_COMFORT_INDEX;
    }

    let weighted: f64 = factors.iter().map(|(w, s)| w / total_weight * s).sum();
    (weighted.round() as i64).clamp(1, 10) as u8
}

// ============================================================================
// Recommendation
// ============================================================================

/// Map a safety score and comfort index onto a recommendation
pub fn recommend(safety: SafetyScore, comfort: u8) -> SwimRecommendation {
    let (kind, explanation) = match safety {
        SafetyScore::Red => (
            RecommendationKind::NotRecommended,
            "Conditions are currently unsafe for swimming.",
        ),
        SafetyScore::Yellow if comfort >= 6 => (
            RecommendationKind::Now,
            "Swimming is possible, but stay alert and swim with caution.",
        ),
        SafetyScore::Yellow => (
            RecommendationKind::LaterToday,
            "Conditions are mediocre right now; later today may be better.",
        ),
        SafetyScore::Green if comfort >= 7 => (
            RecommendationKind::Now,
            "Excellent conditions, enjoy your swim!",
        ),
        SafetyScore::Green if comfort >= 5 => {
            (RecommendationKind::Now, "Good conditions for a swim.")
        }
        SafetyScore::Green => (
            RecommendationKind::LaterToday,
            "Conditions are mediocre right now; later today may be better.",
        ),
    };

    SwimRecommendation { kind, explanation: explanation.to_string() }
}

/// Compute the full metrics bundle from whatever data is available
pub fn calculate_metrics(
    water: Option<&WaterConditions>,
    weather: Option<&WeatherConditions>,
) -> CalculatedMetrics {
    let safety = safety_score(water, weather);
    let comfort = comfort_index(water, weather);
    let recommendation = recommend(safety, comfort);
    CalculatedMetrics { safety, comfort, recommendation }
}
