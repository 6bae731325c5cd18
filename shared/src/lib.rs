//! Zwemwater Shared Library
//!
//! This crate contains the domain value objects, measurement readings, and
//! pure scoring functions shared by the conditions engine and any
//! presentation layer embedding it.

pub mod conditions;
pub mod measurements;
pub mod models;
pub mod scoring;
pub mod types;

// Re-export commonly used items
pub use conditions::{TideEvent, TideInfo, TideSample, TideType, WaterConditions, WeatherConditions};
pub use measurements::Reading;
pub use models::{Capability, Coordinate, Location, SwimmingSpot, WaterBodyType, WeatherStation};
pub use scoring::{CalculatedMetrics, RecommendationKind, SafetyScore, SwimRecommendation};
pub use types::{
    ConditionsReport, FallbackValue, LocationConditions, ResolvedLocation, SpotConditions,
    TideFallback, WaveFallbacks,
};
