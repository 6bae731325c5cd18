//! Zwemwater Conditions Engine
//!
//! Resolves point-in-time swimming-condition assessments for named locations
//! and swimming spots from several independent, unreliable measurement
//! sources.
//!
//! ## Architecture
//!
//! The engine follows a layered architecture:
//! - Services: orchestration and per-field fallback sequencing
//! - Matching: Haversine nearest-neighbor search, capability policy, and the
//!   fuzzy KNMI station-name matcher
//! - Providers: narrow async contracts for the external collaborators
//!   (catalog, water, weather, tides, blacklist)
//!
//! Scoring itself is pure and lives in `zwemwater_shared`.

pub mod config;
pub mod error;
pub mod logging;
pub mod matching;
pub mod providers;
pub mod services;
pub mod tides;

pub use error::{EngineError, EngineResult, ProviderError};
pub use services::ConditionsService;
