//! Orchestration services
//!
//! Services coordinate the matchers, the tide extractor, and the external
//! providers into one best-effort result per request.

pub mod conditions;

pub use conditions::{ConditionsService, NO_RWS_LOCATION_NEAR_SPOT};
