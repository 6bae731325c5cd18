//! Contracts for the external measurement collaborators
//!
//! The engine consumes catalogs and upstream providers through these narrow
//! traits. Concrete HTTP clients, file stores, and response caches live
//! outside this crate; the test harness supplies in-memory implementations.

pub mod blacklist;

use crate::error::ProviderError;
use async_trait::async_trait;
use zwemwater_shared::conditions::{TideSample, WaterConditions, WeatherConditions};
use zwemwater_shared::models::{Coordinate, Location};

pub use blacklist::FileBlacklist;

/// The RWS location catalog
///
/// Implementations must return a fresh, non-aliased snapshot per call.
#[async_trait]
pub trait LocationCatalog: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Location>, ProviderError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, ProviderError>;
}

#[async_trait]
impl<T: LocationCatalog + ?Sized> LocationCatalog for std::sync::Arc<T> {
    async fn find_all(&self) -> Result<Vec<Location>, ProviderError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, ProviderError> {
        (**self).find_by_id(id).await
    }
}

/// Water-side measurements for a monitoring location
#[async_trait]
pub trait WaterProvider: Send + Sync {
    async fn conditions_for(&self, location: &Location)
        -> Result<WaterConditions, ProviderError>;
}

/// Weather measurements for a coordinate
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn conditions_at(
        &self,
        coordinate: &Coordinate,
    ) -> Result<WeatherConditions, ProviderError>;
}

/// Water-height predictions for a monitoring location
#[async_trait]
pub trait TidalProvider: Send + Sync {
    async fn water_height_series(
        &self,
        location: &Location,
    ) -> Result<Vec<TideSample>, ProviderError>;
}

/// Location ids known to return stale or absent data
pub trait Blacklist: Send + Sync {
    fn is_blacklisted(&self, id: &str) -> bool;
}

/// Blacklist that excludes nothing
pub struct NoBlacklist;

impl Blacklist for NoBlacklist {
    fn is_blacklisted(&self, _id: &str) -> bool {
        false
    }
}
