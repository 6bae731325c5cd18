//! Conditions resolution orchestrator
//!
//! Resolves a subject (RWS location or swimming spot) to its primary
//! measurement point, fetches water/weather/tide data sequentially, runs a
//! per-field fallback search for each missing wave quantity, and assembles
//! everything into one bundle with a partial-error map.
//!
//! Failure semantics: the only request-terminal condition is "subject itself
//! not found". Every other failure surfaces through the error map while the
//! rest of the bundle is still computed best-effort, including the metrics.

use crate::error::{EngineError, EngineResult};
use crate::matching::capability::{find_nearest_with_capability, nearest_rws_location};
use crate::providers::{
    Blacklist, LocationCatalog, TidalProvider, WaterProvider, WeatherProvider,
};
use crate::tides;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use zwemwater_shared::conditions::{TideInfo, WaterConditions};
use zwemwater_shared::measurements::Reading;
use zwemwater_shared::models::{Capability, Coordinate, Location, SwimmingSpot};
use zwemwater_shared::scoring::calculate_metrics;
use zwemwater_shared::types::{
    ConditionsReport, FallbackValue, LocationConditions, ResolvedLocation, SpotConditions,
    TideFallback, WaveFallbacks, ERROR_KEY_TIDES, ERROR_KEY_WATER, ERROR_KEY_WEATHER,
};

/// Error-map message when a spot has no reachable measurement point
pub const NO_RWS_LOCATION_NEAR_SPOT: &str = "No RWS location found near this swimming spot";

const WATER_UNAVAILABLE: &str = "Water conditions are currently unavailable";
const WEATHER_UNAVAILABLE: &str = "Weather conditions are currently unavailable";
const TIDES_UNAVAILABLE: &str = "Tide information is currently unavailable";

/// The conditions resolution service
///
/// Holds one instance of each collaborator; all per-request state lives on
/// the stack, so a single service can serve concurrent requests.
pub struct ConditionsService<C, W, M, T, B> {
    catalog: C,
    water: W,
    weather: M,
    tidal: T,
    blacklist: B,
}

impl<C, W, M, T, B> ConditionsService<C, W, M, T, B>
where
    C: LocationCatalog,
    W: WaterProvider,
    M: WeatherProvider,
    T: TidalProvider,
    B: Blacklist,
{
    pub fn new(catalog: C, water: W, weather: M, tidal: T, blacklist: B) -> Self {
        Self { catalog, water, weather, tidal, blacklist }
    }

    /// Resolve conditions for a direct RWS location lookup
    ///
    /// An unknown id is terminal and returns [`EngineError::NotFound`];
    /// everything past that point is best-effort.
    pub async fn for_location(
        &self,
        id: &str,
        reference: DateTime<Utc>,
    ) -> EngineResult<LocationConditions> {
        let location = match self.catalog.find_by_id(id).await {
            Ok(Some(location)) => location,
            Ok(None) => {
                return Err(EngineError::NotFound(format!("Location not found: {}", id)))
            }
            Err(e) => {
                warn!(id, error = %e, "Catalog lookup failed");
                return Err(EngineError::NotFound(format!("Location not found: {}", id)));
            }
        };

        debug!(id = %location.id, name = %location.name, "Resolving conditions for location");

        let mut catalog_cache: Option<Vec<Location>> = None;
        let report = self
            .assemble_report(
                Some(&location),
                &location.coordinate,
                reference,
                &mut catalog_cache,
                BTreeMap::new(),
            )
            .await;

        Ok(LocationConditions { location, report })
    }

    /// Resolve conditions for a swimming spot
    ///
    /// The spot is mapped to its nearest non-blacklisted RWS location. No
    /// candidate is not terminal: it yields a primary-water error and the
    /// request continues with weather, tides, and metrics best-effort.
    pub async fn for_spot(&self, spot: &SwimmingSpot, reference: DateTime<Utc>) -> SpotConditions {
        debug!(id = %spot.id, name = %spot.name, "Resolving conditions for swimming spot");

        let mut catalog_cache: Option<Vec<Location>> = None;
        let mut errors = BTreeMap::new();

        let resolved = {
            let catalog = self.catalog_snapshot(&mut catalog_cache).await;
            nearest_rws_location(&spot.coordinate, catalog, &self.blacklist)
        };

        if resolved.is_none() {
            warn!(spot = %spot.id, "No RWS location near spot");
            errors.insert(
                ERROR_KEY_WATER.to_string(),
                NO_RWS_LOCATION_NEAR_SPOT.to_string(),
            );
        }

        let rws_location = resolved.map(|candidate| ResolvedLocation {
            location: candidate.item,
            distance_km: candidate.distance_km,
        });

        // Weather follows the primary location when one resolved; only an
        // unresolvable spot falls back to its own coordinate
        let weather_coordinate = rws_location
            .as_ref()
            .map(|r| r.location.coordinate)
            .unwrap_or(spot.coordinate);

        let report = self
            .assemble_report(
                rws_location.as_ref().map(|r| &r.location),
                &weather_coordinate,
                reference,
                &mut catalog_cache,
                errors,
            )
            .await;

        SpotConditions { spot: spot.clone(), rws_location, report }
    }

    /// Shared assembly path for both use cases
    ///
    /// `weather_coordinate` is the primary location's coordinate when one
    /// exists, otherwise the spot's own (so weather still resolves when no
    /// primary exists).
    async fn assemble_report(
        &self,
        primary: Option<&Location>,
        weather_coordinate: &Coordinate,
        reference: DateTime<Utc>,
        catalog_cache: &mut Option<Vec<Location>>,
        mut errors: BTreeMap<String, String>,
    ) -> ConditionsReport {
        // Step 1: primary water conditions
        let water = match primary {
            Some(location) => match self.water.conditions_for(location).await {
                Ok(conditions) => Some(conditions),
                Err(e) => {
                    warn!(location = %location.id, error = %e, "Water fetch failed");
                    errors.insert(ERROR_KEY_WATER.to_string(), e.message_or(WATER_UNAVAILABLE));
                    None
                }
            },
            None => None,
        };

        // Step 2: per-field wave fallbacks, each independent and silent on
        // a miss (a capability gap is not a provider outage)
        let mut wave_fallbacks = WaveFallbacks::default();
        if let (Some(location), Some(conditions)) = (primary, water.as_ref()) {
            if !conditions.wave_height_m.is_known() {
                wave_fallbacks.height = self
                    .resolve_wave_fallback(location, Capability::Hm0, |c| c.wave_height_m, catalog_cache)
                    .await;
            }
            if !conditions.wave_period_s.is_known() {
                wave_fallbacks.period = self
                    .resolve_wave_fallback(location, Capability::Tm02, |c| c.wave_period_s, catalog_cache)
                    .await;
            }
            if !conditions.wave_direction_deg.is_known() {
                wave_fallbacks.direction = self
                    .resolve_wave_fallback(location, Capability::Th3, |c| c.wave_direction_deg, catalog_cache)
                    .await;
            }
        }

        // Step 3: weather, no fallback chain
        let weather = match self.weather.conditions_at(weather_coordinate).await {
            Ok(conditions) => Some(conditions),
            Err(e) => {
                warn!(error = %e, "Weather fetch failed");
                errors.insert(
                    ERROR_KEY_WEATHER.to_string(),
                    e.message_or(WEATHER_UNAVAILABLE),
                );
                None
            }
        };

        // Step 4: tides, with a single WATHTE fallback attempt
        let mut tide_fallback: Option<TideFallback> = None;
        let tides = match primary {
            Some(location) => {
                match self.tidal.water_height_series(location).await {
                    Ok(series) if series.len() >= 3 => Some(tides::extract(&series, reference)),
                    primary_result => {
                        match self.resolve_tide_fallback(location, reference, catalog_cache).await {
                            Some((info, identity)) => {
                                debug!(station = %identity.station_id, "Tide data from fallback station");
                                tide_fallback = Some(identity);
                                Some(info)
                            }
                            None => {
                                let message = match primary_result {
                                    Err(e) => e.message_or(TIDES_UNAVAILABLE),
                                    Ok(_) => TIDES_UNAVAILABLE.to_string(),
                                };
                                errors.insert(ERROR_KEY_TIDES.to_string(), message);
                                None
                            }
                        }
                    }
                }
            }
            None => {
                errors.insert(ERROR_KEY_TIDES.to_string(), TIDES_UNAVAILABLE.to_string());
                None
            }
        };

        // Step 5: metrics over the primary readings only. Fallback values are
        // display-only and never feed scoring; that asymmetry is the contract.
        let metrics = calculate_metrics(water.as_ref(), weather.as_ref());

        ConditionsReport {
            water,
            weather,
            tides,
            tide_fallback,
            wave_fallbacks,
            metrics,
            errors,
        }
    }

    /// Resolve one missing wave field from the nearest capable station
    ///
    /// Returns `None` when no eligible candidate exists, the candidate fetch
    /// fails, or the candidate does not actually report the field.
    async fn resolve_wave_fallback(
        &self,
        source: &Location,
        capability: Capability,
        field: fn(&WaterConditions) -> Reading,
        catalog_cache: &mut Option<Vec<Location>>,
    ) -> Option<FallbackValue> {
        let candidate = {
            let catalog = self.catalog_snapshot(catalog_cache).await;
            find_nearest_with_capability(source, catalog, capability, &self.blacklist, 1)
                .into_iter()
                .next()
        }?;

        debug!(
            source = %source.id,
            station = %candidate.item.id,
            capability = %capability,
            "Fetching wave fallback"
        );

        let conditions = self.water.conditions_for(&candidate.item).await.ok()?;
        let value = field(&conditions).value()?;

        Some(FallbackValue {
            station_id: candidate.item.id,
            station_name: candidate.item.name,
            distance_km: candidate.distance_km,
            value,
            measured_at: conditions.measured_at,
            raw: conditions.raw,
        })
    }

    /// One fallback attempt for tide data via the nearest WATHTE station
    async fn resolve_tide_fallback(
        &self,
        source: &Location,
        reference: DateTime<Utc>,
        catalog_cache: &mut Option<Vec<Location>>,
    ) -> Option<(TideInfo, TideFallback)> {
        let candidate = {
            let catalog = self.catalog_snapshot(catalog_cache).await;
            find_nearest_with_capability(source, catalog, Capability::Wathte, &self.blacklist, 1)
                .into_iter()
                .next()
        }?;

        let series = self.tidal.water_height_series(&candidate.item).await.ok()?;
        if series.len() < 3 {
            return None;
        }

        let info = tides::extract(&series, reference);
        let identity = TideFallback {
            station_id: candidate.item.id,
            station_name: candidate.item.name,
            distance_km: candidate.distance_km,
        };
        Some((info, identity))
    }

    /// Fetch the catalog at most once per request and reuse the snapshot
    ///
    /// The collaborator's result must be stable within one orchestration
    /// call; a fetch failure degrades to an empty snapshot so later fallback
    /// searches simply find no candidates.
    async fn catalog_snapshot<'a>(
        &self,
        catalog_cache: &'a mut Option<Vec<Location>>,
    ) -> &'a [Location] {
        if catalog_cache.is_none() {
            let snapshot = match self.catalog.find_all().await {
                Ok(locations) => {
                    debug!(locations = locations.len(), "Fetched catalog snapshot");
                    locations
                }
                Err(e) => {
                    warn!(error = %e, "Catalog fetch failed; continuing without fallbacks");
                    Vec::new()
                }
            };
            *catalog_cache = Some(snapshot);
        }
        catalog_cache.as_deref().unwrap_or(&[])
    }
}
