//! Catalog entities: coordinates, monitoring locations, spots, and stations
//!
//! Everything here is an immutable value object. The catalogs these come from
//! are refreshed wholesale by external collaborators; nothing is mutated
//! field-by-field after construction.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A WGS84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Classification of the water body a location sits in
///
/// Used to prevent cross-type fallback substitution: a river gauge must
/// never stand in for a sea buoy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WaterBodyType {
    Sea,
    Lake,
    River,
    #[default]
    Unknown,
}

impl WaterBodyType {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            WaterBodyType::Sea => "Sea",
            WaterBodyType::Lake => "Lake",
            WaterBodyType::River => "River",
            WaterBodyType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WaterBodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for WaterBodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sea" | "zee" => Ok(WaterBodyType::Sea),
            "lake" | "meer" => Ok(WaterBodyType::Lake),
            "river" | "rivier" => Ok(WaterBodyType::River),
            "unknown" => Ok(WaterBodyType::Unknown),
            _ => Err(format!("Unknown water body type: {}", s)),
        }
    }
}

/// RWS measurement-type code ("grootheid") a location can report
///
/// Only presence/absence in a location's capability set drives matching; the
/// descriptions are reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Significant wave height (Hm0)
    Hm0,
    /// Mean wave period (Tm02)
    Tm02,
    /// Wave direction (Th3)
    Th3,
    /// Water height / tide (WATHTE)
    Wathte,
    /// Water temperature (T)
    WaterTemperature,
}

impl Capability {
    /// The wire code as used by the RWS catalog
    pub fn code(&self) -> &'static str {
        match self {
            Capability::Hm0 => "Hm0",
            Capability::Tm02 => "Tm02",
            Capability::Th3 => "Th3",
            Capability::Wathte => "WATHTE",
            Capability::WaterTemperature => "T",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Capability::Hm0 => "Significant wave height",
            Capability::Tm02 => "Mean wave period",
            Capability::Th3 => "Wave direction",
            Capability::Wathte => "Water height",
            Capability::WaterTemperature => "Water temperature",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hm0" => Ok(Capability::Hm0),
            "Tm02" => Ok(Capability::Tm02),
            "Th3" => Ok(Capability::Th3),
            "WATHTE" => Ok(Capability::Wathte),
            "T" => Ok(Capability::WaterTemperature),
            _ => Err(format!("Unknown capability code: {}", s)),
        }
    }
}

/// An RWS water-monitoring location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Stable RWS location code
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub water_body_type: WaterBodyType,
    /// Measurement types this location reports
    pub capabilities: HashSet<Capability>,
}

impl Location {
    /// Whether this location reports the given measurement type
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// An official swimming spot, with no measurement capabilities of its own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwimmingSpot {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
}

/// A KNMI weather station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherStation {
    pub code: String,
    pub name: String,
    pub coordinate: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_with(capabilities: &[Capability]) -> Location {
        Location {
            id: "SCHEVNGN".to_string(),
            name: "Scheveningen".to_string(),
            coordinate: Coordinate::new(52.1038, 4.2599),
            water_body_type: WaterBodyType::Sea,
            capabilities: capabilities.iter().copied().collect(),
        }
    }

    #[test]
    fn test_capability_codes_roundtrip() {
        for cap in [
            Capability::Hm0,
            Capability::Tm02,
            Capability::Th3,
            Capability::Wathte,
            Capability::WaterTemperature,
        ] {
            assert_eq!(cap.code().parse::<Capability>().unwrap(), cap);
        }
        assert!("Hm1".parse::<Capability>().is_err());
    }

    #[test]
    fn test_water_body_type_parsing() {
        assert_eq!("sea".parse::<WaterBodyType>().unwrap(), WaterBodyType::Sea);
        assert_eq!("Meer".parse::<WaterBodyType>().unwrap(), WaterBodyType::Lake);
        assert_eq!("rivier".parse::<WaterBodyType>().unwrap(), WaterBodyType::River);
        assert!("ocean".parse::<WaterBodyType>().is_err());
    }

    #[test]
    fn test_has_capability() {
        let location = location_with(&[Capability::Hm0, Capability::Wathte]);
        assert!(location.has_capability(Capability::Hm0));
        assert!(!location.has_capability(Capability::Th3));
    }
}
