//! Tagged optional measurement readings
//!
//! Upstream providers routinely omit individual quantities, and "never
//! measured" must stay distinguishable from "measured as exactly zero".
//! `Reading` makes that distinction explicit instead of hiding it behind a
//! sentinel value in an `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical quantity that is either known or was never measured
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Reading {
    Known(f64),
    #[default]
    Unknown,
}

impl Reading {
    /// Construct a known reading
    pub fn known(value: f64) -> Self {
        Reading::Known(value)
    }

    /// Construct an unknown (never measured) reading
    pub fn unknown() -> Self {
        Reading::Unknown
    }

    /// Construct from an optional raw value
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) => Reading::Known(v),
            None => Reading::Unknown,
        }
    }

    /// Whether this quantity was ever measured
    pub fn is_known(&self) -> bool {
        matches!(self, Reading::Known(_))
    }

    /// The measured value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Known(v) => Some(*v),
            Reading::Unknown => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Known(v) => write!(f, "{}", v),
            Reading::Unknown => write!(f, "unknown"),
        }
    }
}
