use super::{PlanningError, ReferenceProfile};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// travel mode of an edge in the transport network. "no edge" is not a
/// travel mode: mode matrix entries of [`TravelMode::NO_EDGE`] decode to None.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Metro,
    Bus,
    Car,
}

impl TravelMode {
    pub const NO_EDGE: u8 = 0;

    pub fn code(&self) -> u8 {
        match self {
            TravelMode::Metro => 1,
            TravelMode::Bus => 2,
            TravelMode::Car => 3,
        }
    }

    /// decodes a mode matrix entry.
    pub fn from_code(code: u8) -> Result<Option<TravelMode>, PlanningError> {
        match code {
            Self::NO_EDGE => Ok(None),
            1 => Ok(Some(TravelMode::Metro)),
            2 => Ok(Some(TravelMode::Bus)),
            3 => Ok(Some(TravelMode::Car)),
            other => Err(PlanningError::ConfigurationError(format!(
                "unknown mode code {other}, expected one of 0 (no edge), 1 (metro), 2 (bus), 3 (car)"
            ))),
        }
    }

    /// metro and bus are both scored against the transit commuter profile.
    pub fn reference_profile(&self) -> ReferenceProfile {
        match self {
            TravelMode::Car => ReferenceProfile::CarDriver,
            TravelMode::Metro | TravelMode::Bus => ReferenceProfile::TransitCommuter,
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelMode::Metro => write!(f, "metro"),
            TravelMode::Bus => write!(f, "bus"),
            TravelMode::Car => write!(f, "car"),
        }
    }
}
