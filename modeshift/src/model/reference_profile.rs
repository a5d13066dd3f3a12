use super::TraitVector;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// archetypal traveler profiles that each travel mode is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceProfile {
    CarDriver,
    TransitCommuter,
}

impl ReferenceProfile {
    pub const CAR_DRIVER: TraitVector = TraitVector::new([1.0, 0.0, 1.0, 0.0, 0.0]);
    pub const TRANSIT_COMMUTER: TraitVector = TraitVector::new([0.0, 1.0, 0.0, 1.0, 1.0]);

    pub fn traits(&self) -> TraitVector {
        match self {
            ReferenceProfile::CarDriver => Self::CAR_DRIVER,
            ReferenceProfile::TransitCommuter => Self::TRANSIT_COMMUTER,
        }
    }
}

impl Display for ReferenceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceProfile::CarDriver => write!(f, "car driver"),
            ReferenceProfile::TransitCommuter => write!(f, "transit commuter"),
        }
    }
}
