//! scores network edges for a traveler based on how far their traits sit
//! from the reference profile of the edge's travel mode.
use super::{ReferenceProfile, TraitVector, TravelMode};

/// absolute value of the signed sum of componentwise differences between
/// the traits and a reference profile. this is not a distance norm: large
/// per-component mismatches in opposite directions cancel.
pub fn deviation(profile: ReferenceProfile, traits: &TraitVector) -> f64 {
    traits.signed_difference_sum(&profile.traits()).abs()
}

/// edge weight for a traveler: `time * 2^(2 * deviation - 1)`.
///
/// the cheapest weight is `time * 0.5`, reached at zero deviation. car edges
/// are scored against [`ReferenceProfile::CarDriver`], metro and bus edges
/// against [`ReferenceProfile::TransitCommuter`].
pub fn affinity(mode: TravelMode, time: f64, traits: &TraitVector) -> f64 {
    let deviation = deviation(mode.reference_profile(), traits);
    time * 2f64.powf(2.0 * deviation - 1.0)
}
