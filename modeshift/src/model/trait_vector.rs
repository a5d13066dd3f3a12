use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const N_TRAITS: usize = 5;

/// the Big-Five personality dimensions, in the fixed order used by [`TraitVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveTrait {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Openness,
}

impl BigFiveTrait {
    pub const ALL: [BigFiveTrait; N_TRAITS] = [
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Neuroticism,
        BigFiveTrait::Openness,
    ];

    pub fn index(&self) -> usize {
        match self {
            BigFiveTrait::Extraversion => 0,
            BigFiveTrait::Agreeableness => 1,
            BigFiveTrait::Conscientiousness => 2,
            BigFiveTrait::Neuroticism => 3,
            BigFiveTrait::Openness => 4,
        }
    }
}

impl Display for BigFiveTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BigFiveTrait::Extraversion => write!(f, "extraversion"),
            BigFiveTrait::Agreeableness => write!(f, "agreeableness"),
            BigFiveTrait::Conscientiousness => write!(f, "conscientiousness"),
            BigFiveTrait::Neuroticism => write!(f, "neuroticism"),
            BigFiveTrait::Openness => write!(f, "openness"),
        }
    }
}

/// a traveler's mode preference expressed as Big-Five trait values.
///
/// values are conceptually in [0, 1] but this is not enforced: repeated
/// feedback may push components outside of that range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TraitVector([f64; N_TRAITS]);

impl TraitVector {
    pub const fn new(values: [f64; N_TRAITS]) -> TraitVector {
        TraitVector(values)
    }

    pub fn values(&self) -> &[f64; N_TRAITS] {
        &self.0
    }

    pub fn get(&self, dimension: BigFiveTrait) -> f64 {
        self.0[dimension.index()]
    }

    /// adds a componentwise delta, returning a new vector.
    pub fn offset(&self, delta: &[f64; N_TRAITS]) -> TraitVector {
        let mut values = self.0;
        for (value, d) in values.iter_mut().zip(delta.iter()) {
            *value += d;
        }
        TraitVector(values)
    }

    /// sum over all components of (self[k] - other[k]). positive and negative
    /// differences cancel each other out.
    pub fn signed_difference_sum(&self, other: &TraitVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a - b)
            .sum()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub fn clamped(&self, lower: f64, upper: f64) -> TraitVector {
        TraitVector(self.0.map(|v| v.clamp(lower, upper)))
    }

    pub fn approx_eq(&self, other: &TraitVector, tolerance: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl From<[f64; N_TRAITS]> for TraitVector {
    fn from(values: [f64; N_TRAITS]) -> Self {
        TraitVector(values)
    }
}

impl Display for TraitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().map(|v| format!("{v:.3}")).join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::{BigFiveTrait, TraitVector};

    #[test]
    fn test_dimension_order() {
        let traits = TraitVector::new([0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(traits.get(BigFiveTrait::Extraversion), 0.1);
        assert_eq!(traits.get(BigFiveTrait::Neuroticism), 0.4);
        assert_eq!(traits.get(BigFiveTrait::Openness), 0.5);
        for (idx, dimension) in BigFiveTrait::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), idx);
        }
    }

    #[test]
    fn test_signed_difference_sum_cancels() {
        let a = TraitVector::new([1.0, 0.0, 0.0, 0.0, 0.0]);
        let b = TraitVector::new([0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(a.signed_difference_sum(&b), 0.0);
    }

    #[test]
    fn test_clamped() {
        let traits = TraitVector::new([-0.2, 0.5, 1.3, 0.0, 1.0]);
        let result = traits.clamped(0.0, 1.0);
        assert_eq!(result, TraitVector::new([0.0, 0.5, 1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_deserialize_from_array() {
        let traits: TraitVector =
            serde_json::from_str("[1, 0, 1, 0, 0]").expect("test invariant failed");
        assert_eq!(traits, TraitVector::new([1.0, 0.0, 1.0, 0.0, 0.0]));
        let bad: Result<TraitVector, _> = serde_json::from_str("[1, 0, 1]");
        assert!(bad.is_err(), "trait vectors must have exactly 5 values");
    }
}
