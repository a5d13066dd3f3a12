use super::FeedbackSignal;
use crate::model::TraitVector;

/// shifts the traits by the signal's delta. no clamping is applied, so
/// repeated feedback can move components outside of [0, 1].
pub fn apply_feedback(traits: &TraitVector, signal: FeedbackSignal) -> TraitVector {
    traits.offset(signal.delta())
}

/// [`apply_feedback`] followed by clamping each component into `[lower, upper]`.
pub fn apply_feedback_bounded(
    traits: &TraitVector,
    signal: FeedbackSignal,
    (lower, upper): (f64, f64),
) -> TraitVector {
    apply_feedback(traits, signal).clamped(lower, upper)
}
