use crate::model::{feedback::FeedbackSignal, network::NodeId, TraitVector, TravelMode};
use serde::{Deserialize, Serialize};

/// outcome of one plan-feedback-update cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// zero-based iteration index
    pub iteration: usize,
    pub chosen_path: Vec<NodeId>,
    /// travel mode of each edge along the chosen path
    pub modes: Vec<TravelMode>,
    pub path_cost: f64,
    pub signal: FeedbackSignal,
    /// traits after applying the signal
    pub updated_trait: TraitVector,
}
