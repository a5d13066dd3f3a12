use crate::model::{network::NodeId, TravelMode};
use serde::{Deserialize, Serialize};

/// a directed edge weighted for a specific trait vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffinityEdge {
    pub src: NodeId,
    pub dst: NodeId,
    pub mode: TravelMode,
    /// raw travel time in minutes
    pub time: f64,
    pub weight: f64,
}
