use crate::model::{
    network::{EdgeDirection, NodeId, TransportNetwork},
    PlanningError,
};
use serde::{Deserialize, Serialize};

/// fixed settings of a planning loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningParameters {
    pub origin: NodeId,
    pub destination: NodeId,
    /// number of ranked paths; the path at rank `k - 1` is chosen
    pub k: usize,
    pub iterations: usize,
    pub edge_direction: EdgeDirection,
    /// when set, traits are clamped into `[lower, upper]` after each feedback
    pub trait_bounds: Option<(f64, f64)>,
}

impl PlanningParameters {
    pub const DEFAULT_K: usize = 2;

    pub fn new(origin: NodeId, destination: NodeId, iterations: usize) -> PlanningParameters {
        PlanningParameters {
            origin,
            destination,
            k: Self::DEFAULT_K,
            iterations,
            edge_direction: EdgeDirection::default(),
            trait_bounds: None,
        }
    }

    pub fn with_k(mut self, k: usize) -> PlanningParameters {
        self.k = k;
        self
    }

    pub fn with_edge_direction(mut self, edge_direction: EdgeDirection) -> PlanningParameters {
        self.edge_direction = edge_direction;
        self
    }

    pub fn with_trait_bounds(mut self, lower: f64, upper: f64) -> PlanningParameters {
        self.trait_bounds = Some((lower, upper));
        self
    }

    /// zero-based rank of the path handed to the traveler.
    pub fn selected_rank(&self) -> usize {
        self.k.saturating_sub(1)
    }

    pub fn validate(&self, network: &TransportNetwork) -> Result<(), PlanningError> {
        for node in [self.origin, self.destination] {
            if !network.contains_node(&node) {
                return Err(PlanningError::UnknownNode(node.to_string()));
            }
        }
        if self.origin == self.destination {
            return Err(PlanningError::ConfigurationError(format!(
                "origin and destination are both ({})",
                self.origin
            )));
        }
        if self.k == 0 {
            return Err(PlanningError::ConfigurationError(String::from(
                "number of paths k must be at least 1",
            )));
        }
        if self.iterations == 0 {
            return Err(PlanningError::ConfigurationError(String::from(
                "iterations must be a positive integer",
            )));
        }
        if let Some((lower, upper)) = self.trait_bounds {
            if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
                return Err(PlanningError::ConfigurationError(format!(
                    "invalid trait bounds [{lower}, {upper}]"
                )));
            }
        }
        Ok(())
    }
}
