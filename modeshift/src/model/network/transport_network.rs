use super::{EdgeDirection, NodeId};
use crate::model::{
    graph::{graph_ops, AffinityGraph},
    PlanningError, TraitVector, TravelMode,
};
use itertools::Itertools;
use serde::Serialize;

/// row-major N×N matrix of mode codes, see [`TravelMode::from_code`].
pub type ModeMatrix = Vec<Vec<u8>>;
/// row-major N×N matrix of travel times in minutes.
pub type TimeMatrix = Vec<Vec<f64>>;

/// static multimodal network. built once from configuration and never
/// modified: every planning iteration derives a fresh [`AffinityGraph`] from it.
#[derive(Debug, Clone, Serialize)]
pub struct TransportNetwork {
    labels: Vec<String>,
    mode: ModeMatrix,
    time: TimeMatrix,
}

impl TransportNetwork {
    /// validates the matrices and creates a network. when labels are not
    /// provided, each node is labeled by its index.
    pub fn new(
        labels: Option<Vec<String>>,
        mode: ModeMatrix,
        time: TimeMatrix,
    ) -> Result<TransportNetwork, PlanningError> {
        let n_nodes = graph_ops::validate_matrices(&mode, &time)?;
        let labels = match labels {
            None => (0..n_nodes).map(|i| i.to_string()).collect_vec(),
            Some(labels) if labels.len() != n_nodes => {
                return Err(PlanningError::ConfigurationError(format!(
                    "network has {} labels but {} nodes",
                    labels.len(),
                    n_nodes
                )))
            }
            Some(labels) => {
                if let Some(duplicate) = labels.iter().duplicates().next() {
                    return Err(PlanningError::ConfigurationError(format!(
                        "node label '{duplicate}' is used more than once"
                    )));
                }
                labels
            }
        };
        Ok(TransportNetwork { labels, mode, time })
    }

    pub fn n_nodes(&self) -> usize {
        self.labels.len()
    }

    /// number of non-empty entries in the mode matrix.
    pub fn n_edges(&self) -> usize {
        self.mode
            .iter()
            .flatten()
            .filter(|code| **code != TravelMode::NO_EDGE)
            .count()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        node_id.0 < self.n_nodes()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, node_id: &NodeId) -> Result<&str, PlanningError> {
        self.labels
            .get(node_id.0)
            .map(String::as_str)
            .ok_or_else(|| PlanningError::UnknownNode(node_id.to_string()))
    }

    /// joins the labels of a node sequence with '-'.
    pub fn describe_path(&self, nodes: &[NodeId]) -> Result<String, PlanningError> {
        let labels = nodes
            .iter()
            .map(|n| self.label(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(labels.join("-"))
    }

    /// finds a node by label, falling back to reading the reference as a node index.
    pub fn node_id(&self, reference: &str) -> Result<NodeId, PlanningError> {
        if let Some(index) = self.labels.iter().position(|l| l == reference) {
            return Ok(NodeId(index));
        }
        match reference.parse::<usize>() {
            Ok(index) if index < self.n_nodes() => Ok(NodeId(index)),
            _ => Err(PlanningError::UnknownNode(reference.to_string())),
        }
    }

    pub fn mode_matrix(&self) -> &ModeMatrix {
        &self.mode
    }

    pub fn time_matrix(&self) -> &TimeMatrix {
        &self.time
    }

    /// weighs this network for the given traits.
    pub fn affinity_graph(
        &self,
        traits: &TraitVector,
        direction: EdgeDirection,
    ) -> Result<AffinityGraph, PlanningError> {
        graph_ops::compute_graph(traits, &self.mode, &self.time, direction)
    }
}
