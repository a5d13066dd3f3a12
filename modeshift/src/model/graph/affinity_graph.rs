use super::AffinityEdge;
use crate::model::{network::NodeId, PlanningError, TravelMode};
use itertools::Itertools;

/// weighted directed graph derived from a transport network and a trait
/// vector. out-edges of each node are sorted by destination node id so that
/// searches over the graph are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityGraph {
    adjacency: Vec<Vec<AffinityEdge>>,
}

impl AffinityGraph {
    /// builds the adjacency list. later edges replace earlier edges with the
    /// same (src, dst) pair.
    pub fn from_edges(
        n_nodes: usize,
        edges: Vec<AffinityEdge>,
    ) -> Result<AffinityGraph, PlanningError> {
        let mut adjacency: Vec<Vec<AffinityEdge>> = vec![vec![]; n_nodes];
        for edge in edges.into_iter() {
            if edge.dst.0 >= n_nodes {
                return Err(PlanningError::UnknownNode(edge.dst.to_string()));
            }
            let out_edges = adjacency
                .get_mut(edge.src.0)
                .ok_or_else(|| PlanningError::UnknownNode(edge.src.to_string()))?;
            match out_edges.iter_mut().find(|e| e.dst == edge.dst) {
                Some(existing) => *existing = edge,
                None => out_edges.push(edge),
            }
        }
        for out_edges in adjacency.iter_mut() {
            out_edges.sort_by_key(|e| e.dst);
        }
        Ok(AffinityGraph { adjacency })
    }

    pub fn n_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn n_edges(&self) -> usize {
        self.adjacency.iter().map(|out| out.len()).sum()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        node_id.0 < self.adjacency.len()
    }

    /// out-edges of a node, or an empty slice for nodes outside the graph.
    pub fn out_edges(&self, node_id: &NodeId) -> &[AffinityEdge] {
        self.adjacency
            .get(node_id.0)
            .map(|out| out.as_slice())
            .unwrap_or_default()
    }

    pub fn edge(&self, src: &NodeId, dst: &NodeId) -> Option<&AffinityEdge> {
        self.out_edges(src).iter().find(|e| e.dst == *dst)
    }

    pub fn edges(&self) -> impl Iterator<Item = &AffinityEdge> {
        self.adjacency.iter().flatten()
    }

    /// sums the edge weights along a node sequence, in path order.
    pub fn path_weight(&self, nodes: &[NodeId]) -> Result<f64, PlanningError> {
        let mut total = 0.0;
        for (src, dst) in nodes.iter().tuple_windows() {
            total += self.path_step(src, dst)?.weight;
        }
        Ok(total)
    }

    /// travel modes used along a node sequence.
    pub fn path_modes(&self, nodes: &[NodeId]) -> Result<Vec<TravelMode>, PlanningError> {
        nodes
            .iter()
            .tuple_windows()
            .map(|(src, dst)| self.path_step(src, dst).map(|e| e.mode))
            .collect()
    }

    fn path_step(&self, src: &NodeId, dst: &NodeId) -> Result<&AffinityEdge, PlanningError> {
        self.edge(src, dst).ok_or_else(|| {
            PlanningError::ConfigurationError(format!(
                "path step ({src})->({dst}) is not an edge of the affinity graph"
            ))
        })
    }
}
