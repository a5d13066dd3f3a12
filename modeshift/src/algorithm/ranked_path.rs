use crate::model::network::NodeId;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashSet, fmt::Display};

/// a loopless path through an affinity graph and its total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPath {
    pub nodes: Vec<NodeId>,
    pub weight: f64,
}

impl RankedPath {
    pub fn new(nodes: Vec<NodeId>, weight: f64) -> RankedPath {
        RankedPath { nodes, weight }
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn n_edges(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_loopless(&self) -> bool {
        self.nodes.iter().collect::<HashSet<_>>().len() == self.nodes.len()
    }

    /// orders by weight, then by node sequence (lexicographically).
    pub fn cmp_rank(&self, other: &RankedPath) -> Ordering {
        OrderedFloat(self.weight)
            .cmp(&OrderedFloat(other.weight))
            .then_with(|| self.nodes.cmp(&other.nodes))
    }
}

impl Display for RankedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.3})", self.nodes.iter().join("-"), self.weight)
    }
}
