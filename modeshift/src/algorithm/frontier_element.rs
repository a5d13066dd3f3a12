use crate::model::network::NodeId;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// search frontier entry for Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierElement {
    pub cost: OrderedFloat<f64>,
    pub node: NodeId,
}

impl FrontierElement {
    pub fn new(cost: f64, node: NodeId) -> FrontierElement {
        FrontierElement {
            cost: OrderedFloat(cost),
            node,
        }
    }
}

impl Ord for FrontierElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so that BinaryHeap pops the lowest cost first, with ties
        // going to the lowest node id
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
