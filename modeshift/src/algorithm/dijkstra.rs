use super::{frontier_element::FrontierElement, RankedPath};
use crate::model::{graph::AffinityGraph, network::NodeId};
use std::collections::{BinaryHeap, HashSet};

/// finds the minimum-weight path from origin to destination with Dijkstra's
/// algorithm. edge weights must be non-negative.
///
/// # Arguments
///
/// * `graph` - graph to search
/// * `origin` - start of the path
/// * `destination` - end of the path
/// * `excluded_nodes` - nodes the path may not visit
/// * `excluded_edges` - (src, dst) pairs the path may not traverse
///
/// # Returns
///
/// the shortest path, or None if the destination cannot be reached.
pub fn shortest_path(
    graph: &AffinityGraph,
    origin: NodeId,
    destination: NodeId,
    excluded_nodes: &HashSet<NodeId>,
    excluded_edges: &HashSet<(NodeId, NodeId)>,
) -> Option<RankedPath> {
    if !graph.contains_node(&origin)
        || !graph.contains_node(&destination)
        || excluded_nodes.contains(&origin)
        || excluded_nodes.contains(&destination)
    {
        return None;
    }

    let n_nodes = graph.n_nodes();
    let mut best_cost: Vec<f64> = vec![f64::INFINITY; n_nodes];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; n_nodes];
    let mut settled: Vec<bool> = vec![false; n_nodes];
    let mut frontier: BinaryHeap<FrontierElement> = BinaryHeap::new();

    best_cost[origin.0] = 0.0;
    frontier.push(FrontierElement::new(0.0, origin));

    while let Some(FrontierElement { cost, node }) = frontier.pop() {
        if settled[node.0] {
            continue;
        }
        settled[node.0] = true;
        if node == destination {
            break;
        }
        for edge in graph.out_edges(&node) {
            if settled[edge.dst.0]
                || excluded_nodes.contains(&edge.dst)
                || excluded_edges.contains(&(edge.src, edge.dst))
            {
                continue;
            }
            let next_cost = cost.0 + edge.weight;
            if next_cost < best_cost[edge.dst.0] {
                best_cost[edge.dst.0] = next_cost;
                predecessor[edge.dst.0] = Some(node);
                frontier.push(FrontierElement::new(next_cost, edge.dst));
            }
        }
    }

    if !settled[destination.0] {
        return None;
    }

    let mut nodes = vec![destination];
    let mut current = destination;
    while let Some(prev) = predecessor[current.0] {
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();
    Some(RankedPath::new(nodes, best_cost[destination.0]))
}
