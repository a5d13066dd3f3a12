//! Yen's K-shortest loopless paths over [`shortest_path`].
use super::{shortest_path, RankedPath};
use crate::model::{graph::AffinityGraph, network::NodeId, PlanningError};
use itertools::Itertools;
use std::collections::HashSet;

/// computes exactly `k` shortest loopless paths, ascending by weight.
///
/// fails with [`PlanningError::NoPath`] when the destination is unreachable
/// and [`PlanningError::InsufficientPaths`] when fewer than `k` distinct
/// loopless paths exist.
pub fn k_shortest_paths(
    graph: &AffinityGraph,
    origin: NodeId,
    destination: NodeId,
    k: usize,
) -> Result<Vec<RankedPath>, PlanningError> {
    let paths = k_shortest_paths_up_to(graph, origin, destination, k)?;
    if paths.len() < k {
        return Err(PlanningError::InsufficientPaths {
            origin,
            destination,
            requested: k,
            found: paths.len(),
        });
    }
    Ok(paths)
}

/// computes up to `k` shortest loopless paths, ascending by weight. returns
/// fewer than `k` paths when the candidate pool runs dry.
///
/// equal-weight candidates are accepted in lexicographic node-id order.
pub fn k_shortest_paths_up_to(
    graph: &AffinityGraph,
    origin: NodeId,
    destination: NodeId,
    k: usize,
) -> Result<Vec<RankedPath>, PlanningError> {
    validate_query(graph, origin, destination, k)?;

    let first = shortest_path(graph, origin, destination, &HashSet::new(), &HashSet::new())
        .ok_or(PlanningError::NoPath {
            origin,
            destination,
        })?;

    let mut accepted: Vec<RankedPath> = vec![first];
    let mut candidates: Vec<RankedPath> = vec![];
    // every node sequence ever added to the candidate pool or accepted
    let mut seen: HashSet<Vec<NodeId>> = HashSet::from([accepted[0].nodes.clone()]);

    while accepted.len() < k {
        let previous = match accepted.last() {
            Some(p) => p.nodes.clone(),
            None => break,
        };

        for spur_idx in 0..previous.len() - 1 {
            let spur_node = previous[spur_idx];
            let root = &previous[..=spur_idx];

            // block the next edge of every accepted path that shares this root
            let excluded_edges: HashSet<(NodeId, NodeId)> = accepted
                .iter()
                .filter(|p| p.nodes.len() > spur_idx + 1 && p.nodes[..=spur_idx] == *root)
                .map(|p| (p.nodes[spur_idx], p.nodes[spur_idx + 1]))
                .collect();
            let excluded_nodes: HashSet<NodeId> = root[..spur_idx].iter().copied().collect();

            let spur = match shortest_path(
                graph,
                spur_node,
                destination,
                &excluded_nodes,
                &excluded_edges,
            ) {
                Some(spur) => spur,
                None => continue,
            };

            let nodes = root[..spur_idx]
                .iter()
                .copied()
                .chain(spur.nodes)
                .collect_vec();
            if seen.insert(nodes.clone()) {
                let weight = graph.path_weight(&nodes)?;
                candidates.push(RankedPath::new(nodes, weight));
            }
        }

        let best = candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp_rank(b))
            .map(|(idx, _)| idx);
        match best {
            Some(idx) => accepted.push(candidates.swap_remove(idx)),
            None => {
                log::debug!(
                    "candidate pool exhausted after {} path(s) from ({}) to ({})",
                    accepted.len(),
                    origin,
                    destination
                );
                break;
            }
        }
    }

    accepted.sort_by(|a, b| a.cmp_rank(b));
    Ok(accepted)
}

fn validate_query(
    graph: &AffinityGraph,
    origin: NodeId,
    destination: NodeId,
    k: usize,
) -> Result<(), PlanningError> {
    if k == 0 {
        return Err(PlanningError::ConfigurationError(String::from(
            "number of paths k must be at least 1",
        )));
    }
    for node in [origin, destination] {
        if !graph.contains_node(&node) {
            return Err(PlanningError::UnknownNode(node.to_string()));
        }
    }
    if origin == destination {
        return Err(PlanningError::ConfigurationError(format!(
            "origin and destination are both ({origin})"
        )));
    }
    Ok(())
}
