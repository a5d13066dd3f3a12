use super::{AffinityEdge, AffinityGraph};
use crate::model::{
    affinity_ops,
    network::{EdgeDirection, NodeId},
    PlanningError, TraitVector, TravelMode,
};

/// confirms the matrices are square, share a shape, and agree on which
/// entries are edges (`mode != 0` exactly when `time > 0`).
///
/// # Returns
///
/// the number of nodes in the network.
pub fn validate_matrices(mode: &[Vec<u8>], time: &[Vec<f64>]) -> Result<usize, PlanningError> {
    let n_nodes = mode.len();
    if n_nodes == 0 {
        return Err(PlanningError::ConfigurationError(String::from(
            "network has no nodes",
        )));
    }
    if time.len() != n_nodes {
        return Err(PlanningError::MatrixShapeMismatch(format!(
            "mode matrix has {} rows, time matrix has {}",
            n_nodes,
            time.len()
        )));
    }
    for (i, (mode_row, time_row)) in mode.iter().zip(time.iter()).enumerate() {
        if mode_row.len() != n_nodes || time_row.len() != n_nodes {
            return Err(PlanningError::MatrixShapeMismatch(format!(
                "row {i} has {} mode and {} time entries, expected {n_nodes}",
                mode_row.len(),
                time_row.len()
            )));
        }
        for (j, (code, t)) in mode_row.iter().zip(time_row.iter()).enumerate() {
            let travel_mode = TravelMode::from_code(*code).map_err(|e| {
                PlanningError::ConfigurationError(format!("entry ({i})->({j}): {e}"))
            })?;
            if !t.is_finite() || *t < 0.0 {
                return Err(PlanningError::ConfigurationError(format!(
                    "entry ({i})->({j}) has invalid travel time {t}"
                )));
            }
            if travel_mode.is_some() != (*t > 0.0) {
                return Err(PlanningError::EdgeInvariantViolation {
                    src: NodeId(i),
                    dst: NodeId(j),
                    mode: *code,
                    time: *t,
                });
            }
            if i == j && travel_mode.is_some() {
                return Err(PlanningError::ConfigurationError(format!(
                    "node ({i}) has a self loop"
                )));
            }
        }
    }
    Ok(n_nodes)
}

/// builds a fresh affinity graph for the given traits. only entries with an
/// edge produce graph edges; the matrices are never modified.
///
/// fails when the traits are not finite or when a weight overflows, so that
/// searches never run over infinite edges.
pub fn compute_graph(
    traits: &TraitVector,
    mode: &[Vec<u8>],
    time: &[Vec<f64>],
    direction: EdgeDirection,
) -> Result<AffinityGraph, PlanningError> {
    let n_nodes = validate_matrices(mode, time)?;
    if !traits.is_finite() {
        return Err(PlanningError::ConfigurationError(format!(
            "trait values {traits} are not finite"
        )));
    }
    let mut edges: Vec<AffinityEdge> = Vec::new();
    match direction {
        EdgeDirection::Directed => {
            for i in 0..n_nodes {
                for j in (0..n_nodes).filter(|j| *j != i) {
                    if let Some(m) = TravelMode::from_code(mode[i][j])? {
                        edges.push(weighted_edge(i, j, m, time[i][j], traits)?);
                    }
                }
            }
        }
        EdgeDirection::Undirected => {
            for i in 0..n_nodes {
                for j in (i + 1)..n_nodes {
                    // the higher-index row entry (j, i) wins when both exist
                    let (code, t) = if mode[j][i] != TravelMode::NO_EDGE {
                        (mode[j][i], time[j][i])
                    } else {
                        (mode[i][j], time[i][j])
                    };
                    if let Some(m) = TravelMode::from_code(code)? {
                        edges.push(weighted_edge(i, j, m, t, traits)?);
                        edges.push(weighted_edge(j, i, m, t, traits)?);
                    }
                }
            }
        }
    }
    log::debug!(
        "built {} affinity graph with {} edges for traits {}",
        direction,
        edges.len(),
        traits
    );
    AffinityGraph::from_edges(n_nodes, edges)
}

fn weighted_edge(
    src: usize,
    dst: usize,
    mode: TravelMode,
    time: f64,
    traits: &TraitVector,
) -> Result<AffinityEdge, PlanningError> {
    let weight = affinity_ops::affinity(mode, time, traits);
    if !weight.is_finite() {
        return Err(PlanningError::ConfigurationError(format!(
            "{mode} edge ({src})->({dst}) with time {time} has non-finite weight {weight} for traits {traits}"
        )));
    }
    Ok(AffinityEdge {
        src: NodeId(src),
        dst: NodeId(dst),
        mode,
        time,
        weight,
    })
}
