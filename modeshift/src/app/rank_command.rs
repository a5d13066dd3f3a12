use super::AppError;
use crate::{
    algorithm::{k_shortest_paths_up_to, RankedPath},
    config::PlanningConfig,
};
use itertools::Itertools;

/// ranks the shortest loopless paths for the configured initial traits and
/// prints each as a JSON line. returns fewer than `k` paths when the network
/// has no more.
pub fn rank_paths(config: &PlanningConfig, k: Option<usize>) -> Result<Vec<RankedPath>, AppError> {
    let network = config.network()?;
    let origin = config.origin.resolve(&network)?;
    let destination = config.destination.resolve(&network)?;
    let k = k.unwrap_or(config.k);
    let traits = config.initial_trait();
    let graph = network.affinity_graph(&traits, config.edge_direction)?;

    let paths = k_shortest_paths_up_to(&graph, origin, destination, k)?;
    if paths.len() < k {
        log::warn!(
            "requested {k} paths from ({}) to ({}) but only {} exist",
            config.origin,
            config.destination,
            paths.len()
        );
    }
    for (rank, path) in paths.iter().enumerate() {
        let row = serde_json::json!({
            "rank": rank + 1,
            "path": network.describe_path(&path.nodes)?,
            "modes": graph.path_modes(&path.nodes)?.iter().join("-"),
            "weight": path.weight,
        });
        println!("{row}");
    }
    Ok(paths)
}
