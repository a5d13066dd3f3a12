mod dijkstra;
mod frontier_element;
mod ranked_path;
mod yen;

pub use dijkstra::shortest_path;
pub use ranked_path::RankedPath;
pub use yen::{k_shortest_paths, k_shortest_paths_up_to};
