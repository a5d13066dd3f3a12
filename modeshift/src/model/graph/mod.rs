mod affinity_edge;
mod affinity_graph;
pub mod graph_ops;

pub use affinity_edge::AffinityEdge;
pub use affinity_graph::AffinityGraph;
