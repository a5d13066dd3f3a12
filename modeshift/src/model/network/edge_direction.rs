use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how the mode and time matrices are read when building a graph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// entry (i, j) describes the edge from i to j only.
    #[default]
    Directed,
    /// each node pair becomes a two-way edge. for i < j, the higher-index row
    /// entry (j, i) describes both directions; the (i, j) entry is only read
    /// when (j, i) has no edge.
    Undirected,
}

impl Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeDirection::Directed => write!(f, "directed"),
            EdgeDirection::Undirected => write!(f, "undirected"),
        }
    }
}
