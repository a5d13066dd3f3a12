use crate::model::{
    network::{NodeId, TransportNetwork},
    PlanningError,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a node named in a configuration file, either by matrix index or by label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeReference {
    Index(usize),
    Label(String),
}

impl NodeReference {
    pub fn resolve(&self, network: &TransportNetwork) -> Result<NodeId, PlanningError> {
        match self {
            NodeReference::Index(index) => {
                let node_id = NodeId(*index);
                if network.contains_node(&node_id) {
                    Ok(node_id)
                } else {
                    Err(PlanningError::UnknownNode(index.to_string()))
                }
            }
            NodeReference::Label(label) => network.node_id(label),
        }
    }
}

impl Display for NodeReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeReference::Index(index) => write!(f, "{index}"),
            NodeReference::Label(label) => write!(f, "{label}"),
        }
    }
}
