mod edge_direction;
mod node_id;
mod transport_network;

pub use edge_direction::EdgeDirection;
pub use node_id::NodeId;
pub use transport_network::{ModeMatrix, TimeMatrix, TransportNetwork};
