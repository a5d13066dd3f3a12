mod network_config;
mod node_reference;
mod planning_config;

pub use network_config::NetworkConfig;
pub use node_reference::NodeReference;
pub use planning_config::PlanningConfig;
