use crate::model::{
    network::{ModeMatrix, TimeMatrix, TransportNetwork},
    PlanningError,
};
use serde::{Deserialize, Serialize};

const BUNDLED_NETWORK: &str = include_str!("default_network.toml");

/// serialized form of a [`TransportNetwork`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    pub mode: ModeMatrix,
    pub time: TimeMatrix,
}

impl NetworkConfig {
    /// the 19-node demonstration network shipped with the crate.
    pub fn bundled() -> Result<NetworkConfig, PlanningError> {
        toml::from_str(BUNDLED_NETWORK).map_err(|e| {
            PlanningError::ConfigurationError(format!("failure decoding bundled network: {e}"))
        })
    }

    pub fn build(&self) -> Result<TransportNetwork, PlanningError> {
        TransportNetwork::new(self.labels.clone(), self.mode.clone(), self.time.clone())
    }
}
