use super::{NetworkConfig, NodeReference};
use crate::{
    model::{
        feedback::FeedbackSignal,
        network::{EdgeDirection, TransportNetwork},
        PlanningError, ReferenceProfile, TraitVector,
    },
    planning::PlanningParameters,
};
use serde::{Deserialize, Serialize};

/// settings for one planning run, read from a .toml or .json file.
///
/// the default configuration routes from node 0 to node 18 of the bundled
/// network for a car driver who gives positive feedback ten times.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanningConfig {
    pub origin: NodeReference,
    pub destination: NodeReference,
    #[serde(default = "default_k")]
    pub k: usize,
    /// defaults to the length of `feedback`
    #[serde(default)]
    pub iterations: Option<usize>,
    /// defaults to the car driver reference profile
    #[serde(default)]
    pub initial_trait: Option<TraitVector>,
    pub feedback: Vec<FeedbackSignal>,
    #[serde(default)]
    pub edge_direction: EdgeDirection,
    #[serde(default)]
    pub trait_bounds: Option<(f64, f64)>,
    /// defaults to the bundled network
    #[serde(default)]
    pub network: Option<NetworkConfig>,
}

fn default_k() -> usize {
    PlanningParameters::DEFAULT_K
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            origin: NodeReference::Index(0),
            destination: NodeReference::Index(18),
            k: default_k(),
            iterations: None,
            initial_trait: None,
            feedback: vec![FeedbackSignal::Positive; 10],
            edge_direction: EdgeDirection::default(),
            trait_bounds: None,
            network: None,
        }
    }
}

impl PlanningConfig {
    pub fn network(&self) -> Result<TransportNetwork, PlanningError> {
        match &self.network {
            Some(network) => network.build(),
            None => NetworkConfig::bundled()?.build(),
        }
    }

    /// resolves node references against the network and validates the result.
    pub fn parameters(&self, network: &TransportNetwork) -> Result<PlanningParameters, PlanningError> {
        let origin = self.origin.resolve(network)?;
        let destination = self.destination.resolve(network)?;
        let iterations = self.iterations.unwrap_or(self.feedback.len());
        let mut parameters = PlanningParameters::new(origin, destination, iterations)
            .with_k(self.k)
            .with_edge_direction(self.edge_direction);
        if let Some((lower, upper)) = self.trait_bounds {
            parameters = parameters.with_trait_bounds(lower, upper);
        }
        parameters.validate(network)?;
        Ok(parameters)
    }

    pub fn initial_trait(&self) -> TraitVector {
        self.initial_trait
            .unwrap_or_else(|| ReferenceProfile::CarDriver.traits())
    }
}

impl TryFrom<&String> for PlanningConfig {
    type Error = PlanningError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| PlanningError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| PlanningError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| PlanningError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| PlanningError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(PlanningError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
