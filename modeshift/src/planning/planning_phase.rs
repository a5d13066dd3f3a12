use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// phases of a planning session:
/// `Initializing -> (Planning -> AwaitingFeedback -> Updating)* -> Terminated`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningPhase {
    Initializing,
    Planning,
    AwaitingFeedback,
    Updating,
    Terminated,
}

impl Display for PlanningPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanningPhase::Initializing => write!(f, "initializing"),
            PlanningPhase::Planning => write!(f, "planning"),
            PlanningPhase::AwaitingFeedback => write!(f, "awaiting feedback"),
            PlanningPhase::Updating => write!(f, "updating"),
            PlanningPhase::Terminated => write!(f, "terminated"),
        }
    }
}
