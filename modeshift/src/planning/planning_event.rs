use super::IterationRecord;
use crate::{
    algorithm::RankedPath,
    model::{feedback::FeedbackSignal, TraitVector},
};
use serde::{Deserialize, Serialize};

/// progress notifications emitted by a planning session at each transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlanningEvent {
    GraphBuilt {
        iteration: usize,
        n_edges: usize,
        traits: TraitVector,
    },
    PlanningStarted {
        iteration: usize,
    },
    PathChosen {
        iteration: usize,
        path: RankedPath,
        /// zero-based rank of the chosen path among the alternatives
        rank: usize,
        alternatives: Vec<RankedPath>,
    },
    FeedbackApplied {
        iteration: usize,
        signal: FeedbackSignal,
        updated_trait: TraitVector,
    },
    IterationCompleted(IterationRecord),
    Terminated {
        final_trait: TraitVector,
        iteration_count: usize,
    },
}
