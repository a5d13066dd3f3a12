use super::IterationRecord;
use crate::model::TraitVector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSummary {
    pub final_trait: TraitVector,
    pub iteration_count: usize,
    pub path_history: Vec<IterationRecord>,
}

impl PlanningSummary {
    pub fn new(final_trait: TraitVector, path_history: Vec<IterationRecord>) -> PlanningSummary {
        PlanningSummary {
            final_trait,
            iteration_count: path_history.len(),
            path_history,
        }
    }
}
