use crate::{
    model::{
        feedback::FeedbackSignal, network::TransportNetwork, BigFiveTrait, PlanningError,
    },
    planning::IterationRecord,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// one line of the iteration history CSV. paths are written as node labels
/// and modes joined with '-'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub iteration: usize,
    pub path: String,
    pub modes: String,
    pub cost: f64,
    pub signal: FeedbackSignal,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub neuroticism: f64,
    pub openness: f64,
}

impl HistoryRow {
    pub fn new(
        record: &IterationRecord,
        network: &TransportNetwork,
    ) -> Result<HistoryRow, PlanningError> {
        let traits = &record.updated_trait;
        Ok(HistoryRow {
            iteration: record.iteration,
            path: network.describe_path(&record.chosen_path)?,
            modes: record.modes.iter().join("-"),
            cost: record.path_cost,
            signal: record.signal,
            extraversion: traits.get(BigFiveTrait::Extraversion),
            agreeableness: traits.get(BigFiveTrait::Agreeableness),
            conscientiousness: traits.get(BigFiveTrait::Conscientiousness),
            neuroticism: traits.get(BigFiveTrait::Neuroticism),
            openness: traits.get(BigFiveTrait::Openness),
        })
    }
}
