use super::PlanningSummary;
use crate::model::PlanningError;
use thiserror::Error;

/// a planning loop that stopped on an error. carries the history and traits
/// accumulated by the iterations that completed before the failure.
#[derive(Error, Debug, Clone)]
#[error("planning aborted at iteration {iteration}: {error}")]
pub struct PlanningAbort {
    pub iteration: usize,
    #[source]
    pub error: PlanningError,
    pub summary: PlanningSummary,
}
