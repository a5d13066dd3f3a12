use super::{IterationRecord, PlanningPhase, PlanningSummary};
use crate::{
    algorithm::RankedPath,
    model::{
        feedback::FeedbackSignal, graph::AffinityGraph, PlanningError, TraitVector, TravelMode,
    },
};

/// mutable state of one planning loop invocation. owned by a
/// [`super::PlanningSession`], which is the only writer.
#[derive(Debug, Clone)]
pub struct PlanningState {
    pub(super) phase: PlanningPhase,
    pub(super) traits: TraitVector,
    pub(super) iteration: usize,
    pub(super) feedback: Vec<FeedbackSignal>,
    pub(super) history: Vec<IterationRecord>,
    pub(super) graph: AffinityGraph,
    /// path chosen in the planning phase, waiting on feedback
    pub(super) pending: Option<(RankedPath, Vec<TravelMode>)>,
}

impl PlanningState {
    pub fn new(initial_trait: TraitVector, graph: AffinityGraph) -> PlanningState {
        PlanningState {
            phase: PlanningPhase::Initializing,
            traits: initial_trait,
            iteration: 0,
            feedback: vec![],
            history: vec![],
            graph,
            pending: None,
        }
    }

    pub fn phase(&self) -> PlanningPhase {
        self.phase
    }

    pub fn current_trait(&self) -> &TraitVector {
        &self.traits
    }

    /// number of completed iterations, which is also the zero-based index
    /// of the iteration in progress.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// feedback signals received so far, in order.
    pub fn feedback(&self) -> &[FeedbackSignal] {
        &self.feedback
    }

    pub fn history(&self) -> &[IterationRecord] {
        &self.history
    }

    pub fn graph(&self) -> &AffinityGraph {
        &self.graph
    }

    pub(super) fn expect_phase(&self, expected: PlanningPhase) -> Result<(), PlanningError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(PlanningError::InvalidPhase {
                expected,
                found: self.phase,
            })
        }
    }

    pub fn into_summary(self) -> PlanningSummary {
        PlanningSummary::new(self.traits, self.history)
    }
}
