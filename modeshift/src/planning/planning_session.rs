use super::{
    EventSink, IterationRecord, PlanningAbort, PlanningEvent, PlanningParameters, PlanningPhase,
    PlanningState, PlanningSummary,
};
use crate::{
    algorithm::{k_shortest_paths, RankedPath},
    model::{
        feedback::{feedback_ops, FeedbackSignal},
        network::TransportNetwork,
        PlanningError, TraitVector, TravelMode,
    },
};

/// step-by-step driver of the plan-feedback-update cycle.
///
/// each iteration is one call to [`PlanningSession::plan`] followed by one
/// call to [`PlanningSession::apply_feedback`]. the caller may stop at any
/// point and call [`PlanningSession::finish`]; a path that never received
/// feedback is not recorded.
pub struct PlanningSession<'a, 's> {
    network: &'a TransportNetwork,
    parameters: &'a PlanningParameters,
    sink: &'s mut dyn EventSink,
    state: PlanningState,
}

impl<'a, 's> PlanningSession<'a, 's> {
    /// validates the parameters and builds the first affinity graph.
    pub fn start(
        network: &'a TransportNetwork,
        parameters: &'a PlanningParameters,
        initial_trait: TraitVector,
        sink: &'s mut dyn EventSink,
    ) -> Result<PlanningSession<'a, 's>, PlanningError> {
        parameters.validate(network)?;
        let graph = network.affinity_graph(&initial_trait, parameters.edge_direction)?;
        sink.on_event(&PlanningEvent::GraphBuilt {
            iteration: 0,
            n_edges: graph.n_edges(),
            traits: initial_trait,
        });
        let mut state = PlanningState::new(initial_trait, graph);
        state.phase = PlanningPhase::Planning;
        Ok(PlanningSession {
            network,
            parameters,
            sink,
            state,
        })
    }

    pub fn phase(&self) -> PlanningPhase {
        self.state.phase()
    }

    pub fn current_trait(&self) -> &TraitVector {
        self.state.current_trait()
    }

    pub fn iteration(&self) -> usize {
        self.state.iteration()
    }

    pub fn state(&self) -> &PlanningState {
        &self.state
    }

    /// ranks the k shortest paths on the current graph and chooses the one
    /// at rank k - 1. any search failure terminates the session.
    pub fn plan(&mut self) -> Result<RankedPath, PlanningError> {
        self.state.expect_phase(PlanningPhase::Planning)?;
        let iteration = self.state.iteration;
        self.sink
            .on_event(&PlanningEvent::PlanningStarted { iteration });

        let (alternatives, chosen, modes) = match self.rank_paths() {
            Ok(ranked) => ranked,
            Err(e) => {
                self.state.phase = PlanningPhase::Terminated;
                return Err(e);
            }
        };
        self.sink.on_event(&PlanningEvent::PathChosen {
            iteration,
            path: chosen.clone(),
            rank: self.parameters.selected_rank(),
            alternatives,
        });
        self.state.pending = Some((chosen.clone(), modes));
        self.state.phase = PlanningPhase::AwaitingFeedback;
        Ok(chosen)
    }

    /// applies the traveler's feedback to the chosen path, records the
    /// iteration and rebuilds the graph for the next one.
    pub fn apply_feedback(&mut self, signal: FeedbackSignal) -> Result<IterationRecord, PlanningError> {
        self.state.expect_phase(PlanningPhase::AwaitingFeedback)?;
        let (path, modes) = self
            .state
            .pending
            .take()
            .ok_or(PlanningError::InvalidPhase {
                expected: PlanningPhase::AwaitingFeedback,
                found: PlanningPhase::Planning,
            })?;
        self.state.phase = PlanningPhase::Updating;
        self.state.feedback.push(signal);

        let updated_trait = match self.parameters.trait_bounds {
            Some(bounds) => feedback_ops::apply_feedback_bounded(&self.state.traits, signal, bounds),
            None => feedback_ops::apply_feedback(&self.state.traits, signal),
        };
        self.state.traits = updated_trait;
        let iteration = self.state.iteration;
        self.sink.on_event(&PlanningEvent::FeedbackApplied {
            iteration,
            signal,
            updated_trait,
        });

        let record = IterationRecord {
            iteration,
            chosen_path: path.nodes,
            modes,
            path_cost: path.weight,
            signal,
            updated_trait,
        };
        self.state.history.push(record.clone());
        self.state.iteration += 1;
        self.sink
            .on_event(&PlanningEvent::IterationCompleted(record.clone()));

        if self.state.iteration >= self.parameters.iterations {
            self.state.phase = PlanningPhase::Terminated;
            return Ok(record);
        }

        match self
            .network
            .affinity_graph(&updated_trait, self.parameters.edge_direction)
        {
            Ok(graph) => {
                self.sink.on_event(&PlanningEvent::GraphBuilt {
                    iteration: self.state.iteration,
                    n_edges: graph.n_edges(),
                    traits: updated_trait,
                });
                self.state.graph = graph;
                self.state.phase = PlanningPhase::Planning;
                Ok(record)
            }
            Err(e) => {
                self.state.phase = PlanningPhase::Terminated;
                Err(e)
            }
        }
    }

    /// ends the session, returning the final traits and the recorded history.
    pub fn finish(mut self) -> PlanningSummary {
        self.state.phase = PlanningPhase::Terminated;
        self.sink.on_event(&PlanningEvent::Terminated {
            final_trait: self.state.traits,
            iteration_count: self.state.history.len(),
        });
        self.state.into_summary()
    }

    /// ends the session on an error, keeping what was accumulated so far.
    pub fn abort(self, error: PlanningError) -> PlanningAbort {
        PlanningAbort {
            iteration: self.state.iteration,
            error,
            summary: self.state.into_summary(),
        }
    }

    fn rank_paths(&self) -> Result<(Vec<RankedPath>, RankedPath, Vec<TravelMode>), PlanningError> {
        let origin = self.parameters.origin;
        let destination = self.parameters.destination;
        let k = self.parameters.k;
        let paths = k_shortest_paths(&self.state.graph, origin, destination, k)?;
        let chosen = paths
            .get(self.parameters.selected_rank())
            .cloned()
            .ok_or(PlanningError::InsufficientPaths {
                origin,
                destination,
                requested: k,
                found: paths.len(),
            })?;
        let modes = self.state.graph.path_modes(&chosen.nodes)?;
        Ok((paths, chosen, modes))
    }
}
