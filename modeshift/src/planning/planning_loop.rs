use super::{EventSink, PlanningAbort, PlanningParameters, PlanningSession, PlanningSummary};
use crate::model::{
    feedback::FeedbackSignal, network::TransportNetwork, PlanningError, TraitVector,
};

/// runs the plan-feedback-update cycle over a fixed network.
#[derive(Debug, Clone)]
pub struct PlanningLoop {
    network: TransportNetwork,
    parameters: PlanningParameters,
}

impl PlanningLoop {
    pub fn new(
        network: TransportNetwork,
        parameters: PlanningParameters,
    ) -> Result<PlanningLoop, PlanningError> {
        parameters.validate(&network)?;
        Ok(PlanningLoop {
            network,
            parameters,
        })
    }

    pub fn network(&self) -> &TransportNetwork {
        &self.network
    }

    pub fn parameters(&self) -> &PlanningParameters {
        &self.parameters
    }

    /// opens a session for callers that provide feedback interactively.
    pub fn session<'a, 's>(
        &'a self,
        initial_trait: TraitVector,
        sink: &'s mut dyn EventSink,
    ) -> Result<PlanningSession<'a, 's>, PlanningError> {
        PlanningSession::start(&self.network, &self.parameters, initial_trait, sink)
    }

    /// runs every iteration with a pre-recorded feedback sequence, one signal
    /// per iteration.
    ///
    /// # Returns
    ///
    /// the final traits and path history, or a [`PlanningAbort`] holding the
    /// partial history when an iteration fails.
    pub fn run(
        &self,
        initial_trait: TraitVector,
        feedback: &[FeedbackSignal],
        sink: &mut dyn EventSink,
    ) -> Result<PlanningSummary, PlanningAbort> {
        let abort_at_start = |error: PlanningError| PlanningAbort {
            iteration: 0,
            error,
            summary: PlanningSummary::new(initial_trait, vec![]),
        };
        if feedback.len() != self.parameters.iterations {
            return Err(abort_at_start(PlanningError::FeedbackLengthMismatch {
                expected: self.parameters.iterations,
                found: feedback.len(),
            }));
        }

        let mut session = self.session(initial_trait, sink).map_err(abort_at_start)?;
        for signal in feedback.iter() {
            let step = session
                .plan()
                .and_then(|_| session.apply_feedback(*signal));
            if let Err(error) = step {
                log::warn!("stopping planning loop: {error}");
                return Err(session.abort(error));
            }
        }
        Ok(session.finish())
    }
}

#[cfg(test)]
mod test {
    use super::PlanningLoop;
    use crate::{
        model::{
            feedback::FeedbackSignal,
            network::{NodeId, TransportNetwork},
            PlanningError, ReferenceProfile, TraitVector, TravelMode,
        },
        planning::{PlanningEvent, PlanningParameters, PlanningPhase},
    };

    /// A=0, B=1, C=2 with a slow direct car edge and a fast car detour
    fn three_node_network() -> TransportNetwork {
        let mode = vec![vec![0, 3, 3], vec![0, 0, 3], vec![0, 0, 0]];
        let time = vec![vec![0.0, 1.0, 5.0], vec![0.0, 0.0, 1.0], vec![0.0, 0.0, 0.0]];
        TransportNetwork::new(None, mode, time).expect("test invariant failed")
    }

    fn three_node_loop(iterations: usize) -> PlanningLoop {
        let parameters = PlanningParameters::new(NodeId(0), NodeId(2), iterations);
        PlanningLoop::new(three_node_network(), parameters).expect("test invariant failed")
    }

    fn event_name(event: &PlanningEvent) -> &'static str {
        match event {
            PlanningEvent::GraphBuilt { .. } => "graph_built",
            PlanningEvent::PlanningStarted { .. } => "planning_started",
            PlanningEvent::PathChosen { .. } => "path_chosen",
            PlanningEvent::FeedbackApplied { .. } => "feedback_applied",
            PlanningEvent::IterationCompleted(_) => "iteration_completed",
            PlanningEvent::Terminated { .. } => "terminated",
        }
    }

    #[test]
    fn test_single_positive_iteration() {
        let planner = three_node_loop(1);
        let mut events: Vec<PlanningEvent> = vec![];
        let summary = planner
            .run(
                ReferenceProfile::CAR_DRIVER,
                &[FeedbackSignal::Positive],
                &mut events,
            )
            .expect("test failed");

        assert_eq!(summary.iteration_count, 1);
        assert_eq!(
            summary.final_trait,
            TraitVector::new([0.9, 0.1, 0.9, 0.1, 0.1])
        );
        let record = &summary.path_history[0];
        assert_eq!(record.iteration, 0);
        // second-ranked path is the direct edge, 5 * 2^-1
        assert_eq!(record.chosen_path, vec![NodeId(0), NodeId(2)]);
        assert_eq!(record.modes, vec![TravelMode::Car]);
        assert!((record.path_cost - 2.5).abs() < 1e-12);
        assert_eq!(record.signal, FeedbackSignal::Positive);
        assert_eq!(record.updated_trait, summary.final_trait);
    }

    #[test]
    fn test_event_order() {
        let planner = three_node_loop(2);
        let mut events: Vec<PlanningEvent> = vec![];
        planner
            .run(
                ReferenceProfile::CAR_DRIVER,
                &[FeedbackSignal::Positive, FeedbackSignal::Negative],
                &mut events,
            )
            .expect("test failed");
        let names: Vec<&str> = events.iter().map(event_name).collect();
        assert_eq!(
            names,
            vec![
                "graph_built",
                "planning_started",
                "path_chosen",
                "feedback_applied",
                "iteration_completed",
                "graph_built",
                "planning_started",
                "path_chosen",
                "feedback_applied",
                "iteration_completed",
                "terminated",
            ]
        );
        match &events[2] {
            PlanningEvent::PathChosen {
                rank, alternatives, ..
            } => {
                assert_eq!(*rank, 1);
                assert_eq!(alternatives.len(), 2);
            }
            other => panic!("unexpected event {other:?}"),
        }
        match events.last() {
            Some(PlanningEvent::Terminated {
                final_trait,
                iteration_count,
            }) => {
                assert_eq!(*iteration_count, 2);
                assert!(final_trait.approx_eq(&ReferenceProfile::CAR_DRIVER, 1e-12));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_destination_aborts_at_start() {
        let mode = vec![vec![0, 3, 0], vec![0, 0, 0], vec![0, 3, 0]];
        let time = vec![vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]];
        let network = TransportNetwork::new(None, mode, time).expect("test invariant failed");
        let parameters = PlanningParameters::new(NodeId(0), NodeId(2), 1);
        let planner = PlanningLoop::new(network, parameters).expect("test invariant failed");

        let abort = planner
            .run(
                ReferenceProfile::CAR_DRIVER,
                &[FeedbackSignal::Positive],
                &mut Vec::<PlanningEvent>::new(),
            )
            .expect_err("test failed");
        assert_eq!(abort.iteration, 0);
        assert_eq!(
            abort.error,
            PlanningError::NoPath {
                origin: NodeId(0),
                destination: NodeId(2)
            }
        );
        assert!(abort.summary.path_history.is_empty());
        assert_eq!(abort.summary.final_trait, ReferenceProfile::CAR_DRIVER);
    }

    #[test]
    fn test_insufficient_paths_aborts() {
        let planner = three_node_loop(1);
        let parameters = planner.parameters().clone().with_k(3);
        let planner =
            PlanningLoop::new(planner.network().clone(), parameters).expect("test invariant failed");
        let abort = planner
            .run(
                ReferenceProfile::CAR_DRIVER,
                &[FeedbackSignal::Positive],
                &mut Vec::<PlanningEvent>::new(),
            )
            .expect_err("test failed");
        assert!(matches!(
            abort.error,
            PlanningError::InsufficientPaths {
                requested: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_feedback_length_mismatch() {
        let planner = three_node_loop(2);
        let mut events: Vec<PlanningEvent> = vec![];
        let abort = planner
            .run(
                ReferenceProfile::CAR_DRIVER,
                &[FeedbackSignal::Positive],
                &mut events,
            )
            .expect_err("test failed");
        assert_eq!(
            abort.error,
            PlanningError::FeedbackLengthMismatch {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(abort.summary.iteration_count, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let with_zero_k = PlanningParameters::new(NodeId(0), NodeId(2), 1).with_k(0);
        assert!(PlanningLoop::new(three_node_network(), with_zero_k).is_err());
        let unknown = PlanningParameters::new(NodeId(0), NodeId(7), 1);
        assert!(matches!(
            PlanningLoop::new(three_node_network(), unknown),
            Err(PlanningError::UnknownNode(_))
        ));
        let no_iterations = PlanningParameters::new(NodeId(0), NodeId(2), 0);
        assert!(PlanningLoop::new(three_node_network(), no_iterations).is_err());
        let bad_bounds = PlanningParameters::new(NodeId(0), NodeId(2), 1).with_trait_bounds(1.0, 0.0);
        assert!(PlanningLoop::new(three_node_network(), bad_bounds).is_err());
    }

    #[test]
    fn test_session_phases() {
        let planner = three_node_loop(2);
        let mut events: Vec<PlanningEvent> = vec![];
        let mut session = planner
            .session(ReferenceProfile::CAR_DRIVER, &mut events)
            .expect("test failed");
        assert_eq!(session.phase(), PlanningPhase::Planning);

        let early = session.apply_feedback(FeedbackSignal::Positive);
        assert_eq!(
            early,
            Err(PlanningError::InvalidPhase {
                expected: PlanningPhase::AwaitingFeedback,
                found: PlanningPhase::Planning
            })
        );

        let path = session.plan().expect("test failed");
        assert_eq!(path.nodes, vec![NodeId(0), NodeId(2)]);
        assert_eq!(session.phase(), PlanningPhase::AwaitingFeedback);
        assert!(matches!(
            session.plan(),
            Err(PlanningError::InvalidPhase { .. })
        ));

        let record = session
            .apply_feedback(FeedbackSignal::Negative)
            .expect("test failed");
        assert_eq!(record.iteration, 0);
        assert_eq!(session.iteration(), 1);
        assert_eq!(session.phase(), PlanningPhase::Planning);
        assert_eq!(session.state().feedback(), &[FeedbackSignal::Negative]);

        session.plan().expect("test failed");
        session
            .apply_feedback(FeedbackSignal::Positive)
            .expect("test failed");
        assert_eq!(session.phase(), PlanningPhase::Terminated);
        assert!(session.plan().is_err());

        let summary = session.finish();
        assert_eq!(summary.iteration_count, 2);
        assert!(summary
            .final_trait
            .approx_eq(&ReferenceProfile::CAR_DRIVER, 1e-12));
    }

    #[test]
    fn test_finish_early_keeps_completed_iterations() {
        let planner = three_node_loop(3);
        let mut events: Vec<PlanningEvent> = vec![];
        let mut session = planner
            .session(ReferenceProfile::CAR_DRIVER, &mut events)
            .expect("test failed");
        session.plan().expect("test failed");
        session
            .apply_feedback(FeedbackSignal::Positive)
            .expect("test failed");
        // planned but never answered
        session.plan().expect("test failed");
        let summary = session.finish();
        assert_eq!(summary.iteration_count, 1);
        assert_eq!(summary.path_history.len(), 1);
    }

    #[test]
    fn test_bounded_traits_stay_in_range() {
        let parameters =
            PlanningParameters::new(NodeId(0), NodeId(2), 3).with_trait_bounds(0.0, 1.0);
        let planner =
            PlanningLoop::new(three_node_network(), parameters).expect("test invariant failed");
        let summary = planner
            .run(
                ReferenceProfile::TRANSIT_COMMUTER,
                &[FeedbackSignal::Positive; 3],
                &mut Vec::<PlanningEvent>::new(),
            )
            .expect("test failed");
        assert_eq!(summary.final_trait, ReferenceProfile::TRANSIT_COMMUTER);
        for record in summary.path_history.iter() {
            assert!(record
                .updated_trait
                .values()
                .iter()
                .all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_weight_overflow_mid_run_keeps_partial_history() {
        // car deviation starts at 510 and grows by 0.1 per positive signal.
        // after 14 signals the 5-minute direct edge weight exceeds f64::MAX,
        // so the rebuild that follows iteration 13 fails.
        let planner = three_node_loop(20);
        let initial_trait = TraitVector::new([511.0, 0.0, 1.0, 0.0, 0.0]);
        let mut events: Vec<PlanningEvent> = vec![];
        let abort = planner
            .run(initial_trait, &[FeedbackSignal::Positive; 20], &mut events)
            .expect_err("test failed");

        match &abort.error {
            PlanningError::ConfigurationError(msg) => {
                assert!(msg.contains("(0)->(2)"), "{msg}")
            }
            other => panic!("expected a configuration error, found {other}"),
        }
        assert_eq!(abort.iteration, 14);
        assert_eq!(abort.summary.path_history.len(), 14);
        assert_eq!(abort.summary.iteration_count, 14);
        let last = abort.summary.path_history.last().expect("test failed");
        assert_eq!(last.iteration, 13);
        assert_eq!(abort.summary.final_trait, last.updated_trait);
        for (i, record) in abort.summary.path_history.iter().enumerate() {
            assert_eq!(record.iteration, i);
            assert!(record.path_cost.is_finite());
        }

        let completed = events
            .iter()
            .filter(|e| matches!(e, PlanningEvent::IterationCompleted(_)))
            .count();
        assert_eq!(completed, 14);
        assert!(!events
            .iter()
            .any(|e| matches!(e, PlanningEvent::Terminated { .. })));
    }

    #[test]
    fn test_non_finite_initial_trait_fails_to_start() {
        let planner = three_node_loop(1);
        let initial_trait = TraitVector::new([f64::NAN, 0.0, 1.0, 0.0, 0.0]);
        let abort = planner
            .run(
                initial_trait,
                &[FeedbackSignal::Positive],
                &mut Vec::<PlanningEvent>::new(),
            )
            .expect_err("test failed");
        assert_eq!(abort.iteration, 0);
        assert!(matches!(abort.error, PlanningError::ConfigurationError(_)));
        assert!(abort.summary.path_history.is_empty());
    }
}
