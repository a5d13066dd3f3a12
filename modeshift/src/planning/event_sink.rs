use super::PlanningEvent;
use itertools::Itertools;

/// receives progress events from a planning session.
pub trait EventSink {
    fn on_event(&mut self, event: &PlanningEvent);
}

/// collects events in memory.
impl EventSink for Vec<PlanningEvent> {
    fn on_event(&mut self, event: &PlanningEvent) {
        self.push(event.clone());
    }
}

/// forwards each event to both sinks.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn on_event(&mut self, event: &PlanningEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

/// writes events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventSink;

impl EventSink for LoggingEventSink {
    fn on_event(&mut self, event: &PlanningEvent) {
        match event {
            PlanningEvent::GraphBuilt {
                iteration,
                n_edges,
                traits,
            } => log::debug!("iteration {iteration}: graph built with {n_edges} edges for {traits}"),
            PlanningEvent::PlanningStarted { iteration } => {
                log::debug!("iteration {iteration}: starting planning")
            }
            PlanningEvent::PathChosen {
                iteration,
                path,
                rank,
                alternatives,
            } => log::info!(
                "iteration {iteration}: chose rank {} path {path} over {}",
                rank + 1,
                alternatives.iter().map(|p| p.to_string()).join(", ")
            ),
            PlanningEvent::FeedbackApplied {
                iteration,
                signal,
                updated_trait,
            } => log::info!("iteration {iteration}: {signal} feedback, traits now {updated_trait}"),
            PlanningEvent::IterationCompleted(record) => {
                log::debug!("iteration {} complete", record.iteration)
            }
            PlanningEvent::Terminated {
                final_trait,
                iteration_count,
            } => log::info!(
                "planning finished after {iteration_count} iteration(s), final traits {final_trait}"
            ),
        }
    }
}
