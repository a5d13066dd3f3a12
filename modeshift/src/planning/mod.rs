mod event_sink;
mod iteration_record;
mod planning_abort;
mod planning_event;
mod planning_loop;
mod planning_parameters;
mod planning_phase;
mod planning_session;
mod planning_state;
mod planning_summary;

pub use event_sink::{EventSink, LoggingEventSink};
pub use iteration_record::IterationRecord;
pub use planning_abort::PlanningAbort;
pub use planning_event::PlanningEvent;
pub use planning_loop::PlanningLoop;
pub use planning_parameters::PlanningParameters;
pub use planning_phase::PlanningPhase;
pub use planning_session::PlanningSession;
pub use planning_state::PlanningState;
pub use planning_summary::PlanningSummary;
