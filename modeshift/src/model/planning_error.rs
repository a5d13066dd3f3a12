use super::network::NodeId;
use crate::planning::PlanningPhase;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("mode and time matrices differ in shape: {0}")]
    MatrixShapeMismatch(String),
    #[error("edge ({src})->({dst}) violates the mode/time invariant: mode code {mode} with time {time}")]
    EdgeInvariantViolation {
        src: NodeId,
        dst: NodeId,
        mode: u8,
        time: f64,
    },
    #[error("node '{0}' not found in transport network")]
    UnknownNode(String),
    #[error("no path exists from ({origin}) to ({destination})")]
    NoPath { origin: NodeId, destination: NodeId },
    #[error("only {found} loopless path(s) exist from ({origin}) to ({destination}) but {requested} were requested")]
    InsufficientPaths {
        origin: NodeId,
        destination: NodeId,
        requested: usize,
        found: usize,
    },
    #[error("invalid feedback signal: {0}")]
    InvalidFeedback(String),
    #[error("feedback sequence has {found} signal(s) but {expected} iteration(s) were requested")]
    FeedbackLengthMismatch { expected: usize, found: usize },
    #[error("planning session is in phase '{found}' but this step requires phase '{expected}'")]
    InvalidPhase {
        expected: PlanningPhase,
        found: PlanningPhase,
    },
}
