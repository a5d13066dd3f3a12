pub mod feedback_ops;
mod feedback_signal;

pub use feedback_signal::FeedbackSignal;
