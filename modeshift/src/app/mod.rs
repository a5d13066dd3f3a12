mod app_error;
mod cli;
mod history_row;
mod progress_sink;
pub mod rank_command;
pub mod run_command;

pub use app_error::AppError;
pub use cli::{ModeshiftApp, ModeshiftOperation};
pub use history_row::HistoryRow;
pub use progress_sink::ProgressBarSink;
