use crate::{model::PlanningError, planning::PlanningAbort};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{source}")]
    PlanningError {
        #[from]
        source: PlanningError,
    },
    #[error("{source}")]
    PlanningAbort {
        #[from]
        source: PlanningAbort,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("error building progress bar: {0}")]
    ProgressBarError(String),
}
