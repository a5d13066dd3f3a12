use super::AppError;
use crate::planning::{EventSink, PlanningEvent};
use kdam::{Bar, BarExt};

/// advances a terminal progress bar once per completed iteration.
pub struct ProgressBarSink {
    bar: Bar,
}

impl ProgressBarSink {
    pub fn new(iterations: usize) -> Result<ProgressBarSink, AppError> {
        let bar = Bar::builder()
            .total(iterations)
            .desc("planning iterations")
            .build()
            .map_err(|e| AppError::ProgressBarError(format!("{e}")))?;
        Ok(ProgressBarSink { bar })
    }
}

impl EventSink for ProgressBarSink {
    fn on_event(&mut self, event: &PlanningEvent) {
        match event {
            PlanningEvent::IterationCompleted(_) => {
                let _ = self.bar.update(1);
            }
            PlanningEvent::Terminated { .. } => {
                let _ = self.bar.refresh();
                eprintln!();
            }
            _ => {}
        }
    }
}
