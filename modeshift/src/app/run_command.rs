use super::{AppError, HistoryRow, ProgressBarSink};
use crate::{
    config::PlanningConfig,
    model::network::TransportNetwork,
    planning::{LoggingEventSink, PlanningLoop, PlanningSummary},
};
use std::{fs::File, path::Path};

/// runs the planning loop described by the configuration.
///
/// the history CSV is written even when the loop aborts, covering the
/// iterations that completed.
pub fn run_planning(
    config: &PlanningConfig,
    history_file: Option<&str>,
    summary_file: Option<&str>,
) -> Result<PlanningSummary, AppError> {
    let network = config.network()?;
    let parameters = config.parameters(&network)?;
    log::info!(
        "planning {} iteration(s) from ({}) to ({}) over {} nodes with k={}",
        parameters.iterations,
        config.origin,
        config.destination,
        network.n_nodes(),
        parameters.k
    );
    let planner = PlanningLoop::new(network, parameters)?;
    let mut sink = (
        LoggingEventSink,
        ProgressBarSink::new(planner.parameters().iterations)?,
    );
    let result = planner.run(config.initial_trait(), &config.feedback, &mut sink);

    let summary = match &result {
        Ok(summary) => summary,
        Err(abort) => &abort.summary,
    };
    if let Some(f) = history_file {
        write_history(Path::new(f), summary, planner.network())?;
        log::info!("wrote {} history row(s) to {f}", summary.iteration_count);
    }

    let summary = result?;
    let json = serde_json::to_string_pretty(&summary)?;
    match summary_file {
        Some(f) => {
            std::fs::write(f, json)?;
            log::info!("wrote summary to {f}");
        }
        None => println!("{json}"),
    }
    Ok(summary)
}

/// writes one [`HistoryRow`] per iteration.
pub fn write_history(
    path: &Path,
    summary: &PlanningSummary,
    network: &TransportNetwork,
) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);
    for record in summary.path_history.iter() {
        let row = HistoryRow::new(record, network)?;
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::run_planning;
    use crate::{
        app::{AppError, HistoryRow},
        config::{NetworkConfig, NodeReference, PlanningConfig},
        model::{feedback::FeedbackSignal, PlanningError, ReferenceProfile},
        planning::PlanningSummary,
    };

    fn output_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("modeshift-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_run_writes_history_and_summary() {
        let history = output_path("history.csv");
        let summary_path = output_path("summary.json");
        let config = PlanningConfig::default();
        let summary = run_planning(
            &config,
            history.to_str(),
            summary_path.to_str(),
        )
        .expect("test failed");
        assert_eq!(summary.iteration_count, 10);

        let mut reader = csv::Reader::from_path(&history).expect("test failed");
        let rows: Vec<HistoryRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("test failed");
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].iteration, 0);
        assert!(rows[0].path.starts_with("0-"));
        assert!(rows[0].path.ends_with("-18"));
        assert!(rows.iter().all(|r| r.signal == FeedbackSignal::Positive));
        assert!((rows[9].openness - 1.0).abs() < 1e-9);

        let json = std::fs::read_to_string(&summary_path).expect("test failed");
        let decoded: PlanningSummary = serde_json::from_str(&json).expect("test failed");
        assert_eq!(decoded.iteration_count, 10);
        assert!(decoded
            .final_trait
            .approx_eq(&ReferenceProfile::TRANSIT_COMMUTER, 1e-9));

        let _ = std::fs::remove_file(history);
        let _ = std::fs::remove_file(summary_path);
    }

    #[test]
    fn test_abort_still_writes_history() {
        let history = output_path("aborted.csv");
        let network: NetworkConfig = toml::from_str(
            r#"
            mode = [[0, 3, 0], [0, 0, 0], [0, 3, 0]]
            time = [[0, 1, 0], [0, 0, 0], [0, 1, 0]]
            "#,
        )
        .expect("test invariant failed");
        let config = PlanningConfig {
            origin: NodeReference::Index(0),
            destination: NodeReference::Index(2),
            feedback: vec![FeedbackSignal::Positive],
            network: Some(network),
            ..Default::default()
        };
        let result = run_planning(&config, history.to_str(), None);
        match result {
            Err(AppError::PlanningAbort { source }) => {
                assert_eq!(source.iteration, 0);
                assert!(matches!(source.error, PlanningError::NoPath { .. }));
            }
            other => panic!("unexpected result {other:?}"),
        }
        let mut reader = csv::Reader::from_path(&history).expect("test failed");
        assert_eq!(reader.records().count(), 0);
        let _ = std::fs::remove_file(history);
    }
}
