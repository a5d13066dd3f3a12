use super::{rank_command, run_command, AppError};
use crate::config::PlanningConfig;
use clap::{Parser, Subcommand};

/// command line tool ranking multimodal routes for a traveler whose mode
/// preference shifts with feedback
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ModeshiftApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: ModeshiftOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ModeshiftOperation {
    /// runs the plan-feedback-update loop with the configured feedback sequence.
    Run {
        /// path to a .toml or .json run configuration. when omitted, the
        /// bundled network is planned from node 0 to node 18.
        #[arg(long, visible_alias = "config-file")]
        configuration_file: Option<String>,
        /// output path for the iteration history CSV
        #[arg(long)]
        history_file: Option<String>,
        /// output path for the summary JSON. printed to stdout when omitted.
        #[arg(long)]
        summary_file: Option<String>,
    },
    /// prints the k shortest paths for the initial traits as JSON lines.
    Rank {
        /// path to a .toml or .json run configuration
        #[arg(long, visible_alias = "config-file")]
        configuration_file: Option<String>,
        /// number of paths, overrides the configured k
        #[arg(short, long)]
        k: Option<usize>,
    },
}

impl ModeshiftOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            ModeshiftOperation::Run {
                configuration_file,
                history_file,
                summary_file,
            } => {
                let config = read_configuration(configuration_file)?;
                run_command::run_planning(
                    &config,
                    history_file.as_deref(),
                    summary_file.as_deref(),
                )?;
                Ok(())
            }
            ModeshiftOperation::Rank {
                configuration_file,
                k,
            } => {
                let config = read_configuration(configuration_file)?;
                rank_command::rank_paths(&config, *k)?;
                Ok(())
            }
        }
    }
}

fn read_configuration(configuration_file: &Option<String>) -> Result<PlanningConfig, AppError> {
    match configuration_file {
        None => Ok(PlanningConfig::default()),
        Some(f) => {
            log::info!("reading modeshift configuration from {f}");
            Ok(PlanningConfig::try_from(f)?)
        }
    }
}
