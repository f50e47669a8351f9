//! Monte Carlo ensemble simulation of Ricker-type population dynamics.
//!
//! This crate simulates many independent replicate trajectories of a single
//! population under density-dependent growth and optional environmental
//! stochasticity, then summarizes the ensemble as per-year mean and variance
//! series on the raw or logarithmic scale.

pub mod config;
pub mod ensemble;
pub mod growth;
pub mod report;
pub mod sim;
pub mod stats;

use thiserror::Error;

pub use config::SimulationConfig;
pub use ensemble::{run_ensemble, Ensemble};
pub use growth::sample_growth_rate;
pub use report::render_report;
pub use sim::simulate_trajectory;
pub use stats::{mean_across_ensemble, summarize, variance_across_ensemble, SummarySeries};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot summarize an empty ensemble")]
    EmptyEnsemble,
    #[error("log-scale summary undefined: replicate {replicate} hit zero abundance in year {year}")]
    ZeroAbundanceInLogSummary { replicate: usize, year: usize },
    #[error("{context} length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Run the configured ensemble and render its console report.
pub fn run_report(config: &SimulationConfig) -> Result<String, SimError> {
    let ensemble = run_ensemble(config)?;
    let summary = summarize(&ensemble, config.log_summaries)?;
    Ok(report::render_report(config, &summary))
}
