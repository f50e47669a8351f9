//! Console report rendering.

use crate::config::SimulationConfig;
use crate::stats::SummarySeries;

/// Render the report for one completed run.
///
/// Series values are rounded to whole numbers for display only; the summary
/// itself keeps full precision. The header echoes the parameters that shaped
/// the ensemble.
pub fn render_report(config: &SimulationConfig, summary: &SummarySeries) -> String {
    format!(
        "{} simulations with mu={}, sigma={}, envStoch={}\n\
         \n\
         Means across simulations by year:\n\
         {}\n\
         \n\
         Variances across simulations by year:\n\
         {}\n",
        config.replicates,
        config.mu,
        config.sigma,
        config.env_stoch,
        rounded_line(&summary.mean),
        rounded_line(&summary.variance),
    )
}

fn rounded_line(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| (v.round() as i64).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
