//! Cross-replicate summary statistics.
//!
//! Summaries collapse the replicate axis, leaving one value per year. The
//! variance is the population form, dividing by the replicate count rather
//! than by one less.

use serde::Serialize;

use crate::ensemble::Ensemble;
use crate::SimError;

/// Per-year ensemble statistics, index-aligned with the trajectory years.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummarySeries {
    pub mean: Vec<f64>,
    pub variance: Vec<f64>,
}

/// Mean abundance across replicates for every year.
///
/// With `use_log` the mean is taken over natural logarithms of abundance.
/// An extinct replicate has no logarithm, so a zero abundance is reported as
/// an error instead of letting `-inf` poison the series.
pub fn mean_across_ensemble(ensemble: &Ensemble, use_log: bool) -> Result<Vec<f64>, SimError> {
    if ensemble.is_empty() {
        return Err(SimError::EmptyEnsemble);
    }

    let mut totals = vec![0.0; ensemble.years()];
    for (replicate, trajectory) in ensemble.trajectories().enumerate() {
        for (year, &abundance) in trajectory.iter().enumerate() {
            totals[year] += summary_value(abundance, use_log, replicate, year)?;
        }
    }

    let count = ensemble.replicates() as f64;
    for total in &mut totals {
        *total /= count;
    }

    Ok(totals)
}

/// Population variance across replicates for every year, around `means`.
pub fn variance_across_ensemble(
    ensemble: &Ensemble,
    means: &[f64],
    use_log: bool,
) -> Result<Vec<f64>, SimError> {
    if ensemble.is_empty() {
        return Err(SimError::EmptyEnsemble);
    }
    if means.len() != ensemble.years() {
        return Err(SimError::LengthMismatch {
            context: "means",
            expected: ensemble.years(),
            got: means.len(),
        });
    }

    let mut sums = vec![0.0; ensemble.years()];
    for (replicate, trajectory) in ensemble.trajectories().enumerate() {
        for (year, &abundance) in trajectory.iter().enumerate() {
            let deviation = means[year] - summary_value(abundance, use_log, replicate, year)?;
            sums[year] += deviation * deviation;
        }
    }

    let count = ensemble.replicates() as f64;
    for sum in &mut sums {
        *sum /= count;
    }

    Ok(sums)
}

/// Mean and population variance for every year of the ensemble.
pub fn summarize(ensemble: &Ensemble, use_log: bool) -> Result<SummarySeries, SimError> {
    let mean = mean_across_ensemble(ensemble, use_log)?;
    let variance = variance_across_ensemble(ensemble, &mean, use_log)?;
    Ok(SummarySeries { mean, variance })
}

fn summary_value(
    abundance: f64,
    use_log: bool,
    replicate: usize,
    year: usize,
) -> Result<f64, SimError> {
    if !use_log {
        return Ok(abundance);
    }
    if abundance <= 0.0 {
        return Err(SimError::ZeroAbundanceInLogSummary { replicate, year });
    }
    Ok(abundance.ln())
}
