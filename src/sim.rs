//! Single-replicate trajectory simulation.
//!
//! One trajectory is the annual abundance series of one population, kept on
//! whole individuals: every year the continuous Ricker update is rounded to
//! the nearest count before it feeds the next year.

use rand::Rng;

use crate::config::SimulationConfig;
use crate::growth::sample_growth_rate;

/// Simulate one replicate trajectory.
///
/// Returns `config.years()` abundances; entry 0 is the rounded initial
/// abundance and entry `t` is the population after `t` annual updates. Each
/// update multiplies the previous count by `exp(r)` with `r` drawn from
/// [`sample_growth_rate`], rounds to the nearest whole count, and floors at
/// zero, so an extinct population stays extinct.
pub fn simulate_trajectory(config: &SimulationConfig, rng: &mut impl Rng) -> Vec<f64> {
    let mut trajectory = vec![0.0; config.years()];
    simulate_into(config, rng, &mut trajectory);
    trajectory
}

/// Fill `out` with one trajectory; `out.len()` must equal `config.years()`.
pub(crate) fn simulate_into(config: &SimulationConfig, rng: &mut impl Rng, out: &mut [f64]) {
    assert_eq!(out.len(), config.years(), "row length must equal years");

    out[0] = config.n0.round();

    for year in 1..out.len() {
        let previous = out[year - 1];
        let r = sample_growth_rate(
            config.mu,
            config.sigma,
            previous,
            config.k,
            config.env_stoch,
            rng,
        );
        out[year] = (previous * r.exp()).round().max(0.0);
    }
}
