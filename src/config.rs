use serde::{Deserialize, Serialize};

use crate::SimError;

/// Parameters for one ensemble run.
///
/// The defaults reproduce the canonical ten-year, ten-thousand-replicate run
/// with environmental stochasticity enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Mean intrinsic growth rate on the log scale
    pub mu: f64,
    /// Interannual standard deviation of the intrinsic growth rate
    pub sigma: f64,
    /// Abundance in year 0
    pub n0: f64,
    /// Carrying capacity
    pub k: f64,
    /// Years to simulate beyond year 0
    pub max_years: usize,
    /// Draw a fresh stochastic growth rate each year
    pub env_stoch: bool,
    /// Independent replicate trajectories in the ensemble
    pub replicates: usize,
    /// Summarize log abundance instead of raw abundance
    pub log_summaries: bool,
    /// Master seed; each replicate derives its own stream from it
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mu: 1.1,
            sigma: 0.5,
            n0: 10.0,
            k: 500.0,
            max_years: 10,
            env_stoch: true,
            replicates: 10_000,
            log_summaries: false,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Entries per trajectory, counting year 0.
    pub fn years(&self) -> usize {
        self.max_years + 1
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.mu.is_finite() {
            return Err(SimError::InvalidConfig("mu must be finite".to_string()));
        }

        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(SimError::InvalidConfig(
                "sigma must be finite and non-negative".to_string(),
            ));
        }

        if !self.n0.is_finite() || self.n0 < 0.0 {
            return Err(SimError::InvalidConfig(
                "n0 must be finite and non-negative".to_string(),
            ));
        }

        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(SimError::InvalidConfig(
                "k must be finite and greater than zero".to_string(),
            ));
        }

        if self.replicates == 0 {
            return Err(SimError::InvalidConfig(
                "replicates must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
