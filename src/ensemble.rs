//! Parallel ensemble driver.
//!
//! An ensemble is a flat replicate-major matrix of trajectories. Replicates
//! are filled in parallel, each from its own counter-derived ChaCha8 stream,
//! so a master seed reproduces the identical ensemble no matter how the work
//! is scheduled across threads.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::sim::simulate_into;
use crate::SimError;

/// All replicate trajectories of one run.
///
/// Stored as `replicates` rows of `years` abundances each.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    abundances: Vec<f64>,
    replicates: usize,
    years: usize,
}

impl Ensemble {
    /// Build an ensemble from explicit trajectory rows.
    ///
    /// Every row must have the same nonzero length; the year axis is taken
    /// from the first row.
    pub fn from_trajectories(trajectories: Vec<Vec<f64>>) -> Result<Self, SimError> {
        let replicates = trajectories.len();
        let years = trajectories.first().map_or(0, Vec::len);
        if replicates > 0 && years == 0 {
            return Err(SimError::InvalidConfig(
                "trajectories must contain at least year 0".to_string(),
            ));
        }

        let mut abundances = Vec::with_capacity(replicates * years);
        for row in &trajectories {
            if row.len() != years {
                return Err(SimError::LengthMismatch {
                    context: "trajectory",
                    expected: years,
                    got: row.len(),
                });
            }
            abundances.extend_from_slice(row);
        }

        Ok(Self {
            abundances,
            replicates,
            years,
        })
    }

    pub fn replicates(&self) -> usize {
        self.replicates
    }

    /// Entries per trajectory, counting year 0.
    pub fn years(&self) -> usize {
        self.years
    }

    pub fn is_empty(&self) -> bool {
        self.replicates == 0
    }

    /// One replicate's full trajectory.
    pub fn trajectory(&self, replicate: usize) -> &[f64] {
        let start = replicate * self.years;
        &self.abundances[start..start + self.years]
    }

    /// Iterate trajectories in replicate order.
    pub fn trajectories(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // The chunk size must stay nonzero for the empty ensemble.
        self.abundances.chunks_exact(self.years.max(1))
    }
}

/// Simulate `config.replicates` independent trajectories.
///
/// The configuration is validated before any simulation work starts.
pub fn run_ensemble(config: &SimulationConfig) -> Result<Ensemble, SimError> {
    config.validate()?;

    let years = config.years();
    let mut abundances = vec![0.0; config.replicates * years];

    abundances
        .par_chunks_mut(years)
        .enumerate()
        .for_each(|(replicate, row)| {
            let mut rng = ChaCha8Rng::seed_from_u64(replicate_seed(config.seed, replicate as u64));
            simulate_into(config, &mut rng, row);
        });

    Ok(Ensemble {
        abundances,
        replicates: config.replicates,
        years,
    })
}

/// Mix the master seed with a replicate index so neighboring replicates get
/// uncorrelated streams.
fn replicate_seed(seed: u64, replicate: u64) -> u64 {
    const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
    let z = seed ^ replicate.wrapping_mul(GOLDEN_GAMMA);
    // SplitMix64 finalizer
    let mut mixed = z.wrapping_add(GOLDEN_GAMMA);
    mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::{replicate_seed, run_ensemble, Ensemble};
    use crate::config::SimulationConfig;
    use crate::sim::simulate_trajectory;
    use crate::SimError;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            replicates: 32,
            max_years: 6,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn ensemble_holds_one_row_per_replicate() {
        let ensemble = run_ensemble(&small_config()).unwrap();
        assert_eq!(ensemble.replicates(), 32);
        assert_eq!(ensemble.years(), 7);
        assert_eq!(ensemble.trajectories().count(), 32);
        assert!(ensemble.trajectories().all(|t| t.len() == 7));
    }

    #[test]
    fn same_master_seed_reproduces_the_ensemble() {
        let config = small_config();
        let a = run_ensemble(&config).unwrap();
        let b = run_ensemble(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_master_seeds_change_the_ensemble() {
        let a = run_ensemble(&small_config()).unwrap();
        let b = run_ensemble(&SimulationConfig {
            seed: 43,
            ..small_config()
        })
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn replicates_do_not_collapse_onto_one_stream() {
        let ensemble = run_ensemble(&small_config()).unwrap();
        let first = ensemble.trajectory(0);
        assert!((1..ensemble.replicates()).any(|r| ensemble.trajectory(r) != first));
    }

    #[test]
    fn replicate_seeds_never_collide_over_a_run() {
        let mut seeds: Vec<u64> = (0..10_000).map(|r| replicate_seed(42, r)).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 10_000);
    }

    #[test]
    fn rows_match_standalone_trajectory_runs() {
        let config = small_config();
        let ensemble = run_ensemble(&config).unwrap();

        for replicate in [0_usize, 7, 31] {
            let mut rng =
                ChaCha8Rng::seed_from_u64(replicate_seed(config.seed, replicate as u64));
            let expected = simulate_trajectory(&config, &mut rng);
            assert_eq!(ensemble.trajectory(replicate), expected.as_slice());
        }
    }

    #[test]
    fn disabled_stochasticity_makes_replicates_identical() {
        let config = SimulationConfig {
            env_stoch: false,
            ..small_config()
        };
        let ensemble = run_ensemble(&config).unwrap();
        let first = ensemble.trajectory(0).to_vec();
        assert!(ensemble.trajectories().all(|t| t == first.as_slice()));
    }

    #[test]
    fn invalid_configuration_fails_before_any_simulation() {
        let config = SimulationConfig {
            k: 0.0,
            ..small_config()
        };
        assert!(matches!(
            run_ensemble(&config),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn from_trajectories_rejects_ragged_rows() {
        let err = Ensemble::from_trajectories(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            SimError::LengthMismatch {
                context: "trajectory",
                expected: 2,
                got: 1,
            }
        ));
    }

    #[test]
    fn from_trajectories_rejects_rows_without_year_zero() {
        let err = Ensemble::from_trajectories(vec![Vec::new()]).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn empty_ensemble_has_no_trajectories() {
        let ensemble = Ensemble::from_trajectories(Vec::new()).unwrap();
        assert!(ensemble.is_empty());
        assert_eq!(ensemble.trajectories().count(), 0);
    }
}
