use rand::Rng;
use rand_distr::StandardNormal;

/// Draw the realized per-capita growth rate for one year.
///
/// With `stochastic` set, the intrinsic rate is drawn fresh from
/// Normal(`mu`, `sigma`); otherwise it is exactly `mu`. Density dependence
/// then scales the draw by `1 - abundance / k`, so the result shrinks toward
/// zero as abundance approaches the carrying capacity and turns negative
/// above it. The caller guarantees `k` is nonzero.
pub fn sample_growth_rate(
    mu: f64,
    sigma: f64,
    abundance: f64,
    k: f64,
    stochastic: bool,
    rng: &mut impl Rng,
) -> f64 {
    let realized_mu = if stochastic {
        let z: f64 = rng.sample(StandardNormal);
        mu + sigma * z
    } else {
        mu
    };

    realized_mu * (1.0 - abundance / k)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::sample_growth_rate;

    #[test]
    fn deterministic_rate_follows_the_density_term() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = sample_growth_rate(1.1, 0.5, 250.0, 500.0, false, &mut rng);
        assert!((r - 1.1 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn rate_vanishes_at_carrying_capacity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = sample_growth_rate(1.1, 0.5, 500.0, 500.0, false, &mut rng);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn rate_turns_negative_above_carrying_capacity() {
        // sigma = 0 keeps the stochastic branch deterministic.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = sample_growth_rate(1.1, 0.0, 800.0, 500.0, true, &mut rng);
        assert!(r < 0.0);
    }

    #[test]
    fn consecutive_stochastic_draws_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let a = sample_growth_rate(1.1, 0.5, 10.0, 500.0, true, &mut rng);
        let b = sample_growth_rate(1.1, 0.5, 10.0, 500.0, true, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn stochastic_draws_center_on_mu() {
        // Zero abundance leaves the density term at one, exposing the raw
        // Normal(mu, sigma) draw.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = 20_000;
        let total: f64 = (0..n)
            .map(|_| sample_growth_rate(1.1, 0.5, 0.0, 500.0, true, &mut rng))
            .sum();
        let mean = total / f64::from(n);
        assert!((mean - 1.1).abs() < 0.02, "sample mean was {mean}");
    }
}
