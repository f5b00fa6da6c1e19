//! Metropolis acceptance criterion.

use rand::Rng;

/// `exp(x)`, saturating to `0.0` when the result is not finite.
///
/// Overflow and NaN inputs both map to zero so that an out-of-range
/// exponent reads as "never accept" instead of poisoning the comparison.
pub fn safe_exp(x: f64) -> f64 {
    let y = x.exp();
    if y.is_finite() {
        y
    } else {
        0.0
    }
}

/// Probability of moving to a candidate `delta` above the current energy.
///
/// Improving and equal moves always return exactly `1.0`. Worsening moves
/// return `exp(-delta / temperature)`, which underflows to `0.0` for
/// extreme ratios.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    safe_exp(-delta / temperature)
}

/// Draws `u ~ U[0, 1)` and accepts when `u < p`.
pub fn accepts<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    rng.random::<f64>() < acceptance_probability(delta, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_safe_exp_regular() {
        assert!((safe_exp(1.0) - std::f64::consts::E).abs() < 1e-12);
        assert_eq!(safe_exp(0.0), 1.0);
    }

    #[test]
    fn test_safe_exp_saturates() {
        assert_eq!(safe_exp(1e6), 0.0);
        assert_eq!(safe_exp(f64::INFINITY), 0.0);
        assert_eq!(safe_exp(f64::NAN), 0.0);
        assert_eq!(safe_exp(-1e12), 0.0);
    }

    #[test]
    fn test_improving_moves_certain() {
        for temperature in [1e-9, 1e-3, 1.0, 1e6] {
            assert_eq!(acceptance_probability(0.0, temperature), 1.0);
            assert_eq!(acceptance_probability(-5.0, temperature), 1.0);
            assert_eq!(acceptance_probability(-1e300, temperature), 1.0);
        }
    }

    #[test]
    fn test_extreme_ratio_rejects() {
        assert_eq!(acceptance_probability(1e6, 1e-6), 0.0);
    }

    #[test]
    fn test_nan_delta_rejects() {
        assert_eq!(acceptance_probability(f64::NAN, 1.0), 0.0);
    }

    #[test]
    fn test_metropolis_value() {
        let p = acceptance_probability(2.0, 4.0);
        assert!((p - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_accepts_rate_matches_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 20_000;
        let hits = (0..trials).filter(|_| accepts(1.0, 1.0, &mut rng)).count();
        let rate = hits as f64 / trials as f64;
        let expected = (-1.0f64).exp();
        assert!(
            (rate - expected).abs() < 0.02,
            "acceptance rate {rate} far from {expected}"
        );
    }

    #[test]
    fn test_accepts_improvement_always() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!((0..1000).all(|_| accepts(-0.1, 1e-9, &mut rng)));
    }
}
