//! The three forgetting curves and the derivation of their decay constant.
//!
//! Each curve takes the previous weight and the elapsed time since the last
//! event and returns a raw, pre-threshold weight. A reinforcement first
//! decays the old weight, then boosts it toward 1.0 by `mu`.

use crate::config::ForgettingKind;

/// Linear forgetting.
pub fn linear(reinforced: bool, previous: f64, elapsed: f64, lambda: f64, mu: f64) -> f64 {
    if reinforced {
        mu + (previous - elapsed * lambda) * (1.0 - mu)
    } else {
        previous - elapsed * lambda
    }
}

/// Power-law forgetting.
///
/// Elapsed times below one unit leave the weight unchanged: a power of
/// something smaller than one would produce a weight increase.
pub fn power(reinforced: bool, previous: f64, elapsed: f64, lambda: f64, mu: f64) -> f64 {
    if elapsed < 1.0 {
        return previous;
    }
    if reinforced {
        mu + previous * elapsed.powf(-lambda) * (1.0 - mu)
    } else {
        previous * elapsed.powf(-lambda)
    }
}

/// Exponential forgetting.
pub fn exponential(reinforced: bool, previous: f64, elapsed: f64, lambda: f64, mu: f64) -> f64 {
    if reinforced {
        mu + previous * (-lambda * elapsed).exp() * (1.0 - mu)
    } else {
        previous * (-lambda * elapsed).exp()
    }
}

/// Dispatch to the matching curve.
pub fn raw_weight(
    kind: ForgettingKind,
    reinforced: bool,
    previous: f64,
    elapsed: f64,
    lambda: f64,
    mu: f64,
) -> f64 {
    match kind {
        ForgettingKind::Linear => linear(reinforced, previous, elapsed, lambda, mu),
        ForgettingKind::Power => power(reinforced, previous, elapsed, lambda, mu),
        ForgettingKind::Exponential => exponential(reinforced, previous, elapsed, lambda, mu),
    }
}

/// Derive λ from the configured lifetime: the time for a weight to decay
/// from `mu` to `theta` with no reinforcement. `edge_lifetime` is already
/// scaled into event-timestamp ticks.
pub fn derive_lambda(kind: ForgettingKind, mu: f64, theta: f64, edge_lifetime: f64) -> f64 {
    match kind {
        ForgettingKind::Exponential => (1.0 / edge_lifetime) * (mu / theta).ln(),
        ForgettingKind::Power => (mu / theta).ln() * edge_lifetime.ln(),
        ForgettingKind::Linear => (1.0 / edge_lifetime) * (mu - theta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_decays_by_elapsed_lambda() {
        let weight = linear(false, 0.5, 5.0, 0.04, 0.5);
        assert!((weight - 0.3).abs() < 1e-12);
    }

    #[test]
    fn linear_reinforcement_boosts_toward_one() {
        let weight = linear(true, 0.5, 0.0, 0.04, 0.5);
        assert!((weight - 0.75).abs() < 1e-12);
    }

    #[test]
    fn power_sub_unit_elapsed_is_identity() {
        assert_eq!(power(false, 0.7, 0.5, 1.3, 0.4), 0.7);
        // The guard also applies to reinforcements.
        assert_eq!(power(true, 0.7, 0.99, 1.3, 0.4), 0.7);
    }

    #[test]
    fn power_decays_for_elapsed_at_least_one() {
        let weight = power(false, 0.8, 4.0, 1.0, 0.4);
        assert!((weight - 0.2).abs() < 1e-12);
    }

    #[test]
    fn exponential_decay_matches_closed_form() {
        let weight = exponential(false, 0.6, 2.0, 0.5, 0.3);
        assert!((weight - 0.6 * (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn exponential_lambda_reaches_theta_at_lifetime() {
        let (mu, theta, lifetime) = (0.4, 0.1, 100.0);
        let lambda = derive_lambda(ForgettingKind::Exponential, mu, theta, lifetime);
        let weight = exponential(false, mu, lifetime, lambda, mu);
        assert!((weight - theta).abs() < 1e-9);
    }

    #[test]
    fn linear_lambda_reaches_theta_at_lifetime() {
        let (mu, theta, lifetime) = (0.5, 0.1, 10.0);
        let lambda = derive_lambda(ForgettingKind::Linear, mu, theta, lifetime);
        let weight = linear(false, mu, lifetime, lambda, mu);
        assert!((weight - theta).abs() < 1e-12);
    }
}
