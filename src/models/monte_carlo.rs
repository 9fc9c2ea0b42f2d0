//! Monte Carlo Model
//!
//! European pricing by simulation under the risk-neutral measure. The payoff
//! depends only on the terminal price, so each path is a single lognormal
//! draw: S_T = S * exp((r - sigma^2/2) T + sigma sqrt(T) Z).
//!
//! The generator is constructed locally from the caller's seed, so repeated
//! or concurrent calls are independently reproducible with no shared state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::core::VanillaOption;

/// Default number of simulated paths
pub const DEFAULT_PATHS: usize = 100_000;

/// Default RNG seed
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo price with its sampling standard error.
///
/// The standard error shrinks as O(1/sqrt(paths)); a rough 95% confidence
/// interval is `price +/- 1.96 * std_error`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct McEstimate {
    pub price: f64,
    pub std_error: f64,
}

/// Monte Carlo estimate of a European option price.
///
/// `paths` is clamped to at least 1. Deterministic for a given seed.
pub fn estimate(option: &VanillaOption, paths: usize, seed: u64) -> McEstimate {
    let paths = paths.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let drift = (option.rate - 0.5 * option.vol * option.vol) * option.expiry;
    let diffusion = option.vol * option.expiry.sqrt();
    let df = (-option.rate * option.expiry).exp();

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for _ in 0..paths {
        let z: f64 = StandardNormal.sample(&mut rng);
        let terminal = option.spot * (drift + diffusion * z).exp();
        let payoff = option.payoff(terminal);
        sum += payoff;
        sum_sq += payoff * payoff;
    }

    let n = paths as f64;
    let mean = sum / n;
    let std_error = if paths > 1 {
        let variance = ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
        df * (variance / n).sqrt()
    } else {
        0.0
    };

    McEstimate {
        price: df * mean,
        std_error,
    }
}

/// Monte Carlo price of a European option.
pub fn price(option: &VanillaOption, paths: usize, seed: u64) -> f64 {
    estimate(option, paths, seed).price
}

/// Price with the default path count and seed.
pub fn price_default(option: &VanillaOption) -> f64 {
    price(option, DEFAULT_PATHS, DEFAULT_SEED)
}
