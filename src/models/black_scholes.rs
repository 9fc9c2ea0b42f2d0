//! Black-Scholes Model
//!
//! Closed-form European option pricing under constant volatility and rate.
//! Serves as the baseline model: the binomial lattice converges to it for
//! European contracts and the Monte Carlo estimator is benchmarked against
//! it. The `d1`/`d2` helpers here are shared with the analytic Greeks.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{OptionType, VanillaOption};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(option: &VanillaOption) -> f64 {
    let VanillaOption {
        spot,
        strike,
        expiry,
        rate,
        vol,
        ..
    } = *option;
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / (vol * expiry.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(option: &VanillaOption) -> f64 {
    d1(option) - option.vol * option.expiry.sqrt()
}

/// Black-Scholes European option price.
///
/// Assumes European exercise regardless of the contract's nominal style;
/// for an American contract this is a lower-bound approximation and the
/// lattice model should be used instead.
pub fn price(option: &VanillaOption) -> f64 {
    let d1 = d1(option);
    let d2 = d2(option);
    let df = (-option.rate * option.expiry).exp();

    match option.option_type {
        OptionType::Call => option.spot * norm_cdf(d1) - option.strike * df * norm_cdf(d2),
        OptionType::Put => option.strike * df * norm_cdf(-d2) - option.spot * norm_cdf(-d1),
    }
}
