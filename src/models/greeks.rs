//! Analytic Greeks
//!
//! Closed-form first-order sensitivities over the Black-Scholes
//! parameterization. Each function recomputes d1/d2 from the contract the
//! same way the closed-form price does.
//!
//! The formulas assume European exercise; applied to an American contract
//! priced on the lattice they are an approximation, not a derivative of the
//! lattice price itself.

use crate::core::{Greeks, OptionType, VanillaOption};
use crate::models::black_scholes::{d1, d2, norm_cdf, norm_pdf};

/// Delta: dV/dS
pub fn delta(option: &VanillaOption) -> f64 {
    match option.option_type {
        OptionType::Call => norm_cdf(d1(option)),
        OptionType::Put => norm_cdf(d1(option)) - 1.0,
    }
}

/// Gamma: d2V/dS2, identical for calls and puts
pub fn gamma(option: &VanillaOption) -> f64 {
    norm_pdf(d1(option)) / (option.spot * option.vol * option.expiry.sqrt())
}

/// Vega: dV/dsigma, identical for calls and puts
pub fn vega(option: &VanillaOption) -> f64 {
    option.spot * norm_pdf(d1(option)) * option.expiry.sqrt()
}

/// Theta: dV/dt, per year (negative for long vanilla positions)
pub fn theta(option: &VanillaOption) -> f64 {
    let decay = -option.spot * norm_pdf(d1(option)) * option.vol / (2.0 * option.expiry.sqrt());
    let df = (-option.rate * option.expiry).exp();
    let carry = option.rate * option.strike * df;

    match option.option_type {
        OptionType::Call => decay - carry * norm_cdf(d2(option)),
        OptionType::Put => decay + carry * norm_cdf(-d2(option)),
    }
}

/// Rho: dV/dr
pub fn rho(option: &VanillaOption) -> f64 {
    let df = (-option.rate * option.expiry).exp();
    match option.option_type {
        OptionType::Call => option.strike * option.expiry * df * norm_cdf(d2(option)),
        OptionType::Put => -option.strike * option.expiry * df * norm_cdf(-d2(option)),
    }
}

/// All five Greeks in one pass
pub fn greeks(option: &VanillaOption) -> Greeks {
    Greeks::new(
        delta(option),
        gamma(option),
        vega(option),
        theta(option),
        rho(option),
    )
}
