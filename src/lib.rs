//! # Vanilla Options - Pricing and Portfolio Risk
//!
//! An options pricing library for European and American vanillas: three
//! independent pricing models over a shared, validated contract type, the
//! five first-order Greeks in closed form, and quantity-weighted portfolio
//! aggregation.
//!
//! ## Key Components
//!
//! - **Contract**: [`core::VanillaOption`], immutable and validated at
//!   construction (spot, strike, expiry, vol all strictly positive)
//! - **Black-Scholes**: closed-form European prices
//! - **Binomial lattice**: CRR tree with early exercise for American
//!   contracts
//! - **Monte Carlo**: seeded, reproducible European estimator with a
//!   sampling standard error
//! - **Greeks**: analytic delta, gamma, vega, theta, rho
//! - **Portfolio**: ordered position book with stable ids, dispatching each
//!   position to the model matching its exercise style
//!
//! ## Usage
//!
//! ```rust
//! use vanilla_options::prelude::*;
//!
//! let call = VanillaOption::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//!
//! let analytic = black_scholes::price(&call);
//! let lattice = binomial::price(&call, 1000);
//! let simulated = monte_carlo::price(&call, 100_000, 42);
//! assert!((analytic - lattice).abs() / analytic < 0.01);
//! assert!((analytic - simulated).abs() / analytic < 0.02);
//!
//! let sens = greeks::greeks(&call);
//! assert!(sens.delta > 0.5 && sens.delta < 0.7);
//!
//! let mut book = Portfolio::new();
//! let id = book.add(call, 10.0);
//! assert!(book.total_value() > 0.0);
//! book.remove(id).unwrap();
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - Fetch market data or calibrate volatility (vol is a given input)
//! - Price path-dependent or multi-asset payoffs
//! - Persist or display anything; callers own I/O and formatting

pub mod core;
pub mod models;
pub mod portfolio;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::core::{
        ExerciseStyle, Greeks, OptionType, PricingError, PricingResult, VanillaOption,
    };
    pub use crate::models::{binomial, black_scholes, greeks, monte_carlo, McEstimate};
    pub use crate::portfolio::{Portfolio, Position, PositionId};
}

pub use crate::core::{PricingError, PricingResult};
