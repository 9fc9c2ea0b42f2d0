//! Pricing Models
//!
//! Three independent models over the shared contract, plus analytic Greeks:
//! - Black-Scholes closed form (European)
//! - CRR binomial lattice (European and American)
//! - Monte Carlo simulation (European, seeded and reproducible)
//!
//! Each model exposes a free `price` function, so callers address them by
//! module path: `black_scholes::price`, `binomial::price`, `monte_carlo::price`.

pub mod binomial;
pub mod black_scholes;
pub mod greeks;
pub mod monte_carlo;

pub use monte_carlo::McEstimate;
