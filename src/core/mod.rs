//! Core data types for vanilla option pricing
//!
//! Defines fundamental types:
//! - VanillaOption: validated contract (spot, strike, expiry, rate, vol)
//! - OptionType / ExerciseStyle: call-put and European-American flags
//! - Greeks: first-order sensitivities
//! - PricingError: error taxonomy

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
