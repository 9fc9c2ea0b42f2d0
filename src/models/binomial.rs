//! Binomial Lattice Model
//!
//! Cox-Ross-Rubinstein recombining tree. The only model here that supports
//! early exercise: American contracts compare the discounted continuation
//! value with immediate exercise at every node, European contracts get pure
//! backward induction and converge to the Black-Scholes price as the step
//! count grows.
//!
//! O(steps^2) time, O(steps) space.

use crate::core::{ExerciseStyle, VanillaOption};

/// Default number of tree steps
pub const DEFAULT_STEPS: usize = 100;

/// Price a vanilla option on a CRR binomial tree.
///
/// `steps` is clamped to at least 1.
pub fn price(option: &VanillaOption, steps: usize) -> f64 {
    let steps = steps.max(1);
    let dt = option.expiry / steps as f64;
    let u = (option.vol * dt.sqrt()).exp();
    let d = 1.0 / u;
    let p = ((option.rate * dt).exp() - d) / (u - d);
    let disc = (-option.rate * dt).exp();
    let ratio = u / d;

    let early_exercise = option.exercise == ExerciseStyle::American;

    // Terminal values: payoff at S * u^j * d^(steps - j), built with the
    // multiplicative recurrence S * d^steps * (u/d)^j.
    let mut values = vec![0.0_f64; steps + 1];
    {
        let mut st = option.spot * d.powi(steps as i32);
        for value in values.iter_mut() {
            *value = option.payoff(st);
            st *= ratio;
        }
    }

    // Backward induction; node spots at level i start from S * d^i.
    for i in (0..steps).rev() {
        for j in 0..=i {
            values[j] = disc * (p * values[j + 1] + (1.0 - p) * values[j]);
        }
        if early_exercise {
            let mut st = option.spot * d.powi(i as i32);
            for value in values.iter_mut().take(i + 1) {
                *value = value.max(option.payoff(st));
                st *= ratio;
            }
        }
    }

    values[0]
}

/// Price with the default step count.
pub fn price_default(option: &VanillaOption) -> f64 {
    price(option, DEFAULT_STEPS)
}
