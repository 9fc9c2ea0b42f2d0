//! Option contract definitions
//!
//! Represents a single vanilla option with all pricing inputs fixed at
//! construction. Contracts are validated once and treated as immutable by
//! every pricing model and Greek function.

use serde::{Deserialize, Serialize};

use crate::core::{PricingError, PricingResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Exercise style
///
/// An explicit contract attribute: the portfolio dispatches to the matching
/// pricing model per position rather than the caller deciding implicitly by
/// which model it invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseStyle {
    European,
    American,
}

/// Vanilla option contract.
///
/// Invariant: `spot`, `strike`, `expiry` and `vol` are strictly positive and
/// all fields are finite. `new` enforces this, so pricing functions never
/// have to guard against division by zero or `ln` of a non-positive number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VanillaOption {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualized volatility (sigma)
    pub vol: f64,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Exercise style
    pub exercise: ExerciseStyle,
}

impl VanillaOption {
    /// Create a validated contract.
    ///
    /// Rejects non-positive spot, strike, expiry or volatility and any
    /// non-finite input, so downstream pricing is NaN-free by construction.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
        exercise: ExerciseStyle,
    ) -> PricingResult<Self> {
        for (name, value) in [
            ("spot", spot),
            ("strike", strike),
            ("expiry", expiry),
            ("vol", vol),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::invalid_input(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if !rate.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "rate must be finite, got {}",
                rate
            )));
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            vol,
            option_type,
            exercise,
        })
    }

    /// Create a new European option
    pub fn european(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        Self::new(
            spot,
            strike,
            expiry,
            rate,
            vol,
            option_type,
            ExerciseStyle::European,
        )
    }

    /// Create a new American option
    pub fn american(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        Self::new(
            spot,
            strike,
            expiry,
            rate,
            vol,
            option_type,
            ExerciseStyle::American,
        )
    }

    /// Payoff at maturity for a given terminal underlying price
    pub fn payoff(&self, terminal_spot: f64) -> f64 {
        self.option_type.intrinsic(terminal_spot, self.strike)
    }

    /// Log-moneyness: ln(K/S)
    pub fn log_moneyness(&self) -> f64 {
        (self.strike / self.spot).ln()
    }

    /// Is this option in the money at its current spot?
    pub fn is_itm(&self) -> bool {
        match self.option_type {
            OptionType::Call => self.spot > self.strike,
            OptionType::Put => self.spot < self.strike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);

        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_payoff() {
        let call =
            VanillaOption::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
        assert_eq!(call.payoff(112.5), 12.5);
        assert_eq!(call.payoff(95.0), 0.0);

        let put = VanillaOption::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
        assert_eq!(put.payoff(95.0), 5.0);
        assert_eq!(put.payoff(112.5), 0.0);
    }

    #[test]
    fn test_validation() {
        // Each non-positive core input is rejected
        assert!(VanillaOption::european(0.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).is_err());
        assert!(VanillaOption::european(100.0, -5.0, 1.0, 0.05, 0.2, OptionType::Call).is_err());
        assert!(VanillaOption::european(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).is_err());
        assert!(VanillaOption::european(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call).is_err());

        // NaN and infinity are rejected everywhere, including the rate
        assert!(
            VanillaOption::european(f64::NAN, 100.0, 1.0, 0.05, 0.2, OptionType::Call).is_err()
        );
        assert!(
            VanillaOption::european(100.0, 100.0, 1.0, f64::INFINITY, 0.2, OptionType::Call)
                .is_err()
        );

        // Negative rates are legitimate
        assert!(
            VanillaOption::european(100.0, 100.0, 1.0, -0.01, 0.2, OptionType::Put).is_ok()
        );
    }

    #[test]
    fn test_moneyness() {
        let call =
            VanillaOption::european(110.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
        assert!(call.is_itm());
        assert!(call.log_moneyness() < 0.0);

        let put = VanillaOption::european(110.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
        assert!(!put.is_itm());
    }
}
