//! Portfolio aggregation
//!
//! An ordered book of option positions with stable identifiers. Valuation
//! dispatches per position to the model matching its exercise style:
//! European contracts use the Black-Scholes closed form, American contracts
//! the binomial lattice. Greeks are the analytic European formulas scaled by
//! quantity (an approximation for American positions).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ExerciseStyle, Greeks, PricingError, PricingResult, VanillaOption};
use crate::models::{binomial, black_scholes, greeks};

/// Stable opaque identifier for a position.
///
/// Assigned by the owning portfolio, never reused within it. Removal is
/// addressed by id, so callers need not track index shifts across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(u64);

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single portfolio position: a contract and a signed quantity.
///
/// Positive quantity is long, negative is short. Immutable once created via
/// [`Portfolio::add`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    id: PositionId,
    contract: VanillaOption,
    quantity: f64,
}

impl Position {
    pub fn id(&self) -> PositionId {
        self.id
    }

    pub fn contract(&self) -> &VanillaOption {
        &self.contract
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Mark-to-model value: model price times quantity, model chosen by the
    /// contract's exercise style.
    pub fn value(&self) -> f64 {
        let unit_price = match self.contract.exercise {
            ExerciseStyle::European => black_scholes::price(&self.contract),
            ExerciseStyle::American => binomial::price_default(&self.contract),
        };
        unit_price * self.quantity
    }

    /// Position Greeks: analytic per-contract Greeks scaled by quantity.
    pub fn greeks(&self) -> Greeks {
        greeks::greeks(&self.contract).scale(self.quantity)
    }
}

/// An ordered collection of option positions.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    positions: Vec<Position>,
    next_id: u64,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position; returns its stable id. O(1).
    pub fn add(&mut self, contract: VanillaOption, quantity: f64) -> PositionId {
        let id = PositionId(self.next_id);
        self.next_id += 1;
        self.positions.push(Position {
            id,
            contract,
            quantity,
        });
        id
    }

    /// Append a single long contract (quantity 1).
    pub fn add_default(&mut self, contract: VanillaOption) -> PositionId {
        self.add(contract, 1.0)
    }

    /// Remove a position by id, returning it.
    ///
    /// Preserves insertion order of the remaining positions, O(n).
    pub fn remove(&mut self, id: PositionId) -> PricingResult<Position> {
        match self.positions.iter().position(|p| p.id == id) {
            Some(index) => Ok(self.positions.remove(index)),
            None => Err(PricingError::PositionNotFound(id)),
        }
    }

    /// Positions in insertion order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total mark-to-model value: sum of per-position value.
    pub fn total_value(&self) -> f64 {
        self.positions.iter().map(Position::value).sum()
    }

    /// Net portfolio Greeks: sum of quantity-weighted position Greeks.
    pub fn greeks(&self) -> Greeks {
        self.positions
            .iter()
            .fold(Greeks::default(), |acc, p| acc.add(&p.greeks()))
    }
}
