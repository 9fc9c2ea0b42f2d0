//! Error types for the pricing library.

use thiserror::Error;

use crate::portfolio::PositionId;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Position {0} not found in portfolio")]
    PositionNotFound(PositionId),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
