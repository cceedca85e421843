//! Error types for rate calculations.

use bigdecimal::BigDecimal;
use thiserror::Error;

/// A specialized Result type for rate calculations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while computing a rate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The radicand is negative, so no real root exists.
    #[error("No real root exists for negative value {value}")]
    NoRealRoot {
        /// The negative radicand.
        value: BigDecimal,
    },

    /// Division by a zero total contribution.
    #[error("Division by zero: total contribution is zero")]
    DivisionByZero,

    /// Numerical overflow.
    #[error("Numerical overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
