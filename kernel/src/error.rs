//! Typed failures for model construction.

use thiserror::Error;

/// Failure building kernel model values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// `0` carries no proposition and no polarity.
    #[error("0 is not a signed literal")]
    ZeroLiteral,
    /// An action index outside the catalog was referenced.
    #[error("action index {index} is not in the catalog")]
    UnknownAction { index: usize },
}
