//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the data model's contracts.
/// These are independent of CLI and configuration concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid token in literal: {token}")]
    InvalidToken { token: String },

    #[error("invalid roman digit: {0}")]
    InvalidRomanDigit(char),

    #[error("node not found in arena: {0:?}")]
    NodeNotFound(Index),

    #[error("position out of bounds: {position} (list length {len})")]
    PositionOutOfBounds { position: usize, len: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
