//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::edge::Side;

/// Domain errors represent layout and tree invariant violations.
/// These are independent of rendering and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("color must be in range 0 - 255, got {0}")]
    InvalidColor(i64),

    #[error("there is no {0} child node")]
    MissingChild(Side),

    #[error("node not found in tree")]
    NodeNotFound,

    #[error("{0} child slot already occupied")]
    SlotOccupied(Side),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
