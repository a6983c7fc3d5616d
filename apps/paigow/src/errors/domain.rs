//! Domain-level error type used across the engine and the game flow service.
//!
//! This error type knows nothing about how a caller presents failures.
//! Service entry points return `Result<T, crate::error::AppError>` and
//! convert from `DomainError` using `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Malformed input kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidTile,
    InvalidSet,
    InvalidDeck,
    NotARearrangement,
    InvalidPlayerCount,
    Other(String),
}

/// Illegal state transition kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    PhaseMismatch,
    NotAllReady,
    GameOver,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Deal,
    Setter,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed tile identities or a submission that is not a rearrangement
    Validation(ValidationKind, String),
    /// Operation not allowed in the current game or deal state
    InvalidState(StateKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::InvalidState(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn invalid_state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::InvalidState(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
}
