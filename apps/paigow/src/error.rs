use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, StateKind, ValidationKind};
use crate::errors::ErrorCode;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Invalid state: {detail}")]
    InvalidState { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::InvalidState { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::InvalidState { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail,
        }
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn invalid_state(code: ErrorCode, detail: String) -> Self {
        Self::InvalidState { code, detail }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn conflict(code: ErrorCode, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidTile => ErrorCode::InvalidTile,
                    ValidationKind::InvalidSet => ErrorCode::InvalidSet,
                    ValidationKind::InvalidDeck => ErrorCode::InvalidDeck,
                    ValidationKind::NotARearrangement => ErrorCode::NotARearrangement,
                    ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::InvalidState(kind, detail) => {
                let code = match kind {
                    StateKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                    StateKind::NotAllReady => ErrorCode::NotAllReady,
                    StateKind::GameOver => ErrorCode::GameOver,
                    StateKind::Other(_) => ErrorCode::PhaseMismatch,
                };
                AppError::invalid_state(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Game => ErrorCode::GameNotFound,
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Deal => ErrorCode::DealNotFound,
                    NotFoundKind::Setter => ErrorCode::UnknownSetter,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::OptimisticLock => ErrorCode::OptimisticLock,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
