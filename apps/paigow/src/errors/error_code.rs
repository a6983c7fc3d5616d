//! Error codes for the Pai Gow engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes surfaced by [`crate::AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input validation
    /// Unknown tile identity character
    InvalidTile,
    /// Set string is not four distinct tiles
    InvalidSet,
    /// Deck string is not a permutation of all 32 tiles
    InvalidDeck,
    /// Submitted set is not a rearrangement of a dealt set
    NotARearrangement,
    /// Player count outside the supported range
    InvalidPlayerCount,
    /// General validation error
    ValidationError,

    // State machine
    /// Operation not valid in the current game or deal state
    PhaseMismatch,
    /// Settlement requested before every player is ready
    NotAllReady,
    /// Game is already over
    GameOver,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    DealNotFound,
    UnknownSetter,
    NotFound,

    // Conflicts
    OptimisticLock,
    Conflict,

    // System Errors
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTile => "INVALID_TILE",
            Self::InvalidSet => "INVALID_SET",
            Self::InvalidDeck => "INVALID_DECK",
            Self::NotARearrangement => "NOT_A_REARRANGEMENT",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::NotAllReady => "NOT_ALL_READY",
            Self::GameOver => "GAME_OVER",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::DealNotFound => "DEAL_NOT_FOUND",
            Self::UnknownSetter => "UNKNOWN_SETTER",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
