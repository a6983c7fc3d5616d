//! Tile setter trait definition.

use std::fmt;

use crate::domain::rules::SETS_PER_PLAYER;
use crate::domain::sets::Set;
use crate::error::AppError;

/// Errors that can occur while arranging tiles.
#[derive(Debug)]
pub enum SetterError {
    /// Setter encountered an internal error
    Internal(String),
    /// Setter produced sets that are not a rearrangement of the dealt ones
    InvalidArrangement(String),
}

impl fmt::Display for SetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetterError::Internal(msg) => write!(f, "setter internal error: {msg}"),
            SetterError::InvalidArrangement(msg) => write!(f, "setter invalid arrangement: {msg}"),
        }
    }
}

impl std::error::Error for SetterError {}

impl From<SetterError> for AppError {
    fn from(err: SetterError) -> Self {
        AppError::internal(format!("Tile setter error: {err}"))
    }
}

/// Arranges one player's dealt tiles.
///
/// Implementations receive the three sets as dealt and return three sets,
/// best tier first. Each returned set must hold the same four tiles as a
/// distinct dealt set; positions within it decide the two hands.
pub trait TileSetter: Send + Sync {
    fn name(&self) -> &'static str;

    fn arrange(&self, dealt: &[Set; SETS_PER_PLAYER]) -> Result<[Set; SETS_PER_PLAYER], SetterError>;
}

/// Check that `arranged` only reorders `dealt`: each set must hold the
/// tiles of a distinct dealt set.
pub fn validate_arrangement(
    dealt: &[Set; SETS_PER_PLAYER],
    arranged: &[Set; SETS_PER_PLAYER],
) -> Result<(), SetterError> {
    let mut used = [false; SETS_PER_PLAYER];
    for set in arranged {
        let Some(i) = (0..SETS_PER_PLAYER).find(|&i| !used[i] && dealt[i].same_tiles_as(set)) else {
            return Err(SetterError::InvalidArrangement(format!(
                "{} is not one of the dealt sets",
                set.chars()
            )));
        };
        used[i] = true;
    }
    Ok(())
}
