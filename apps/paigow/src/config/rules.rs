use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{DEFAULT_GOAL_SCORE, DEFAULT_TIER_POINTS, MAX_PLAYERS};
use crate::error::AppError;

/// Tunable scoring rules for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Cumulative score that ends the game when held by a unique leader
    pub goal_score: u32,
    /// Points awarded for winning tier 1, 2 and 3
    pub tier_points: [u32; 3],
    pub player_count: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            goal_score: DEFAULT_GOAL_SCORE,
            tier_points: DEFAULT_TIER_POINTS,
            player_count: MAX_PLAYERS,
        }
    }
}

impl GameRules {
    /// Build rules from `PAIGOW_GOAL_SCORE` and `PAIGOW_PLAYER_COUNT`, falling
    /// back to defaults for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let goal_score = match optional_var("PAIGOW_GOAL_SCORE")? {
            Some(raw) => parse_positive("PAIGOW_GOAL_SCORE", &raw)?,
            None => defaults.goal_score,
        };
        let player_count = match optional_var("PAIGOW_PLAYER_COUNT")? {
            Some(raw) => parse_positive("PAIGOW_PLAYER_COUNT", &raw)? as usize,
            None => defaults.player_count,
        };

        Self {
            goal_score,
            player_count,
            ..defaults
        }
        .validated()
    }

    /// Check the rules fit the 32-tile deck.
    pub fn validated(self) -> Result<Self, AppError> {
        if !(2..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(AppError::config(format!(
                "player_count must be between 2 and {MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.goal_score == 0 {
            return Err(AppError::config("goal_score must be positive".to_string()));
        }
        Ok(self)
    }

    /// Points for the tier at `index` (0-based); zero beyond the third tier.
    pub fn points_for_tier(&self, index: usize) -> u32 {
        self.tier_points.get(index).copied().unwrap_or(0)
    }
}

fn optional_var(name: &str) -> Result<Option<String>, AppError> {
    match env::var(name) {
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(AppError::config(format!(
            "{name} must be a positive integer, got '{raw}'"
        ))),
    }
}
