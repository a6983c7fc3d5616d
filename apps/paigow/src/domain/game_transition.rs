use serde::Serialize;

use crate::domain::state::{Game, GameState, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: i32,
    pub state: GameState,
    pub deal_number: u32,
    pub winner: Option<PlayerId>,
}

impl From<&Game> for GameLifecycleView {
    fn from(game: &Game) -> Self {
        Self {
            version: game.lock_version,
            state: game.state,
            deal_number: game.deal_number,
            winner: game.winner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameTransition {
    /// Edge-triggered: the first deal went out.
    GameStarted,

    /// Edge-triggered: a new deal went out.
    DealStarted { deal_number: u32 },

    /// Edge-triggered: SettingTiles -> ComparingHands (or straight to GameOver)
    DealSettled { deal_number: u32 },

    /// Edge-triggered: a winner was recorded.
    GameCompleted { winner: PlayerId },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Game start (no deal -> first deal)
    if before.deal_number == 0 && after.deal_number > 0 {
        transitions.push(GameTransition::GameStarted);
    }

    // 2. New deal
    if after.deal_number > before.deal_number {
        transitions.push(GameTransition::DealStarted {
            deal_number: after.deal_number,
        });
    }

    // 3. Settlement; a settle that also ends the game skips ComparingHands,
    // and a deal whose seats are all computers settles as it is dealt
    let settled_now = before.state == GameState::SettingTiles
        || after.deal_number > before.deal_number;
    if settled_now
        && matches!(
            after.state,
            GameState::ComparingHands | GameState::GameOver
        )
    {
        transitions.push(GameTransition::DealSettled {
            deal_number: after.deal_number,
        });
    }

    // 4. Game end (!GameOver -> GameOver)
    if before.state != GameState::GameOver && after.state == GameState::GameOver {
        if let Some(winner) = after.winner {
            transitions.push(GameTransition::GameCompleted { winner });
        }
    }

    transitions
}
