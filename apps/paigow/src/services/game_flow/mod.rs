//! Game flow service: runs the domain state machine against a `GameStore`.
//!
//! Every mutation runs under a per-game lock, on a clone of the stored game,
//! and is saved only if it succeeds. Computer players are set by the
//! service's tile setter as soon as tiles are dealt, and a deal settles
//! itself once every player is ready.

mod deal_lifecycle;
mod mutation;
mod player_actions;

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;

pub use mutation::GameFlowMutationResult;

use crate::ai::{create_setter, HouseWay, TileSetter};
use crate::domain::scoring::{DealSettlement, GameStatus};
use crate::domain::state::GameId;
use crate::error::AppError;
use crate::services::store::{GameStore, InMemoryGameStore};

/// What happened when a deal settled inside a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettleOutcome {
    pub settlement: DealSettlement,
    pub status: GameStatus,
}

pub struct GameFlowService {
    store: Arc<dyn GameStore>,
    locks: DashMap<GameId, Arc<Mutex<()>>>,
    computer_setter: Box<dyn TileSetter>,
}

impl GameFlowService {
    /// Service whose computer players set tiles the house way.
    pub fn new(store: Arc<dyn GameStore>) -> Result<Self, AppError> {
        Ok(Self::with_setter(store, create_setter(HouseWay::NAME, None)?))
    }

    pub fn with_setter(store: Arc<dyn GameStore>, computer_setter: Box<dyn TileSetter>) -> Self {
        Self {
            store,
            locks: DashMap::new(),
            computer_setter,
        }
    }

    pub fn in_memory() -> Result<Self, AppError> {
        Self::new(Arc::new(InMemoryGameStore::new()))
    }

    /// Lock for `game_id`, created on first use. Entries live as long as the
    /// service, like the games in the in-memory store; a store that evicts
    /// games should drop the matching lock here too.
    fn game_lock(&self, game_id: GameId) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
