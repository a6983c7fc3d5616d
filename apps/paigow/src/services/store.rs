//! Game storage seam. The service only needs whole-game load and save.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::domain::state::{Game, GameId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};

pub trait GameStore: Send + Sync {
    /// Store a new game under a fresh id and return it with that id.
    fn create(&self, game: Game) -> Result<Game, AppError>;

    fn load(&self, id: GameId) -> Result<Game, AppError>;

    /// Replace the stored game with the same id.
    fn save(&self, game: &Game) -> Result<(), AppError>;
}

/// Process-local store. Games are cloned in and out.
#[derive(Debug)]
pub struct InMemoryGameStore {
    games: DashMap<GameId, Game>,
    next_id: AtomicI64,
}

impl Default for InMemoryGameStore {
    fn default() -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn game_not_found(id: GameId) -> AppError {
    DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found")).into()
}

impl GameStore for InMemoryGameStore {
    fn create(&self, mut game: Game) -> Result<Game, AppError> {
        game.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.games.insert(game.id, game.clone());
        Ok(game)
    }

    fn load(&self, id: GameId) -> Result<Game, AppError> {
        self.games
            .get(&id)
            .map(|g| g.clone())
            .ok_or_else(|| game_not_found(id))
    }

    fn save(&self, game: &Game) -> Result<(), AppError> {
        match self.games.get_mut(&game.id) {
            Some(mut stored) => {
                *stored = game.clone();
                Ok(())
            }
            None => Err(game_not_found(game.id)),
        }
    }
}
