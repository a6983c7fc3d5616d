use tracing::warn;

use super::GameFlowService;
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::state::{Game, GameId};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug)]
pub struct GameFlowMutationResult<T = ()> {
    pub final_game: Game,
    pub old_version: i32,
    pub transitions: Vec<GameTransition>,
    pub outcome: T,
}

impl<T> GameFlowMutationResult<T> {
    pub fn final_version(&self) -> i32 {
        self.final_game.lock_version
    }
}

impl GameFlowService {
    /// Apply `mutation` to a copy of the stored game while holding the game's
    /// lock. The copy is saved, with a bumped `lock_version`, only if the
    /// mutation succeeds and changed something.
    pub(super) fn run_mutation<T, F>(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
        action: &'static str,
        mutation: F,
    ) -> Result<GameFlowMutationResult<T>, AppError>
    where
        F: FnOnce(&GameFlowService, &mut Game) -> Result<T, AppError>,
    {
        let lock = self.game_lock(game_id);
        let _guard = lock.lock();

        let stored = self.store.load(game_id)?;
        let old_version = stored.lock_version;

        if let Some(expected) = expected_version {
            if expected != old_version {
                warn!(game_id, action, expected, actual = old_version, "Stale lock version");
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game was modified concurrently (expected version {expected}, actual version {old_version}). Please refresh and retry."
                    ),
                )
                .into());
            }
        }

        let before = GameLifecycleView::from(&stored);
        let mut game = stored.clone();
        let outcome = mutation(self, &mut game).inspect_err(|e| {
            warn!(game_id, action, code = %e.code(), error = %e, "Mutation rejected");
        })?;

        if game != stored {
            game.lock_version = old_version + 1;
            self.store.save(&game)?;
        }

        let after = GameLifecycleView::from(&game);
        let transitions = derive_game_transitions(&before, &after);

        Ok(GameFlowMutationResult {
            final_game: game,
            old_version,
            transitions,
            outcome,
        })
    }
}
