use tracing::debug;

use super::{GameFlowMutationResult, GameFlowService, SettleOutcome};
use crate::domain::deal_flow;
use crate::domain::rules::SETS_PER_PLAYER;
use crate::domain::sets::Set;
use crate::domain::state::{GameId, PlayerId};
use crate::domain::tiles_parsing::parse_set;
use crate::error::AppError;

impl GameFlowService {
    /// Show a player their dealt sets; they move to `Setting`.
    pub fn request_tiles(
        &self,
        game_id: GameId,
        player: PlayerId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult<[Set; SETS_PER_PLAYER]>, AppError> {
        self.run_mutation(game_id, expected_version, "request_tiles", |_, game| {
            Ok(deal_flow::request_tiles(game, player)?)
        })
    }

    pub fn preview(
        &self,
        game_id: GameId,
        player: PlayerId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.run_mutation(game_id, expected_version, "preview", |_, game| {
            Ok(deal_flow::preview(game, player)?)
        })
    }

    pub fn unpreview(
        &self,
        game_id: GameId,
        player: PlayerId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.run_mutation(game_id, expected_version, "unpreview", |_, game| {
            Ok(deal_flow::unpreview(game, player)?)
        })
    }

    /// Submit a player's three sets, best tier first, as 4-char identities.
    ///
    /// The last player to submit triggers settlement and the game-over check
    /// inside the same mutation.
    pub fn submit_arrangement(
        &self,
        game_id: GameId,
        player: PlayerId,
        sets: [&str; SETS_PER_PLAYER],
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult<Option<SettleOutcome>>, AppError> {
        let parsed = [parse_set(sets[0])?, parse_set(sets[1])?, parse_set(sets[2])?];
        debug!(game_id, player, ?sets, "Submitting arrangement");

        self.run_mutation(game_id, expected_version, "submit_arrangement", |svc, game| {
            deal_flow::submit_arrangement(game, player, parsed)?;
            svc.settle_when_ready(game)
        })
    }
}
