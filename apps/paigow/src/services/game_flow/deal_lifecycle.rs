use rand::Rng;
use tracing::{debug, info};

use super::{GameFlowMutationResult, GameFlowService, SettleOutcome};
use crate::ai::validate_arrangement;
use crate::config::rules::GameRules;
use crate::domain::deal_flow::{self, all_ready};
use crate::domain::scoring::{self, DealSettlement, GameStatus};
use crate::domain::state::{Game, GameId, GameState, Player, PlayerId, PlayerKind};
use crate::error::AppError;

impl GameFlowService {
    /// Create and store a game waiting for its first deal.
    ///
    /// Without a seed one is drawn from the thread RNG; every deal is then
    /// derived from it.
    pub fn create_game(
        &self,
        name: &str,
        players: Vec<Player>,
        rules: GameRules,
        seed: Option<u64>,
    ) -> Result<Game, AppError> {
        let rules = rules.validated()?;
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let game = self.store.create(Game::new(0, name, players, rules, seed)?)?;
        info!(game_id = game.id, name, seed, "Game created");
        Ok(game)
    }

    pub fn game_snapshot(&self, game_id: GameId) -> Result<Game, AppError> {
        self.store.load(game_id)
    }

    /// Deal the next deck, set computer players' tiles and settle at once
    /// if nobody else needs to act.
    pub fn deal_tiles(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult<Option<SettleOutcome>>, AppError> {
        self.run_mutation(game_id, expected_version, "deal_tiles", |svc, game| {
            deal_flow::deal_tiles(game)?;
            svc.arrange_computer_players(game)?;
            svc.settle_when_ready(game)
        })
    }

    /// Settle the current deal if every player is ready; `None` otherwise.
    pub fn settle_if_both_ready(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult<Option<DealSettlement>>, AppError> {
        self.run_mutation(game_id, expected_version, "settle", |_, game| {
            if game.state != GameState::SettingTiles || !all_ready(game) {
                return Ok(None);
            }
            Ok(Some(scoring::settle_deal(game)?))
        })
    }

    pub fn check_game_over(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult<GameStatus>, AppError> {
        self.run_mutation(game_id, expected_version, "check_game_over", |_, game| {
            Ok(scoring::check_game_over(game)?)
        })
    }

    pub fn advance_to_next_deal(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.run_mutation(game_id, expected_version, "advance", |_, game| {
            Ok(deal_flow::advance_to_next_deal(game)?)
        })
    }

    /// Cumulative scores in seat order as of `deal_number`.
    pub fn scores_as_of(&self, game_id: GameId, deal_number: u32) -> Result<Vec<u32>, AppError> {
        Ok(scoring::scores_as_of(&self.store.load(game_id)?, deal_number))
    }

    /// `W`/`.`/`L` per tier for `player` against `opponent` in a deal.
    pub fn deal_result(
        &self,
        game_id: GameId,
        player: PlayerId,
        opponent: PlayerId,
        deal_number: u32,
    ) -> Result<String, AppError> {
        let game = self.store.load(game_id)?;
        Ok(scoring::deal_result(&game, player, opponent, deal_number)?)
    }

    fn arrange_computer_players(&self, game: &mut Game) -> Result<(), AppError> {
        let computers: Vec<PlayerId> = game
            .players
            .iter()
            .filter(|p| p.kind == PlayerKind::Computer)
            .map(|p| p.id)
            .collect();
        for player in computers {
            let dealt = deal_flow::request_tiles(game, player)?;
            let arranged = self.computer_setter.arrange(&dealt)?;
            validate_arrangement(&dealt, &arranged)?;
            debug!(
                game_id = game.id,
                player,
                setter = self.computer_setter.name(),
                arranged = ?arranged.map(|s| s.chars()),
                "Computer player set tiles"
            );
            deal_flow::submit_arrangement(game, player, arranged)?;
        }
        Ok(())
    }

    /// Settle and look for a winner once every player is ready.
    pub(super) fn settle_when_ready(
        &self,
        game: &mut Game,
    ) -> Result<Option<SettleOutcome>, AppError> {
        if !all_ready(game) {
            return Ok(None);
        }
        let settlement = scoring::settle_deal(game)?;
        let status = scoring::check_game_over(game)?;
        Ok(Some(SettleOutcome { settlement, status }))
    }
}
