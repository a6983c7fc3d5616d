//! In-memory game simulator for evaluating tile setters.
//!
//! Drives the domain operations directly on a `Game` value, skipping the
//! store and the per-game locks the service uses.

use paigow::ai::{validate_arrangement, TileSetter};
use paigow::domain::deal_flow::{advance_to_next_deal, deal_tiles, request_tiles, submit_arrangement};
use paigow::domain::scoring::{check_game_over, scores_as_of, settle_deal, DealSettlement, GameStatus};
use paigow::domain::state::{Game, Player, PlayerId};
use paigow::{AppError, GameRules};

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Cumulative scores in seat order
    pub final_scores: Vec<u32>,
    /// `None` when the deal cap ran out first
    pub winner: Option<PlayerId>,
    /// One settlement per deal played
    pub deals: Vec<DealSettlement>,
}

/// In-memory game simulator.
pub struct Simulator {
    game: Game,
    max_deals: u32,
}

impl Simulator {
    /// Create a game waiting for its first deal, one computer player per setter.
    pub fn new(
        game_id: i64,
        seed: u64,
        rules: GameRules,
        setter_names: &[&str],
        max_deals: u32,
    ) -> Result<Self, SimulatorError> {
        let players = setter_names
            .iter()
            .enumerate()
            .map(|(seat, name)| Player::computer(seat as PlayerId, *name))
            .collect();
        let game = Game::new(game_id, format!("simulation {game_id}"), players, rules, seed)
            .map_err(|e| SimulatorError::Domain(AppError::from(e)))?;
        Ok(Self { game, max_deals })
    }

    /// Play deals until somebody wins or the deal cap is reached.
    pub fn simulate_game(
        mut self,
        setters: &[Box<dyn TileSetter>],
    ) -> Result<GameResult, SimulatorError> {
        if setters.len() != self.game.players.len() {
            return Err(SimulatorError::InvalidState(format!(
                "{} setters for {} seats",
                setters.len(),
                self.game.players.len()
            )));
        }

        let mut deals = Vec::new();
        let mut winner = None;
        while self.game.deal_number < self.max_deals {
            deals.push(self.play_deal(setters)?);
            match check_game_over(&mut self.game).map_err(domain)? {
                GameStatus::Won { winner: w } => {
                    winner = Some(w);
                    break;
                }
                GameStatus::InProgress => advance_to_next_deal(&mut self.game).map_err(domain)?,
            }
        }

        Ok(GameResult {
            final_scores: scores_as_of(&self.game, self.game.deal_number),
            winner,
            deals,
        })
    }

    fn play_deal(&mut self, setters: &[Box<dyn TileSetter>]) -> Result<DealSettlement, SimulatorError> {
        deal_tiles(&mut self.game).map_err(domain)?;
        for (seat, setter) in setters.iter().enumerate() {
            let player = seat as PlayerId;
            let dealt = request_tiles(&mut self.game, player).map_err(domain)?;
            let arranged = setter
                .arrange(&dealt)
                .and_then(|arranged| validate_arrangement(&dealt, &arranged).map(|()| arranged))
                .map_err(|e| SimulatorError::Setter(player, setter.name(), e.to_string()))?;
            submit_arrangement(&mut self.game, player, arranged).map_err(domain)?;
        }
        settle_deal(&mut self.game).map_err(domain)
    }
}

fn domain(err: paigow::errors::domain::DomainError) -> SimulatorError {
    SimulatorError::Domain(err.into())
}

#[derive(Debug)]
pub enum SimulatorError {
    /// A setter failed for the seat
    Setter(PlayerId, &'static str, String),
    /// Domain logic rejected an operation
    Domain(AppError),
    InvalidState(String),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Setter(seat, name, err) => {
                write!(f, "Setter error (seat {seat}, {name}): {err}")
            }
            SimulatorError::Domain(err) => write!(f, "Domain error: {err}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
