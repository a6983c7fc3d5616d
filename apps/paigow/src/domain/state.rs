use serde::{Deserialize, Serialize};

use crate::config::rules::GameRules;
use crate::domain::dealing::Deck;
use crate::domain::rules::SETS_PER_PLAYER;
use crate::domain::sets::Set;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub type GameId = i64;
pub type PlayerId = u8; // seat index, 0-based

/// Who decides how a player's tiles are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    /// Set automatically as soon as the tiles are dealt.
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: PlayerKind::Computer,
        }
    }
}

/// Coarse game phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the next deal.
    AboutToDeal,
    /// Tiles are out; players are arranging them.
    SettingTiles,
    /// The current deal is settled and its results can be shown.
    ComparingHands,
    /// A winner has been recorded. Terminal.
    GameOver,
}

/// One player's progress through one deal. Moves forward only, except
/// that previewing can be undone while the player is still setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealState {
    NotRequested,
    Setting,
    Previewing,
    Ready,
}

/// A player's participation in one deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInDeal {
    pub player: PlayerId,
    pub deal_number: u32,
    /// Sets as dealt, used to validate submitted arrangements.
    pub dealt: [Set; SETS_PER_PLAYER],
    /// Submitted sets, best tier first.
    pub arranged: Option<[Set; SETS_PER_PLAYER]>,
    pub state: DealState,
    /// Points earned in this deal; zero until it is settled.
    pub points: u32,
}

/// A dealt permutation. The deck alone is enough to replay every player's sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub number: u32,
    pub deck: Deck,
    pub settled: bool,
}

/// Entire game aggregate, sufficient for the pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub rules: GameRules,
    /// Base seed; each deal's shuffle seed is derived from it.
    pub seed: u64,
    pub state: GameState,
    /// Number of the latest deal (1-based); 0 before the first deal.
    pub deal_number: u32,
    /// Players in seat order.
    pub players: Vec<Player>,
    pub deals: Vec<Deal>,
    pub records: Vec<PlayerInDeal>,
    pub winner: Option<PlayerId>,
    pub lock_version: i32,
}

impl Game {
    /// New game waiting for its first deal. Player ids must match their seats.
    pub fn new(
        id: GameId,
        name: impl Into<String>,
        players: Vec<Player>,
        rules: GameRules,
        seed: u64,
    ) -> Result<Self, DomainError> {
        if players.len() != rules.player_count {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "Game needs {} players, got {}",
                    rules.player_count,
                    players.len()
                ),
            ));
        }
        if let Some((seat, p)) = players
            .iter()
            .enumerate()
            .find(|(seat, p)| usize::from(p.id) != *seat)
        {
            return Err(DomainError::validation(
                ValidationKind::Other("seat".into()),
                format!("Player {} sits in seat {seat}", p.id),
            ));
        }
        Ok(Self {
            id,
            name: name.into(),
            rules,
            seed,
            state: GameState::AboutToDeal,
            deal_number: 0,
            players,
            deals: Vec::new(),
            records: Vec::new(),
            winner: None,
            lock_version: 1,
        })
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.players.get(usize::from(id)).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {id} not in game"))
        })
    }

    pub fn deal(&self, number: u32) -> Result<&Deal, DomainError> {
        self.deals
            .iter()
            .find(|d| d.number == number)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Deal, format!("Deal {number}")))
    }

    pub fn current_deal(&self) -> Result<&Deal, DomainError> {
        self.deal(self.deal_number)
    }

    pub fn record(&self, player: PlayerId, deal_number: u32) -> Option<&PlayerInDeal> {
        self.records
            .iter()
            .find(|r| r.player == player && r.deal_number == deal_number)
    }

    pub(crate) fn record_index(&self, player: PlayerId, deal_number: u32) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.player == player && r.deal_number == deal_number)
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
