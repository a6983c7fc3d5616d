use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::deal_flow::all_ready;
use crate::domain::rules::SETS_PER_PLAYER;
use crate::domain::sets::{Outcome, Set};
use crate::domain::state::{Game, GameState, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind, StateKind};

/// Tier-by-tier results of one arrangement against another, as a
/// `W`/`.`/`L` string from `mine`'s side.
pub fn win_lose_string(mine: &[Set; SETS_PER_PLAYER], theirs: &[Set; SETS_PER_PLAYER]) -> String {
    mine.iter()
        .zip(theirs)
        .map(|(m, t)| m.compare_against(t).as_char())
        .collect()
}

/// Results of `player` against `opponent` in a deal, re-derived from their
/// stored arrangements.
pub fn deal_result(
    game: &Game,
    player: PlayerId,
    opponent: PlayerId,
    deal_number: u32,
) -> Result<String, DomainError> {
    let arranged = |p: PlayerId| {
        game.record(p, deal_number)
            .and_then(|r| r.arranged)
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Deal,
                    format!("No arrangement for player {p} in deal {deal_number}"),
                )
            })
    };
    Ok(win_lose_string(&arranged(player)?, &arranged(opponent)?))
}

/// One player's share of a settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettlement {
    pub player: PlayerId,
    /// Results against each opponent in seat order.
    pub results: Vec<(PlayerId, String)>,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealSettlement {
    pub deal_number: u32,
    pub players: Vec<PlayerSettlement>,
}

/// Compare every pair of players tier by tier and award the tier points.
/// Requires every player `Ready`; moves the game to `ComparingHands`.
pub fn settle_deal(game: &mut Game) -> Result<DealSettlement, DomainError> {
    if game.state != GameState::SettingTiles {
        return Err(DomainError::invalid_state(
            StateKind::PhaseMismatch,
            format!("Cannot settle in {:?}", game.state),
        ));
    }
    if !all_ready(game) {
        return Err(DomainError::invalid_state(
            StateKind::NotAllReady,
            format!("Deal {} still has players setting tiles", game.deal_number),
        ));
    }

    let number = game.deal_number;
    let mut players = Vec::with_capacity(game.players.len());
    for me in &game.players {
        let mut results = Vec::new();
        let mut points = 0;
        for them in game.players.iter().filter(|p| p.id != me.id) {
            let result = deal_result(game, me.id, them.id, number)?;
            points += result
                .chars()
                .enumerate()
                .filter(|(_, c)| *c == Outcome::Win.as_char())
                .map(|(tier, _)| game.rules.points_for_tier(tier))
                .sum::<u32>();
            results.push((them.id, result));
        }
        players.push(PlayerSettlement {
            player: me.id,
            results,
            points,
        });
    }

    for settled in &players {
        if let Some(index) = game.record_index(settled.player, number) {
            game.records[index].points = settled.points;
        }
    }
    if let Some(deal) = game.deals.iter_mut().find(|d| d.number == number) {
        deal.settled = true;
    }
    game.state = GameState::ComparingHands;

    info!(
        game_id = game.id,
        deal_number = number,
        points = ?players.iter().map(|p| p.points).collect::<Vec<_>>(),
        "Deal settled"
    );
    Ok(DealSettlement {
        deal_number: number,
        players,
    })
}

/// Cumulative score per player, in seat order, over settled deals up to
/// and including `deal_number`.
pub fn scores_as_of(game: &Game, deal_number: u32) -> Vec<u32> {
    let settled = |n: u32| game.deals.iter().any(|d| d.number == n && d.settled);
    game.players
        .iter()
        .map(|p| {
            game.records
                .iter()
                .filter(|r| r.player == p.id && r.deal_number <= deal_number)
                .filter(|r| settled(r.deal_number))
                .map(|r| r.points)
                .sum()
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won { winner: PlayerId },
}

/// Record a winner once exactly one player holds the top score and it
/// reaches the goal. A tie at the top keeps the game going.
pub fn check_game_over(game: &mut Game) -> Result<GameStatus, DomainError> {
    match (game.state, game.winner) {
        (GameState::GameOver, Some(winner)) => return Ok(GameStatus::Won { winner }),
        (GameState::ComparingHands, _) => {}
        (state, _) => {
            return Err(DomainError::invalid_state(
                StateKind::PhaseMismatch,
                format!("Cannot check for a winner in {state:?}"),
            ))
        }
    }

    let scores = scores_as_of(game, game.deal_number);
    let Some(&top) = scores.iter().max() else {
        return Ok(GameStatus::InProgress);
    };
    let leaders: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] == top).collect();
    if top < game.rules.goal_score || leaders.len() != 1 {
        return Ok(GameStatus::InProgress);
    }

    let winner = game.players[leaders[0]].id;
    game.winner = Some(winner);
    game.state = GameState::GameOver;
    info!(game_id = game.id, winner, score = top, "Game over");
    Ok(GameStatus::Won { winner })
}
