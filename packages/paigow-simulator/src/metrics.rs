//! Metrics collection and output for simulation results.

use paigow::domain::scoring::DealSettlement;
use serde::Serialize;

use crate::simulator::GameResult;

const TIERS: usize = 3;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub deals: Vec<DealMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub setters: Vec<String>,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<u32>,
    pub winner: Option<u8>,
    pub deals_played: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DealMetrics {
    pub deal_number: u32,
    pub points: Vec<u32>,
    /// `W`/`.`/`L` strings per seat against each opponent
    pub results: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub setter: String,
    pub total_score: u32,
    /// Deals where this seat scored strictly more than every opponent
    pub deals_won: u32,
    /// Wins per tier, best tier first
    pub tiers_won: [u32; TIERS],
    pub tiers_pushed: [u32; TIERS],
}

/// Flat per-game row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: String,
    pub deals_played: usize,
    pub seat0_score: u32,
    pub seat1_score: u32,
    pub seat0_setter: String,
    pub seat1_setter: String,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    setters: Vec<String>,
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let deals: Vec<DealMetrics> = result.deals.iter().map(build_deal_metrics).collect();
    let player_metrics = setters
        .iter()
        .enumerate()
        .map(|(seat, setter)| build_player_metrics(seat, setter, result))
        .collect();

    GameMetrics {
        game_id,
        seed,
        config: GameConfig {
            setters,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winner: result.winner,
            deals_played: result.deals.len(),
            duration_ms,
        },
        deals,
        player_metrics,
    }
}

fn build_deal_metrics(deal: &DealSettlement) -> DealMetrics {
    DealMetrics {
        deal_number: deal.deal_number,
        points: deal.players.iter().map(|p| p.points).collect(),
        results: deal
            .players
            .iter()
            .map(|p| p.results.iter().map(|(_, r)| r.clone()).collect())
            .collect(),
    }
}

fn build_player_metrics(seat: usize, setter: &str, result: &GameResult) -> PlayerMetrics {
    let mut tiers_won = [0; TIERS];
    let mut tiers_pushed = [0; TIERS];
    let mut deals_won = 0;

    for deal in &result.deals {
        let Some(mine) = deal.players.get(seat) else {
            continue;
        };
        if deal
            .players
            .iter()
            .enumerate()
            .all(|(other, p)| other == seat || mine.points > p.points)
        {
            deals_won += 1;
        }
        for (_, outcome) in &mine.results {
            for (tier, c) in outcome.chars().take(TIERS).enumerate() {
                match c {
                    'W' => tiers_won[tier] += 1,
                    '.' => tiers_pushed[tier] += 1,
                    _ => {}
                }
            }
        }
    }

    PlayerMetrics {
        seat: seat as u8,
        setter: setter.to_string(),
        total_score: result.final_scores.get(seat).copied().unwrap_or(0),
        deals_won,
        tiers_won,
        tiers_pushed,
    }
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let score = |seat: usize| metrics.result.final_scores.get(seat).copied().unwrap_or(0);
        let setter = |seat: usize| metrics.config.setters.get(seat).cloned().unwrap_or_default();
        Self {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics
                .result
                .winner
                .map_or_else(|| "none".to_string(), |w| w.to_string()),
            deals_played: metrics.result.deals_played,
            seat0_score: score(0),
            seat1_score: score(1),
            seat0_setter: setter(0),
            seat1_setter: setter(1),
        }
    }
}
