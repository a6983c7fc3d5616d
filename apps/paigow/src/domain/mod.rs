//! Domain layer: the scoring engine and the per-game state machine.

pub mod comparator;
pub mod deal_flow;
pub mod dealing;
pub mod hand_rankings;
pub mod hands;
pub mod sets;
pub mod strategy;
pub mod strategy_trace;
pub mod tiles_parsing;
pub mod tiles_serde;
pub mod tiles_types;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_deal_flow;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_hands;
#[cfg(test)]
mod tests_props_hands;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_sets;

// Re-exports for ergonomics
pub use dealing::{deal_all, deal_sets, Deck};
pub use hands::{beats, classify, make_hand, ranking_value, Hand, Tier};
pub use scoring::{check_game_over, scores_as_of, settle_deal, win_lose_string, GameStatus};
pub use seed_derivation::derive_dealing_seed;
pub use sets::{make_set, Outcome, Set};
pub use state::{Deal, DealState, Game, GameId, GameState, Player, PlayerId, PlayerInDeal, PlayerKind};
pub use strategy::{
    auto_set, choose_partition, choose_partition_chars, rank_three_sets, rank_three_sets_chars,
};
pub use strategy_trace::{NoTrace, RecordingTrace, StrategyEvent, StrategyTrace, TracingTrace};
pub use tiles_parsing::{parse_deck, parse_set, parse_tile};
pub use tiles_types::{all_tiles, Tile, TileKind};
