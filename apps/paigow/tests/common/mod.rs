#![allow(dead_code)]

// tests/common/mod.rs
use paigow::domain::state::{Game, Player};
use paigow::{GameFlowService, GameRules};

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    paigow_test_support::logging::init();
}

pub fn service() -> GameFlowService {
    GameFlowService::in_memory().expect("in-memory service")
}

/// Seat 0 is a human, seat 1 the house.
pub fn human_vs_house(svc: &GameFlowService, seed: u64) -> Game {
    svc.create_game(
        "human vs house",
        vec![Player::human(0, "ann"), Player::computer(1, "house")],
        GameRules::default(),
        Some(seed),
    )
    .expect("create game")
}

pub fn house_vs_house(svc: &GameFlowService, seed: u64) -> Game {
    svc.create_game(
        "house vs house",
        vec![Player::computer(0, "east"), Player::computer(1, "west")],
        GameRules::default(),
        Some(seed),
    )
    .expect("create game")
}
