use crate::config::rules::GameRules;
use crate::domain::deal_flow::{
    advance_to_next_deal, all_ready, deal_tiles, ensure_player_in_deal, preview, request_tiles,
    submit_arrangement, unpreview,
};
use crate::domain::dealing::deal_sets;
use crate::domain::sets::make_set;
use crate::domain::state::{DealState, Game, GameState, Player};
use crate::domain::strategy::auto_set;
use crate::domain::strategy_trace::NoTrace;
use crate::errors::domain::{DomainError, NotFoundKind, StateKind, ValidationKind};

fn new_game(seed: u64) -> Game {
    Game::new(
        1,
        "test",
        vec![Player::human(0, "ann"), Player::human(1, "bob")],
        GameRules::default(),
        seed,
    )
    .unwrap()
}

fn dealt_game(seed: u64) -> Game {
    let mut game = new_game(seed);
    deal_tiles(&mut game).unwrap();
    game
}

#[test]
fn deal_moves_to_setting_tiles() {
    let mut game = new_game(5);
    assert_eq!(deal_tiles(&mut game).unwrap(), 1);
    assert_eq!(game.state, GameState::SettingTiles);
    assert_eq!(game.deal_number, 1);
    assert_eq!(game.deals.len(), 1);
    assert_eq!(game.records.len(), 2);
    for p in 0..2u8 {
        let record = game.record(p, 1).unwrap();
        assert_eq!(record.state, DealState::NotRequested);
        let expected = deal_sets(&game.deals[0].deck, usize::from(p), 2).unwrap();
        assert_eq!(record.dealt, expected);
    }
}

#[test]
fn dealing_twice_is_rejected_without_changes() {
    let mut game = dealt_game(5);
    let before = game.clone();
    let err = deal_tiles(&mut game).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::PhaseMismatch, _)
    ));
    assert_eq!(game, before);
}

#[test]
fn no_deals_after_game_over() {
    let mut game = new_game(5);
    game.state = GameState::GameOver;
    let err = deal_tiles(&mut game).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(StateKind::GameOver, _)));
}

#[test]
fn deals_replay_from_the_game_seed() {
    let a = dealt_game(99);
    let b = dealt_game(99);
    assert_eq!(a.deals[0].deck, b.deals[0].deck);
    assert_ne!(a.deals[0].deck, dealt_game(100).deals[0].deck);
}

#[test]
fn ensure_player_in_deal_is_lazy_and_idempotent() {
    let mut game = dealt_game(3);
    game.records.clear();
    let index = ensure_player_in_deal(&mut game, 1).unwrap();
    assert_eq!(game.records.len(), 1);
    assert_eq!(ensure_player_in_deal(&mut game, 1).unwrap(), index);
    assert_eq!(game.records.len(), 1);

    let err = ensure_player_in_deal(&mut game, 9).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn computer_seats_wait_for_their_caller() {
    let mut game = Game::new(
        1,
        "test",
        vec![Player::human(0, "ann"), Player::computer(1, "house")],
        GameRules::default(),
        3,
    )
    .unwrap();
    deal_tiles(&mut game).unwrap();
    let index = ensure_player_in_deal(&mut game, 1).unwrap();
    assert_eq!(game.records[index].state, DealState::NotRequested);
    assert!(game.records[index].arranged.is_none());
    assert!(!all_ready(&game));

    let dealt = request_tiles(&mut game, 1).unwrap();
    submit_arrangement(&mut game, 1, auto_set(&dealt, &NoTrace)).unwrap();
    assert_eq!(game.record(1, 1).unwrap().state, DealState::Ready);
    assert!(!all_ready(&game));
}

#[test]
fn readiness_walks_forward() {
    let mut game = dealt_game(11);
    let dealt = request_tiles(&mut game, 0).unwrap();
    assert_eq!(game.record(0, 1).unwrap().state, DealState::Setting);

    preview(&mut game, 0).unwrap();
    assert_eq!(game.record(0, 1).unwrap().state, DealState::Previewing);
    preview(&mut game, 0).unwrap();
    unpreview(&mut game, 0).unwrap();
    assert_eq!(game.record(0, 1).unwrap().state, DealState::Setting);

    submit_arrangement(&mut game, 0, auto_set(&dealt, &NoTrace)).unwrap();
    assert_eq!(game.record(0, 1).unwrap().state, DealState::Ready);

    // Ready players cannot step back, and requesting again changes nothing.
    assert!(preview(&mut game, 0).is_err());
    assert!(unpreview(&mut game, 0).is_err());
    request_tiles(&mut game, 0).unwrap();
    assert_eq!(game.record(0, 1).unwrap().state, DealState::Ready);
}

#[test]
fn preview_needs_requested_tiles() {
    let mut game = dealt_game(11);
    let err = preview(&mut game, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::PhaseMismatch, _)
    ));
}

#[test]
fn submission_may_reorder_tiers_and_tiles() {
    let mut game = dealt_game(21);
    let dealt = game.record(1, 1).unwrap().dealt;
    let reversed = [dealt[2], dealt[0], dealt[1]].map(|s| {
        let [a, b, c, d] = s.tiles;
        make_set([d, c, b, a])
    });
    submit_arrangement(&mut game, 1, reversed).unwrap();
    assert_eq!(game.record(1, 1).unwrap().arranged, Some(reversed));

    // Resubmitting while still setting replaces the arrangement.
    submit_arrangement(&mut game, 1, dealt).unwrap();
    assert_eq!(game.record(1, 1).unwrap().arranged, Some(dealt));
}

#[test]
fn substituted_tile_is_rejected_without_changes() {
    let mut game = dealt_game(21);
    let mine = game.record(0, 1).unwrap().dealt;
    let theirs = game.record(1, 1).unwrap().dealt;
    let mut forged = mine;
    forged[0].tiles[0] = theirs[0].tiles[0];

    let before = game.clone();
    let err = submit_arrangement(&mut game, 0, forged).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::NotARearrangement, _)
    ));
    assert_eq!(game, before);
}

#[test]
fn tiles_cannot_move_between_sets() {
    let mut game = dealt_game(8);
    let mut swapped = game.record(0, 1).unwrap().dealt;
    let moved = swapped[0].tiles[0];
    swapped[0].tiles[0] = swapped[1].tiles[0];
    swapped[1].tiles[0] = moved;
    assert!(submit_arrangement(&mut game, 0, swapped).is_err());
}

#[test]
fn all_ready_and_advance() {
    let mut game = dealt_game(4);
    assert!(!all_ready(&game));
    for p in 0..2u8 {
        let dealt = game.record(p, 1).unwrap().dealt;
        submit_arrangement(&mut game, p, dealt).unwrap();
    }
    assert!(all_ready(&game));

    // Only a settled deal can be left behind.
    assert!(advance_to_next_deal(&mut game).is_err());
    game.state = GameState::ComparingHands;
    advance_to_next_deal(&mut game).unwrap();
    assert_eq!(game.state, GameState::AboutToDeal);
    assert_eq!(deal_tiles(&mut game).unwrap(), 2);
    assert!(!all_ready(&game));
}
