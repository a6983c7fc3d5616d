use crate::config::rules::GameRules;
use crate::domain::deal_flow::{deal_tiles, submit_arrangement};
use crate::domain::dealing::Deck;
use crate::domain::scoring::{
    check_game_over, deal_result, scores_as_of, settle_deal, win_lose_string, GameStatus,
};
use crate::domain::sets::Set;
use crate::domain::state::{Deal, DealState, Game, GameState, Player, PlayerInDeal};
use crate::domain::strategy::auto_set;
use crate::domain::strategy_trace::NoTrace;
use crate::domain::tiles_parsing::parse_set;
use crate::errors::domain::{DomainError, StateKind};

fn sets(ids: [&str; 3]) -> [Set; 3] {
    ids.map(|s| parse_set(s).unwrap())
}

fn new_game() -> Game {
    Game::new(
        1,
        "scoring",
        vec![Player::human(0, "ann"), Player::human(1, "bob")],
        GameRules::default(),
        17,
    )
    .unwrap()
}

/// A game in `ComparingHands` whose settled deals earned the given points.
fn game_with_settled_points(points: &[[u32; 2]]) -> Game {
    let mut game = new_game();
    let dealt = sets(["aAbB", "cCdD", "eEfF"]);
    for (i, deal_points) in points.iter().enumerate() {
        let number = i as u32 + 1;
        game.deals.push(Deal {
            number,
            deck: Deck::ordered(),
            settled: true,
        });
        for (p, pts) in deal_points.iter().enumerate() {
            game.records.push(PlayerInDeal {
                player: p as u8,
                deal_number: number,
                dealt,
                arranged: Some(dealt),
                state: DealState::Ready,
                points: *pts,
            });
        }
        game.deal_number = number;
    }
    game.state = GameState::ComparingHands;
    game
}

#[test]
fn win_lose_string_per_tier() {
    let mine = sets(["aAbB", "aAop", "cCdD"]);
    let theirs = sets(["cCdD", "bBcC", "aAbB"]);
    assert_eq!(win_lose_string(&mine, &theirs), "W.L");
    assert_eq!(win_lose_string(&theirs, &mine), "L.W");
}

#[test]
fn settle_awards_tier_points() {
    let mut game = new_game();
    deal_tiles(&mut game).unwrap();
    for p in 0..2u8 {
        let dealt = game.record(p, 1).unwrap().dealt;
        submit_arrangement(&mut game, p, auto_set(&dealt, &NoTrace)).unwrap();
    }

    let settlement = settle_deal(&mut game).unwrap();
    assert_eq!(game.state, GameState::ComparingHands);
    assert!(game.deals[0].settled);

    for share in &settlement.players {
        let (opponent, result) = &share.results[0];
        assert_eq!(*result, deal_result(&game, share.player, *opponent, 1).unwrap());
        let expected: u32 = result
            .chars()
            .zip([3, 2, 1])
            .filter(|(c, _)| *c == 'W')
            .map(|(_, pts)| pts)
            .sum();
        assert_eq!(share.points, expected);
        assert_eq!(game.record(share.player, 1).unwrap().points, expected);
    }
    let totals = scores_as_of(&game, 1);
    assert_eq!(totals, settlement.players.iter().map(|p| p.points).collect::<Vec<_>>());
    assert!(totals.iter().sum::<u32>() <= 6);
}

#[test]
fn settle_before_everyone_is_ready_is_rejected() {
    let mut game = new_game();
    deal_tiles(&mut game).unwrap();
    let dealt = game.record(0, 1).unwrap().dealt;
    submit_arrangement(&mut game, 0, dealt).unwrap();

    let before = game.clone();
    let err = settle_deal(&mut game).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(StateKind::NotAllReady, _)));
    assert_eq!(game, before);
}

#[test]
fn scores_only_count_settled_deals_up_to_n() {
    let mut game = game_with_settled_points(&[[3, 2], [6, 0], [1, 5]]);
    assert_eq!(scores_as_of(&game, 0), vec![0, 0]);
    assert_eq!(scores_as_of(&game, 1), vec![3, 2]);
    assert_eq!(scores_as_of(&game, 2), vec![9, 2]);
    assert_eq!(scores_as_of(&game, 3), vec![10, 7]);

    game.deals[2].settled = false;
    assert_eq!(scores_as_of(&game, 3), vec![9, 2]);
}

#[test]
fn unique_leader_at_goal_wins() {
    // 21 against 18
    let mut game = game_with_settled_points(&[[6, 0], [6, 0], [3, 6], [6, 6], [0, 6]]);
    assert_eq!(scores_as_of(&game, 5), vec![21, 18]);
    assert_eq!(
        check_game_over(&mut game).unwrap(),
        GameStatus::Won { winner: 0 }
    );
    assert_eq!(game.state, GameState::GameOver);
    assert_eq!(game.winner, Some(0));

    // Asking again reports the same winner.
    assert_eq!(
        check_game_over(&mut game).unwrap(),
        GameStatus::Won { winner: 0 }
    );
}

#[test]
fn tie_at_goal_keeps_playing() {
    let mut game = game_with_settled_points(&[[6, 6], [6, 6], [6, 6], [6, 6]]);
    assert_eq!(scores_as_of(&game, 4), vec![24, 24]);
    assert_eq!(check_game_over(&mut game).unwrap(), GameStatus::InProgress);
    assert_eq!(game.state, GameState::ComparingHands);
    assert_eq!(game.winner, None);
}

#[test]
fn below_goal_keeps_playing() {
    let mut game = game_with_settled_points(&[[6, 0], [6, 0], [6, 0]]);
    assert_eq!(check_game_over(&mut game).unwrap(), GameStatus::InProgress);
}

#[test]
fn goal_comes_from_the_rules() {
    let mut game = game_with_settled_points(&[[6, 0]]);
    game.rules.goal_score = 6;
    assert_eq!(
        check_game_over(&mut game).unwrap(),
        GameStatus::Won { winner: 0 }
    );
}

#[test]
fn check_game_over_needs_a_settled_deal() {
    let mut game = new_game();
    deal_tiles(&mut game).unwrap();
    let err = check_game_over(&mut game).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::PhaseMismatch, _)
    ));
}
