//! Dealing tests: replaying a stored deck into per-player sets.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::{deal_all, deal_sets, Deck};
use crate::domain::tiles_parsing::parse_deck;
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::{DomainError, ValidationKind};

const ORDERED: &str = "abcdefghijklmnopABCDEFGHIJKLMNOP";

#[test]
fn two_players_take_alternate_slices() {
    let deck = parse_deck(ORDERED).unwrap();
    let first = deal_sets(&deck, 0, 2).unwrap().map(|s| s.chars());
    let second = deal_sets(&deck, 1, 2).unwrap().map(|s| s.chars());
    assert_eq!(first, ["abcd", "ijkl", "ABCD"].map(String::from));
    assert_eq!(second, ["efgh", "mnop", "EFGH"].map(String::from));
}

#[test]
fn replaying_a_stored_deck_gives_the_same_sets() {
    let stored = Deck::shuffled(42).chars();
    let once = deal_all(&parse_deck(&stored).unwrap(), 2).unwrap();
    let again = deal_all(&parse_deck(&stored).unwrap(), 2).unwrap();
    assert_eq!(once, again);
}

#[test]
fn same_seed_same_deck() {
    assert_eq!(Deck::shuffled(7), Deck::shuffled(7));
    assert_ne!(Deck::shuffled(7), Deck::shuffled(8));
    assert_eq!(Deck::ordered().chars(), ORDERED);
}

#[test]
fn dealing_validates_player_count() {
    let deck = Deck::ordered();
    for (index, count) in [(0, 0), (0, 3), (2, 2)] {
        let err = deal_sets(&deck, index, count).unwrap_err();
        assert!(
            matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidPlayerCount, _)
            ),
            "player {index} of {count}: {err:?}"
        );
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every dealt tile is distinct and comes from the deck
    #[test]
    fn prop_dealt_sets_never_share_tiles(deck in test_gens::deck()) {
        let hands = deal_all(&deck, 2).unwrap();
        let mut seen = HashSet::new();
        for set in hands.iter().flatten() {
            for tile in set.tiles {
                prop_assert!(seen.insert(tile), "tile {} dealt twice", tile.ch());
            }
        }
        prop_assert_eq!(seen.len(), 24);
    }

    /// Property: the compact deck string replays to the same deal
    #[test]
    fn prop_deck_string_replays(deck in test_gens::deck()) {
        let replayed = parse_deck(&deck.chars()).unwrap();
        prop_assert_eq!(replayed, deck);
        prop_assert_eq!(deal_all(&replayed, 2).unwrap(), deal_all(&deck, 2).unwrap());
    }
}
