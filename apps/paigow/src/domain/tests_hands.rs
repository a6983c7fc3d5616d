use std::cmp::Ordering;

use crate::domain::hands::{beats, classify, make_hand, ranking_value, Hand, Tier};
use crate::domain::tiles_types::Tile;

fn t(c: char) -> Tile {
    Tile::from_char(c).unwrap()
}

fn h(s: &str) -> Hand {
    let mut chars = s.chars();
    make_hand(t(chars.next().unwrap()), t(chars.next().unwrap()))
}

#[test]
fn make_hand_orders_by_rank_then_char() {
    assert_eq!(h("ca").chars(), "ac");
    assert_eq!(h("ac").chars(), "ac");
    // Copies: the greater char is high.
    assert_eq!(h("Aa").chars(), "aA");
    assert_eq!(h("pP").chars(), "pP");
}

#[test]
fn classify_in_priority_order() {
    assert_eq!(classify(&h("pP")), Tier::Wild);
    assert_eq!(classify(&h("aA")), Tier::Pair);
    assert_eq!(classify(&h("al")), Tier::Wong);
    assert_eq!(classify(&h("bm")), Tier::Gong);
    assert_eq!(classify(&h("ac")), Tier::Gong);
    assert_eq!(classify(&h("aj")), Tier::HighNine);
    assert_eq!(classify(&h("bn")), Tier::HighNine);
    assert_eq!(classify(&h("cf")), Tier::Numeric(4));
    assert_eq!(classify(&h("ei")), Tier::Numeric(0));
}

#[test]
fn gee_joon_low_tile_counts_three_or_six() {
    // high eight: 8+3 -> 1, 8+6 -> 4
    assert_eq!(h("cp").numeric_value(), 4);
    // long six: 6+3 -> 9
    assert_eq!(h("fp").numeric_value(), 9);
    assert_eq!(h("kP").numeric_value(), 9);
    // mixed five: 5+3 -> 8
    assert_eq!(h("op").numeric_value(), 8);
}

#[test]
fn tiers_decide_before_values() {
    assert!(beats(&h("pP"), &h("aA")));
    assert!(beats(&h("aA"), &h("al")));
    assert!(beats(&h("bl"), &h("ac")));
    assert!(beats(&h("bm"), &h("aj")));
    // high nine beats a numeric nine
    assert!(beats(&h("aj"), &h("fp")));
    assert!(!beats(&h("fp"), &h("aj")));
}

#[test]
fn same_tier_compares_high_tile_rank() {
    assert!(beats(&h("aA"), &h("bB")));
    assert!(beats(&h("al"), &h("bl")));
    // equal numeric value: high eight outranks long six
    assert_eq!(h("ck").numeric_value(), 4);
    assert_eq!(h("fm").numeric_value(), 4);
    assert!(beats(&h("ck"), &h("fm")));
}

#[test]
fn numeric_value_beats_tile_rank() {
    // 5 beats 4 even though high eight outranks long six
    assert!(beats(&h("fl"), &h("ck")));
    assert!(!beats(&h("ck"), &h("fl")));
}

#[test]
fn zero_value_hands_always_push() {
    let (x, y) = (h("ei"), h("hl"));
    assert_eq!(x.numeric_value(), 0);
    assert_eq!(y.numeric_value(), 0);
    assert!(!beats(&x, &y));
    assert!(!beats(&y, &x));
    assert_eq!(x.compare(&y), Ordering::Equal);
}

#[test]
fn beats_is_irreflexive() {
    for s in ["pP", "aA", "al", "cf", "ei"] {
        let hand = h(s);
        assert!(!beats(&hand, &hand), "{s} beats itself");
    }
}

#[test]
fn ranking_values() {
    assert_eq!(ranking_value(&h("pP")), 105);
    assert_eq!(ranking_value(&h("aA")), 104);
    assert_eq!(ranking_value(&h("bB")), 103);
    assert_eq!(ranking_value(&h("hl")), 0);
    assert!(ranking_value(&h("al")) > ranking_value(&h("bl")));
}

#[test]
fn labels() {
    assert_eq!(h("pP").label(), "gee joon");
    assert_eq!(h("aA").label(), "teen bo");
    assert_eq!(h("la").label(), "wong");
    assert_eq!(h("cb").label(), "gong");
    assert_eq!(h("ja").label(), "high nine");
    assert_eq!(h("cf").label(), "4");
}
