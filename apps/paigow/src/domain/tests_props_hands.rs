//! Property tests for hand evaluation and set dominance.
//!
//! Properties tested:
//! - `beats` is irreflexive and asymmetric
//! - `compare` agrees with `beats`
//! - Every hand gets exactly one tier and tiers decide first
//! - The ranking table never contradicts `beats`
//! - Dominance is antisymmetric and never holds against the same set

use std::cmp::Ordering;

use proptest::prelude::*;

use crate::domain::hands::{beats, classify, make_hand, Tier};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_beats_is_asymmetric(tiles in test_gens::four_tiles()) {
        let a = make_hand(tiles[0], tiles[1]);
        let b = make_hand(tiles[2], tiles[3]);
        prop_assert!(!beats(&a, &a));
        prop_assert!(!(beats(&a, &b) && beats(&b, &a)));
        let expected = if beats(&a, &b) {
            Ordering::Greater
        } else if beats(&b, &a) {
            Ordering::Less
        } else {
            Ordering::Equal
        };
        prop_assert_eq!(a.compare(&b), expected);
    }

    #[test]
    fn prop_make_hand_is_order_independent(tiles in test_gens::four_tiles()) {
        prop_assert_eq!(make_hand(tiles[0], tiles[1]), make_hand(tiles[1], tiles[0]));
    }

    #[test]
    fn prop_higher_tier_always_wins(tiles in test_gens::four_tiles()) {
        let a = make_hand(tiles[0], tiles[1]);
        let b = make_hand(tiles[2], tiles[3]);
        let (ta, tb) = (classify(&a), classify(&b));
        if ta.precedence() > tb.precedence() {
            prop_assert!(beats(&a, &b));
        }
        if let (Tier::Numeric(va), Tier::Numeric(vb)) = (ta, tb) {
            if va == 0 && vb == 0 {
                prop_assert!(!beats(&a, &b) && !beats(&b, &a));
            } else if va == vb {
                prop_assert_eq!(beats(&a, &b), a.high.rank() > b.high.rank());
            } else {
                prop_assert_eq!(beats(&a, &b), va > vb);
            }
        }
    }

    #[test]
    fn prop_ranking_table_agrees_with_beats(tiles in test_gens::four_tiles()) {
        let a = make_hand(tiles[0], tiles[1]);
        let b = make_hand(tiles[2], tiles[3]);
        if beats(&a, &b) {
            prop_assert!(a.ranking_value() > b.ranking_value());
        }
    }

    #[test]
    fn prop_dominance_is_antisymmetric(a in test_gens::set(), b in test_gens::set()) {
        prop_assert_eq!(a.dominates(&a), None);
        match a.dominates(&b) {
            Some(x) => prop_assert_eq!(b.dominates(&a), Some(!x)),
            None => prop_assert_eq!(b.dominates(&a), None),
        }
    }
}
