use crate::domain::sets::Outcome;
use crate::domain::tiles_parsing::parse_set;

#[test]
fn high_low_ignores_position() {
    let set = parse_set("cfal").unwrap();
    let (high, low) = set.high_low();
    assert_eq!(high.chars(), "al");
    assert_eq!(low.chars(), "cf");
    assert_eq!(set.canonical_chars(), "alcf");
    assert_eq!(set.chars(), "cfal");
}

#[test]
fn dominance_requires_both_hands() {
    let strong = parse_set("aAbB").unwrap();
    let weak = parse_set("cCdD").unwrap();
    assert_eq!(strong.dominates(&weak), Some(true));
    assert_eq!(weak.dominates(&strong), Some(false));
    assert_eq!(strong.compare_against(&weak), Outcome::Win);
    assert_eq!(weak.compare_against(&strong), Outcome::Loss);
}

#[test]
fn split_results_are_a_push() {
    // Teen pair beats day pair, but 8 loses to the high eight pair.
    let a = parse_set("aAop").unwrap();
    let b = parse_set("bBcC").unwrap();
    assert_eq!(a.dominates(&b), None);
    assert_eq!(b.dominates(&a), None);
    assert_eq!(a.compare_against(&b), Outcome::Push);
    assert_eq!(Outcome::Push.as_char(), '.');
}

#[test]
fn a_set_never_dominates_itself() {
    for s in ["aAbB", "cfal", "pPgl", "eihl"] {
        let set = parse_set(s).unwrap();
        assert_eq!(set.dominates(&set), None, "{s}");
    }
}

#[test]
fn rank_sum_diff_uses_ranking_values() {
    assert_eq!(parse_set("aAbB").unwrap().rank_sum_diff(), (207, 1));
    assert_eq!(parse_set("bBcC").unwrap().rank_sum_diff(), (205, 1));
    assert_eq!(parse_set("alcf").unwrap().rank_sum_diff(), (126, 52));
    // Position order does not matter.
    assert_eq!(parse_set("cfla").unwrap().rank_sum_diff(), (126, 52));
}

#[test]
fn categories_in_priority_order() {
    assert_eq!(parse_set("alcf").unwrap().categories(), [false, true, false, false]);
    assert_eq!(parse_set("aAcf").unwrap().categories(), [true, false, false, false]);
    assert_eq!(parse_set("bmaj").unwrap().categories(), [false, false, true, true]);
    assert!(!parse_set("eihl").unwrap().categories().contains(&true));
}

#[test]
fn rearrangement_checks_the_tile_multiset() {
    let set = parse_set("alcf").unwrap();
    assert!(set.can_be_rearranged_to("fcla"));
    assert!(!set.can_be_rearranged_to("fcLa"));
    assert!(!set.can_be_rearranged_to("alc"));
    assert!(set.same_tiles_as(&parse_set("lfac").unwrap()));
}

#[test]
fn identity_round_trips_through_canonical_form() {
    let set = parse_set("cfal").unwrap();
    let reparsed = parse_set(&set.canonical_chars()).unwrap();
    assert!(reparsed.same_tiles_as(&set));
    assert_eq!(reparsed.canonical(), set.canonical());
    assert_eq!(set.labels(), "4|wong");
}
