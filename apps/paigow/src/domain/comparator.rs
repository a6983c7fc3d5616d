//! Tiered set comparator.
//!
//! A comparator is an ordered list of stages. Each stage either decides
//! (`Some(Ordering)`) or passes (`None`) to the next one. If every stage
//! passes the two sets are tied.

use std::cmp::Ordering;

use super::sets::Set;

pub type Stage = fn(&Set, &Set) -> Option<Ordering>;

#[derive(Clone, Copy)]
pub struct Comparator {
    pub name: &'static str,
    stages: &'static [(&'static str, Stage)],
}

impl std::fmt::Debug for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stages.iter().map(|(n, _)| *n).collect();
        f.debug_struct("Comparator")
            .field("name", &self.name)
            .field("stages", &names)
            .finish()
    }
}

impl Comparator {
    pub const fn new(name: &'static str, stages: &'static [(&'static str, Stage)]) -> Self {
        Self { name, stages }
    }

    pub fn compare(&self, a: &Set, b: &Set) -> Ordering {
        self.decide(a, b).map_or(Ordering::Equal, |(_, o)| o)
    }

    /// The first deciding stage's name and result.
    pub fn decide(&self, a: &Set, b: &Set) -> Option<(&'static str, Ordering)> {
        self.stages
            .iter()
            .find_map(|(name, stage)| stage(a, b).map(|o| (*name, o)))
    }
}

/// A set holding a special hand the other lacks wins, checked in the order
/// pair, wong, gong, high nine.
pub fn by_category(a: &Set, b: &Set) -> Option<Ordering> {
    a.categories()
        .iter()
        .zip(b.categories().iter())
        .find(|(x, y)| x != y)
        .map(|(x, _)| if *x { Ordering::Greater } else { Ordering::Less })
}

/// Smaller ranking difference between the two hands wins.
pub fn by_evenness(a: &Set, b: &Set) -> Option<Ordering> {
    let (_, diff_a) = a.rank_sum_diff();
    let (_, diff_b) = b.rank_sum_diff();
    match diff_b.cmp(&diff_a) {
        Ordering::Equal => None,
        o => Some(o),
    }
}

/// Larger ranking sum wins.
pub fn by_sum(a: &Set, b: &Set) -> Option<Ordering> {
    let (sum_a, _) = a.rank_sum_diff();
    let (sum_b, _) = b.rank_sum_diff();
    match sum_a.cmp(&sum_b) {
        Ordering::Equal => None,
        o => Some(o),
    }
}

/// Used when no candidate was eliminated by dominance.
pub const CATEGORY_THEN_NUMERIC: Comparator = Comparator::new(
    "category-then-numeric",
    &[
        ("category", by_category),
        ("evenness", by_evenness),
        ("sum", by_sum),
    ],
);

/// Used among the survivors once dominance has eliminated a candidate.
pub const NUMERIC: Comparator =
    Comparator::new("numeric", &[("evenness", by_evenness), ("sum", by_sum)]);

