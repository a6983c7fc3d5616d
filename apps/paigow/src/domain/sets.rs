//! Four-tile sets: two hands compared hand-for-hand against another set.

use super::hands::{make_hand, Hand};
use super::tiles_types::Tile;

/// Result of one set against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Push,
    Loss,
}

impl Outcome {
    /// 'W', '.' or 'L'.
    pub const fn as_char(self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Push => '.',
            Outcome::Loss => 'L',
        }
    }
}

/// Four tiles; positions 0–1 form the first hand and 2–3 the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Set {
    pub tiles: [Tile; 4],
}

pub fn make_set(tiles: [Tile; 4]) -> Set {
    Set { tiles }
}

impl Set {
    /// Hands in position order.
    pub fn hands(&self) -> (Hand, Hand) {
        let [a, b, c, d] = self.tiles;
        (make_hand(a, b), make_hand(c, d))
    }

    /// The two hands, the one that beats (or ties) the other first.
    pub fn high_low(&self) -> (Hand, Hand) {
        let (first, second) = self.hands();
        if second.beats(&first) {
            (second, first)
        } else {
            (first, second)
        }
    }

    /// `Some(true)` if `self` wins both hands against `other`, `Some(false)` if
    /// `other` wins both, `None` when the sets are not comparable.
    pub fn dominates(&self, other: &Set) -> Option<bool> {
        let (my_high, my_low) = self.high_low();
        let (their_high, their_low) = other.high_low();
        if my_high.beats(&their_high) && my_low.beats(&their_low) {
            Some(true)
        } else if their_high.beats(&my_high) && their_low.beats(&my_low) {
            Some(false)
        } else {
            None
        }
    }

    pub fn compare_against(&self, other: &Set) -> Outcome {
        match self.dominates(other) {
            Some(true) => Outcome::Win,
            Some(false) => Outcome::Loss,
            None => Outcome::Push,
        }
    }

    /// Sum and absolute difference of the two hands' ranking values.
    pub fn rank_sum_diff(&self) -> (u32, u32) {
        let (high, low) = self.high_low();
        let (h, l) = (
            u32::from(high.ranking_value()),
            u32::from(low.ranking_value()),
        );
        (h + l, h.abs_diff(l))
    }

    fn has(&self, test: impl Fn(&Hand) -> bool) -> bool {
        let (first, second) = self.hands();
        test(&first) || test(&second)
    }

    pub fn has_pair(&self) -> bool {
        self.has(Hand::is_pair)
    }

    pub fn has_wong(&self) -> bool {
        self.has(Hand::is_wong)
    }

    pub fn has_gong(&self) -> bool {
        self.has(Hand::is_gong)
    }

    pub fn has_high_nine(&self) -> bool {
        self.has(Hand::is_high_nine)
    }

    /// Special-hand categories in priority order.
    pub fn categories(&self) -> [bool; 4] {
        [
            self.has_pair(),
            self.has_wong(),
            self.has_gong(),
            self.has_high_nine(),
        ]
    }

    /// Four-char identity in position order.
    pub fn chars(&self) -> String {
        self.tiles.iter().map(Tile::ch).collect()
    }

    /// Tiles reordered as high hand (high, low) then low hand (high, low).
    pub fn canonical(&self) -> Set {
        let (high, low) = self.high_low();
        make_set([high.high, high.low, low.high, low.low])
    }

    pub fn canonical_chars(&self) -> String {
        self.canonical().chars()
    }

    /// True when `chars` names exactly this set's tiles in any order.
    pub fn can_be_rearranged_to(&self, chars: &str) -> bool {
        sorted_chars(&self.chars()) == sorted_chars(chars)
    }

    /// Same four tiles regardless of position.
    pub fn same_tiles_as(&self, other: &Set) -> bool {
        self.can_be_rearranged_to(&other.chars())
    }

    pub fn labels(&self) -> String {
        let (first, second) = self.hands();
        format!("{}|{}", first.label(), second.label())
    }
}

impl std::fmt::Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (first, second) = self.hands();
        write!(f, "[{first}] [{second}]")
    }
}

fn sorted_chars(chars: &str) -> Vec<char> {
    let mut v: Vec<char> = chars.chars().collect();
    v.sort_unstable();
    v
}

