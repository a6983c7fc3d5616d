//! Hand evaluation: two tiles combined, classified and compared.

use std::cmp::Ordering;

use super::hand_rankings::ranking_for;
use super::tiles_types::Tile;

/// Classification of a hand, checked in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The gee joon pair.
    Wild,
    /// Two copies of the same kind.
    Pair,
    /// Teen or day with a nine ("wong").
    Wong,
    /// Teen or day with an eight ("gong").
    Gong,
    /// Teen or day with a seven.
    HighNine,
    /// Anything else, valued 0..=9.
    Numeric(u8),
}

impl Tier {
    /// Precedence between tiers; numeric hands of any value share the lowest.
    pub const fn precedence(self) -> u8 {
        match self {
            Tier::Wild => 5,
            Tier::Pair => 4,
            Tier::Wong => 3,
            Tier::Gong => 2,
            Tier::HighNine => 1,
            Tier::Numeric(_) => 0,
        }
    }
}

/// Two tiles ordered high then low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    pub high: Tile,
    pub low: Tile,
}

/// Order two tiles into a hand.
///
/// Copies are ordered by identity char (the greater char is high); other
/// tiles by rank.
pub fn make_hand(a: Tile, b: Tile) -> Hand {
    let a_is_high = if a.copies(&b) {
        a.ch() > b.ch()
    } else {
        a.rank() > b.rank()
    };
    if a_is_high {
        Hand { high: a, low: b }
    } else {
        Hand { high: b, low: a }
    }
}

impl Hand {
    pub fn is_pair(&self) -> bool {
        self.high.copies(&self.low)
    }

    pub fn is_wild(&self) -> bool {
        self.is_pair() && self.high.is_wild()
    }

    pub fn is_wong(&self) -> bool {
        self.high.is_supreme() && self.low.pips() == 9
    }

    pub fn is_gong(&self) -> bool {
        self.high.is_supreme() && self.low.pips() == 8
    }

    pub fn is_high_nine(&self) -> bool {
        self.high.is_supreme() && self.low.pips() == 7
    }

    /// Sum of the tile values mod 10. A gee joon low tile counts as 3 or 6,
    /// whichever scores higher.
    pub fn numeric_value(&self) -> u8 {
        let high = self.high.value();
        if self.low.is_wild() {
            ((high + 3) % 10).max((high + 6) % 10)
        } else {
            (high + self.low.value()) % 10
        }
    }

    pub fn tier(&self) -> Tier {
        if self.is_wild() {
            Tier::Wild
        } else if self.is_pair() {
            Tier::Pair
        } else if self.is_wong() {
            Tier::Wong
        } else if self.is_gong() {
            Tier::Gong
        } else if self.is_high_nine() {
            Tier::HighNine
        } else {
            Tier::Numeric(self.numeric_value())
        }
    }

    /// Compare two hands; `Equal` is a push.
    ///
    /// Tiers decide first. Within a tier the high tile's rank decides, except
    /// numeric hands compare by value first and all zero-value hands tie.
    pub fn compare(&self, other: &Hand) -> Ordering {
        let (mine, theirs) = (self.tier(), other.tier());
        match mine.precedence().cmp(&theirs.precedence()) {
            Ordering::Equal => {}
            decided => return decided,
        }
        match (mine, theirs) {
            (Tier::Numeric(a), Tier::Numeric(b)) if a != b => a.cmp(&b),
            (Tier::Numeric(0), Tier::Numeric(0)) => Ordering::Equal,
            _ => self.high.rank().cmp(&other.high.rank()),
        }
    }

    pub fn beats(&self, other: &Hand) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Position in the fixed hand ranking table (0..=105).
    pub fn ranking_value(&self) -> u8 {
        ranking_for(self.high.kind, self.low.kind)
    }

    /// Identity chars, high tile first.
    pub fn chars(&self) -> String {
        [self.high.ch(), self.low.ch()].iter().collect()
    }

    pub fn label(&self) -> String {
        match self.tier() {
            Tier::Wild => "gee joon".to_string(),
            Tier::Pair => format!("{} bo", self.high.name()),
            Tier::Wong => "wong".to_string(),
            Tier::Gong => "gong".to_string(),
            Tier::HighNine => "high nine".to_string(),
            Tier::Numeric(v) => v.to_string(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.high, self.low)
    }
}

pub fn classify(hand: &Hand) -> Tier {
    hand.tier()
}

pub fn beats(h1: &Hand, h2: &Hand) -> bool {
    h1.beats(h2)
}

pub fn ranking_value(hand: &Hand) -> u8 {
    hand.ranking_value()
}
