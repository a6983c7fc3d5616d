//! Tile catalog: the 16 tile kinds and the 32 physical tiles of the deck.

/// The sixteen tile kinds, highest rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Teen,
    Day,
    HighEight,
    HarmonyFour,
    HighTen,
    LongSix,
    LowFour,
    Eleven,
    LowTen,
    HighSeven,
    LowSix,
    MixedNine,
    MixedEight,
    MixedSeven,
    MixedFive,
    GeeJoon,
}

impl TileKind {
    pub const ALL: [TileKind; 16] = [
        TileKind::Teen,
        TileKind::Day,
        TileKind::HighEight,
        TileKind::HarmonyFour,
        TileKind::HighTen,
        TileKind::LongSix,
        TileKind::LowFour,
        TileKind::Eleven,
        TileKind::LowTen,
        TileKind::HighSeven,
        TileKind::LowSix,
        TileKind::MixedNine,
        TileKind::MixedEight,
        TileKind::MixedSeven,
        TileKind::MixedFive,
        TileKind::GeeJoon,
    ];

    /// Position in [`TileKind::ALL`]; 0 for teen through 15 for gee joon.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank used to compare tiles: 15 for teen down to 0 for gee joon.
    pub const fn rank(self) -> u8 {
        15 - self as u8
    }

    /// Face pip count (2..=12).
    pub const fn pips(self) -> u8 {
        match self {
            TileKind::Teen => 12,
            TileKind::Day => 2,
            TileKind::HighEight => 8,
            TileKind::HarmonyFour => 4,
            TileKind::HighTen => 10,
            TileKind::LongSix => 6,
            TileKind::LowFour => 4,
            TileKind::Eleven => 11,
            TileKind::LowTen => 10,
            TileKind::HighSeven => 7,
            TileKind::LowSix => 6,
            TileKind::MixedNine => 9,
            TileKind::MixedEight => 8,
            TileKind::MixedSeven => 7,
            TileKind::MixedFive => 5,
            TileKind::GeeJoon => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Teen => "teen",
            TileKind::Day => "day",
            TileKind::HighEight => "high eight",
            TileKind::HarmonyFour => "harmony four",
            TileKind::HighTen => "high ten",
            TileKind::LongSix => "long six",
            TileKind::LowFour => "low four",
            TileKind::Eleven => "eleven",
            TileKind::LowTen => "low ten",
            TileKind::HighSeven => "high seven",
            TileKind::LowSix => "low six",
            TileKind::MixedNine => "mixed nine",
            TileKind::MixedEight => "mixed eight",
            TileKind::MixedSeven => "mixed seven",
            TileKind::MixedFive => "mixed five",
            TileKind::GeeJoon => "gee joon",
        }
    }

    /// Lowercase identity char of the first copy ('a' for teen).
    pub const fn base_char(self) -> char {
        (b'a' + self as u8) as char
    }

    pub fn from_index(index: usize) -> Option<TileKind> {
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<TileKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// One of the 32 physical tiles.
///
/// The first copy of a kind is written with a lowercase char, the second with
/// the matching uppercase char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileKind,
    pub second: bool,
}

impl Tile {
    pub const fn new(kind: TileKind, second: bool) -> Self {
        Self { kind, second }
    }

    pub const fn first(kind: TileKind) -> Self {
        Self::new(kind, false)
    }

    pub const fn rank(&self) -> u8 {
        self.kind.rank()
    }

    pub const fn pips(&self) -> u8 {
        self.kind.pips()
    }

    /// Value used for hand sums (0..=9).
    pub const fn value(&self) -> u8 {
        self.kind.pips() % 10
    }

    /// Teen and day, the two highest-ranked kinds.
    pub const fn is_supreme(&self) -> bool {
        matches!(self.kind, TileKind::Teen | TileKind::Day)
    }

    /// Gee joon tiles count as 3 or 6.
    pub const fn is_wild(&self) -> bool {
        matches!(self.kind, TileKind::GeeJoon)
    }

    /// Same rank, i.e. the other physical copy (or the tile itself).
    pub fn copies(&self, other: &Tile) -> bool {
        self.kind == other.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Single-char identity in the `a..=p` / `A..=P` alphabet.
    pub fn ch(&self) -> char {
        let c = self.kind.base_char();
        if self.second {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    pub fn from_char(c: char) -> Option<Tile> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let second = c.is_ascii_uppercase();
        let index = (c.to_ascii_lowercase() as u8).checked_sub(b'a')? as usize;
        TileKind::from_index(index).map(|kind| Tile::new(kind, second))
    }

    /// Look a tile up by name, choosing the first or second copy.
    pub fn with_name(name: &str, second: bool) -> Option<Tile> {
        TileKind::from_name(name).map(|kind| Tile::new(kind, second))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// All 32 tiles in identity-alphabet order: first copies `a..=p`, then `A..=P`.
pub fn all_tiles() -> [Tile; 32] {
    std::array::from_fn(|i| Tile::new(TileKind::ALL[i % 16], i >= 16))
}
