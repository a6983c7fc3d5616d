//! Fixed ranking index over every two-tile combination.
//!
//! The index orders hands from worst (0) to best (105, the gee joon pair).
//! All zero-value hands share index 0 so none of them is preferred over
//! another. It is a tie-break signal only and never decides a win on its own.

use once_cell::sync::Lazy;

use super::tiles_types::{Tile, TileKind};

/// Keys are the two lowercase identity chars, higher rank first.
const HAND_RANKINGS: &[(&str, u8)] = &[
    ("hl", 0), ("gk", 0), ("fg", 0), ("ei", 0), ("df", 0), ("dk", 0),
    ("ko", 5),
    ("hi", 6),
    ("gj", 7), ("gn", 7),
    ("fo", 8),
    ("eh", 9),
    ("dj", 10), ("dn", 10),
    ("no", 11),
    ("jo", 12),
    ("gm", 13),
    ("fk", 14),
    ("dm", 15),
    ("cd", 16), ("cg", 16),
    ("be", 17), ("bi", 17),
    ("ae", 18), ("ai", 18),
    ("np", 19),
    ("mo", 20),
    ("kn", 21),
    ("jp", 22), ("jk", 22),
    ("gl", 23),
    ("fj", 24), ("fn", 24),
    ("dl", 25),
    ("co", 26),
    ("bh", 27),
    ("ah", 28),
    ("mp", 29),
    ("lo", 30),
    ("km", 31),
    ("jn", 32),
    ("gi", 33),
    ("fm", 34),
    ("eg", 35),
    ("de", 36), ("di", 36),
    ("cp", 37), ("cf", 37), ("ck", 37),
    ("ab", 38),
    ("mn", 39),
    ("lp", 40),
    ("kl", 41),
    ("jm", 42),
    ("io", 43),
    ("gh", 44),
    ("fl", 45),
    ("eo", 46),
    ("dh", 47),
    ("cj", 48), ("cn", 48),
    ("ln", 49),
    ("jl", 50),
    ("ip", 51), ("ik", 51),
    ("ho", 52),
    ("fi", 53),
    ("ep", 54), ("ef", 54), ("ek", 54),
    ("cm", 55),
    ("bd", 56), ("bg", 56),
    ("ad", 57), ("ag", 57),
    ("lm", 58),
    ("ij", 59), ("in", 59),
    ("hp", 60), ("hk", 60),
    ("gp", 61),
    ("fh", 62),
    ("ej", 63), ("en", 63),
    ("dp", 64),
    ("cl", 65),
    ("bo", 66),
    ("ao", 67),
    ("op", 68),
    ("im", 69),
    ("hj", 70), ("hn", 70),
    ("em", 71),
    ("dg", 72),
    ("ce", 73), ("ci", 73),
    ("bp", 74), ("bf", 74), ("bk", 74),
    ("ap", 75), ("af", 75), ("ak", 75),
    ("kp", 76),
    ("il", 77),
    ("hm", 78),
    ("go", 79),
    ("fp", 80),
    ("el", 81),
    ("do", 82),
    ("ch", 83),
    ("bj", 84), ("bn", 84),
    ("aj", 85), ("an", 85),
    ("bc", 86), ("bm", 86),
    ("ac", 87), ("am", 87),
    ("bl", 88),
    ("al", 89),
    ("oo", 90),
    ("nn", 91),
    ("mm", 92),
    ("ll", 93),
    ("kk", 94),
    ("jj", 95),
    ("ii", 96),
    ("hh", 97),
    ("gg", 98),
    ("ff", 99),
    ("ee", 100),
    ("dd", 101),
    ("cc", 102),
    ("bb", 103),
    ("aa", 104),
    ("pp", 105),
];

/// Table indexed by `[higher kind index][lower kind index]`.
static RANKING_TABLE: Lazy<[[u8; 16]; 16]> = Lazy::new(|| {
    let mut table = [[0u8; 16]; 16];
    for (key, value) in HAND_RANKINGS {
        let mut chars = key.chars().filter_map(|c| Tile::from_char(c).map(|t| t.kind.index()));
        if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
            table[a.min(b)][a.max(b)] = *value;
        }
    }
    table
});

/// Ranking index of the hand formed by tiles of kinds `a` and `b`, in either order.
pub fn ranking_for(a: TileKind, b: TileKind) -> u8 {
    let (i, j) = (a.index(), b.index());
    RANKING_TABLE[i.min(j)][i.max(j)]
}
