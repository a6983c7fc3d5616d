// Proptest generators for domain types.
// Tiles within one generated value are always distinct physical tiles.

use proptest::prelude::*;

use crate::domain::dealing::Deck;
use crate::domain::sets::{make_set, Set};
use crate::domain::tiles_types::{all_tiles, Tile};

/// Generate N distinct tiles by shuffling the full deck and taking a prefix
pub fn distinct_tiles(count: usize) -> impl Strategy<Value = Vec<Tile>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut tiles = all_tiles().to_vec();
        for i in 0..count.min(tiles.len()) {
            let j = rng.random_range(i..tiles.len());
            tiles.swap(i, j);
        }
        tiles.truncate(count);
        tiles
    })
}

/// Four distinct tiles
pub fn four_tiles() -> impl Strategy<Value = [Tile; 4]> {
    distinct_tiles(4).prop_map(|t| [t[0], t[1], t[2], t[3]])
}

/// A set of four distinct tiles in arbitrary positions
pub fn set() -> impl Strategy<Value = Set> {
    four_tiles().prop_map(make_set)
}

/// Three sets sharing no tile
pub fn three_sets() -> impl Strategy<Value = [Set; 3]> {
    distinct_tiles(12).prop_map(|t| {
        [
            make_set([t[0], t[1], t[2], t[3]]),
            make_set([t[4], t[5], t[6], t[7]]),
            make_set([t[8], t[9], t[10], t[11]]),
        ]
    })
}

/// A shuffled deck from an arbitrary seed
pub fn deck() -> impl Strategy<Value = Deck> {
    any::<u64>().prop_map(Deck::shuffled)
}

/// A pair of copies plus two other distinct tiles, in arbitrary positions
pub fn tiles_with_pair_of(pips: u8) -> impl Strategy<Value = [Tile; 4]> {
    let pair_kinds: Vec<Tile> = all_tiles()
        .into_iter()
        .filter(|t| !t.second && t.pips() == pips)
        .collect();
    (
        proptest::sample::select(pair_kinds),
        distinct_tiles(32),
        Just(()).prop_perturb(|_, mut rng| {
            let mut order = [0usize, 1, 2, 3];
            for i in 0..4 {
                let j = rng.random_range(i..4);
                order.swap(i, j);
            }
            order
        }),
    )
        .prop_map(|(first, pool, order)| {
            let partner = Tile::new(first.kind, true);
            let others: Vec<Tile> = pool
                .into_iter()
                .filter(|t| !t.copies(&first))
                .take(2)
                .collect();
            let picked = [first, partner, others[0], others[1]];
            [
                picked[order[0]],
                picked[order[1]],
                picked[order[2]],
                picked[order[3]],
            ]
        })
}
