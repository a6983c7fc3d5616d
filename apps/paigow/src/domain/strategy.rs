//! House-way strategy: how a disciplined player splits four tiles into two
//! hands, and how three sets are ordered into scoring tiers.
//!
//! Every entry point is total. Exact ties fall to the earlier candidate, so
//! for partitions the one pairing position 0 with position 1 is preferred.

use std::cmp::Ordering;

use super::comparator::{Comparator, CATEGORY_THEN_NUMERIC, NUMERIC};
use super::sets::{make_set, Set};
use super::strategy_trace::{StrategyEvent, StrategyTrace};
use super::tiles_parsing::parse_set;
use super::tiles_types::Tile;
use crate::errors::domain::DomainError;

/// The three ways to split positions 0..4 into two pairs.
pub const PARTITIONS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 2, 1, 3], [0, 3, 1, 2]];

/// Pair kinds that are never split, by face pips.
const NEVER_SPLIT_PIPS: [u8; 4] = [4, 5, 10, 11];

fn partition_set(tiles: &[Tile; 4], partition: usize) -> Set {
    let p = PARTITIONS[partition];
    make_set([tiles[p[0]], tiles[p[1]], tiles[p[2]], tiles[p[3]]])
}

/// The three candidate sets, in partition order.
pub fn candidate_sets(tiles: &[Tile; 4]) -> [Set; 3] {
    [
        partition_set(tiles, 0),
        partition_set(tiles, 1),
        partition_set(tiles, 2),
    ]
}

fn both(others: [&Tile; 2], test: impl Fn(&Tile) -> bool) -> bool {
    others.into_iter().all(test)
}

/// Should a pair of `pair`'s kind be split, given the two other tiles?
fn split_pair(pair: &Tile, others: [&Tile; 2]) -> bool {
    if NEVER_SPLIT_PIPS.contains(&pair.pips()) {
        return false;
    }
    if pair.is_supreme() {
        return both(others, |t| t.pips() >= 7);
    }
    match pair.pips() {
        9 => both(others, |t| t.is_supreme() || t.pips() == 10),
        8 => both(others, |t| t.is_supreme() || t.pips() == 11),
        7 => both(others, |t| t.is_supreme()),
        _ => false,
    }
}

/// Fixed rules for tiles holding pairs. `None` when no pair is present.
pub fn forced_partition(tiles: &[Tile; 4], trace: &dyn StrategyTrace) -> Option<usize> {
    for (partition, p) in PARTITIONS.iter().enumerate() {
        if tiles[p[0]].copies(&tiles[p[1]]) && tiles[p[2]].copies(&tiles[p[3]]) {
            trace.record(StrategyEvent::TwoPairs { partition });
            return Some(partition);
        }
    }

    for (partition, p) in PARTITIONS.iter().enumerate() {
        for (pair, others) in [((p[0], p[1]), (p[2], p[3])), ((p[2], p[3]), (p[0], p[1]))] {
            if !tiles[pair.0].copies(&tiles[pair.1]) {
                continue;
            }
            let pair_tile = tiles[pair.0];
            let pair_char = pair_tile.kind.base_char();
            if split_pair(&pair_tile, [&tiles[others.0], &tiles[others.1]]) {
                let split = if partition == 0 { 1 } else { 0 };
                trace.record(StrategyEvent::SplitPair {
                    pair: pair_char,
                    partition: split,
                });
                return Some(split);
            }
            trace.record(StrategyEvent::KeepPair {
                pair: pair_char,
                partition,
            });
            return Some(partition);
        }
    }
    None
}

/// Index of the best candidate.
///
/// A candidate that dominates all others wins outright. Otherwise dominated
/// candidates are dropped and the survivors are compared: by special-hand
/// category and then numerically when nothing was dropped, numerically only
/// when something was.
pub fn pick_best(candidates: &[Set], trace: &dyn StrategyTrace) -> usize {
    let n = candidates.len();
    if n <= 1 {
        return 0;
    }
    let dominates = |i: usize, j: usize| candidates[i].dominates(&candidates[j]) == Some(true);

    if let Some(i) = (0..n).find(|&i| (0..n).filter(|&j| j != i).all(|j| dominates(i, j))) {
        trace.record(StrategyEvent::OnlyWay { candidate: i });
        return i;
    }

    let mut survivors = Vec::with_capacity(n);
    for i in 0..n {
        match (0..n).find(|&j| j != i && dominates(j, i)) {
            Some(by) => trace.record(StrategyEvent::Eliminated { candidate: i, by }),
            None => survivors.push(i),
        }
    }
    if survivors.is_empty() {
        survivors = (0..n).collect();
    }

    let comparator: &Comparator = if survivors.len() == n {
        &CATEGORY_THEN_NUMERIC
    } else {
        &NUMERIC
    };

    let mut best = survivors[0];
    let mut deciding_stage = "tie";
    for &i in &survivors[1..] {
        match comparator.decide(&candidates[i], &candidates[best]) {
            Some((stage, Ordering::Greater)) => {
                best = i;
                deciding_stage = stage;
            }
            Some((stage, _)) => deciding_stage = stage,
            None => {}
        }
    }
    trace.record(StrategyEvent::Picked {
        candidate: best,
        comparator: comparator.name,
        stage: deciding_stage,
    });
    best
}

/// Which of the three partitions the house way picks for these tiles.
pub fn choose_partition_index(tiles: &[Tile; 4], trace: &dyn StrategyTrace) -> usize {
    forced_partition(tiles, trace)
        .unwrap_or_else(|| pick_best(&candidate_sets(tiles), trace))
}

/// Split four tiles the house way.
///
/// Returns the tiles as high hand's high tile, its low tile, low hand's high
/// tile, its low tile.
pub fn choose_partition(tiles: [Tile; 4], trace: &dyn StrategyTrace) -> [Tile; 4] {
    let partition = choose_partition_index(&tiles, trace);
    partition_set(&tiles, partition).canonical().tiles
}

/// Order three sets best first; returns indices into `sets`.
pub fn rank_three_sets(sets: &[Set; 3], trace: &dyn StrategyTrace) -> [usize; 3] {
    let first = pick_best(sets, trace);
    let rest: Vec<usize> = (0..3).filter(|&i| i != first).collect();
    let remaining = [sets[rest[0]], sets[rest[1]]];
    let second = rest[pick_best(&remaining, trace)];
    let third = rest.iter().copied().find(|&i| i != second).unwrap_or(rest[1]);
    [first, second, third]
}

/// Set all three sets the house way and order them into tiers.
pub fn auto_set(dealt: &[Set; 3], trace: &dyn StrategyTrace) -> [Set; 3] {
    let split = dealt.map(|set| make_set(choose_partition(set.tiles, trace)));
    let order = rank_three_sets(&split, trace);
    order.map(|i| split[i])
}

/// [`choose_partition`] over tile identity strings.
pub fn choose_partition_chars(chars: &str, trace: &dyn StrategyTrace) -> Result<String, DomainError> {
    let set = parse_set(chars)?;
    Ok(make_set(choose_partition(set.tiles, trace)).chars())
}

/// [`rank_three_sets`] over set identity strings; returns the identities best first.
pub fn rank_three_sets_chars(
    chars: [&str; 3],
    trace: &dyn StrategyTrace,
) -> Result<[String; 3], DomainError> {
    let sets = [parse_set(chars[0])?, parse_set(chars[1])?, parse_set(chars[2])?];
    let order = rank_three_sets(&sets, trace);
    Ok(order.map(|i| chars[i].to_string()))
}
