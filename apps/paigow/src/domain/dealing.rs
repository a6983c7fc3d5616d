//! Deterministic dealing: a shuffled 32-tile deck replayed into per-player sets.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::rules::{DECK_SIZE, SETS_PER_PLAYER, TILES_PER_PLAYER, TILES_PER_SET};
use super::sets::{make_set, Set};
use super::tiles_types::{all_tiles, Tile};
use crate::errors::domain::{DomainError, ValidationKind};

/// A permutation of all 32 tiles; the only state a deal needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck {
    tiles: [Tile; DECK_SIZE],
}

impl Deck {
    /// Wrap tiles already known to be a permutation (see `parse_deck`).
    pub(crate) fn from_tiles(tiles: [Tile; DECK_SIZE]) -> Self {
        Self { tiles }
    }

    /// Unshuffled deck in identity-alphabet order.
    pub fn ordered() -> Self {
        Self { tiles: all_tiles() }
    }

    /// Uniform shuffle seeded for replay.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::ordered();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        deck.tiles.shuffle(&mut rng);
        deck
    }

    pub fn tiles(&self) -> &[Tile; DECK_SIZE] {
        &self.tiles
    }

    pub fn chars(&self) -> String {
        self.tiles.iter().map(Tile::ch).collect()
    }

    /// The four tiles at slice `index` (tiles `4*index .. 4*index + 4`).
    fn slice(&self, index: usize) -> Option<Set> {
        let start = index * TILES_PER_SET;
        let chunk = self.tiles.get(start..start + TILES_PER_SET)?;
        let tiles: [Tile; TILES_PER_SET] = chunk.try_into().ok()?;
        Some(make_set(tiles))
    }
}

/// The three sets dealt to `player_index` of `player_count`.
///
/// Player `p` takes slices `p`, `p + n` and `p + 2n`, so with two players
/// the first takes the even slices and the second the odd ones.
pub fn deal_sets(
    deck: &Deck,
    player_index: usize,
    player_count: usize,
) -> Result<[Set; SETS_PER_PLAYER], DomainError> {
    if player_count == 0 || player_count * TILES_PER_PLAYER > DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("A deck cannot serve {player_count} players"),
        ));
    }
    if player_index >= player_count {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Player index {player_index} out of range for {player_count} players"),
        ));
    }
    let slice = |tier: usize| {
        deck.slice(player_index + tier * player_count).ok_or_else(|| {
            DomainError::validation(ValidationKind::InvalidDeck, "Deck slice out of range")
        })
    };
    Ok([slice(0)?, slice(1)?, slice(2)?])
}

/// Deal every player's sets from one deck.
pub fn deal_all(
    deck: &Deck,
    player_count: usize,
) -> Result<Vec<[Set; SETS_PER_PLAYER]>, DomainError> {
    (0..player_count)
        .map(|p| deal_sets(deck, p, player_count))
        .collect()
}
