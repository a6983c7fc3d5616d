//! RNG seed derivation for deterministic dealing.

/// Derive the shuffle seed for one deal of a game.
///
/// Same game seed and deal number always give the same deck, so a game can
/// be replayed from its seed alone.
pub fn derive_dealing_seed(game_seed: u64, deal_number: u32) -> u64 {
    game_seed
        .wrapping_add(u64::from(deal_number).wrapping_mul(1_000_003))
        .wrapping_add(2)
}
