pub const DECK_SIZE: usize = 32;
pub const TILES_PER_SET: usize = 4;
pub const SETS_PER_PLAYER: usize = 3;
pub const TILES_PER_PLAYER: usize = TILES_PER_SET * SETS_PER_PLAYER;

/// Most players one deck can serve.
pub const MAX_PLAYERS: usize = DECK_SIZE / TILES_PER_PLAYER;

pub const DEFAULT_GOAL_SCORE: u32 = 21;
pub const DEFAULT_TIER_POINTS: [u32; SETS_PER_PLAYER] = [3, 2, 1];
