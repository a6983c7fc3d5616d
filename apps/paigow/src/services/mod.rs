pub mod game_flow;
pub mod store;

pub use game_flow::{GameFlowMutationResult, GameFlowService, SettleOutcome};
pub use store::{GameStore, InMemoryGameStore};
