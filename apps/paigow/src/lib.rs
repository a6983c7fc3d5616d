#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::rules::GameRules;
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::{GameFlowMutationResult, GameFlowService, GameStore, InMemoryGameStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
