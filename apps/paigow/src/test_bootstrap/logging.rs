#![cfg(test)]

//! Test logging initialization for unit tests.
//!
//! Delegates to the shared test-support crate so unit and integration tests
//! read the same `TEST_LOG` / `RUST_LOG` settings.

/// Initialize structured logging for tests.
///
/// Idempotent; safe to call from every test.
///
/// ```bash
/// TEST_LOG=debug cargo test -p paigow house_way
/// ```
pub fn init() {
    paigow_test_support::logging::init();
}
