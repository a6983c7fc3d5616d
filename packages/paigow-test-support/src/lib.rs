//! Shared test support for the Pai Gow workspace.
//!
//! Provides one logging initializer used by unit and integration tests.

pub mod logging;
