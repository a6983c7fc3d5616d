//! Test logging shared by the engine's unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_TEST_FILTER`].
pub fn test_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TEST_FILTER))
}

/// Install the test subscriber once per process.
///
/// Output goes through `with_test_writer()` so cargo captures it per test;
/// timestamps are dropped to keep lines stable. Losing the race to another
/// subscriber is not an error.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
