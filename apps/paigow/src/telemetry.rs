use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset. Strategy steps are debug
/// events; raise `paigow` to `debug` to see them.
const DEFAULT_FILTER: &str = "info";

/// Install the binary's subscriber. Lines are JSON unless
/// `PAIGOW_LOG_FORMAT=pretty`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let pretty = std::env::var("PAIGOW_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("pretty"));

    let base = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false);

    if pretty {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.pretty())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.json())
            .init();
    }
}
