// Proptest prelude: shared configuration for integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (e.g. 32, 800, 5000).
// - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.
//
// Generate valid inputs by construction rather than with prop_assume!.

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base: proptest::prelude::ProptestConfig = proptest::prelude::ProptestConfig::default();

    // PROPTEST_CASES: number of generated cases (default 8 for this project)
    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(8)
        .max(1);

    let max_shrink_time: u32 = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    proptest::prelude::ProptestConfig {
        // Disable persistence to silence regression-file warnings in integration tests
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
