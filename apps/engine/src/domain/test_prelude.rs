//! Shared proptest configuration.

use proptest::test_runner::Config;

/// Case count comes from `PROPTEST_CASES` when set, else a quick default.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(64);
    Config {
        cases,
        ..Config::default()
    }
}
