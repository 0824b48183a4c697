// created = "2026-10-17"
// modified = "2026-10-17"

//! Logger setup for binaries and tests.

use log::LevelFilter;

/// Install an `env_logger` logger at `info`, overridable with `RUST_LOG`.
/// Safe to call more than once; later calls do nothing.
pub fn init_logger(is_test: bool) {
    let _ = env_logger::Builder::new()
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .is_test(is_test)
        .format_timestamp_secs()
        .try_init();
}
