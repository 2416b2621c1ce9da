//! Logger setup.
//!
//! `RUST_LOG` picks the level when set. Otherwise `--verbose` selects
//! `debug` and the default is `info`.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Initialize the global logger. Call once, from `main`.
pub fn init(verbose: bool) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_target(false)
        .init();
}
