//! Opt-in diagnostics.
//!
//! The shim shares stderr with the program it launches, so it is silent
//! unless `LOCALE_SHIM_LOG` is set, e.g. `LOCALE_SHIM_LOG=debug`. Fatal errors
//! are reported by [`fatal`](crate::fatal) regardless of this.

use std::io;
use tracing_subscriber::EnvFilter;

/// The environment variable holding the filter directives.
pub const LOG_VAR: &str = "LOCALE_SHIM_LOG";

/// The filter used when [`LOG_VAR`] is unset or unparseable.
pub const DEFAULT_FILTER: &str = "off";

/// Install a stderr subscriber filtered by [`LOG_VAR`]. Does nothing if a
/// global subscriber is already set.
pub fn init() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(io::stderr)
		.with_ansi(false)
		.with_target(false)
		.try_init();
}

fn filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
