//! Constants baked in at build time.
//!
//! `build.rs` takes these from the `LOCALE_SHIM_DEFAULT_ARCHIVE` and
//! `LOCALE_SHIM_TARGET` build environment variables. Nothing here can be
//! changed at runtime.

/// The environment variable consulted by glibc for the locale archive.
pub const LOCALE_ARCHIVE_VAR: &str = "LOCALE_ARCHIVE";

/// The value `LOCALE_ARCHIVE` is given when it is absent.
pub const DEFAULT_LOCALE_ARCHIVE: &str = env!("LOCALE_SHIM_DEFAULT_ARCHIVE");

/// The program that replaces the shim. Resolved against `PATH` unless it
/// contains a slash.
pub const TARGET: &str = env!("LOCALE_SHIM_TARGET");
