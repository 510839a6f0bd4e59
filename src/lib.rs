//! Launch a program with `LOCALE_ARCHIVE` populated.
//!
//! Packages built by some package managers expect `LOCALE_ARCHIVE` to point at a
//! full `locale-archive` file. Hosts that don't provide one leave it unset, and
//! the packaged program falls back to the C locale. This crate provides a tiny
//! shim that fills in a default chosen at build time, then `execvp`s the real
//! program with the argument vector it was given.
//!
//! ```no_run
//! use locale_shim::{fatal::fatal, launcher::Launcher};
//!
//! let argv = std::env::args_os().collect::<Vec<_>>();
//! match Launcher::from_build_config().launch(&argv) {
//!     Ok(never) => void::unreachable(never),
//!     Err(err) => fatal(&err),
//! }
//! ```

#![warn(
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	trivial_casts,
	trivial_numeric_casts,
	unused_import_braces,
	unused_qualifications,
	unused_results,
	clippy::pedantic
)] // from https://github.com/rust-unofficial/patterns/blob/master/anti_patterns/deny-warnings.md
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod config;
#[cfg(unix)]
pub mod env;
#[cfg(unix)]
pub mod error;
#[cfg(unix)]
pub mod exec;
#[cfg(unix)]
pub mod fatal;
#[cfg(unix)]
pub mod launcher;
pub mod logging;

#[cfg(unix)]
pub use error::{Error, ErrorKind};
#[cfg(unix)]
pub use launcher::Launcher;
