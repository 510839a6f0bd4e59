//! Default `LOCALE_ARCHIVE`, then exec the target.

use crate::{config, env, error::Error, exec};
use std::ffi::{OsStr, OsString};
use void::Void;

/// The shim: which variable to default, to what, and which program to run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Launcher {
	default_archive: OsString,
	target: OsString,
}

impl Launcher {
	/// A launcher with the constants baked in by `build.rs`.
	pub fn from_build_config() -> Self {
		Self::new(config::DEFAULT_LOCALE_ARCHIVE, config::TARGET)
	}

	/// A launcher that defaults `LOCALE_ARCHIVE` to `default_archive` and runs
	/// `target`.
	pub fn new<D: Into<OsString>, T: Into<OsString>>(default_archive: D, target: T) -> Self {
		Self {
			default_archive: default_archive.into(),
			target: target.into(),
		}
	}

	/// The value `LOCALE_ARCHIVE` is given if absent.
	pub fn default_archive(&self) -> &OsStr {
		&self.default_archive
	}

	/// The program this launcher execs.
	pub fn target(&self) -> &OsStr {
		&self.target
	}

	/// Give `LOCALE_ARCHIVE` its default if absent, then replace this process
	/// with the target, forwarding `argv` verbatim.
	///
	/// # Errors
	///
	/// [`Error::EnvironmentSet`] if the default couldn't be set, in which case
	/// the target is not run. [`Error::Exec`] if the target couldn't be run.
	pub fn launch<A: AsRef<OsStr>>(&self, argv: &[A]) -> Result<Void, Error> {
		match env::ensure_default(config::LOCALE_ARCHIVE_VAR, &self.default_archive)? {
			env::Applied::AlreadySet(value) => {
				tracing::debug!(value = ?value, "{} already set", config::LOCALE_ARCHIVE_VAR)
			}
			env::Applied::Defaulted => tracing::debug!(
				value = ?self.default_archive,
				"{} unset, using default",
				config::LOCALE_ARCHIVE_VAR
			),
		}
		tracing::debug!(program = ?self.target, argc = argv.len(), "exec");
		exec::replace_process(&self.target, argv)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_config() {
		let launcher = Launcher::from_build_config();
		assert_eq!(launcher.default_archive(), config::DEFAULT_LOCALE_ARCHIVE);
		assert_eq!(launcher.target(), config::TARGET);
	}
}
