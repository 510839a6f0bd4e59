//! The two ways the shim can fail.

use nix::errno::Errno;
use std::{ffi::OsString, fmt};

/// A fatal error. Neither kind is recoverable; the binary reports it with
/// [`fatal`](crate::fatal::fatal) and exits.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
	/// `setenv` refused to set `LOCALE_ARCHIVE`.
	#[error("setenv: {}", .source.desc())]
	EnvironmentSet {
		/// The errno `setenv` reported.
		source: Errno,
	},
	/// `execvp` returned, so the target was not run.
	#[error("{}: {}", .target.to_string_lossy(), .source.desc())]
	Exec {
		/// The program that was to replace the shim.
		target: OsString,
		/// The errno `execvp` reported.
		source: Errno,
	},
}

/// Discriminant of [`Error`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
	/// See [`Error::EnvironmentSet`].
	EnvironmentSetFailure,
	/// See [`Error::Exec`].
	ExecFailure,
}

impl Error {
	/// Which of the two failures this is.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::EnvironmentSet { .. } => ErrorKind::EnvironmentSetFailure,
			Error::Exec { .. } => ErrorKind::ExecFailure,
		}
	}

	/// The name of the failing operation: `setenv`, or the target path for a
	/// failed exec.
	pub fn operation(&self) -> String {
		match self {
			Error::EnvironmentSet { .. } => String::from("setenv"),
			Error::Exec { target, .. } => target.to_string_lossy().into_owned(),
		}
	}

	/// The underlying OS error.
	pub fn errno(&self) -> Errno {
		match *self {
			Error::EnvironmentSet { source } | Error::Exec { source, .. } => source,
		}
	}
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			ErrorKind::EnvironmentSetFailure => "EnvironmentSetFailure",
			ErrorKind::ExecFailure => "ExecFailure",
		})
	}
}
