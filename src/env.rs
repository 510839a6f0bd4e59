//! Give an environment variable a default value.
//!
//! The stdlib's `set_var` panics rather than reporting a failing `setenv`, so
//! this goes to libc directly and surfaces the errno.

use crate::error::Error;
use nix::errno::Errno;
use std::{
	ffi::{CString, OsStr, OsString}, os::unix::ffi::OsStrExt
};

/// What [`ensure_default`] found.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Applied {
	/// The variable was present, and has been left with this value. An empty
	/// value counts as present.
	AlreadySet(OsString),
	/// The variable was absent, and has been set to the default.
	Defaulted,
}

/// Set `name` to `default` if, and only if, it is absent from the environment.
///
/// # Errors
///
/// [`Error::EnvironmentSet`] if `setenv` fails. A name or value that can't be
/// passed to `setenv` (it contains a nul byte, or the name is empty or
/// contains `=`) fails with `EINVAL`, as `setenv` itself would.
pub fn ensure_default<N: AsRef<OsStr>, V: AsRef<OsStr>>(
	name: N, default: V,
) -> Result<Applied, Error> {
	let name = name.as_ref();
	match std::env::var_os(name) {
		Some(value) => Ok(Applied::AlreadySet(value)),
		None => set(name, default.as_ref()).map(|()| Applied::Defaulted),
	}
}

/// `setenv(name, value, 1)`.
fn set(name: &OsStr, value: &OsStr) -> Result<(), Error> {
	let invalid = Error::EnvironmentSet {
		source: Errno::EINVAL,
	};
	if name.is_empty() || name.as_bytes().contains(&b'=') {
		return Err(invalid);
	}
	let name = CString::new(name.as_bytes()).map_err(|_| invalid.clone())?;
	let value = CString::new(value.as_bytes()).map_err(|_| invalid)?;
	let err = unsafe { libc::setenv(name.as_ptr(), value.as_ptr(), 1) };
	Errno::result(err)
		.map(drop)
		.map_err(|source| Error::EnvironmentSet { source })
}
