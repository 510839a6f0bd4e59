//! Replace the current process image.

use crate::error::Error;
use nix::{errno::Errno, unistd};
use std::{
	ffi::{CString, OsStr}, os::unix::ffi::OsStrExt
};
use void::Void;

/// `execvp(target, argv)`: search `PATH` for `target` and replace this process
/// with it, passing `argv` exactly as given (including `argv[0]`) and
/// inheriting the environment and file descriptors.
///
/// There is no `Ok` value to observe; if this returns, it failed.
///
/// # Errors
///
/// [`Error::Exec`] with the errno from `execvp`, or `EINVAL` if `target` or
/// an argument contains a nul byte.
pub fn replace_process<T: AsRef<OsStr>, A: AsRef<OsStr>>(
	target: T, argv: &[A],
) -> Result<Void, Error> {
	let target = target.as_ref();
	let fail = |source| Error::Exec {
		target: target.to_owned(),
		source,
	};
	let file = to_cstring(target).map_err(fail)?;
	let argv = argv
		.iter()
		.map(|arg| to_cstring(arg.as_ref()))
		.collect::<Result<Vec<_>, _>>()
		.map_err(fail)?;
	match unistd::execvp(&file, &argv) {
		Ok(never) => match never {},
		Err(source) => Err(fail(source)),
	}
}

fn to_cstring(s: &OsStr) -> Result<CString, Errno> {
	CString::new(s.as_bytes()).map_err(|_| Errno::EINVAL)
}
