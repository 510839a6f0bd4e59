//! Report a fatal error to syslog and stderr, then exit.

use crate::error::Error;
use std::{
	ffi::{CString, OsStr}, io::{self, Write}, path::Path, process
};

/// Log `err` to syslog at `LOG_ERR`, print it to stderr prefixed with the
/// program name as `err(3)` does, and exit with `EXIT_FAILURE`.
///
/// Both reports are always made; neither replaces the other.
pub fn fatal(err: &Error) -> ! {
	syslog(&err.to_string());
	let _ = writeln!(io::stderr(), "{}", stderr_line(&progname(), err));
	process::exit(libc::EXIT_FAILURE)
}

/// `syslog(LOG_ERR, "%s", message)`, with whatever identity `openlog` was last
/// given; by default the program name.
pub fn syslog(message: &str) {
	// Interior nuls would truncate the message anyway.
	let message = CString::new(message.replace('\0', "")).unwrap_or_default();
	unsafe {
		libc::syslog(
			libc::LOG_ERR,
			b"%s\0".as_ptr().cast::<libc::c_char>(),
			message.as_ptr(),
		);
	}
}

/// `<progname>: <operation>: <os error>`
pub fn stderr_line(progname: &str, err: &Error) -> String {
	format!("{}: {}", progname, err)
}

/// The basename of `argv[0]`, or the package name if there isn't one.
fn progname() -> String {
	std::env::args_os()
		.next()
		.as_deref()
		.and_then(|argv0| Path::new(argv0).file_name())
		.map(OsStr::to_string_lossy)
		.map_or_else(
			|| String::from(env!("CARGO_PKG_NAME")),
			std::borrow::Cow::into_owned,
		)
}
