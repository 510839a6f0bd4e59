//! Everything that reaches `setenv`.
//!
//! `setenv` bypasses the stdlib's environment lock, so these run one after
//! another on the main thread without the test harness.

#[cfg(not(unix))]
fn main() {}

#[cfg(unix)]
fn main() {
	absent();
	only_once();
	invalid();
	defaults_then_fails_exec();
	setenv_failure_skips_exec();
	empty_goes_straight_to_exec();
}

#[cfg(unix)]
use locale_shim::{
	env::{ensure_default, Applied}, ErrorKind, Launcher
};
#[cfg(unix)]
use nix::errno::Errno;

#[cfg(unix)]
fn absent() {
	let name = "LOCALE_SHIM_TEST_ABSENT";
	std::env::remove_var(name);
	assert_eq!(
		ensure_default(name, "/usr/lib/locale/locale-archive"),
		Ok(Applied::Defaulted)
	);
	assert_eq!(
		std::env::var_os(name).unwrap(),
		"/usr/lib/locale/locale-archive"
	);
}

#[cfg(unix)]
fn only_once() {
	let name = "LOCALE_SHIM_TEST_ONCE";
	std::env::remove_var(name);
	assert_eq!(ensure_default(name, "first"), Ok(Applied::Defaulted));
	assert_eq!(
		ensure_default(name, "second"),
		Ok(Applied::AlreadySet("first".into()))
	);
}

#[cfg(unix)]
fn invalid() {
	let name = "LOCALE_SHIM_TEST_INVALID";
	std::env::remove_var(name);
	let err = ensure_default(name, "bad\0value").unwrap_err();
	assert_eq!(err.kind(), ErrorKind::EnvironmentSetFailure);
	assert_eq!(err.errno(), Errno::EINVAL);
	assert!(std::env::var_os(name).is_none());
}

#[cfg(unix)]
fn defaults_then_fails_exec() {
	std::env::remove_var("LOCALE_ARCHIVE");
	let launcher = Launcher::new("/default/locale-archive", "/nonexistent/locale-shim-target");
	let err = launcher.launch(&["locale-shim", "--foo"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ExecFailure);
	assert_eq!(err.operation(), "/nonexistent/locale-shim-target");
	assert_eq!(err.errno(), Errno::ENOENT);
	assert_eq!(
		std::env::var_os("LOCALE_ARCHIVE").unwrap(),
		"/default/locale-archive"
	);
}

#[cfg(unix)]
fn setenv_failure_skips_exec() {
	std::env::remove_var("LOCALE_ARCHIVE");

	// Had exec been attempted this would be an ExecFailure for the target.
	let launcher = Launcher::new("bad\0archive", "/nonexistent/locale-shim-target");
	let err = launcher.launch(&["locale-shim", "--foo"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::EnvironmentSetFailure);
	assert_eq!(err.operation(), "setenv");
	assert!(std::env::var_os("LOCALE_ARCHIVE").is_none());
}

#[cfg(unix)]
fn empty_goes_straight_to_exec() {
	// Present, even if empty: nothing to set.
	std::env::set_var("LOCALE_ARCHIVE", "");
	let launcher = Launcher::new("bad\0archive", "/nonexistent/locale-shim-target");
	let err = launcher.launch(&["locale-shim"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ExecFailure);
	assert_eq!(err.operation(), "/nonexistent/locale-shim-target");
	assert_eq!(std::env::var_os("LOCALE_ARCHIVE").unwrap(), "");
}
