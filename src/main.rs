//! Set `LOCALE_ARCHIVE` if absent, then exec the configured program with our
//! arguments.

#[cfg(not(unix))]
fn main() {
	eprintln!("locale-shim is only implemented for UNIX");
	std::process::exit(1);
}

#[cfg(unix)]
fn main() {
	use locale_shim::{fatal::fatal, logging, Launcher};

	logging::init();
	let argv = std::env::args_os().collect::<Vec<_>>();
	match Launcher::from_build_config().launch(&argv) {
		Ok(never) => void::unreachable(never),
		Err(err) => fatal(&err),
	}
}
