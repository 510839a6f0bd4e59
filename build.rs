//! This build script bakes the two constants of the shim into the binary: the
//! default value for `LOCALE_ARCHIVE`, and the program to `execvp`. They are
//! taken from the `LOCALE_SHIM_DEFAULT_ARCHIVE` and `LOCALE_SHIM_TARGET`
//! environment variables, which are normally set by the packaging expression.
//!
//! The script should never fail. If either variable is unset it warns and
//! falls back to a conventional value.

const WARN: &str = "cargo::warning";

const DEFAULTS: [(&str, &str); 2] = [
	("LOCALE_SHIM_DEFAULT_ARCHIVE", "/usr/lib/locale/locale-archive"),
	("LOCALE_SHIM_TARGET", "flox"),
];

fn main() {
	for (var, fallback) in DEFAULTS.iter() {
		let value = std::env::var(var).unwrap_or_else(|_| {
			println!("{}=environment variable `{}` not found, using {}", WARN, var, fallback);
			fallback.to_string()
		});
		if value.is_empty() {
			println!("{}=environment variable `{}` is empty", WARN, var);
		}
		println!("cargo::rustc-env={}={}", var, value);
		println!("cargo::rerun-if-env-changed={}", var);
	}
}
