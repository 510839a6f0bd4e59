//! Echo the command line arguments and environment variables
//!
//! This exists for `tests/launch.rs`, which builds the shim to exec it.

use std::env;

fn main() {
	println!(
		"{}",
		serde_json::to_string(&(
			env::args_os().collect::<Vec<_>>(),
			env::vars_os().collect::<Vec<_>>()
		))
		.unwrap()
	);
}
