//! Diagnostic logging on standard error.
//!
//! Standard output is reserved for the envelope line, so every log event goes
//! to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "MODULES_JSON_LOG";

/// Default filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install the global subscriber. A filter in [`LOG_ENV`] wins over `verbosity`.
///
/// Calling this more than once keeps the first subscriber.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.try_init();
}
