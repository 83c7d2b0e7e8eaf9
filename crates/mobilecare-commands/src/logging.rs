//! Logging setup for the CLI.
//!
//! Library crates only emit `tracing` events; the binary installs the
//! subscriber. Output goes to stderr so rendered pages on stdout stay clean.

use tracing::Level;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose events are shown at the selected verbosity.
const CRATES: [&str; 5] = [
	"mobilecare",
	"mobilecare_commands",
	"mobilecare_conf",
	"mobilecare_pages",
	"mobilecare_site",
];

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
	/// Errors only.
	Quiet,
	/// Info and above.
	#[default]
	Normal,
	/// Debug and above.
	Verbose,
	/// Everything.
	Trace,
}

impl Verbosity {
	/// Maps `-q` and the number of `-v` flags to a level.
	pub fn from_flags(verbose: u8, quiet: bool) -> Self {
		if quiet {
			return Self::Quiet;
		}
		match verbose {
			0 => Self::Normal,
			1 => Self::Verbose,
			_ => Self::Trace,
		}
	}

	/// Convert verbosity to a tracing level.
	#[must_use]
	pub fn to_level(&self) -> Level {
		match self {
			Self::Quiet => Level::ERROR,
			Self::Normal => Level::INFO,
			Self::Verbose => Level::DEBUG,
			Self::Trace => Level::TRACE,
		}
	}

	/// Filter directive enabling this level for every site crate.
	pub fn directive(&self) -> String {
		let level = self.to_level();
		CRATES
			.iter()
			.map(|krate| format!("{krate}={level}"))
			.collect::<Vec<_>>()
			.join(",")
	}
}

/// Builds the event filter.
///
/// `RUST_LOG` wins when it is set and valid; otherwise `log_filter` (the
/// `log_filter` setting) is used, and without it the `verbosity` level.
pub fn build_filter(
	verbosity: Verbosity,
	log_filter: Option<&str>,
) -> Result<EnvFilter, ParseError> {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return Ok(filter);
	}
	match log_filter {
		Some(directive) => EnvFilter::try_new(directive),
		None => Ok(EnvFilter::new(verbosity.directive())),
	}
}

/// Initialize the logging system.
///
/// Fails when `log_filter` is not a valid filter directive.
pub fn init_logging(verbosity: Verbosity, log_filter: Option<&str>) -> Result<(), ParseError> {
	let env_filter = build_filter(verbosity, log_filter)?;

	let subscriber = tracing_subscriber::registry().with(env_filter).with(
		fmt::layer()
			.with_writer(std::io::stderr)
			.with_target(true)
			.with_file(false)
			.with_line_number(false),
	);

	// Ignore the error if a subscriber is already set
	let _ = subscriber.try_init();
	Ok(())
}
