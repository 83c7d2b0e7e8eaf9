//! Error types for the site crate.

use mobilecare_pages::RouterError;
use std::path::PathBuf;

/// Errors raised while loading content or assembling pages.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
	/// A content file could not be read.
	#[error("Failed to read {}: {source}", path.display())]
	Io {
		/// The file that failed.
		path: PathBuf,
		/// The underlying error.
		source: std::io::Error,
	},

	/// A content file is not valid TOML for the content model.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Content parsed but cannot be rendered.
	#[error("Invalid site content: {0}")]
	InvalidContent(String),

	/// The route table could not be built.
	#[error(transparent)]
	Router(#[from] RouterError),
}
