//! Site settings and the layered builder that produces them.

use crate::sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mobilecare.toml";

/// Errors raised while assembling [`Settings`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// A source failed to load.
	#[error("Failed to load {source_name}: {error}")]
	Source {
		/// Description of the failing source.
		source_name: String,
		/// The underlying error.
		#[source]
		error: SourceError,
	},

	/// The merged values do not fit the settings shape.
	#[error("Invalid settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	/// A value is well-formed but unusable.
	#[error("Invalid value for {key}: {message}")]
	InvalidValue {
		/// The offending key.
		key: &'static str,
		/// What is wrong with it.
		message: String,
	},
}

/// Settings for prerendering and serving the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// TOML file overriding the built-in site content.
	pub content_file: Option<PathBuf>,
	/// Directory that receives prerendered pages.
	pub output_dir: PathBuf,
	/// `lang` attribute of rendered documents.
	pub lang: String,
	/// Stylesheet URLs linked from every page.
	pub stylesheets: Vec<String>,
	/// Script URLs loaded by every page.
	pub scripts: Vec<String>,
	/// Log filter directive, e.g. `mobilecare=debug`.
	pub log_filter: Option<String>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			content_file: None,
			output_dir: PathBuf::from("dist"),
			lang: "en".to_string(),
			stylesheets: Vec::new(),
			scripts: Vec::new(),
			log_filter: None,
		}
	}
}

impl Settings {
	/// Loads settings from the standard layers: defaults, the TOML file at
	/// `config` (or [`DEFAULT_CONFIG_FILE`]), then `MOBILECARE_*` variables.
	///
	/// An explicit `config` file must exist; the implicit
	/// [`DEFAULT_CONFIG_FILE`] is skipped when absent.
	pub fn load(config: Option<&Path>) -> Result<Self, SettingsError> {
		let file = match config {
			Some(path) => TomlFileSource::required(path),
			None => TomlFileSource::new(DEFAULT_CONFIG_FILE),
		};
		SettingsBuilder::new()
			.add_source(DefaultSource::new())
			.add_source(file)
			.add_source(EnvSource::site())
			.build()
	}

	/// Checks values that deserialize fine but cannot be used.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.lang.trim().is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "lang",
				message: "must not be empty".to_string(),
			});
		}
		if self.output_dir.as_os_str().is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "output_dir",
				message: "must not be empty".to_string(),
			});
		}
		Ok(())
	}
}

/// Merges configuration sources into [`Settings`].
///
/// Sources are applied in ascending priority; a key from a higher priority
/// source replaces the whole value from a lower one. Keys that are absent
/// everywhere take the [`Settings::default`] value.
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a source.
	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Loads every source, merges them and deserializes the result.
	pub fn build(mut self) -> Result<Settings, SettingsError> {
		self.sources.sort_by_key(|source| source.priority());

		let mut merged = Map::new();
		for source in &self.sources {
			let values = source.load().map_err(|error| SettingsError::Source {
				source_name: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"settings source loaded"
			);
			merged.extend(values);
		}

		let settings: Settings = serde_json::from_value(Value::Object(merged))?;
		settings.validate()?;
		Ok(settings)
	}
}
