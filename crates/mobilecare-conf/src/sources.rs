//! Configuration sources for layered settings
//!
//! Provides the sources that are merged together in priority order
//! (environment variables > TOML file > defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Prefix of the environment variables read by [`EnvSource::site`].
pub const ENV_PREFIX: &str = "MOBILECARE_";

/// Trait for configuration sources
pub trait ConfigSource {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	/// Reading a file failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The source parsed but has the wrong shape.
	#[error("Parse error: {0}")]
	Parse(String),

	/// A TOML file failed to parse.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A value could not be converted to JSON.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Environment variable configuration source
///
/// Keys have the prefix stripped and are lower-cased, so
/// `MOBILECARE_OUTPUT_DIR` becomes `output_dir`. Keys registered with
/// [`with_list_key`](Self::with_list_key) are split on commas.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
	prefix: Option<String>,
	list_keys: HashSet<String>,
}

impl EnvSource {
	/// Create a new environment variable configuration source
	///
	/// # Examples
	///
	/// ```
	/// use mobilecare_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new();
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// The source used by the site tooling: `MOBILECARE_*` variables, with
	/// asset lists split on commas.
	pub fn site() -> Self {
		Self::new()
			.with_prefix(ENV_PREFIX)
			.with_list_key("stylesheets")
			.with_list_key("scripts")
	}

	/// Set a prefix filter for environment variables
	///
	/// # Examples
	///
	/// ```
	/// use mobilecare_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("APP_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Treat `key` (after prefix stripping) as a comma-separated list.
	pub fn with_list_key(mut self, key: impl Into<String>) -> Self {
		self.list_keys.insert(key.into());
		self
	}

	fn parse(&self, key: &str, value: String) -> Value {
		if self.list_keys.contains(key) {
			let list = value
				.split(',')
				.map(str::trim)
				.filter(|s| !s.is_empty())
				.map(|s| Value::String(s.to_string()))
				.collect();
			Value::Array(list)
		} else {
			Value::String(value)
		}
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = IndexMap::new();

		for (raw_key, raw_value) in std::env::vars_os() {
			// Variables outside our namespace may hold arbitrary bytes.
			let Some(key) = raw_key.to_str() else {
				continue;
			};
			let clean_key = match &self.prefix {
				Some(prefix) => match key.strip_prefix(prefix.as_str()) {
					Some(stripped) => stripped,
					None => continue,
				},
				None => key,
			};

			let value = raw_value
				.into_string()
				.map_err(|_| SourceError::Parse(format!("{key} is not valid UTF-8")))?;
			let lower_key = clean_key.to_lowercase();
			let parsed = self.parse(&lower_key, value);
			config.insert(lower_key, parsed);
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

/// TOML file configuration source
///
/// A missing file loads as an empty layer unless the source was created
/// with [`required`](Self::required).
#[derive(Debug, Clone)]
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use mobilecare_conf::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::new("mobilecare.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Create a TOML file source whose file must exist
	///
	/// # Examples
	///
	/// ```
	/// use mobilecare_conf::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::required("site.toml");
	/// assert!(source.is_required());
	/// ```
	pub fn required(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	/// Returns true when a missing file is an error.
	pub fn is_required(&self) -> bool {
		self.required
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			if self.required {
				return Err(SourceError::Io(io::Error::new(
					io::ErrorKind::NotFound,
					format!("{} does not exist", self.path.display()),
				)));
			}
			tracing::debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;
		let json_value = serde_json::to_value(toml_value)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected table at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Default values configuration source
#[derive(Debug, Clone, Default)]
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create an empty default values source
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a default value for a configuration key
	///
	/// # Examples
	///
	/// ```
	/// use mobilecare_conf::sources::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("lang", Value::String("ne".to_string()));
	/// ```
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;
	use std::env;
	use std::fs::File;
	use std::io::Write;
	use tempfile::TempDir;

	#[rstest]
	#[serial(env)]
	fn test_env_source_strips_prefix_and_lowercases() {
		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::set_var("MOBILECARE_OUTPUT_DIR", "public");
			env::set_var("MOBILECARE_STYLESHEETS", "/a.css, /b.css,");
		}

		let config = EnvSource::site().load().unwrap();

		assert_eq!(
			config.get("output_dir"),
			Some(&Value::String("public".to_string()))
		);
		assert_eq!(
			config.get("stylesheets"),
			Some(&serde_json::json!(["/a.css", "/b.css"]))
		);

		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::remove_var("MOBILECARE_OUTPUT_DIR");
			env::remove_var("MOBILECARE_STYLESHEETS");
		}
	}

	#[rstest]
	#[serial(env)]
	fn test_env_source_ignores_other_variables() {
		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::set_var("UNRELATED_LANG", "fr");
		}

		let config = EnvSource::site().load().unwrap();
		assert!(!config.contains_key("unrelated_lang"));
		assert!(!config.contains_key("lang"));

		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::remove_var("UNRELATED_LANG");
		}
	}

	#[cfg(unix)]
	#[rstest]
	#[serial(env)]
	fn test_env_source_skips_unrelated_non_utf8_variables() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::set_var("UNRELATED_BYTES", OsStr::from_bytes(b"\xff\xfe"));
			env::set_var("MOBILECARE_LANG", "ne");
		}

		let config = EnvSource::site().load();

		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::remove_var("UNRELATED_BYTES");
			env::remove_var("MOBILECARE_LANG");
		}

		let config = config.unwrap();
		assert_eq!(config.get("lang"), Some(&Value::String("ne".to_string())));
		assert!(!config.contains_key("unrelated_bytes"));
	}

	#[cfg(unix)]
	#[rstest]
	#[serial(env)]
	fn test_env_source_rejects_non_utf8_site_variable() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::set_var("MOBILECARE_OUTPUT_DIR", OsStr::from_bytes(b"out\xff"));
		}

		let result = EnvSource::site().load();

		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe {
			env::remove_var("MOBILECARE_OUTPUT_DIR");
		}

		let err = result.unwrap_err();
		assert!(matches!(err, SourceError::Parse(_)));
		assert!(err.to_string().contains("MOBILECARE_OUTPUT_DIR"));
	}

	#[rstest]
	fn test_toml_source() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("mobilecare.toml");

		let mut file = File::create(&config_path).unwrap();
		writeln!(
			file,
			r#"
output_dir = "public"
scripts = ["/pkg/site.js"]
"#
		)
		.unwrap();

		let config = TomlFileSource::new(&config_path).load().unwrap();

		assert_eq!(
			config.get("output_dir"),
			Some(&Value::String("public".to_string()))
		);
		assert_eq!(config.get("scripts"), Some(&serde_json::json!(["/pkg/site.js"])));
	}

	#[rstest]
	fn test_toml_source_missing_file_is_empty() {
		let temp_dir = TempDir::new().unwrap();
		let source = TomlFileSource::new(temp_dir.path().join("absent.toml"));
		assert!(source.load().unwrap().is_empty());
	}

	#[rstest]
	fn test_required_toml_source_missing_file_is_not_found() {
		let temp_dir = TempDir::new().unwrap();
		let source = TomlFileSource::required(temp_dir.path().join("absent.toml"));

		let err = source.load().unwrap_err();

		assert!(matches!(err, SourceError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
		assert!(err.to_string().contains("absent.toml"));
	}

	#[rstest]
	fn test_toml_source_invalid_file() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("broken.toml");
		fs::write(&config_path, "output_dir = ").unwrap();

		let err = TomlFileSource::new(&config_path).load().unwrap_err();
		assert!(matches!(err, SourceError::Toml(_)));
	}

	#[rstest]
	#[case(DefaultSource::new().priority(), 0)]
	#[case(TomlFileSource::new("x.toml").priority(), 50)]
	#[case(EnvSource::new().priority(), 100)]
	fn test_priorities(#[case] actual: u8, #[case] expected: u8) {
		assert_eq!(actual, expected);
	}

	#[rstest]
	fn test_descriptions() {
		assert_eq!(
			EnvSource::site().description(),
			"Environment variables (prefix: MOBILECARE_)"
		);
		assert_eq!(
			TomlFileSource::new("site.toml").description(),
			"TOML file: site.toml"
		);
	}
}
