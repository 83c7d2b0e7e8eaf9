//! Integration tests for layered settings
//!
//! 1. Defaults apply when nothing else is configured
//! 2. A TOML file overrides defaults
//! 3. Environment variables override the TOML file
//! 4. An explicitly named file must exist

use mobilecare_conf::sources::{EnvSource, TomlFileSource};
use mobilecare_conf::{DEFAULT_CONFIG_FILE, Settings, SettingsBuilder, SettingsError, SourceError};
use rstest::{fixture, rstest};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tempfile::TempDir;

const VARS: [&str; 4] = [
	"MOBILECARE_OUTPUT_DIR",
	"MOBILECARE_LANG",
	"MOBILECARE_SCRIPTS",
	"MOBILECARE_LOG_FILTER",
];

/// Clears every site variable before and after a test.
struct CleanEnv;

impl CleanEnv {
	fn new() -> Self {
		clear_vars();
		Self
	}
}

impl Drop for CleanEnv {
	fn drop(&mut self) {
		clear_vars();
	}
}

fn clear_vars() {
	for var in VARS {
		// SAFETY: Environment access is serialized with #[serial(env)].
		unsafe { env::remove_var(var) };
	}
}

#[fixture]
fn config_dir() -> TempDir {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("mobilecare.toml"),
		r#"
output_dir = "public"
lang = "ne"
stylesheets = ["/assets/site.css"]
scripts = ["/pkg/site.js"]
"#,
	)
	.unwrap();
	dir
}

#[rstest]
#[serial(env)]
fn test_missing_implicit_file_yields_defaults() {
	let _env = CleanEnv::new();
	let dir = TempDir::new().unwrap();

	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(dir.path().join(DEFAULT_CONFIG_FILE)))
		.add_source(EnvSource::site())
		.build()
		.unwrap();

	assert_eq!(settings, Settings::default());
}

#[rstest]
#[serial(env)]
fn test_missing_explicit_file_is_an_error() {
	let _env = CleanEnv::new();
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("mobilecare.tmol");

	let err = Settings::load(Some(path.as_path())).unwrap_err();

	match err {
		SettingsError::Source { source_name, error } => {
			assert!(source_name.contains("mobilecare.tmol"));
			assert!(matches!(error, SourceError::Io(ref e) if e.kind() == ErrorKind::NotFound));
		}
		other => panic!("expected a source error, got {other:?}"),
	}
}

#[rstest]
#[serial(env)]
fn test_file_overrides_defaults(config_dir: TempDir) {
	let _env = CleanEnv::new();

	let settings = Settings::load(Some(config_dir.path().join("mobilecare.toml").as_path())).unwrap();

	assert_eq!(settings.output_dir, PathBuf::from("public"));
	assert_eq!(settings.lang, "ne");
	assert_eq!(settings.stylesheets, vec!["/assets/site.css".to_string()]);
	assert_eq!(settings.log_filter, None);
}

#[rstest]
#[serial(env)]
fn test_env_overrides_file(config_dir: TempDir) {
	let _env = CleanEnv::new();
	// SAFETY: Environment access is serialized with #[serial(env)].
	unsafe {
		env::set_var("MOBILECARE_OUTPUT_DIR", "out");
		env::set_var("MOBILECARE_SCRIPTS", "/a.js,/b.js");
		env::set_var("MOBILECARE_LOG_FILTER", "mobilecare=trace");
	}

	let settings = Settings::load(Some(config_dir.path().join("mobilecare.toml").as_path())).unwrap();

	assert_eq!(settings.output_dir, PathBuf::from("out"));
	assert_eq!(settings.lang, "ne");
	assert_eq!(settings.scripts, vec!["/a.js".to_string(), "/b.js".to_string()]);
	assert_eq!(settings.log_filter.as_deref(), Some("mobilecare=trace"));
}

#[rstest]
#[serial(env)]
fn test_empty_lang_from_env_is_rejected(config_dir: TempDir) {
	let _env = CleanEnv::new();
	// SAFETY: Environment access is serialized with #[serial(env)].
	unsafe { env::set_var("MOBILECARE_LANG", "") };

	let err = Settings::load(Some(config_dir.path().join("mobilecare.toml").as_path())).unwrap_err();

	assert!(matches!(err, SettingsError::InvalidValue { key: "lang", .. }));
}

#[rstest]
#[serial(env)]
fn test_malformed_file_names_source() {
	let _env = CleanEnv::new();
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("mobilecare.toml");
	fs::write(&path, "lang = [").unwrap();

	let err = Settings::load(Some(path.as_path())).unwrap_err();

	assert!(err.to_string().starts_with("Failed to load TOML file:"));
}
