//! # Mobilecare Conf
//!
//! Layered settings for the site tooling.
//!
//! Values are merged from, in increasing priority:
//!
//! 1. built-in defaults ([`sources::DefaultSource`])
//! 2. a TOML file, `mobilecare.toml` unless another path is given ([`sources::TomlFileSource`])
//! 3. `MOBILECARE_*` environment variables ([`sources::EnvSource`])
//!
//! ## Example
//!
//! ```no_run
//! use mobilecare_conf::Settings;
//!
//! let settings = Settings::load(None)?;
//! println!("prerendering into {}", settings.output_dir.display());
//! # Ok::<(), mobilecare_conf::SettingsError>(())
//! ```

#![warn(missing_docs)]

pub mod settings;
pub mod sources;

pub use settings::{DEFAULT_CONFIG_FILE, Settings, SettingsBuilder, SettingsError};
pub use sources::{ConfigSource, SourceError};
