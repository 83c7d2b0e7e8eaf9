//! # Mobilecare Commands
//!
//! The `mobilecare` command-line tool:
//!
//! - `routes`: list every route name and path
//! - `render <PATH>`: print the page rendered for a path
//! - `build [--out DIR]`: prerender every route to static documents
//!
//! Settings come from `mobilecare.toml` (or `--config`) layered under
//! `MOBILECARE_*` environment variables.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands, run};
pub use logging::{Verbosity, init_logging};
