//! Argument parsing and dispatch.

use crate::commands;
use crate::logging::{Verbosity, init_logging};
use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use mobilecare_conf::Settings;
use mobilecare_pages::DocumentOptions;
use mobilecare_site::SiteContent;
use std::io::{self, Write};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "mobilecare")]
#[command(about = "Render and prerender the Best Mobile Care site", long_about = None)]
#[command(version)]
pub struct Cli {
	/// Command to run.
	#[command(subcommand)]
	pub command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbosity: u8,

	/// Only log errors
	#[arg(short, long, global = true)]
	pub quiet: bool,

	/// Settings file (defaults to mobilecare.toml)
	#[arg(long, value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,
}

/// Subcommands.
#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
	/// List every route name and path
	Routes,

	/// Print the page rendered at PATH
	Render {
		/// Location to render, e.g. `/developer`
		#[arg(value_name = "PATH")]
		path: String,
	},

	/// Prerender every route into static documents
	Build {
		/// Output directory (defaults to the `output_dir` setting)
		#[arg(short, long, value_name = "DIR")]
		out: Option<PathBuf>,
	},
}

impl Cli {
	/// Logging verbosity selected by `-v` and `-q`.
	pub fn log_verbosity(&self) -> Verbosity {
		Verbosity::from_flags(self.verbosity, self.quiet)
	}
}

/// Loads settings and content, then runs the selected command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
	let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
	init_logging(cli.log_verbosity(), settings.log_filter.as_deref()).with_context(|| {
		format!(
			"invalid log_filter setting {:?}",
			settings.log_filter.as_deref().unwrap_or_default()
		)
	})?;

	let content = load_content(&settings)?;
	let stdout = io::stdout();
	let mut out = stdout.lock();

	match cli.command {
		Commands::Routes => commands::routes(content, &mut out),
		Commands::Render { path } => commands::render(content, &path, &mut out),
		Commands::Build { out: dir } => {
			let dir = dir.unwrap_or_else(|| settings.output_dir.clone());
			let options = document_options(&settings, &content);
			let written = commands::build(content, &options, &dir)?;
			writeln!(
				out,
				"{} {} pages into {}",
				"Prerendered".green().bold(),
				written.len(),
				dir.display()
			)?;
			Ok(())
		}
	}
}

/// Site content from the `content_file` setting, or the built-in content.
pub fn load_content(settings: &Settings) -> anyhow::Result<SiteContent> {
	match &settings.content_file {
		Some(path) => SiteContent::load(path)
			.with_context(|| format!("failed to load site content from {}", path.display())),
		None => Ok(SiteContent::default()),
	}
}

/// Document options for prerendered pages.
pub fn document_options(settings: &Settings, content: &SiteContent) -> DocumentOptions {
	let options = DocumentOptions::new()
		.lang(settings.lang.clone())
		.description(content.hero.description.clone());
	let options = settings
		.stylesheets
		.iter()
		.fold(options, |options, href| options.stylesheet(href.clone()));
	settings
		.scripts
		.iter()
		.fold(options, |options, src| options.script(src.clone()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_render() {
		let cli = Cli::try_parse_from(["mobilecare", "render", "/developer"]).unwrap();
		assert_eq!(
			cli.command,
			Commands::Render {
				path: "/developer".to_string()
			}
		);
		assert_eq!(cli.log_verbosity(), Verbosity::Normal);
	}

	#[rstest]
	fn test_parse_global_flags_after_subcommand() {
		let cli = Cli::try_parse_from([
			"mobilecare",
			"build",
			"--out",
			"public",
			"-vv",
			"--config",
			"site.toml",
		])
		.unwrap();

		assert_eq!(
			cli.command,
			Commands::Build {
				out: Some(PathBuf::from("public"))
			}
		);
		assert_eq!(cli.log_verbosity(), Verbosity::Trace);
		assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
	}

	#[rstest]
	fn test_parse_quiet() {
		let cli = Cli::try_parse_from(["mobilecare", "-q", "routes"]).unwrap();
		assert_eq!(cli.log_verbosity(), Verbosity::Quiet);
	}

	#[rstest]
	fn test_render_requires_path() {
		assert!(Cli::try_parse_from(["mobilecare", "render"]).is_err());
	}

	#[rstest]
	fn test_document_options_from_settings() {
		let settings = Settings {
			lang: "ne".to_string(),
			stylesheets: vec!["/a.css".to_string()],
			scripts: vec!["/a.js".to_string(), "/b.js".to_string()],
			..Settings::default()
		};
		let content = SiteContent::default();

		let options = document_options(&settings, &content);

		assert_eq!(options.lang, "ne");
		assert_eq!(options.stylesheets, vec!["/a.css".to_string()]);
		assert_eq!(options.scripts.len(), 2);
		assert_eq!(options.description.as_deref(), Some(content.hero.description.as_str()));
	}

	#[rstest]
	fn test_load_content_defaults_without_file() {
		let content = load_content(&Settings::default()).unwrap();
		assert_eq!(content, SiteContent::default());
	}
}
