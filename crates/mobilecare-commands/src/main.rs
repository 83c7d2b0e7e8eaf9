//! Mobilecare CLI
//!
//! ## Usage
//!
//! ```bash
//! mobilecare routes
//! mobilecare render /developer
//! mobilecare build --out dist
//! ```

use clap::Parser;
use colored::Colorize;
use mobilecare_commands::{Cli, run};
use std::process;

fn main() {
	let cli = Cli::parse();

	if let Err(e) = run(cli) {
		eprintln!("{} {:#}", "Error:".red().bold(), e);
		process::exit(1);
	}
}
