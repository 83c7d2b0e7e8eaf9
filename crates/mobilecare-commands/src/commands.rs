//! Command implementations.
//!
//! Each command writes its report to the given writer and returns an
//! [`anyhow::Result`], so the binary decides how failures are shown.

use anyhow::Context;
use mobilecare_pages::DocumentOptions;
use mobilecare_pages::router::MemoryHistory;
use mobilecare_site::{App, SiteContent, prerender};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Writes one `name path` line per route, in table order.
pub fn routes(content: SiteContent, out: &mut dyn Write) -> anyhow::Result<()> {
	let matcher = mobilecare_site::routes(Rc::new(content))?;
	for route in matcher.table() {
		writeln!(out, "{:<12} {}", route.name().unwrap_or("-"), route.path())?;
	}
	Ok(())
}

/// Writes the fragment rendered at `path`.
///
/// An unknown path renders nothing; that is reported as a warning, not an
/// error.
pub fn render(content: SiteContent, path: &str, out: &mut dyn Write) -> anyhow::Result<()> {
	let history = Rc::new(MemoryHistory::new(path));
	let app = App::mount(history, content)?;
	let html = app.render().render_to_string();
	app.unmount();

	if html.is_empty() {
		tracing::warn!(path, "no route matches");
		return Ok(());
	}
	writeln!(out, "{html}")?;
	Ok(())
}

/// Prerenders every route under `out_dir` and returns the written files.
pub fn build(
	content: SiteContent,
	options: &DocumentOptions,
	out_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
	let pages = prerender(content, options)?;

	let mut written = Vec::with_capacity(pages.len());
	for page in pages {
		let file = page.output_file(out_dir);
		if let Some(parent) = file.parent() {
			fs::create_dir_all(parent)
				.with_context(|| format!("failed to create {}", parent.display()))?;
		}
		fs::write(&file, &page.html)
			.with_context(|| format!("failed to write {}", file.display()))?;
		tracing::info!(path = %page.path, file = %file.display(), "wrote page");
		written.push(file);
	}

	Ok(written)
}
