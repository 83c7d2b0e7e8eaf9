//! Static prerendering of every route.

use crate::app::App;
use crate::content::SiteContent;
use crate::error::SiteError;
use crate::pages::routes;
use mobilecare_pages::router::MemoryHistory;
use mobilecare_pages::{DocumentOptions, Path};
use std::path::PathBuf;
use std::rc::Rc;

/// One prerendered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerenderedPage {
	/// The route path.
	pub path: Path,
	/// The route name, if any.
	pub name: Option<String>,
	/// The complete HTML document.
	pub html: String,
}

impl PrerenderedPage {
	/// File under `root` that serves this route: `index.html` for `/`,
	/// `<path>/index.html` otherwise.
	pub fn output_file(&self, root: &std::path::Path) -> PathBuf {
		let relative = self.path.as_str().trim_matches('/');
		if relative.is_empty() {
			root.join("index.html")
		} else {
			root.join(relative).join("index.html")
		}
	}
}

/// Renders every route of the site to a full document.
///
/// Each page is produced by mounting the app over an in-memory history
/// positioned at the route, so prerendered output matches what the browser
/// client renders for the same location.
pub fn prerender(
	content: SiteContent,
	options: &DocumentOptions,
) -> Result<Vec<PrerenderedPage>, SiteError> {
	content.validate()?;
	let table = routes(Rc::new(content.clone()))?;

	let mut pages = Vec::with_capacity(table.table().len());
	for route in table.table() {
		let history = Rc::new(MemoryHistory::new(route.path()));
		let app = App::mount(history, content.clone())?;
		let html = app.render_document(options);
		tracing::info!(path = %route.path(), bytes = html.len(), "prerendered route");

		pages.push(PrerenderedPage {
			path: route.path().clone(),
			name: route.name().map(str::to_string),
			html,
		});
		app.unmount();
	}

	Ok(pages)
}
