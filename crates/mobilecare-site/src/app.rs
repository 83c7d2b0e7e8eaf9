//! The mounted site.

use crate::content::SiteContent;
use crate::error::SiteError;
use crate::pages::{page_title, routes};
use mobilecare_pages::{DocumentOptions, NavigationContext, Router, View, render_document};
use std::rc::Rc;

/// The site's router over a navigation context.
///
/// Works the same over `MemoryHistory` for prerendering and tests as over
/// the browser history in the WASM client.
#[derive(Debug)]
pub struct App {
	content: Rc<SiteContent>,
	router: Router,
}

impl App {
	/// Validates `content`, builds the route table and mounts the router.
	pub fn mount(
		navigation: Rc<dyn NavigationContext>,
		content: SiteContent,
	) -> Result<Self, SiteError> {
		content.validate()?;
		let content = Rc::new(content);
		let matcher = routes(Rc::clone(&content))?;
		let router = Router::mount(navigation, matcher);
		tracing::debug!(path = %router.current_path(), "site mounted");

		Ok(Self { content, router })
	}

	/// Renders the page for the current location.
	pub fn render(&self) -> View {
		self.router.render()
	}

	/// Document title for the current location.
	pub fn title(&self) -> String {
		page_title(&self.content, &self.router.current_path())
	}

	/// Renders the current page as a complete document titled for it.
	pub fn render_document(&self, options: &DocumentOptions) -> String {
		let options = options.clone().title(self.title());
		render_document(&self.render(), &options)
	}

	/// Returns the router.
	pub fn router(&self) -> &Router {
		&self.router
	}

	/// Returns the shared content.
	pub fn content(&self) -> &Rc<SiteContent> {
		&self.content
	}

	/// Unmounts the router.
	pub fn unmount(self) {
		self.router.unmount();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mobilecare_pages::router::{DummyEvent, Link, MemoryHistory};
	use rstest::rstest;

	#[rstest]
	fn test_mount_at_developer() {
		let history = Rc::new(MemoryHistory::new("/developer"));
		let app = App::mount(history, SiteContent::default()).unwrap();

		assert_eq!(app.title(), "Developer | Best Mobile Care");
		assert!(app.render().render_to_string().contains("Gobinda Prasad Paudel"));
	}

	#[rstest]
	fn test_invalid_content_is_rejected() {
		let content = SiteContent {
			company_name: String::new(),
			..SiteContent::default()
		};
		let err = App::mount(Rc::new(MemoryHistory::default()), content).unwrap_err();
		assert!(matches!(err, SiteError::InvalidContent(_)));
	}

	#[rstest]
	fn test_title_follows_navigation() {
		let history = Rc::new(MemoryHistory::new("/"));
		let app = App::mount(history.clone(), SiteContent::default()).unwrap();

		Link::new("/developer", "Developer")
			.activate(&*history, &DummyEvent)
			.unwrap();

		assert_eq!(app.title(), "Developer | Best Mobile Care");
	}

	#[rstest]
	fn test_document_is_titled() {
		let app = App::mount(Rc::new(MemoryHistory::default()), SiteContent::default()).unwrap();
		let html = app.render_document(&DocumentOptions::new().lang("en"));

		assert!(html.contains("<title>Best Mobile Care | Mobile Repair in Kathmandu</title>"));
		assert!(html.contains(r#"<section id="services""#));
	}
}
