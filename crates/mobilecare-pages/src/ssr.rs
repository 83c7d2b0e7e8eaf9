//! Static document rendering.
//!
//! Wraps a rendered [`View`] in a complete HTML document so each route can be
//! served as a static file. The browser client later mounts into the same
//! `<div id="app">` and takes over navigation.

use crate::component::{View, html_escape};

/// Options for document rendering.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
	/// Language attribute for the HTML element.
	pub lang: String,
	/// Document title.
	pub title: String,
	/// Meta description.
	pub description: Option<String>,
	/// Stylesheet URLs, linked in order.
	pub stylesheets: Vec<String>,
	/// Module script URLs, loaded in order at the end of the body.
	pub scripts: Vec<String>,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: String::new(),
			description: None,
			stylesheets: Vec::new(),
			scripts: Vec::new(),
		}
	}
}

impl DocumentOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Sets the meta description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Adds a stylesheet.
	pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
		self.stylesheets.push(href.into());
		self
	}

	/// Adds a module script.
	pub fn script(mut self, src: impl Into<String>) -> Self {
		self.scripts.push(src.into());
		self
	}
}

/// Renders `view` as the body of a full HTML document.
pub fn render_document(view: &View, options: &DocumentOptions) -> String {
	let content = view.render_to_string();
	let mut html = String::with_capacity(content.len() + 512);

	html.push_str("<!DOCTYPE html>\n");
	html.push_str(&format!("<html lang=\"{}\">\n", html_escape(&options.lang)));

	html.push_str("<head>\n");
	html.push_str("<meta charset=\"UTF-8\">\n");
	html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
	if let Some(ref description) = options.description {
		html.push_str(&format!(
			"<meta name=\"description\" content=\"{}\">\n",
			html_escape(description)
		));
	}
	html.push_str(&format!("<title>{}</title>\n", html_escape(&options.title)));
	for href in &options.stylesheets {
		html.push_str(&format!(
			"<link rel=\"stylesheet\" href=\"{}\">\n",
			html_escape(href)
		));
	}
	html.push_str("</head>\n");

	html.push_str("<body>\n");
	html.push_str("<div id=\"app\">");
	html.push_str(&content);
	html.push_str("</div>\n");
	for src in &options.scripts {
		html.push_str(&format!(
			"<script type=\"module\" src=\"{}\"></script>\n",
			html_escape(src)
		));
	}
	html.push_str("</body>\n");
	html.push_str("</html>");

	html
}
