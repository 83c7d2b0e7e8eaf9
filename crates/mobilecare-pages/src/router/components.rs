//! Navigable link component.

use super::error::RouterError;
use super::history::{NavigationContext, NavigationType, navigate};
use super::path::Path;
use crate::component::{Component, ElementView, IntoView, View};

/// An event that can suppress the host's default action.
///
/// For a link activation the default action is a full page load, which
/// client-side navigation replaces.
pub trait ActivationEvent {
	/// Suppresses the default action.
	fn prevent_default(&self);
}

#[cfg(target_arch = "wasm32")]
impl ActivationEvent for web_sys::Event {
	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}
}

/// An activation event with no default action, for native rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyEvent;

impl ActivationEvent for DummyEvent {
	fn prevent_default(&self) {}
}

/// A link that navigates without reloading the page.
///
/// Renders as a plain `<a href>` marked with `data-link`, so it still works
/// as an ordinary link before any script runs.
///
/// # Example
///
/// ```
/// use mobilecare_pages::router::Link;
/// use mobilecare_pages::component::Component;
///
/// let link = Link::new("/developer", "Developer").class("nav-link");
/// assert_eq!(
///     link.render().render_to_string(),
///     r#"<a href="/developer" data-link="true" class="nav-link">Developer</a>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	/// The destination path.
	to: Path,
	/// The link content.
	content: View,
	/// Additional CSS classes.
	class: Option<String>,
	/// Whether to replace the current history entry.
	replace: bool,
	/// Custom attributes.
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<Path>, content: impl IntoView) -> Self {
		Self {
			to: to.into(),
			content: content.into_view(),
			class: None,
			replace: false,
			attrs: Vec::new(),
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Adds a custom attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &Path {
		&self.to
	}

	/// Returns the history operation this link performs.
	pub fn navigation_type(&self) -> NavigationType {
		if self.replace {
			NavigationType::Replace
		} else {
			NavigationType::Push
		}
	}

	/// Handles a user activation of the link.
	///
	/// Suppresses the default full-page load exactly once, writes the
	/// destination to history and fires the change event. The destination
	/// is not checked against any route table.
	pub fn activate(
		&self,
		navigation: &dyn NavigationContext,
		event: &dyn ActivationEvent,
	) -> Result<(), RouterError> {
		event.prevent_default();
		navigate(navigation, &self.to, self.navigation_type())
	}
}

impl Component for Link {
	fn render(&self) -> View {
		let mut el = ElementView::new("a")
			.attr("href", self.to.to_string())
			.attr("data-link", "true");

		if self.replace {
			el = el.attr("data-replace", "true");
		}

		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		for (name, value) in &self.attrs {
			el = el.attr(name.clone(), value.clone());
		}

		el.child(self.content.clone()).into_view()
	}

	fn name() -> &'static str {
		"Link"
	}
}

impl IntoView for Link {
	fn into_view(self) -> View {
		self.render()
	}
}
