//! "Why Choose Us?" section with the technician profile.

use super::icon;
use crate::content::SiteContent;
use mobilecare_pages::{Component, ElementView, IntoView, View};
use std::rc::Rc;

/// The about section.
#[derive(Debug, Clone)]
pub struct About {
	content: Rc<SiteContent>,
}

impl About {
	/// Creates the about section.
	pub fn new(content: Rc<SiteContent>) -> Self {
		Self { content }
	}
}

fn highlight(icon_name: &str, title: String, description: String) -> ElementView {
	ElementView::new("div")
		.class("highlight")
		.child(icon(icon_name))
		.child(
			ElementView::new("div")
				.child(ElementView::new("h3").child(title))
				.child(ElementView::new("p").child(description)),
		)
}

impl Component for About {
	fn render(&self) -> View {
		let content = &self.content;
		let technician = &content.technician;

		let mut highlights = vec![highlight(
			"award",
			"Expert Technician".to_string(),
			format!(
				"{} - {} years of experience in mobile repairs and chip-level solutions",
				technician.name, technician.experience
			),
		)];
		highlights.extend(content.about.highlights.iter().map(|h| {
			highlight(&h.icon, h.title.clone(), h.description.clone())
		}));

		let profile = ElementView::new("div")
			.class("technician-card")
			.child(icon("smartphone"))
			.child(ElementView::new("h3").child(technician.name.clone()))
			.child(
				ElementView::new("p")
					.class("technician-experience")
					.child(format!("{} Years Experience", technician.experience)),
			)
			.child(ElementView::new("p").child(technician.description.clone()));

		ElementView::new("section")
			.id("about")
			.class("about")
			.child(
				ElementView::new("div")
					.class("about-copy")
					.child(ElementView::new("h2").child("Why Choose Us?"))
					.child(
						ElementView::new("p")
							.class("section-subtitle")
							.child(content.about.intro.clone()),
					)
					.child(ElementView::new("div").class("highlights").children(highlights)),
			)
			.child(profile)
			.into_view()
	}

	fn name() -> &'static str {
		"About"
	}
}
