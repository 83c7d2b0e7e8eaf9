//! Landing hero with headline figures.

use super::icon;
use crate::content::SiteContent;
use mobilecare_pages::{Component, ElementView, IntoView, View};
use std::rc::Rc;

/// The first screen of the home page.
#[derive(Debug, Clone)]
pub struct Hero {
	content: Rc<SiteContent>,
}

impl Hero {
	/// Creates the hero section.
	pub fn new(content: Rc<SiteContent>) -> Self {
		Self { content }
	}
}

impl Component for Hero {
	fn render(&self) -> View {
		let content = &self.content;
		let hero = &content.hero;

		let heading = ElementView::new("h1")
			.child(
				ElementView::new("span")
					.class("heading-lead")
					.child(hero.heading_lead.clone()),
			)
			.child(ElementView::new("br"))
			.child(
				ElementView::new("span")
					.class("heading-rest")
					.child(hero.heading_rest.clone()),
			);

		let actions = ElementView::new("div")
			.class("hero-actions")
			.child(
				ElementView::new("a")
					.attr("href", "#services")
					.class("btn btn-primary")
					.child("Explore Services")
					.child(icon("chevron-right")),
			)
			.child(
				ElementView::new("a")
					.attr("href", content.contact.tel_href())
					.class("btn btn-secondary")
					.child(icon("phone"))
					.child(content.contact.phone.clone()),
			);

		let stats = ElementView::new("div")
			.class("stats")
			.children(content.stats.iter().map(|stat| {
				ElementView::new("div")
					.class("stat")
					.child(
						ElementView::new("div")
							.class("stat-value")
							.child(stat.value.clone()),
					)
					.child(
						ElementView::new("div")
							.class("stat-label")
							.child(stat.label.clone()),
					)
			}));

		ElementView::new("section")
			.id("home")
			.class("hero")
			.child(
				ElementView::new("div")
					.class("hero-badge")
					.child(ElementView::new("span").child(format!("🏆 {}", content.tagline))),
			)
			.child(heading)
			.child(
				ElementView::new("p")
					.class("hero-description")
					.child(hero.description.clone()),
			)
			.child(actions)
			.child(stats)
			.into_view()
	}

	fn name() -> &'static str {
		"Hero"
	}
}
