//! Website credit shown on the developer page.

use super::{external_link, icon};
use crate::content::{SiteContent, display_url};
use crate::pages::HOME_PATH;
use mobilecare_pages::{Component, ElementView, IntoView, Link, View};
use std::rc::Rc;

/// Profile card for the site's developer.
#[derive(Debug, Clone)]
pub struct DeveloperProfile {
	content: Rc<SiteContent>,
}

impl DeveloperProfile {
	/// Creates the profile.
	pub fn new(content: Rc<SiteContent>) -> Self {
		Self { content }
	}
}

fn channel(icon_name: &str, label: &'static str, link: ElementView) -> ElementView {
	ElementView::new("div")
		.class("developer-channel")
		.child(
			ElementView::new("h2")
				.child(icon(icon_name))
				.child(label),
		)
		.child(link)
}

impl Component for DeveloperProfile {
	fn render(&self) -> View {
		let developer = &self.content.developer;

		let header = ElementView::new("div")
			.class("developer-header")
			.child(
				ElementView::new("div")
					.class("developer-avatar")
					.child(ElementView::new("span").child(developer.initials.clone())),
			)
			.child(ElementView::new("h1").child(developer.name.clone()))
			.child(
				ElementView::new("p")
					.class("developer-role")
					.child(developer.role.clone()),
			)
			.child(
				ElementView::new("p")
					.class("developer-credit")
					.child(developer.credit.clone()),
			);

		let channels = ElementView::new("div")
			.class("developer-channels")
			.child(channel(
				"mail",
				"Email",
				ElementView::new("a")
					.attr("href", format!("mailto:{}", developer.email))
					.child(developer.email.clone()),
			))
			.child(channel(
				"globe",
				"Website",
				external_link(&developer.website, display_url(&developer.website).to_string()),
			))
			.child(channel(
				"github",
				"GitHub",
				external_link(&developer.github, display_url(&developer.github).to_string()),
			));

		let bio = ElementView::new("div").class("developer-bio").child(
			ElementView::new("p")
				.child("Hello, I am ")
				.child(
					ElementView::new("span")
						.class("developer-name")
						.child(developer.name.clone()),
				)
				.child(format!(". {} Feel free to explore my portfolio at ", developer.bio))
				.child(external_link(
					&developer.website,
					display_url(&developer.website).to_string(),
				))
				.child(" to see more of my work and projects."),
		);

		ElementView::new("main")
			.id("developer")
			.class("developer-page")
			.child(header)
			.child(channels)
			.child(bio)
			.child(
				ElementView::new("div").class("developer-back").child(
					Link::new(HOME_PATH, (icon("chevron-right"), "Back to Home")).class("btn btn-primary"),
				),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"DeveloperProfile"
	}
}
