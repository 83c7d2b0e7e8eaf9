//! Contact details and location map.

use super::{external_link, icon, section_header};
use crate::content::SiteContent;
use mobilecare_pages::{Component, ElementView, IntoView, View};
use std::rc::Rc;

/// The contact section.
#[derive(Debug, Clone)]
pub struct Contact {
	content: Rc<SiteContent>,
}

impl Contact {
	/// Creates the contact section.
	pub fn new(content: Rc<SiteContent>) -> Self {
		Self { content }
	}
}

fn detail(tag: &'static str, icon_name: &str, label: &'static str, value: String) -> ElementView {
	ElementView::new(tag)
		.class("contact-item")
		.child(icon(icon_name))
		.child(
			ElementView::new("div")
				.child(ElementView::new("h4").child(label))
				.child(ElementView::new("p").child(value)),
		)
}

impl Component for Contact {
	fn render(&self) -> View {
		let content = &self.content;
		let contact = &content.contact;

		let details = ElementView::new("div")
			.class("contact-details")
			.child(ElementView::new("h3").child("Contact Information"))
			.child(
				detail("a", "phone", "Phone", contact.phone.clone())
					.attr("href", contact.tel_href()),
			)
			.child(
				detail("a", "mail", "Email", contact.email.clone())
					.attr("href", contact.mailto_href()),
			)
			.child(detail("div", "map-pin", "Location", contact.location.clone()))
			.child(
				ElementView::new("div")
					.class("social-links")
					.child(
						external_link(&contact.facebook, (icon("facebook"), "Facebook"))
							.class("social-facebook"),
					)
					.child(
						external_link(&contact.whatsapp_href(), (icon("message-circle"), "WhatsApp"))
							.class("social-whatsapp"),
					),
			);

		let map = ElementView::new("div").class("contact-map").child(
			ElementView::new("iframe")
				.attr("src", contact.map_embed_url.clone())
				.attr("width", "100%")
				.attr("height", "100%")
				.attr("style", "border:0")
				.attr("allowfullscreen", "")
				.attr("loading", "lazy")
				.attr("referrerpolicy", "no-referrer-when-downgrade")
				.attr("title", format!("{} Location", content.company_name)),
		);

		ElementView::new("section")
			.id("contact")
			.class("contact")
			.child(section_header(
				"Get In Touch",
				"Visit us or reach out for quick support",
			))
			.child(
				ElementView::new("div")
					.class("contact-grid")
					.child(details)
					.child(map),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"Contact"
	}
}
