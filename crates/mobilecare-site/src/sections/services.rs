//! Service cards.

use super::{icon, section_header};
use crate::content::{Service, SiteContent};
use mobilecare_pages::{Component, ElementView, IntoView, View};
use std::rc::Rc;

/// The services grid, one card per [`Service`].
#[derive(Debug, Clone)]
pub struct Services {
	content: Rc<SiteContent>,
}

impl Services {
	/// Creates the services section.
	pub fn new(content: Rc<SiteContent>) -> Self {
		Self { content }
	}
}

fn card(service: &Service) -> ElementView {
	let features = ElementView::new("ul")
		.class("service-features")
		.children(service.features.iter().map(|feature| {
			ElementView::new("li")
				.child(icon("chevron-right"))
				.child(ElementView::new("span").child(feature.clone()))
		}));

	ElementView::new("article")
		.class("service-card")
		.attr("data-service-id", service.id.to_string())
		.child(icon(&service.icon))
		.child(ElementView::new("h3").child(service.title.clone()))
		.child(ElementView::new("p").child(service.description.clone()))
		.child(
			ElementView::new("div")
				.class("service-offer")
				.child(ElementView::new("span").child(service.offer.clone())),
		)
		.child(features)
}

impl Component for Services {
	fn render(&self) -> View {
		ElementView::new("section")
			.id("services")
			.class("services")
			.child(section_header(
				"Our Services",
				"Comprehensive mobile repair solutions with expert care and guaranteed quality",
			))
			.child(
				ElementView::new("div")
					.class("services-grid")
					.children(self.content.services.iter().map(card)),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"Services"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_one_card_per_service() {
		let html = Services::new(Rc::new(SiteContent::default()))
			.render()
			.render_to_string();

		assert_eq!(html.matches(r#"<article class="service-card""#).count(), 6);
		assert!(html.contains("<h3>Broken Screen Repair</h3>"));
		assert!(html.contains("<span>20% OFF on screen replacement</span>"));
		assert!(html.contains("<span>LCD/AMOLED screen replacement</span>"));
	}

	#[rstest]
	fn test_empty_service_list() {
		let content = SiteContent {
			services: Vec::new(),
			..SiteContent::default()
		};
		let html = Services::new(Rc::new(content)).render().render_to_string();
		assert!(html.contains(r#"<div class="services-grid"></div>"#));
	}
}
