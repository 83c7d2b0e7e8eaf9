//! Site footer.

use super::icon;
use crate::content::SiteContent;
use crate::pages::DEVELOPER_PATH;
use mobilecare_pages::{Component, ElementView, IntoView, Link, View};
use std::rc::Rc;

/// The footer shown on every page.
#[derive(Debug, Clone)]
pub struct Footer {
	content: Rc<SiteContent>,
}

impl Footer {
	/// Creates the footer.
	pub fn new(content: Rc<SiteContent>) -> Self {
		Self { content }
	}
}

fn column(title: &'static str, items: Vec<ElementView>) -> ElementView {
	ElementView::new("div")
		.class("footer-column")
		.child(ElementView::new("h3").child(title))
		.child(ElementView::new("ul").children(items))
}

impl Component for Footer {
	fn render(&self) -> View {
		let content = &self.content;

		let brand = ElementView::new("div")
			.class("footer-brand")
			.child(
				ElementView::new("div")
					.class("brand")
					.child(icon("smartphone"))
					.child(
						ElementView::new("span")
							.class("brand-name")
							.child(content.company_name.clone()),
					),
			)
			.child(ElementView::new("p").child(content.footer.blurb.clone()));

		let quick_links: Vec<ElementView> = [
			("#home", "Home"),
			("#services", "Services"),
			("#about", "About Us"),
			("#contact", "Contact"),
		]
		.into_iter()
		.map(|(href, label)| {
			ElementView::new("li").child(ElementView::new("a").attr("href", href).child(label))
		})
		.collect();

		let services: Vec<ElementView> = content
			.footer
			.services
			.iter()
			.map(|service| ElementView::new("li").child(service.clone()))
			.collect();

		let bottom = ElementView::new("div")
			.class("footer-bottom")
			.child(ElementView::new("p").child(format!(
				"© {} {}. All rights reserved.",
				content.copyright_year, content.company_name
			)))
			.child(
				ElementView::new("p")
					.child("Designed by ")
					.child(Link::new(DEVELOPER_PATH, "Fullstack Developer").class("developer-credit")),
			);

		ElementView::new("footer")
			.class("site-footer")
			.child(
				ElementView::new("div")
					.class("footer-grid")
					.child(brand)
					.child(column("Quick Links", quick_links))
					.child(column("Services", services)),
			)
			.child(bottom)
			.into_view()
	}

	fn name() -> &'static str {
		"Footer"
	}
}
