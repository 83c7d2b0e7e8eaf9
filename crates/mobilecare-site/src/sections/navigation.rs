//! Top navigation bar with its collapsible mobile menu.

use super::icon;
use crate::content::SiteContent;
use crate::pages::{DEVELOPER_PATH, HOME_PATH};
use mobilecare_pages::{Component, ElementView, IntoView, Link, View};
use std::rc::Rc;

/// Id of the collapsible menu shown on small screens.
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// The fixed navigation bar shown on every page.
///
/// Home and Developer are client-side [`Link`]s; Services, About and
/// Contact are in-page anchors. The mobile menu renders closed, and each of
/// its entries carries `data-menu-close` so the browser client can collapse
/// it after a choice.
#[derive(Debug, Clone)]
pub struct Navigation {
	content: Rc<SiteContent>,
}

impl Navigation {
	/// Creates the navigation bar.
	pub fn new(content: Rc<SiteContent>) -> Self {
		Self { content }
	}

	fn items(&self, item_class: &'static str, closes_menu: bool) -> Vec<View> {
		let mark = |el: ElementView| {
			if closes_menu {
				el.attr("data-menu-close", "true")
			} else {
				el
			}
		};
		let link = |to: &'static str, label: &'static str| {
			let mut link = Link::new(to, label).class(item_class);
			if closes_menu {
				link = link.attr("data-menu-close", "true");
			}
			link.into_view()
		};
		let anchor = |href: &'static str, label: &'static str| {
			mark(ElementView::new("a").attr("href", href).class(item_class).child(label))
				.into_view()
		};

		vec![
			link(HOME_PATH, "Home"),
			anchor("#services", "Services"),
			anchor("#about", "About"),
			anchor("#contact", "Contact"),
			link(DEVELOPER_PATH, "Developer"),
			mark(
				ElementView::new("a")
					.attr("href", self.content.contact.tel_href())
					.class("nav-call")
					.child("Call Now"),
			)
			.into_view(),
		]
	}
}

impl Component for Navigation {
	fn render(&self) -> View {
		let brand = Link::new(
			HOME_PATH,
			(
				icon("smartphone"),
				ElementView::new("span")
					.class("brand-name")
					.child(self.content.company_name.clone()),
			),
		)
		.class("brand");

		let toggle = ElementView::new("button")
			.attr("type", "button")
			.class("menu-toggle")
			.attr("data-menu-toggle", "true")
			.attr("aria-controls", MOBILE_MENU_ID)
			.attr("aria-expanded", "false")
			.attr("aria-label", "Toggle menu")
			.child(icon("menu"));

		ElementView::new("nav")
			.id("navbar")
			.class("navbar")
			.child(
				ElementView::new("div")
					.class("nav-inner")
					.child(brand)
					.child(
						ElementView::new("div")
							.class("nav-links")
							.children(self.items("nav-link", false)),
					)
					.child(toggle),
			)
			.child(
				ElementView::new("div")
					.id(MOBILE_MENU_ID)
					.class("mobile-menu")
					.attr("hidden", "hidden")
					.children(self.items("mobile-link", true)),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"Navigation"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn html() -> String {
		Navigation::new(Rc::new(SiteContent::default()))
			.render()
			.render_to_string()
	}

	#[rstest]
	fn test_client_side_links() {
		let html = html();
		assert!(html.contains(r#"<a href="/" data-link="true" class="nav-link">Home</a>"#));
		assert!(html.contains(
			r#"<a href="/developer" data-link="true" class="nav-link">Developer</a>"#
		));
	}

	#[rstest]
	fn test_anchors_are_plain_links() {
		let html = html();
		assert!(html.contains(r##"<a href="#services" class="nav-link">Services</a>"##));
		assert!(html.contains(r##"<a href="#about" class="nav-link">About</a>"##));
		assert!(html.contains(r##"<a href="#contact" class="nav-link">Contact</a>"##));
		assert!(html.contains(r#"href="tel:+977-9851234567""#));
	}

	#[rstest]
	fn test_mobile_menu_starts_closed_and_entries_close_it() {
		let html = html();
		assert!(html.contains(r#"<div id="mobile-menu" class="mobile-menu" hidden="hidden">"#));
		assert_eq!(html.matches(r#"data-menu-close="true""#).count(), 6);
		assert!(html.contains(r#"data-menu-toggle="true""#));
	}

	#[rstest]
	fn test_brand_shows_company_name() {
		assert!(html().contains(r#"<span class="brand-name">Best Mobile Care</span>"#));
	}
}
