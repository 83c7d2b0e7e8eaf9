//! Page sections.
//!
//! Each section is a [`Component`](mobilecare_pages::Component) over the
//! shared [`SiteContent`](crate::SiteContent). Sections render semantic HTML
//! with stable `id` and `class` hooks; styling is left to the stylesheet.

mod about;
mod contact;
mod developer;
mod footer;
mod hero;
mod navigation;
mod services;

pub use about::About;
pub use contact::Contact;
pub use developer::DeveloperProfile;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::{MOBILE_MENU_ID, Navigation};
pub use services::Services;

use mobilecare_pages::{ElementView, IntoView, View};

/// Decorative icon placeholder, hidden from assistive technology.
pub(crate) fn icon(name: &str) -> View {
	ElementView::new("span")
		.class(format!("icon icon-{}", name))
		.attr("aria-hidden", "true")
		.into_view()
}

/// Anchor opening in a new tab.
pub(crate) fn external_link(href: &str, content: impl IntoView) -> ElementView {
	ElementView::new("a")
		.attr("href", href.to_string())
		.attr("target", "_blank")
		.attr("rel", "noopener noreferrer")
		.child(content)
}

/// Section heading with its subtitle paragraph.
pub(crate) fn section_header(title: &str, subtitle: &str) -> View {
	ElementView::new("div")
		.class("section-header")
		.child(ElementView::new("h2").child(title.to_string()))
		.child(ElementView::new("p").class("section-subtitle").child(subtitle.to_string()))
		.into_view()
}
