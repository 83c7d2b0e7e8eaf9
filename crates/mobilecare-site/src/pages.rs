//! Pages and the site's route table.

use crate::content::SiteContent;
use crate::sections::{About, Contact, DeveloperProfile, Footer, Hero, Navigation, Services};
use mobilecare_pages::router::RouteTable;
use mobilecare_pages::{Component, Path, RouteMatcher, RouterError, View};
use std::rc::Rc;

/// Path of the home page.
pub const HOME_PATH: &str = "/";

/// Path of the developer credit page.
pub const DEVELOPER_PATH: &str = "/developer";

/// Route name of the home page.
pub const HOME_ROUTE: &str = "home";

/// Route name of the developer credit page.
pub const DEVELOPER_ROUTE: &str = "developer";

/// Navigation, hero, services, about, contact and footer.
pub fn home_page(content: &Rc<SiteContent>) -> View {
	View::fragment([
		Navigation::new(Rc::clone(content)).render(),
		Hero::new(Rc::clone(content)).render(),
		Services::new(Rc::clone(content)).render(),
		About::new(Rc::clone(content)).render(),
		Contact::new(Rc::clone(content)).render(),
		Footer::new(Rc::clone(content)).render(),
	])
}

/// Navigation, developer profile and footer.
pub fn developer_page(content: &Rc<SiteContent>) -> View {
	View::fragment([
		Navigation::new(Rc::clone(content)).render(),
		DeveloperProfile::new(Rc::clone(content)).render(),
		Footer::new(Rc::clone(content)).render(),
	])
}

/// Builds the route table: `/` renders [`home_page`] and `/developer`
/// renders [`developer_page`].
pub fn routes(content: Rc<SiteContent>) -> Result<RouteMatcher, RouterError> {
	let home = Rc::clone(&content);
	let developer = content;

	let table = RouteTable::builder()
		.named_route(HOME_ROUTE, HOME_PATH, move || home_page(&home))
		.named_route(DEVELOPER_ROUTE, DEVELOPER_PATH, move || developer_page(&developer))
		.build()?;

	Ok(RouteMatcher::new(table))
}

/// Document title for `path`.
pub fn page_title(content: &SiteContent, path: &Path) -> String {
	match path.as_str() {
		HOME_PATH => format!("{} | Mobile Repair in Kathmandu", content.company_name),
		DEVELOPER_PATH => format!("Developer | {}", content.company_name),
		_ => content.company_name.clone(),
	}
}
