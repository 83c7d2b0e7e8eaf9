//! WASM entry point for the Best Mobile Care site

use crate::app::App;
use crate::content::SiteContent;
use crate::pages::page_title;
use crate::sections::MOBILE_MENU_ID;
use mobilecare_pages::router::{BrowserHistory, Link, NavigationContext};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, MouseEvent, window};

/// WASM entry point
///
/// Mounts the site into `#app`, re-renders it on every location change and
/// turns clicks on `a[data-link]` into client-side navigation.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	// Set up panic hook for better error messages in console
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let window = window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;
	let root = document
		.get_element_by_id("app")
		.ok_or_else(|| JsValue::from_str("No #app element found"))?;

	let navigation: Rc<dyn NavigationContext> = Rc::new(BrowserHistory::new().map_err(to_js)?);
	let app = App::mount(Rc::clone(&navigation), SiteContent::default()).map_err(to_js)?;

	// SAFETY(XSS): render_to_string() HTML-escapes all text content and
	// attribute values.
	root.set_inner_html(&app.render().render_to_string());
	document.set_title(&app.title());

	let content = Rc::clone(app.content());
	let render_navigation = Rc::clone(&navigation);
	let render_document = document.clone();
	let render_window = window.clone();
	app.router().on_render(move |view| {
		root.set_inner_html(&view.render_to_string());
		render_document.set_title(&page_title(&content, &render_navigation.current_path()));
		render_window.scroll_to_with_x_and_y(0.0, 0.0);
	});

	install_click_delegation(&document, navigation)?.forget();

	// The app lives as long as the page.
	std::mem::forget(app);

	Ok(())
}

/// Link click handler (event delegation) on `document`.
///
/// The listener stays attached while the returned closure is alive.
fn install_click_delegation(
	document: &Document,
	navigation: Rc<dyn NavigationContext>,
) -> Result<Closure<dyn FnMut(Event)>, JsValue> {
	let click_document = document.clone();
	let click_handler = Closure::wrap(Box::new(move |event: Event| {
		handle_click(&click_document, &*navigation, &event);
	}) as Box<dyn FnMut(Event)>);
	document.add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref())?;
	Ok(click_handler)
}

fn handle_click(document: &Document, navigation: &dyn NavigationContext, event: &Event) {
	let Some(element) = event
		.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
	else {
		return;
	};

	if let Ok(Some(_)) = element.closest("[data-menu-toggle]") {
		let open = document
			.get_element_by_id(MOBILE_MENU_ID)
			.is_some_and(|menu| menu.has_attribute("hidden"));
		set_menu_open(document, open);
		return;
	}

	if let Ok(Some(_)) = element.closest("[data-menu-close]") {
		set_menu_open(document, false);
	}

	// Let the browser handle new-tab and download gestures.
	if is_modified_click(event) {
		return;
	}

	if let Ok(Some(anchor)) = element.closest("a[data-link]")
		&& let Some(href) = anchor.get_attribute("href")
	{
		let link = Link::new(href, ()).replace(anchor.has_attribute("data-replace"));
		if let Err(err) = link.activate(navigation, event) {
			tracing::warn!(error = %err, "client-side navigation failed");
		}
	}
}

fn is_modified_click(event: &Event) -> bool {
	event.dyn_ref::<MouseEvent>().is_some_and(|mouse| {
		mouse.button() != 0
			|| mouse.ctrl_key()
			|| mouse.meta_key()
			|| mouse.shift_key()
			|| mouse.alt_key()
	})
}

fn set_menu_open(document: &Document, open: bool) {
	if let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) {
		let updated = if open {
			menu.remove_attribute("hidden")
		} else {
			menu.set_attribute("hidden", "hidden")
		};
		if let Err(err) = updated {
			tracing::warn!(error = ?err, open, "failed to update mobile menu");
		}
	}
	if let Ok(Some(toggle)) = document.query_selector("[data-menu-toggle]")
		&& let Err(err) = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" })
	{
		tracing::warn!(error = ?err, "failed to update menu toggle");
	}
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
	JsValue::from_str(&err.to_string())
}
