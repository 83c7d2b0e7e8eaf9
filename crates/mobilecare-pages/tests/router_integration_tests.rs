//! Integration tests for Client-Side Router
//!
//! These tests verify the navigation subsystem end to end:
//! 1. Exact-match route selection
//! 2. Idempotent rendering for an unchanged path
//! 3. Link navigation followed by native back navigation
//! 4. Default-action suppression on link activation
//! 5. Teardown safety after unmount
//! 6. Two-route Home/Developer table

use mobilecare_pages::component::{Component, IntoView, View};
use mobilecare_pages::router::{
	ActivationEvent, Link, MemoryHistory, NavigationContext, Path, RouteMatcher, RouteTable,
	Router,
};
use rstest::{fixture, rstest};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn home_view() -> View {
	View::element("main").id("home").child("Home").into_view()
}

fn developer_view() -> View {
	View::element("main").id("developer").child("Dev").into_view()
}

/// Counts how often the default action was suppressed.
#[derive(Default)]
struct RecordingEvent {
	prevented: Cell<usize>,
}

impl ActivationEvent for RecordingEvent {
	fn prevent_default(&self) {
		self.prevented.set(self.prevented.get() + 1);
	}
}

#[fixture]
fn matcher() -> RouteMatcher {
	RouteMatcher::new(
		RouteTable::builder()
			.named_route("home", "/", home_view)
			.named_route("developer", "/developer", developer_view)
			.build()
			.unwrap(),
	)
}

fn mounted(initial: &str, matcher: RouteMatcher) -> (Rc<MemoryHistory>, Router) {
	let history = Rc::new(MemoryHistory::new(initial));
	let router = Router::mount(history.clone(), matcher);
	(history, router)
}

/// Success Criterion 1: only the exactly matching route renders
#[rstest]
#[case("/", Some("home"))]
#[case("/developer", Some("developer"))]
#[case("/developer/", None)]
#[case("/DEVELOPER", None)]
#[case("/services", None)]
fn test_exact_match_selection(
	matcher: RouteMatcher,
	#[case] initial: &str,
	#[case] expected_id: Option<&str>,
) {
	let (_history, router) = mounted(initial, matcher);
	let view = router.render();

	match expected_id {
		Some(id) => {
			let View::Element(el) = view else {
				panic!("expected an element, got {view:?}");
			};
			assert_eq!(el.get_attr("id"), Some(id));
		}
		None => assert_eq!(view, View::Empty),
	}
}

/// Success Criterion 2: rendering twice without a change is identical
#[rstest]
fn test_render_idempotent(matcher: RouteMatcher) {
	let (history, router) = mounted("/developer", matcher);

	let first = router.render().render_to_string();
	history.notify_location_change();
	let second = router.render().render_to_string();

	assert_eq!(first, second);
	assert_eq!(router.render_count(), 0);
}

/// Success Criterion 3: link forward, native back restores Home
#[rstest]
fn test_link_then_back_restores_home(matcher: RouteMatcher) {
	let (history, router) = mounted("/", matcher);
	let frames = Rc::new(RefCell::new(Vec::new()));
	let f = frames.clone();
	router.on_render(move |view| f.borrow_mut().push(view.render_to_string()));

	Link::new("/developer", "Developer")
		.activate(&*history, &RecordingEvent::default())
		.unwrap();
	assert_eq!(router.current_path(), "/developer");

	assert!(history.back());
	assert_eq!(history.current_path(), "/");
	assert_eq!(router.current_path(), "/");
	assert_eq!(
		*frames.borrow(),
		vec![
			r#"<main id="developer">Dev</main>"#.to_string(),
			r#"<main id="home">Home</main>"#.to_string(),
		]
	);
}

/// Success Criterion 4: prevent-default exactly once per activation
#[rstest]
fn test_prevent_default_once_per_activation(matcher: RouteMatcher) {
	let (history, _router) = mounted("/", matcher);
	let event = RecordingEvent::default();
	let link = Link::new("/developer", "Developer");

	link.activate(&*history, &event).unwrap();
	assert_eq!(event.prevented.get(), 1);

	link.activate(&*history, &event).unwrap();
	assert_eq!(event.prevented.get(), 2);
}

/// Success Criterion 5: no renders and no errors after unmount
#[rstest]
fn test_events_after_unmount_are_ignored(matcher: RouteMatcher) {
	let (history, router) = mounted("/", matcher);
	let renders = Rc::new(Cell::new(0));
	let r = renders.clone();
	router.on_render(move |_| r.set(r.get() + 1));

	router.unmount();

	Link::new("/developer", "Developer")
		.activate(&*history, &RecordingEvent::default())
		.unwrap();
	history.back();
	history.forward();
	history.notify_location_change();

	assert_eq!(renders.get(), 0);
	assert_eq!(history.listener_count(), 0);
}

/// Success Criterion 6: Home only at "/", Dev only after the link
#[rstest]
fn test_home_then_developer(matcher: RouteMatcher) {
	let (history, router) = mounted("/", matcher);

	let html = router.render().render_to_string();
	assert!(html.contains("Home"));
	assert!(!html.contains("Dev"));

	Link::new("/developer", "Developer")
		.activate(&*history, &RecordingEvent::default())
		.unwrap();

	let html = router.render().render_to_string();
	assert!(html.contains("Dev"));
	assert!(!html.contains("Home"));
	assert_eq!(router.render_count(), 1);
}

/// Two routers over one history both follow navigation
#[rstest]
fn test_multiple_routers_share_history() {
	let history = Rc::new(MemoryHistory::new("/"));
	let table = || {
		RouteMatcher::new(
			RouteTable::builder()
				.route("/", home_view)
				.route("/developer", developer_view)
				.build()
				.unwrap(),
		)
	};
	let a = Router::mount(history.clone(), table());
	let b = Router::mount(history.clone(), table());

	Link::new("/developer", "Developer")
		.activate(&*history, &RecordingEvent::default())
		.unwrap();

	assert_eq!(a.current_path(), Path::new("/developer"));
	assert_eq!(b.current_path(), Path::new("/developer"));

	drop(a);
	assert_eq!(history.listener_count(), 1);
}

/// Links render as ordinary anchors
#[rstest]
fn test_link_markup_is_plain_anchor() {
	let html = Link::new("/developer", "Developer").render().render_to_string();
	assert_eq!(html, r#"<a href="/developer" data-link="true">Developer</a>"#);
}

/// Named routes reverse to their paths
#[rstest]
fn test_reverse_named_routes(matcher: RouteMatcher) {
	assert_eq!(matcher.reverse("home").unwrap(), "/");
	assert_eq!(matcher.reverse("developer").unwrap(), "/developer");
	assert!(matcher.reverse("contact").is_err());
}
