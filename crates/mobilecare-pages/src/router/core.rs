//! The router: current-path state plus its navigation subscription.

use super::history::NavigationContext;
use super::observer::Subscription;
use super::path::Path;
use super::route::RouteMatcher;
use crate::component::View;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback receiving each re-rendered view.
type RenderSink = Rc<dyn Fn(&View)>;

struct RouterState {
	navigation: Rc<dyn NavigationContext>,
	matcher: RouteMatcher,
	current_path: RefCell<Path>,
	render_count: Cell<usize>,
	sink: RefCell<Option<RenderSink>>,
}

impl RouterState {
	fn render(&self) -> View {
		let path = self.current_path.borrow().clone();
		self.matcher.render(&path)
	}

	/// Re-reads the location and re-renders once if it moved.
	fn on_location_change(&self) {
		let latest = self.navigation.current_path();
		if *self.current_path.borrow() == latest {
			tracing::trace!(path = %latest, "location unchanged, skipping render");
			return;
		}

		tracing::debug!(from = %self.current_path.borrow(), to = %latest, "route changed");
		*self.current_path.borrow_mut() = latest;
		self.render_count.set(self.render_count.get() + 1);

		// The sink may navigate again, so no borrow is held across the call.
		let sink = self.sink.borrow().clone();
		if let Some(sink) = sink {
			let view = self.render();
			sink(&view);
		}
	}
}

/// Owns the current [`Path`] and keeps it in step with the host's history.
///
/// On [`mount`](Self::mount) the router reads the location once and
/// subscribes to change events. Each event re-reads the location; when it
/// differs from the stored path, the path is replaced and the page is
/// re-rendered exactly once. An event that leaves the location unchanged
/// does nothing.
///
/// The subscription holds only a weak reference to the router state and is
/// released on [`unmount`](Self::unmount) or drop, so events arriving
/// afterwards are ignored.
///
/// # Example
///
/// ```
/// use mobilecare_pages::component::View;
/// use mobilecare_pages::router::{
///     MemoryHistory, NavigationContext, Path, RouteMatcher, RouteTable, Router, navigate,
///     NavigationType,
/// };
/// use std::rc::Rc;
///
/// let history = Rc::new(MemoryHistory::new("/"));
/// let table = RouteTable::builder()
///     .route("/", || View::text("Home"))
///     .route("/developer", || View::text("Dev"))
///     .build()
///     .unwrap();
/// let router = Router::mount(history.clone(), RouteMatcher::new(table));
/// assert_eq!(router.render().render_to_string(), "Home");
///
/// navigate(&*history, &Path::new("/developer"), NavigationType::Push).unwrap();
/// assert_eq!(router.current_path(), "/developer");
/// assert_eq!(router.render().render_to_string(), "Dev");
/// ```
pub struct Router {
	state: Rc<RouterState>,
	subscription: Option<Subscription>,
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("current_path", &*self.state.current_path.borrow())
			.field("routes", &self.state.matcher.table().len())
			.field("render_count", &self.state.render_count.get())
			.field("mounted", &self.is_mounted())
			.finish()
	}
}

impl Router {
	/// Mounts a router over `navigation`.
	///
	/// The location is read exactly once here; afterwards only change
	/// events cause it to be read again.
	pub fn mount(navigation: Rc<dyn NavigationContext>, matcher: RouteMatcher) -> Self {
		let initial = navigation.current_path();
		tracing::debug!(path = %initial, routes = matcher.table().len(), "router mounted");

		let state = Rc::new(RouterState {
			navigation: Rc::clone(&navigation),
			matcher,
			current_path: RefCell::new(initial),
			render_count: Cell::new(0),
			sink: RefCell::new(None),
		});

		let weak: Weak<RouterState> = Rc::downgrade(&state);
		let subscription = navigation.subscribe(Box::new(move || {
			if let Some(state) = weak.upgrade() {
				state.on_location_change();
			}
		}));

		Self {
			state,
			subscription: Some(subscription),
		}
	}

	/// Installs the callback that receives every re-rendered view.
	pub fn on_render<F>(&self, sink: F)
	where
		F: Fn(&View) + 'static,
	{
		*self.state.sink.borrow_mut() = Some(Rc::new(sink));
	}

	/// Renders the page for the current path.
	pub fn render(&self) -> View {
		self.state.render()
	}

	/// Returns the current path.
	pub fn current_path(&self) -> Path {
		self.state.current_path.borrow().clone()
	}

	/// Returns how many times a location change triggered a re-render.
	pub fn render_count(&self) -> usize {
		self.state.render_count.get()
	}

	/// Returns true until the router is unmounted.
	pub fn is_mounted(&self) -> bool {
		self.subscription.is_some()
	}

	/// Releases the navigation subscription and drops the router.
	pub fn unmount(mut self) {
		self.release();
	}

	fn release(&mut self) {
		if let Some(subscription) = self.subscription.take() {
			subscription.unsubscribe();
			self.state.sink.borrow_mut().take();
			tracing::debug!(path = %self.state.current_path.borrow(), "router unmounted");
		}
	}
}

impl Drop for Router {
	fn drop(&mut self) {
		self.release();
	}
}
