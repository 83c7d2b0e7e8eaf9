//! Route definitions and exact-path matching.

use super::error::RouterError;
use super::path::Path;
use crate::component::View;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Zero-argument producer of page content.
pub type PageRenderer = Rc<dyn Fn() -> View>;

/// A single (path, page-renderer) association.
#[derive(Clone)]
pub struct Route {
	/// The exact path this route answers to.
	path: Path,
	/// Optional route name for reverse lookups.
	name: Option<String>,
	/// The page renderer.
	renderer: PageRenderer,
}

impl fmt::Debug for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("path", &self.path)
			.field("name", &self.name)
			.finish()
	}
}

impl Route {
	/// Creates a new route.
	pub fn new<F>(path: impl Into<Path>, renderer: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		Self {
			path: path.into(),
			name: None,
			renderer: Rc::new(renderer),
		}
	}

	/// Creates a named route.
	pub fn named<F>(name: impl Into<String>, path: impl Into<Path>, renderer: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		Self {
			path: path.into(),
			name: Some(name.into()),
			renderer: Rc::new(renderer),
		}
	}

	/// Returns the route path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Exact, case-sensitive comparison against `current`.
	pub fn matches(&self, current: &Path) -> bool {
		self.path == *current
	}

	/// Renders the route's page unconditionally.
	pub fn render(&self) -> View {
		(self.renderer)()
	}

	/// Renders the page if `current` is this route's path, otherwise nothing.
	pub fn render_if_matches(&self, current: &Path) -> View {
		if self.matches(current) {
			self.render()
		} else {
			View::Empty
		}
	}
}

/// An ordered, immutable list of routes with unique paths and names.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<Route>,
}

impl RouteTable {
	/// Starts building a table.
	pub fn builder() -> RouteTableBuilder {
		RouteTableBuilder::default()
	}

	/// Returns the routes in declaration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Iterates the routes in declaration order.
	pub fn iter(&self) -> std::slice::Iter<'_, Route> {
		self.routes.iter()
	}

	/// Returns the number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns true when the table has no routes.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl<'a> IntoIterator for &'a RouteTable {
	type Item = &'a Route;
	type IntoIter = std::slice::Iter<'a, Route>;

	fn into_iter(self) -> Self::IntoIter {
		self.routes.iter()
	}
}

/// Builder for [`RouteTable`].
///
/// Uniqueness is checked once, in [`build`](Self::build), so an ambiguous
/// table never reaches a router.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
	routes: Vec<Route>,
}

impl RouteTableBuilder {
	/// Adds a route.
	pub fn route<F>(mut self, path: impl Into<Path>, renderer: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.routes.push(Route::new(path, renderer));
		self
	}

	/// Adds a named route.
	pub fn named_route<F>(mut self, name: &str, path: impl Into<Path>, renderer: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.routes.push(Route::named(name, path, renderer));
		self
	}

	/// Adds a prebuilt route.
	pub fn add(mut self, route: Route) -> Self {
		self.routes.push(route);
		self
	}

	/// Validates the routes and freezes them into a table.
	pub fn build(self) -> Result<RouteTable, RouterError> {
		let mut paths = HashSet::new();
		let mut names = HashSet::new();

		for route in &self.routes {
			if !paths.insert(route.path.as_str()) {
				return Err(RouterError::DuplicateRoute(route.path.to_string()));
			}
			if let Some(name) = route.name()
				&& !names.insert(name)
			{
				return Err(RouterError::DuplicateRouteName(name.to_string()));
			}
		}

		Ok(RouteTable {
			routes: self.routes,
		})
	}
}

/// Decides which page renders for the current path.
///
/// The current path is broadcast to every route and each route decides on
/// its own whether it applies. Because a [`RouteTable`] has unique paths, at
/// most one route produces content; an unmatched path renders
/// [`View::Empty`].
#[derive(Debug, Clone, Default)]
pub struct RouteMatcher {
	table: RouteTable,
}

impl RouteMatcher {
	/// Creates a matcher over `table`.
	pub fn new(table: RouteTable) -> Self {
		Self { table }
	}

	/// Returns the route table.
	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// Returns the route whose path equals `current`.
	pub fn resolve(&self, current: &Path) -> Option<&Route> {
		self.table.iter().find(|route| route.matches(current))
	}

	/// Returns true if any route matches `current`.
	pub fn is_matched(&self, current: &Path) -> bool {
		self.resolve(current).is_some()
	}

	/// Renders the page for `current`, or nothing when no route matches.
	pub fn render(&self, current: &Path) -> View {
		let mut rendered: Vec<View> = self
			.table
			.iter()
			.map(|route| route.render_if_matches(current))
			.filter(|view| !matches!(view, View::Empty))
			.collect();

		match rendered.len() {
			0 => View::Empty,
			1 => rendered.remove(0),
			_ => View::Fragment(rendered),
		}
	}

	/// Looks up a route path by name.
	pub fn reverse(&self, name: &str) -> Result<Path, RouterError> {
		self.table
			.iter()
			.find(|route| route.name() == Some(name))
			.map(|route| route.path.clone())
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))
	}
}
