//! Client-side routing.
//!
//! The navigation subsystem keeps the rendered page in step with the
//! browser's location without full page reloads:
//!
//! - [`Path`]: an immutable logical location.
//! - [`NavigationContext`]: the host's history state behind one trait,
//!   implemented by [`MemoryHistory`] and, on WASM, `BrowserHistory`.
//! - [`LocationObserver`] and [`Subscription`]: change notifications with
//!   drop-based deregistration.
//! - [`RouteTable`] and [`RouteMatcher`]: exact-path route selection.
//! - [`Router`]: current-path state that re-renders on change.
//! - [`Link`]: a navigable link.
//!
//! ## Example
//!
//! ```
//! use mobilecare_pages::component::View;
//! use mobilecare_pages::router::{DummyEvent, Link, MemoryHistory, RouteMatcher, RouteTable, Router};
//! use std::rc::Rc;
//!
//! let history = Rc::new(MemoryHistory::new("/"));
//! let matcher = RouteMatcher::new(
//!     RouteTable::builder()
//!         .route("/", || View::text("Home"))
//!         .route("/developer", || View::text("Dev"))
//!         .build()
//!         .unwrap(),
//! );
//! let router = Router::mount(history.clone(), matcher);
//!
//! Link::new("/developer", "Developer")
//!     .activate(&*history, &DummyEvent)
//!     .unwrap();
//! assert_eq!(router.render().render_to_string(), "Dev");
//!
//! history.back();
//! assert_eq!(router.render().render_to_string(), "Home");
//! ```

#[cfg(target_arch = "wasm32")]
mod browser;
mod components;
mod core;
mod error;
mod history;
mod observer;
mod path;
mod route;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;
pub use components::{ActivationEvent, DummyEvent, Link};
pub use self::core::Router;
pub use error::RouterError;
pub use history::{MemoryHistory, NavigationContext, NavigationType, navigate};
pub use observer::{LocationObserver, Subscription};
pub use path::Path;
pub use route::{PageRenderer, Route, RouteMatcher, RouteTable, RouteTableBuilder};
