//! # Mobilecare
//!
//! The Best Mobile Care marketing site and the small client-side router it
//! runs on.
//!
//! ## Crates
//!
//! - [`pages`]: view tree, router, navigable links and document renderer
//! - [`conf`]: layered settings (defaults, TOML file, `MOBILECARE_*`)
//! - [`site`]: content, sections, the Home and Developer pages and their
//!   browser mount
//!
//! The `mobilecare` binary lives in `mobilecare-commands`.
//!
//! ## Feature Flags
//!
//! - `site` (default): the Best Mobile Care site
//! - `conf`: layered settings
//! - `console_error_panic_hook`: readable panics in the browser console
//! - `full`: everything
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "site")]
//! # {
//! use mobilecare::prelude::*;
//! use std::rc::Rc;
//!
//! let history = Rc::new(MemoryHistory::new("/"));
//! let app = App::mount(history.clone(), SiteContent::default()).unwrap();
//!
//! Link::new("/developer", "Developer")
//!     .activate(&*history, &DummyEvent)
//!     .unwrap();
//!
//! assert_eq!(app.title(), "Developer | Best Mobile Care");
//! # }
//! ```

#![warn(missing_docs)]

pub use mobilecare_pages as pages;

#[cfg(feature = "conf")]
pub use mobilecare_conf as conf;

#[cfg(feature = "site")]
pub use mobilecare_site as site;

/// Commonly used types.
pub mod prelude {
	pub use mobilecare_pages::router::{
		DummyEvent, Link, MemoryHistory, NavigationContext, Path, RouteMatcher, RouteTable,
		Router, RouterError,
	};
	pub use mobilecare_pages::{
		Component, DocumentOptions, ElementView, IntoView, View, render_document,
	};

	#[cfg(feature = "conf")]
	pub use mobilecare_conf::Settings;

	#[cfg(feature = "site")]
	pub use mobilecare_site::{App, SiteContent, SiteError, prerender};
}
