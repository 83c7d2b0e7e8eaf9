//! Component System for mobilecare-pages
//!
//! This module provides the view tree used by every page of the site.
//! Views are plain data: they can be rendered to HTML on the server and
//! written into the DOM by the browser client.
//!
//! ## Usage
//!
//! ```ignore
//! use mobilecare_pages::component::{ElementView, IntoView};
//!
//! let view = ElementView::new("div")
//!     .class("greeting")
//!     .child("Hello, World!")
//!     .into_view();
//! assert_eq!(view.render_to_string(), "<div class=\"greeting\">Hello, World!</div>");
//! ```

mod into_view;
mod r#trait;

pub(crate) use into_view::html_escape;
pub use into_view::{ElementView, IntoView, View};
pub use r#trait::Component;
