//! Mobilecare Pages - view tree and client-side navigation
//!
//! The rendering and routing layer of the Best Mobile Care site.
//!
//! ## Architecture
//!
//! - [`component`]: plain-data view tree and the [`Component`](component::Component) trait
//! - [`router`]: client-side navigation (paths, history, routes, links)
//! - [`ssr`]: full-document rendering for static prerendering
//!
//! Everything runs on one thread. Browser bindings are compiled only for
//! `wasm32`; native builds use [`router::MemoryHistory`] in their place.

#![warn(missing_docs)]

pub mod component;
pub mod router;
pub mod ssr;

pub use component::{Component, ElementView, IntoView, View};
pub use router::{
	Link, MemoryHistory, NavigationContext, Path, RouteMatcher, RouteTable, Router, RouterError,
};
pub use ssr::{DocumentOptions, render_document};
