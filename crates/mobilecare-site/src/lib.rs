//! # Mobilecare Site
//!
//! The Best Mobile Care marketing site: content, page sections, the two
//! routed pages and their mounts.
//!
//! - [`content`]: the editable content model, loadable from TOML
//! - [`sections`]: navigation, hero, services, about, contact, footer
//! - [`pages`]: Home (`/`) and Developer (`/developer`) plus the route table
//! - [`app`]: the site mounted over a navigation context
//! - [`prerender`]: every route rendered to a static document
//!
//! On `wasm32` the crate also exports the browser entry point, which mounts
//! the site into `#app` and handles link clicks client-side.

#![warn(missing_docs)]

pub mod app;
pub mod content;
pub mod error;
pub mod pages;
pub mod prerender;
pub mod sections;

#[cfg(target_arch = "wasm32")]
pub mod client;

pub use app::App;
pub use content::SiteContent;
pub use error::SiteError;
pub use pages::{DEVELOPER_PATH, HOME_PATH, developer_page, home_page, routes};
pub use prerender::{PrerenderedPage, prerender};
