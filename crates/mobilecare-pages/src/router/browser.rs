//! Browser-backed navigation context (WASM only).

use super::error::RouterError;
use super::history::NavigationContext;
use super::observer::{LocationObserver, Subscription};
use super::path::Path;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, PopStateEvent, Window};

/// [`NavigationContext`] over `window.location` and `window.history`.
///
/// One `popstate` listener is attached to the window on construction and
/// detached on drop; it relays every event to the subscriptions handed out
/// by [`subscribe`](NavigationContext::subscribe). Synthetic notifications
/// dispatch a real `popstate` event, so programmatic navigation and the
/// back/forward buttons travel the same path.
pub struct BrowserHistory {
	window: Window,
	observer: LocationObserver,
	popstate: Closure<dyn FnMut(Event)>,
}

impl BrowserHistory {
	/// Attaches to the current window.
	pub fn new() -> Result<Self, RouterError> {
		let window = web_sys::window()
			.ok_or_else(|| RouterError::NavigationFailed("No window object".to_string()))?;
		let observer = LocationObserver::new();

		let relay = observer.clone();
		let popstate = Closure::wrap(Box::new(move |_event: Event| {
			relay.notify();
		}) as Box<dyn FnMut(Event)>);

		window
			.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
			.map_err(js_error)?;
		tracing::debug!("popstate listener attached");

		Ok(Self {
			window,
			observer,
			popstate,
		})
	}
}

impl NavigationContext for BrowserHistory {
	fn current_path(&self) -> Path {
		self.window
			.location()
			.pathname()
			.map(Path::from)
			.unwrap_or_else(|_| Path::root())
	}

	fn push_state(&self, path: &Path) -> Result<(), RouterError> {
		self.window
			.history()
			.map_err(js_error)?
			.push_state_with_url(&JsValue::NULL, "", Some(path.as_str()))
			.map_err(js_error)
	}

	fn replace_state(&self, path: &Path) -> Result<(), RouterError> {
		self.window
			.history()
			.map_err(js_error)?
			.replace_state_with_url(&JsValue::NULL, "", Some(path.as_str()))
			.map_err(js_error)
	}

	fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
		self.observer.subscribe(listener)
	}

	fn notify_location_change(&self) {
		let dispatched = PopStateEvent::new("popstate")
			.and_then(|event| self.window.dispatch_event(&event));
		if let Err(err) = dispatched {
			tracing::warn!(error = ?err, "popstate dispatch failed, notifying directly");
			self.observer.notify();
		}
	}
}

impl Drop for BrowserHistory {
	fn drop(&mut self) {
		match self
			.window
			.remove_event_listener_with_callback("popstate", self.popstate.as_ref().unchecked_ref())
		{
			Ok(()) => tracing::debug!("popstate listener detached"),
			Err(err) => tracing::warn!(error = ?err, "failed to detach popstate listener"),
		}
	}
}

fn js_error(value: JsValue) -> RouterError {
	RouterError::NavigationFailed(
		value
			.as_string()
			.unwrap_or_else(|| format!("{:?}", value)),
	)
}
