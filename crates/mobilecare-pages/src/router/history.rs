//! Navigation context: the explicit handle on the host's history state.
//!
//! Everything the router needs from the environment goes through
//! [`NavigationContext`]: reading the current location, writing history
//! entries, and subscribing to "history position changed" events. The
//! browser implementation lives in [`super::browser`]; [`MemoryHistory`]
//! serves native rendering and tests.

use super::error::RouterError;
use super::observer::{LocationObserver, Subscription};
use super::path::Path;
use std::cell::{Cell, RefCell};
use std::fmt;

/// Navigation type for history operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationType {
	/// Push a new entry onto the history stack.
	#[default]
	Push,
	/// Replace the current entry.
	Replace,
}

/// The host's navigation state, behind one explicit object.
///
/// Implementations are single-threaded: all calls happen on the UI thread
/// and run to completion before the next event is processed.
pub trait NavigationContext {
	/// Reads the current location.
	fn current_path(&self) -> Path;

	/// Pushes a new history entry without reloading the page.
	///
	/// This does not notify listeners; see [`navigate`].
	fn push_state(&self, path: &Path) -> Result<(), RouterError>;

	/// Replaces the current history entry without reloading the page.
	fn replace_state(&self, path: &Path) -> Result<(), RouterError>;

	/// Registers a listener for "history position changed" events.
	fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription;

	/// Emits a synthetic "history position changed" event.
	fn notify_location_change(&self);
}

/// Writes `path` to history and announces the change.
///
/// This is the client-side navigation primitive shared by [`Link`] and the
/// browser's click delegation.
///
/// [`Link`]: super::components::Link
pub fn navigate(
	navigation: &dyn NavigationContext,
	path: &Path,
	nav_type: NavigationType,
) -> Result<(), RouterError> {
	match nav_type {
		NavigationType::Push => navigation.push_state(path)?,
		NavigationType::Replace => navigation.replace_state(path)?,
	}
	tracing::debug!(path = %path, ?nav_type, "client-side navigation");
	navigation.notify_location_change();
	Ok(())
}

/// An in-memory history stack.
///
/// Behaves like a browser tab: pushing after going back discards the
/// forward entries, and [`back`](Self::back)/[`forward`](Self::forward) move
/// the cursor and fire the change event without writing history.
pub struct MemoryHistory {
	entries: RefCell<Vec<Path>>,
	index: Cell<usize>,
	observer: LocationObserver,
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("entries", &self.entries.borrow())
			.field("index", &self.index.get())
			.field("listener_count", &self.observer.listener_count())
			.finish()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new(Path::root())
	}
}

impl MemoryHistory {
	/// Creates a history whose only entry is `initial`.
	pub fn new(initial: impl Into<Path>) -> Self {
		Self {
			entries: RefCell::new(vec![initial.into()]),
			index: Cell::new(0),
			observer: LocationObserver::new(),
		}
	}

	/// Simulates the browser back button.
	///
	/// Returns false (and fires nothing) at the start of the stack.
	pub fn back(&self) -> bool {
		let index = self.index.get();
		if index == 0 {
			return false;
		}
		self.index.set(index - 1);
		self.observer.notify();
		true
	}

	/// Simulates the browser forward button.
	///
	/// Returns false (and fires nothing) at the end of the stack.
	pub fn forward(&self) -> bool {
		let index = self.index.get();
		if index + 1 >= self.entries.borrow().len() {
			return false;
		}
		self.index.set(index + 1);
		self.observer.notify();
		true
	}

	/// Returns the number of entries on the stack.
	pub fn entry_count(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Returns a copy of every entry, oldest first.
	pub fn entries(&self) -> Vec<Path> {
		self.entries.borrow().clone()
	}

	/// Returns the number of live subscriptions.
	pub fn listener_count(&self) -> usize {
		self.observer.listener_count()
	}
}

impl NavigationContext for MemoryHistory {
	fn current_path(&self) -> Path {
		self.entries.borrow()[self.index.get()].clone()
	}

	fn push_state(&self, path: &Path) -> Result<(), RouterError> {
		let mut entries = self.entries.borrow_mut();
		let index = self.index.get();
		entries.truncate(index + 1);
		entries.push(path.clone());
		self.index.set(index + 1);
		Ok(())
	}

	fn replace_state(&self, path: &Path) -> Result<(), RouterError> {
		self.entries.borrow_mut()[self.index.get()] = path.clone();
		Ok(())
	}

	fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
		self.observer.subscribe(listener)
	}

	fn notify_location_change(&self) {
		self.observer.notify();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use std::rc::Rc;

	#[fixture]
	fn history() -> MemoryHistory {
		MemoryHistory::new("/")
	}

	#[rstest]
	fn test_initial_entry(history: MemoryHistory) {
		assert_eq!(history.current_path(), "/");
		assert_eq!(history.entry_count(), 1);
	}

	#[rstest]
	fn test_push_state_does_not_notify(history: MemoryHistory) {
		let calls = Rc::new(Cell::new(0));
		let c = calls.clone();
		let _sub = history.subscribe(Box::new(move || c.set(c.get() + 1)));

		history.push_state(&Path::new("/developer")).unwrap();

		assert_eq!(history.current_path(), "/developer");
		assert_eq!(calls.get(), 0);
	}

	#[rstest]
	fn test_navigate_push_notifies_once(history: MemoryHistory) {
		let calls = Rc::new(Cell::new(0));
		let c = calls.clone();
		let _sub = history.subscribe(Box::new(move || c.set(c.get() + 1)));

		navigate(&history, &Path::new("/developer"), NavigationType::Push).unwrap();

		assert_eq!(calls.get(), 1);
		assert_eq!(history.entries(), vec![Path::new("/"), Path::new("/developer")]);
	}

	#[rstest]
	fn test_navigate_replace_keeps_stack_size(history: MemoryHistory) {
		navigate(&history, &Path::new("/developer"), NavigationType::Replace).unwrap();

		assert_eq!(history.entry_count(), 1);
		assert_eq!(history.current_path(), "/developer");
	}

	#[rstest]
	fn test_back_and_forward(history: MemoryHistory) {
		history.push_state(&Path::new("/developer")).unwrap();

		assert!(history.back());
		assert_eq!(history.current_path(), "/");
		assert!(!history.back());

		assert!(history.forward());
		assert_eq!(history.current_path(), "/developer");
		assert!(!history.forward());
	}

	#[rstest]
	fn test_back_notifies_listeners(history: MemoryHistory) {
		history.push_state(&Path::new("/developer")).unwrap();
		let seen = Rc::new(RefCell::new(Vec::new()));

		let h = Rc::new(history);
		let weak = Rc::downgrade(&h);
		let s = seen.clone();
		let _sub = h.subscribe(Box::new(move || {
			if let Some(h) = weak.upgrade() {
				s.borrow_mut().push(h.current_path());
			}
		}));

		h.back();
		assert_eq!(*seen.borrow(), vec![Path::new("/")]);
	}

	#[rstest]
	fn test_push_after_back_truncates_forward_entries(history: MemoryHistory) {
		history.push_state(&Path::new("/a")).unwrap();
		history.push_state(&Path::new("/b")).unwrap();
		history.back();
		history.back();

		history.push_state(&Path::new("/c")).unwrap();

		assert_eq!(history.entries(), vec![Path::new("/"), Path::new("/c")]);
		assert!(!history.forward());
	}

	#[rstest]
	fn test_default_starts_at_root() {
		assert_eq!(MemoryHistory::default().current_path(), "/");
	}
}
