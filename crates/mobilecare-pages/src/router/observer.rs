//! Location-change notifications.
//!
//! [`LocationObserver`] is a publisher of payload-free "the location may have
//! changed" signals. Every subscription hands back a [`Subscription`] that
//! deregisters its listener when dropped, so a listener can never outlive
//! the component that registered it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
	next_id: Cell<u64>,
	listeners: RefCell<Vec<(u64, Listener)>>,
}

impl Registry {
	fn contains(&self, id: u64) -> bool {
		self.listeners.borrow().iter().any(|(i, _)| *i == id)
	}

	fn remove(&self, id: u64) -> bool {
		let mut listeners = self.listeners.borrow_mut();
		let before = listeners.len();
		listeners.retain(|(i, _)| *i != id);
		before != listeners.len()
	}
}

/// Publisher of location-change notifications.
///
/// Cloning yields another handle to the same set of listeners.
#[derive(Clone, Default)]
pub struct LocationObserver {
	registry: Rc<Registry>,
}

impl fmt::Debug for LocationObserver {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocationObserver")
			.field("listener_count", &self.listener_count())
			.finish()
	}
}

impl LocationObserver {
	/// Creates an observer with no listeners.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a listener. It stays registered until the returned
	/// [`Subscription`] is dropped.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn() + 'static,
	{
		let id = self.registry.next_id.get();
		self.registry.next_id.set(id + 1);
		self.registry
			.listeners
			.borrow_mut()
			.push((id, Rc::new(listener)));
		tracing::trace!(id, "location listener subscribed");

		Subscription {
			id,
			registry: Rc::downgrade(&self.registry),
		}
	}

	/// Calls every registered listener once, in subscription order.
	///
	/// Listeners may subscribe or unsubscribe while being notified. Delivery
	/// works on a snapshot; a listener released earlier in the same round is
	/// skipped, and one added during the round first hears the next round.
	pub fn notify(&self) {
		let snapshot: Vec<(u64, Listener)> = self.registry.listeners.borrow().clone();
		tracing::trace!(listeners = snapshot.len(), "notifying location listeners");

		for (id, listener) in snapshot {
			if self.registry.contains(id) {
				listener();
			}
		}
	}

	/// Returns the number of live listeners.
	pub fn listener_count(&self) -> usize {
		self.registry.listeners.borrow().len()
	}
}

/// Disposer for a registered listener.
///
/// Dropping the subscription removes the listener. It holds only a weak
/// reference to the observer, so it may safely outlive it.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
	id: u64,
	registry: Weak<Registry>,
}

impl Subscription {
	/// Removes the listener now.
	pub fn unsubscribe(self) {
		drop(self);
	}

	/// Returns true while the listener is still registered.
	pub fn is_active(&self) -> bool {
		self.registry
			.upgrade()
			.is_some_and(|registry| registry.contains(self.id))
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade()
			&& registry.remove(self.id)
		{
			tracing::trace!(id = self.id, "location listener unsubscribed");
		}
	}
}
