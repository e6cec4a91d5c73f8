//! Registration types for event subscribers.
//!
//! A Registration represents a callback that wants to hear about an event.
//! The same registration may be bound to several events; it is told which
//! one fired through the callback argument.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::EventId;

/// Identity of a registration, shared by all of its clones.
///
/// Binding the same identity to an event twice is refused, and unbinding
/// matches on it rather than on the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(u64);

impl RegistrationId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A subscriber to dispatched events.
///
/// Clones share the ID and the callback, so a clone can be used to unbind
/// the registration it was cloned from.
#[derive(Clone)]
pub struct Registration {
    id: RegistrationId,
    /// Invoked with the id of the event being delivered.
    callback: Arc<dyn Fn(EventId) + Send + Sync>,
}

impl Registration {
    /// Create a new registration with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(EventId) + Send + Sync + 'static,
    {
        Self {
            id: RegistrationId::next(),
            callback: Arc::new(callback),
        }
    }

    /// Get the registration's unique ID.
    pub fn id(&self) -> RegistrationId {
        self.id
    }

    /// Deliver an event to the callback.
    pub fn notify(&self, event: EventId) {
        (self.callback)(event);
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_new_registration_gets_its_own_identity() {
        let first = Registration::new(|_| {});
        let second = Registration::new(|_| {});
        let copy = first.clone();

        assert_ne!(first.id(), second.id());
        assert_ne!(copy.id(), second.id());
        assert_eq!(format!("{}", first.id()), format!("{}", copy.id()));
    }

    #[test]
    fn notify_passes_event_id() {
        let seen = Arc::new(AtomicU64::new(u64::MAX));
        let seen_clone = seen.clone();

        let registration = Registration::new(move |event: EventId| {
            seen_clone.store(event.raw(), Ordering::SeqCst);
        });

        registration.notify(EventId::new(9));
        assert_eq!(seen.load(Ordering::SeqCst), 9);
    }
}
