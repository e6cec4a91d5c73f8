//! Local Dispatcher
//!
//! An in-process [`Dispatcher`] that delivers events synchronously, on the
//! caller's thread, to registrations in the order they were bound.
//!
//! # Rules
//!
//! - Publishing an already published event is refused.
//! - Unpublishing an unknown event is refused. Unpublishing drops every
//!   binding of the event.
//! - Binding requires the event to be published; the same registration can
//!   be bound to an event only once.
//! - Sending an unpublished event delivers nothing.

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::{Dispatcher, EventId, Registration};
use crate::error::PropertyError;

/// Bindings of one event. Most events have one or two listeners.
type Bindings = SmallVec<[Registration; 2]>;

/// Synchronous, single-process event dispatcher.
#[derive(Debug, Default)]
pub struct LocalDispatcher {
    /// Published events and their bindings, in publication order.
    events: IndexMap<EventId, Bindings>,
}

impl LocalDispatcher {
    /// Create a dispatcher with no published events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an event is currently published.
    pub fn is_published(&self, event: EventId) -> bool {
        self.events.contains_key(&event)
    }

    /// Number of registrations bound to an event (zero if unpublished).
    pub fn bound_count(&self, event: EventId) -> usize {
        self.events.get(&event).map_or(0, |bindings| bindings.len())
    }

    /// Iterate published events in publication order.
    pub fn events(&self) -> impl Iterator<Item = EventId> + '_ {
        self.events.keys().copied()
    }
}

impl Dispatcher for LocalDispatcher {
    fn publish(&mut self, event: EventId) -> bool {
        if self.events.contains_key(&event) {
            debug!(event = %event, "event already published");
            return false;
        }
        self.events.insert(event, Bindings::new());
        true
    }

    fn unpublish(&mut self, event: EventId) -> bool {
        match self.events.shift_remove(&event) {
            Some(bindings) => {
                trace!(event = %event, dropped = bindings.len(), "event unpublished");
                true
            }
            None => {
                debug!(event = %event, "cannot unpublish unknown event");
                false
            }
        }
    }

    fn send(&mut self, event: EventId) {
        let Some(bindings) = self.events.get(&event) else {
            trace!(event = %event, "send to unpublished event ignored");
            return;
        };

        for registration in bindings.iter() {
            trace!(event = %event, registration = %registration.id(), "delivering event");
            registration.notify(event);
        }
    }

    fn bind(&mut self, event: EventId, registration: Registration) -> Result<(), PropertyError> {
        let bindings = self
            .events
            .get_mut(&event)
            .ok_or(PropertyError::UnknownEvent(event))?;

        if bindings.iter().any(|bound| bound.id() == registration.id()) {
            return Err(PropertyError::AlreadyBound {
                event,
                registration: registration.id(),
            });
        }

        bindings.push(registration);
        Ok(())
    }

    fn unbind(&mut self, event: EventId, registration: &Registration) -> Result<(), PropertyError> {
        let bindings = self
            .events
            .get_mut(&event)
            .ok_or(PropertyError::UnknownEvent(event))?;

        let position = bindings
            .iter()
            .position(|bound| bound.id() == registration.id())
            .ok_or(PropertyError::NotBound {
                event,
                registration: registration.id(),
            })?;

        bindings.remove(position);
        Ok(())
    }
}
