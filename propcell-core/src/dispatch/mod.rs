//! Event Dispatch
//!
//! The reactive composite property raises named events when a change
//! satisfies a trigger rule. Delivery of those events is the job of a
//! [`Dispatcher`], which owns the mapping from event ids to bound
//! registrations.
//!
//! # Concepts
//!
//! ## Event ids
//!
//! An [`EventId`] names a channel. A channel exists on a dispatcher once it
//! has been published and stops existing once it is unpublished.
//!
//! ## Registrations
//!
//! A [`Registration`] is a subscriber callback with a process-unique id.
//! Binding it to a published event means it will be invoked every time that
//! event is sent.
//!
//! ## Dispatchers
//!
//! [`LocalDispatcher`] is the in-process implementation shipped with the
//! crate. Anything else (a remote bus, a test double) plugs in through the
//! [`Dispatcher`] trait.

mod local;
mod registration;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;

pub use local::LocalDispatcher;
pub use registration::{Registration, RegistrationId};

/// Identifier of a subscribable event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publish/subscribe registry for named events.
pub trait Dispatcher {
    /// Register an event channel. Returns `false` if the dispatcher refuses.
    fn publish(&mut self, event: EventId) -> bool;

    /// Remove an event channel. Returns `false` if the dispatcher refuses.
    fn unpublish(&mut self, event: EventId) -> bool;

    /// Deliver the event to every registration bound to it.
    fn send(&mut self, event: EventId);

    /// Bind a registration to a published event.
    fn bind(&mut self, event: EventId, registration: Registration) -> Result<(), PropertyError>;

    /// Unbind a previously bound registration.
    fn unbind(&mut self, event: EventId, registration: &Registration) -> Result<(), PropertyError>;
}

impl<D> Dispatcher for &mut D
where
    D: Dispatcher + ?Sized,
{
    fn publish(&mut self, event: EventId) -> bool {
        (**self).publish(event)
    }

    fn unpublish(&mut self, event: EventId) -> bool {
        (**self).unpublish(event)
    }

    fn send(&mut self, event: EventId) {
        (**self).send(event)
    }

    fn bind(&mut self, event: EventId, registration: Registration) -> Result<(), PropertyError> {
        (**self).bind(event, registration)
    }

    fn unbind(&mut self, event: EventId, registration: &Registration) -> Result<(), PropertyError> {
        (**self).unbind(event, registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_is_transparent_in_serde() {
        let id = EventId::new(12);
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");

        let back: EventId = serde_json::from_str("12").unwrap();
        assert_eq!(back, id);
        assert_eq!(back.raw(), 12);
    }

    #[test]
    fn event_id_display() {
        assert_eq!(EventId::from(3).to_string(), "3");
    }
}
