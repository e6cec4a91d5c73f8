//! Error types.
//!
//! Two families exist and must not be mixed:
//!
//! - [`WiringError`] is returned by constructors only. It signals a stack that
//!   was assembled wrong and is meant to be handled (or unwrapped) at startup.
//! - [`PropertyError`] is what `value` and `change` return at runtime.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::dispatch::{EventId, RegistrationId};

/// Construction-time failure: a required collaborator is missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    /// A broadcast decorator needs at least one receiver.
    #[error("broadcast cannot be created with zero receivers")]
    NoReceivers,
}

/// Runtime failure of a property operation.
///
/// The type is `Clone` so an upstream error can be handed back verbatim
/// while the source keeps its own copy.
#[derive(Debug, Clone, Error)]
pub enum PropertyError {
    /// A constraint refused the proposed value.
    #[error("value rejected: {0}")]
    Rejected(String),

    /// The underlying datasource failed.
    #[error("datasource failure: {0}")]
    Upstream(#[source] Arc<dyn StdError + Send + Sync>),

    /// The source holds no value to report.
    #[error("no value available")]
    Unavailable,

    /// The event id has not been published on the dispatcher.
    #[error("event {0} is not published")]
    UnknownEvent(EventId),

    /// The registration is already bound to the event.
    #[error("registration {registration} is already bound to event {event}")]
    AlreadyBound {
        event: EventId,
        registration: RegistrationId,
    },

    /// The registration is not bound to the event.
    #[error("registration {registration} is not bound to event {event}")]
    NotBound {
        event: EventId,
        registration: RegistrationId,
    },
}

impl PropertyError {
    /// Build a validation rejection.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Wrap a datasource failure, preserving its source chain.
    pub fn upstream<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Upstream(Arc::new(error))
    }

    /// Whether this error came from a constraint.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
