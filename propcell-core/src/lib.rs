//! Propcell Core
//!
//! This crate provides typed property cells: values accessed through exactly
//! two operations, `value` and `change`. Cross-cutting behavior is layered on
//! top with stackable decorators.
//!
//! It implements:
//!
//! - The property and datasource contracts
//! - Decorators for memoization, broadcast, validation, deduplication and
//!   external locking
//! - A reactive composite property that fuses caching, validation and
//!   rule-driven event publication
//! - Default collaborators (in-memory datasource, constraint sets, a local
//!   event dispatcher)
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `property`: The core contracts and the in-memory datasource
//! - `constraint`: Validation constraints and event trigger rules
//! - `decorator`: Stackable property decorators
//! - `dispatch`: Event ids, registrations and the dispatcher contract
//! - `reactive`: The reactive composite property
//!
//! Everything is single-threaded and synchronous. Property operations take
//! `&mut self`; use [`decorator::Shared`] when one property must be reached
//! from several owners.
//!
//! # Example
//!
//! ```rust,ignore
//! use propcell_core::{MemorySource, Property, PropertyError, PropertyExt};
//!
//! let mut name = MemorySource::new(String::from("go"))
//!     .memoized()
//!     .distinct()
//!     .validated(|v: &String| -> Result<(), PropertyError> {
//!         if v.is_empty() {
//!             return Err(PropertyError::rejected("name must not be empty"));
//!         }
//!         Ok(())
//!     });
//!
//! name.change("golang".into())?;
//! assert_eq!(name.value()?, "golang");
//! ```

pub mod constraint;
pub mod decorator;
pub mod dispatch;
pub mod error;
pub mod property;
pub mod reactive;

#[cfg(test)]
pub(crate) mod testing;

pub use constraint::{AlwaysPass, Constraint, ConstraintSet, TriggerRule};
pub use decorator::{
    Broadcast, Distinct, Hydration, Memoized, PropertyExt, Receiver, Shared, Validated,
};
pub use dispatch::{Dispatcher, EventId, LocalDispatcher, Registration, RegistrationId};
pub use error::{PropertyError, WiringError};
pub use property::{Datasource, MemorySource, Property};
pub use reactive::{ReactiveConfig, ReactiveProperty};
