//! Reactive Composite Property
//!
//! This module implements [`ReactiveProperty`], a single stateful unit that
//! plays the role of both the outermost decorator and the innermost store.
//!
//! # Concepts
//!
//! ## Cache
//!
//! The property keeps a local copy of the value. It is filled on the first
//! read or change, or seeded explicitly with `cache`.
//!
//! ## Constraint
//!
//! A replaceable validation rule applied to every change that is not a
//! no-op. Resetting it leaves a constraint that accepts everything.
//!
//! ## Events
//!
//! Each published [`EventId`](crate::dispatch::EventId) carries a trigger
//! rule. After a successful write, every event whose rule holds for the new
//! value is sent through the dispatcher.
//!
//! # Implementation Notes
//!
//! Nothing here is synchronized; every operation takes `&mut self`. Wrap the
//! property in [`Shared`](crate::decorator::Shared) to reach it from several
//! owners.

mod config;
mod property;

pub use config::ReactiveConfig;
pub use property::ReactiveProperty;
