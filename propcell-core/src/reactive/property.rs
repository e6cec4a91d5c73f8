//! Reactive Property Implementation
//!
//! A ReactiveProperty fuses a local cache, a constraint, deduplication and a
//! rule-keyed event table into a single property on top of a datasource.
//!
//! # How a Change Works
//!
//! 1. If nothing is cached yet, the current value is read from the
//!    datasource. A read error aborts the change.
//!
//! 2. If the cached value equals the proposed one, the change succeeds
//!    immediately: no constraint, no write, no events.
//!
//! 3. The active constraint is evaluated. A violation aborts the change.
//!
//! 4. The value is written to the datasource. A write error aborts the
//!    change and no event fires.
//!
//! 5. Every published event whose trigger rule holds for the new value is
//!    sent through the dispatcher, in publication order.
//!
//! 6. The cache takes the new value, unless the configuration asks for the
//!    legacy behavior of keeping the pre-write value.
//!
//! # Event Lifecycle
//!
//! An event id moves from unregistered to registered on a successful
//! [`publish`](ReactiveProperty::publish) and back on a successful
//! [`unpublish`](ReactiveProperty::unpublish). The local rule table only
//! changes when the dispatcher agrees, so it always mirrors what the
//! dispatcher knows about.

use std::fmt::Debug;

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::config::ReactiveConfig;
use crate::constraint::{Constraint, ConstraintSet, TriggerRule};
use crate::dispatch::{Dispatcher, EventId, LocalDispatcher, Registration};
use crate::error::PropertyError;
use crate::property::{Datasource, Property};

/// A property that validates, deduplicates and publishes events on change.
///
/// # Type Parameters
///
/// - `T`: The value type. Must be Clone + PartialEq for caching and
///   deduplication.
/// - `D`: The backing [`Datasource`].
/// - `X`: The event [`Dispatcher`], [`LocalDispatcher`] unless given.
///
/// # Example
///
/// ```rust,ignore
/// const EXPENSIVE: EventId = EventId::new(1);
///
/// let mut price = ReactiveProperty::new(MemorySource::new(10));
/// price.publish(EXPENSIVE, Some(Box::new(|v: &i32| *v > 100)));
/// price.bind(EXPENSIVE, Registration::new(|_| println!("price is high")))?;
///
/// price.change(150)?; // Prints: "price is high"
/// ```
pub struct ReactiveProperty<T, D, X = LocalDispatcher> {
    /// Store the value is read from and written to.
    datasource: D,

    /// Validation applied to every non-duplicate change.
    constraint: Box<dyn Constraint<T>>,

    /// Published events and the rules deciding when they fire.
    events: IndexMap<EventId, Box<dyn TriggerRule<T>>>,

    /// Delivers fired events to bound registrations.
    dispatcher: X,

    /// Local copy of the value (None until hydrated).
    cache: Option<T>,

    config: ReactiveConfig,
}

impl<T, D> ReactiveProperty<T, D, LocalDispatcher>
where
    T: Clone + PartialEq + 'static,
    D: Datasource<T>,
{
    /// Create a reactive property with a fresh [`LocalDispatcher`].
    pub fn new(datasource: D) -> Self {
        Self::with_dispatcher(datasource, LocalDispatcher::new())
    }
}

impl<T, D, X> ReactiveProperty<T, D, X>
where
    T: Clone + PartialEq + 'static,
    D: Datasource<T>,
    X: Dispatcher,
{
    /// Create a reactive property delivering events through `dispatcher`.
    ///
    /// The property starts with no cache, no published events and a
    /// constraint that accepts everything.
    pub fn with_dispatcher(datasource: D, dispatcher: X) -> Self {
        Self {
            datasource,
            constraint: Box::new(ConstraintSet::<T>::new()),
            events: IndexMap::new(),
            dispatcher,
            cache: None,
            config: ReactiveConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ReactiveConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the active constraint.
    ///
    /// `None` resets to a constraint that accepts everything.
    pub fn constraints(&mut self, constraint: Option<Box<dyn Constraint<T>>>) {
        self.constraint = constraint.unwrap_or_else(|| Box::new(ConstraintSet::<T>::new()));
    }

    /// Seed the cache without touching the datasource or firing events.
    pub fn cache(&mut self, value: T) {
        self.cache = Some(value);
    }

    /// Publish an event that fires whenever `rule` holds for a new value.
    ///
    /// Returns `false`, and records nothing, if the rule is missing or the
    /// dispatcher refuses the event.
    pub fn publish(&mut self, event: EventId, rule: Option<Box<dyn TriggerRule<T>>>) -> bool {
        let Some(rule) = rule else {
            debug!(event = %event, "publish without a rule refused");
            return false;
        };

        if !self.dispatcher.publish(event) {
            debug!(event = %event, "dispatcher refused publish");
            return false;
        }

        self.events.insert(event, rule);
        trace!(event = %event, "event published");
        true
    }

    /// Stop publishing an event.
    ///
    /// Returns `false`, and keeps the rule, if the dispatcher refuses.
    pub fn unpublish(&mut self, event: EventId) -> bool {
        if !self.dispatcher.unpublish(event) {
            debug!(event = %event, "dispatcher refused unpublish");
            return false;
        }

        self.events.shift_remove(&event);
        trace!(event = %event, "event unpublished");
        true
    }

    /// Bind a registration to an event. Forwarded to the dispatcher.
    pub fn bind(
        &mut self,
        event: EventId,
        registration: Registration,
    ) -> Result<(), PropertyError> {
        self.dispatcher.bind(event, registration)
    }

    /// Unbind a registration from an event. Forwarded to the dispatcher.
    pub fn unbind(
        &mut self,
        event: EventId,
        registration: &Registration,
    ) -> Result<(), PropertyError> {
        self.dispatcher.unbind(event, registration)
    }

    /// Check whether an event has a rule in this property.
    pub fn is_published(&self, event: EventId) -> bool {
        self.events.contains_key(&event)
    }

    /// Published events, in publication order.
    pub fn published(&self) -> impl Iterator<Item = EventId> + '_ {
        self.events.keys().copied()
    }

    /// The cached value, without reading through.
    pub fn cached(&self) -> Option<&T> {
        self.cache.as_ref()
    }

    pub fn config(&self) -> &ReactiveConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &X {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut X {
        &mut self.dispatcher
    }

    /// Take the property apart, returning the datasource and dispatcher.
    pub fn into_parts(self) -> (D, X) {
        (self.datasource, self.dispatcher)
    }

    /// Send every event whose rule holds for `value`.
    fn fire(&mut self, value: &T) {
        for (event, rule) in &self.events {
            if rule.evaluate(value) {
                debug!(event = %event, "firing event");
                self.dispatcher.send(*event);
            }
        }
    }
}

impl<T, D, X> Property<T> for ReactiveProperty<T, D, X>
where
    T: Clone + PartialEq + 'static,
    D: Datasource<T>,
    X: Dispatcher,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        if self.cache.is_none() {
            let current: T = self.datasource.value()?;
            trace!("cache hydrated before change");
            self.cache = Some(current);
        }

        if self.cache.as_ref() == Some(&value) {
            debug!("change skipped, value unchanged");
            return Ok(());
        }

        if let Err(err) = self.constraint.evaluate(&value) {
            debug!(error = %err, "change rejected by constraint");
            return Err(err);
        }

        self.datasource.change(value.clone())?;
        self.fire(&value);

        if self.config.refresh_on_write {
            self.cache = Some(value);
        }
        Ok(())
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        if let Some(cached) = &self.cache {
            return Ok(cached.clone());
        }

        let value: T = self.datasource.value()?;
        trace!("cache hydrated on read");
        self.cache = Some(value.clone());
        Ok(value)
    }
}

impl<T, D, X> Debug for ReactiveProperty<T, D, X>
where
    T: Debug,
    D: Debug,
    X: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactiveProperty")
            .field("datasource", &self.datasource)
            .field("events", &self.events.keys().collect::<Vec<_>>())
            .field("dispatcher", &self.dispatcher)
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
