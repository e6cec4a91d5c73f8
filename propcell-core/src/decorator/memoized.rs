//! Memoized Property
//!
//! A Memoized property keeps a local copy of the value so reads do not have
//! to reach the inner property.
//!
//! # How Memoization Works
//!
//! 1. The memo starts out either seeded ([`Hydration::Eager`]) or absent
//!    ([`Hydration::Lazy`]).
//!
//! 2. A read with a memo present returns it without delegating.
//!
//! 3. A read with no memo delegates to the inner property and, on success,
//!    stores the result.
//!
//! 4. A change always delegates. Only when the inner property accepts it
//!    does the memo take the new value; a failed change leaves it untouched.
//!
//! An eager memo is therefore never read through unless it is explicitly
//! invalidated.

use tracing::trace;

use crate::error::PropertyError;
use crate::property::Property;

/// How the memo is filled the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration<T> {
    /// Seed the memo with this value; no initial read happens.
    Eager(T),

    /// Leave the memo absent until the first read.
    Lazy,
}

/// A property decorator that caches the value locally.
#[derive(Debug, Clone)]
pub struct Memoized<T, P> {
    inner: P,

    /// The cached value (None if never hydrated or invalidated).
    memo: Option<T>,
}

impl<T, P> Memoized<T, P>
where
    T: Clone,
    P: Property<T>,
{
    /// Wrap `inner` with the given hydration policy.
    pub fn new(inner: P, hydration: Hydration<T>) -> Self {
        let memo = match hydration {
            Hydration::Eager(value) => Some(value),
            Hydration::Lazy => None,
        };
        Self { inner, memo }
    }

    /// Wrap `inner` with a memo seeded to `value`.
    pub fn eager(inner: P, value: T) -> Self {
        Self::new(inner, Hydration::Eager(value))
    }

    /// Wrap `inner` with a memo that fills on first read.
    pub fn lazy(inner: P) -> Self {
        Self::new(inner, Hydration::Lazy)
    }

    /// Check if the memo holds a value.
    pub fn is_hydrated(&self) -> bool {
        self.memo.is_some()
    }

    /// Drop the memo so the next read goes to the inner property.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }

    pub fn get_ref(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T, P> Property<T> for Memoized<T, P>
where
    T: Clone,
    P: Property<T>,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        self.inner.change(value.clone())?;
        self.memo = Some(value);
        Ok(())
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        if let Some(memo) = &self.memo {
            trace!("memo hit");
            return Ok(memo.clone());
        }

        trace!("memo miss, reading through");
        let value = self.inner.value()?;
        self.memo = Some(value.clone());
        Ok(value)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
