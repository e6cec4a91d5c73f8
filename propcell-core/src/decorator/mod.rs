//! Property Decorators
//!
//! Each decorator wraps exactly one inner [`Property`] and adds one policy
//! without changing the contract. Decorators compose by nesting.
//!
//! # Decorators
//!
//! ## Memoized
//!
//! Keeps a local copy of the value. Eager memos are seeded at construction
//! and never read through; lazy memos read through once and then serve the
//! copy. Both update the copy after an accepted change.
//!
//! ## Broadcast
//!
//! Calls every receiver, in order, after the inner property accepts a
//! change.
//!
//! ## Validated
//!
//! Evaluates a [`Constraint`] before writing and refuses the change without
//! touching the inner property when the constraint fails.
//!
//! ## Distinct
//!
//! Reads the current value and skips the write when it equals the proposed
//! one.
//!
//! ## Shared
//!
//! Puts the property behind a mutex so several owners can use it.
//!
//! # Stacking Order
//!
//! The library does not enforce an order and the order matters. A
//! `Validated` outside a `Memoized` refuses a value before the memo
//! decorator is entered at all; inside it, the memo decorator forwards the
//! value and drops it when the gate fails. A `Distinct` outside a `Memoized`
//! compares against the memo instead of reading the source on every change.
//! Pick the stack per use case.
//!
//! [`Constraint`]: crate::constraint::Constraint

mod broadcast;
mod distinct;
mod memoized;
mod shared;
mod validated;

pub use broadcast::{Broadcast, Receiver};
pub use distinct::Distinct;
pub use memoized::{Hydration, Memoized};
pub use shared::Shared;
pub use validated::Validated;

use crate::constraint::Constraint;
use crate::error::WiringError;
use crate::property::Property;

/// Adapter methods for building decorator stacks fluently.
///
/// ```rust,ignore
/// let mut price = MemorySource::new(10)
///     .validated(|v: &i32| -> Result<(), PropertyError> {
///         if *v < 0 {
///             return Err(PropertyError::rejected("price must not be negative"));
///         }
///         Ok(())
///     })
///     .distinct()
///     .memoized();
/// ```
pub trait PropertyExt<T>: Property<T> + Sized {
    /// Wrap in a lazily hydrated [`Memoized`].
    fn memoized(self) -> Memoized<T, Self>
    where
        T: Clone,
    {
        Memoized::lazy(self)
    }

    /// Wrap in a [`Memoized`] seeded with `value`.
    fn cached(self, value: T) -> Memoized<T, Self>
    where
        T: Clone,
    {
        Memoized::eager(self, value)
    }

    /// Gate writes behind `constraint`.
    fn validated<C>(self, constraint: C) -> Validated<Self, C>
    where
        C: Constraint<T>,
    {
        Validated::new(self, constraint)
    }

    /// Skip writes of the current value.
    fn distinct(self) -> Distinct<Self>
    where
        T: PartialEq,
    {
        Distinct::new(self)
    }

    /// Notify `receivers` after each accepted change.
    fn broadcast<I>(self, receivers: I) -> Result<Broadcast<T, Self>, WiringError>
    where
        I: IntoIterator<Item = Receiver<T>>,
    {
        Broadcast::new(self, receivers)
    }

    /// Put the property behind a clonable, locking handle.
    fn shared(self) -> Shared<Self> {
        Shared::new(self)
    }

    /// Erase the stack's type.
    fn boxed<'a>(self) -> Box<dyn Property<T> + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<T, P> PropertyExt<T> for P where P: Property<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropertyError;
    use crate::testing::Probe;

    fn non_empty(value: &String) -> Result<(), PropertyError> {
        if value.is_empty() {
            return Err(PropertyError::rejected("must not be empty"));
        }
        Ok(())
    }

    #[test]
    fn gate_outside_memo_keeps_rejections_away() {
        let probe = Probe::holding(String::from("go"));
        let mut stack = probe.clone().memoized().validated(non_empty);

        assert!(stack.change(String::new()).unwrap_err().is_rejection());
        assert_eq!(probe.change_calls(), 0);

        // Memo still hydrates from the source
        assert_eq!(stack.value().unwrap(), "go");
        assert_eq!(probe.reads(), 1);
    }

    #[test]
    fn distinct_outside_memo_compares_against_memo() {
        let probe = Probe::holding(7);
        let mut stack = probe.clone().cached(7).distinct();

        stack.change(7).unwrap();
        stack.change(8).unwrap();
        stack.change(8).unwrap();

        assert_eq!(probe.changes(), vec![8]);
        assert_eq!(probe.reads(), 0);
    }

    #[test]
    fn boxed_stack_is_a_property() {
        let probe = Probe::holding(1);
        let mut stack = probe.clone().distinct().memoized().boxed();

        stack.change(2).unwrap();
        assert_eq!(stack.value().unwrap(), 2);
        assert_eq!(probe.stored(), Some(2));
    }
}
