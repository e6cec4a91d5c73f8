//! Validated Property
//!
//! Gates writes behind a [`Constraint`]. A rejected value never reaches the
//! inner property; reads are not checked.

use tracing::debug;

use crate::constraint::Constraint;
use crate::error::PropertyError;
use crate::property::Property;

/// A property decorator that validates values before writing them.
#[derive(Debug, Clone)]
pub struct Validated<P, C> {
    constraint: C,
    inner: P,
}

impl<P, C> Validated<P, C> {
    pub fn new(inner: P, constraint: C) -> Self {
        Self { constraint, inner }
    }

    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    pub fn get_ref(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T, P, C> Property<T> for Validated<P, C>
where
    P: Property<T>,
    C: Constraint<T>,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        if let Err(err) = self.constraint.evaluate(&value) {
            debug!(error = %err, "change rejected by constraint");
            return Err(err);
        }
        self.inner.change(value)
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        self.inner.value()
    }
}
