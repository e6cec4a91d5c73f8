//! Distinct Property
//!
//! Suppresses no-op writes: a change to the value the property already
//! holds succeeds without reaching the inner `change`.

use tracing::debug;

use crate::error::PropertyError;
use crate::property::Property;

/// A property decorator that only forwards changes to a different value.
///
/// Every change costs one inner read to learn the current value.
#[derive(Debug, Clone)]
pub struct Distinct<P> {
    inner: P,
}

impl<P> Distinct<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T, P> Property<T> for Distinct<P>
where
    P: Property<T>,
    T: PartialEq,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        let current: T = self.inner.value()?;
        if current == value {
            debug!("change skipped, value unchanged");
            return Ok(());
        }
        self.inner.change(value)
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        self.inner.value()
    }
}
