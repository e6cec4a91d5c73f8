//! Shared Property
//!
//! Properties are single-owner: every operation takes `&mut self`. When one
//! property has to be reached from several owners, wrap it in [`Shared`].
//! Clones point at the same property and each operation holds the lock for
//! its whole duration, so calls are serialized.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::error::PropertyError;
use crate::property::{Datasource, Property};

/// A clonable handle serializing access to one property.
#[derive(Debug)]
pub struct Shared<P> {
    inner: Arc<Mutex<P>>,
}

impl<P> Shared<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Lock the property for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, P> {
        self.inner.lock()
    }

    /// Number of handles to the property.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Unwrap the property if this is the last handle.
    ///
    /// Gives the handle back unchanged while other clones are alive.
    pub fn into_inner(self) -> Result<P, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<P> Clone for Shared<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, P> Property<T> for Shared<P>
where
    P: Property<T>,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        self.inner.lock().change(value)
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        self.inner.lock().value()
    }
}

impl<T, P> Datasource<T> for Shared<P> where P: Datasource<T> {}
