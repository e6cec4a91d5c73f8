//! Broadcast Property
//!
//! Notifies a fixed list of receivers, synchronously and in list order,
//! every time a change is accepted by the inner property.
//!
//! A typical use is a property holding a natural key: when the key changes,
//! everything keyed on the old value has to follow.

use smallvec::SmallVec;
use tracing::trace;

use crate::error::{PropertyError, WiringError};
use crate::property::Property;

/// A change listener. It cannot fail the change it is told about.
pub type Receiver<T> = Box<dyn FnMut(&T)>;

/// A property decorator that fans accepted changes out to receivers.
pub struct Broadcast<T, P> {
    receivers: SmallVec<[Receiver<T>; 4]>,
    inner: P,
}

impl<T, P> Broadcast<T, P>
where
    P: Property<T>,
{
    /// Wrap `inner`, notifying `receivers` after each accepted change.
    ///
    /// Fails with [`WiringError::NoReceivers`] if the list is empty.
    pub fn new<I>(inner: P, receivers: I) -> Result<Self, WiringError>
    where
        I: IntoIterator<Item = Receiver<T>>,
    {
        let receivers: SmallVec<[Receiver<T>; 4]> = receivers.into_iter().collect();
        if receivers.is_empty() {
            return Err(WiringError::NoReceivers);
        }
        Ok(Self { receivers, inner })
    }

    pub fn receiver_count(&self) -> usize {
        self.receivers.len()
    }

    pub fn get_ref(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T, P> Property<T> for Broadcast<T, P>
where
    P: Property<T>,
    T: Clone,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        self.inner.change(value.clone())?;

        trace!(receivers = self.receivers.len(), "broadcasting change");
        for receiver in self.receivers.iter_mut() {
            receiver(&value);
        }
        Ok(())
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        self.inner.value()
    }
}

impl<T, P: std::fmt::Debug> std::fmt::Debug for Broadcast<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcast")
            .field("receivers", &self.receivers.len())
            .field("inner", &self.inner)
            .finish()
    }
}
