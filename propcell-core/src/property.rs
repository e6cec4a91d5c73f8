//! Property Contract
//!
//! A property is a typed value cell with two operations: read the current
//! value and attempt to change it. Both may fail. Every decorator in this
//! crate implements [`Property`] by delegating to an inner property, and the
//! innermost delegate of any stack is a [`Datasource`].
//!
//! # Borrowing vs. owning
//!
//! The contract is implemented for `&mut P` and `Box<P>`, so a stack can
//! either own its datasource or borrow it exclusively for its lifetime:
//!
//! ```rust,ignore
//! let mut source = MemorySource::new(1);
//! {
//!     let mut cached = Memoized::lazy(&mut source);
//!     cached.change(2)?;
//! }
//! assert_eq!(source.value()?, 2);
//! ```

use tracing::trace;

use crate::error::PropertyError;

/// A typed, mutable value cell.
pub trait Property<T> {
    /// Attempt to replace the current value.
    ///
    /// On success the new value is observable to subsequent [`value`]
    /// calls, subject to the caching policy of any decorator in the stack.
    ///
    /// [`value`]: Property::value
    fn change(&mut self, value: T) -> Result<(), PropertyError>;

    /// Read the current logical value.
    fn value(&mut self) -> Result<T, PropertyError>;
}

/// The authoritative backing store of a property stack.
///
/// A datasource has exactly the shape of a [`Property`]; this marker names
/// the role so the reactive composite can require a real store rather than
/// an arbitrary decorator.
pub trait Datasource<T>: Property<T> {}

impl<T, P> Property<T> for &mut P
where
    P: Property<T> + ?Sized,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        (**self).change(value)
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        (**self).value()
    }
}

impl<T, D> Datasource<T> for &mut D where D: Datasource<T> + ?Sized {}

impl<T, P> Property<T> for Box<P>
where
    P: Property<T> + ?Sized,
{
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        (**self).change(value)
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        (**self).value()
    }
}

impl<T, D> Datasource<T> for Box<D> where D: Datasource<T> + ?Sized {}

/// An in-memory datasource.
///
/// Reads clone the held value and writes replace it. Neither ever fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource<T> {
    value: T,
}

impl<T> MemorySource<T> {
    /// Create a source holding `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the stored value without going through the contract.
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Property<T> for MemorySource<T> {
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        trace!("memory source write");
        self.value = value;
        Ok(())
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        Ok(self.value.clone())
    }
}

impl<T: Clone> Datasource<T> for MemorySource<T> {}
