//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::PropertyError;
use crate::property::{Datasource, Property};

#[derive(Debug)]
struct ProbeState<T> {
    value: Option<T>,
    /// Every value passed to `change`, whether or not it succeeded.
    changes: Vec<T>,
    reads: usize,
    change_error: Option<PropertyError>,
    value_error: Option<PropertyError>,
}

/// A property that records every call made to it.
///
/// Clones share state, so a test can keep one handle while a decorator owns
/// another.
#[derive(Debug)]
pub(crate) struct Probe<T> {
    state: Rc<RefCell<ProbeState<T>>>,
}

impl<T> Clone for Probe<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone> Probe<T> {
    /// A probe whose current value is `value`.
    pub(crate) fn holding(value: T) -> Self {
        Self::with_value(Some(value))
    }

    /// A probe with no value; reads fail with `Unavailable`.
    pub(crate) fn empty() -> Self {
        Self::with_value(None)
    }

    fn with_value(value: Option<T>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ProbeState {
                value,
                changes: Vec::new(),
                reads: 0,
                change_error: None,
                value_error: None,
            })),
        }
    }

    /// Make every subsequent `change` fail with `error`.
    pub(crate) fn fail_changes(self, error: PropertyError) -> Self {
        self.state.borrow_mut().change_error = Some(error);
        self
    }

    /// Make every subsequent `value` fail with `error`.
    pub(crate) fn fail_reads(self, error: PropertyError) -> Self {
        self.state.borrow_mut().value_error = Some(error);
        self
    }

    pub(crate) fn changes(&self) -> Vec<T> {
        self.state.borrow().changes.clone()
    }

    pub(crate) fn change_calls(&self) -> usize {
        self.state.borrow().changes.len()
    }

    pub(crate) fn reads(&self) -> usize {
        self.state.borrow().reads
    }

    /// The stored value, read without counting.
    pub(crate) fn stored(&self) -> Option<T> {
        self.state.borrow().value.clone()
    }
}

impl<T: Clone> Property<T> for Probe<T> {
    fn change(&mut self, value: T) -> Result<(), PropertyError> {
        let mut state = self.state.borrow_mut();
        state.changes.push(value.clone());
        if let Some(error) = &state.change_error {
            return Err(error.clone());
        }
        state.value = Some(value);
        Ok(())
    }

    fn value(&mut self) -> Result<T, PropertyError> {
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        if let Some(error) = &state.value_error {
            return Err(error.clone());
        }
        state.value.clone().ok_or(PropertyError::Unavailable)
    }
}

impl<T: Clone> Datasource<T> for Probe<T> {}

/// A standalone upstream error for tests that check verbatim propagation.
pub(crate) fn upstream(message: &str) -> PropertyError {
    PropertyError::upstream(std::io::Error::new(std::io::ErrorKind::Other, message.to_string()))
}

/// Whether two errors are the same upstream instance.
pub(crate) fn same_error(a: &PropertyError, b: &PropertyError) -> bool {
    match (a, b) {
        (PropertyError::Upstream(a), PropertyError::Upstream(b)) => std::sync::Arc::ptr_eq(a, b),
        _ => a.to_string() == b.to_string(),
    }
}
