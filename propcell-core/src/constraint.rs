//! Constraints and trigger rules.
//!
//! Two predicate shapes exist and they are deliberately separate traits:
//!
//! - A [`Constraint`] decides whether a value is *valid*. It reports why not
//!   through a [`PropertyError`].
//! - A [`TriggerRule`] decides whether a change should *fire* an event. It
//!   only answers yes or no.
//!
//! Closures implement both: `Fn(&T) -> Result<(), PropertyError>` is a
//! constraint and `Fn(&T) -> bool` is a trigger rule.

use crate::error::PropertyError;

/// Validation predicate consulted before a write.
pub trait Constraint<T> {
    fn evaluate(&self, value: &T) -> Result<(), PropertyError>;
}

impl<T, F> Constraint<T> for F
where
    F: Fn(&T) -> Result<(), PropertyError>,
{
    fn evaluate(&self, value: &T) -> Result<(), PropertyError> {
        self(value)
    }
}

/// Predicate deciding whether a change raises an event.
pub trait TriggerRule<T> {
    fn evaluate(&self, value: &T) -> bool;
}

impl<T, F> TriggerRule<T> for F
where
    F: Fn(&T) -> bool,
{
    fn evaluate(&self, value: &T) -> bool {
        self(value)
    }
}

/// A constraint that accepts every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysPass;

impl<T> Constraint<T> for AlwaysPass {
    fn evaluate(&self, _value: &T) -> Result<(), PropertyError> {
        Ok(())
    }
}

/// An ordered collection of constraints.
///
/// Evaluation runs every member in insertion order and stops at the first
/// error. An empty set accepts everything.
pub struct ConstraintSet<T> {
    constraints: Vec<Box<dyn Constraint<T>>>,
}

impl<T> ConstraintSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Add a constraint, builder style.
    pub fn with<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<T> + 'static,
    {
        self.push(constraint);
        self
    }

    /// Append a constraint.
    pub fn push<C>(&mut self, constraint: C)
    where
        C: Constraint<T> + 'static,
    {
        self.constraints.push(Box::new(constraint));
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<T> Default for ConstraintSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Constraint<T> for ConstraintSet<T> {
    fn evaluate(&self, value: &T) -> Result<(), PropertyError> {
        self.constraints
            .iter()
            .try_for_each(|constraint| constraint.evaluate(value))
    }
}

impl<T> std::fmt::Debug for ConstraintSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("len", &self.len())
            .finish()
    }
}
