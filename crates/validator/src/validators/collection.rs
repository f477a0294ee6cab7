//! Collection rules over slices.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::foundation::{Rule, RuleError};

crate::rule! {
    /// Validates that a collection has at least `min` items.
    pub MinItems<T> { min: usize } for [T];
    rule(self, input) { input.len() >= self.min }
    error(self, input) {
        RuleError::new("min_items", "not enough items")
            .with_param("min", self.min.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn min_items(min: usize);
}

crate::rule! {
    /// Validates that a collection has at most `max` items.
    pub MaxItems<T> { max: usize } for [T];
    rule(self, input) { input.len() <= self.max }
    error(self, input) {
        RuleError::new("max_items", "too many items")
            .with_param("max", self.max.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn max_items(max: usize);
}

/// Validates that all elements of a collection are distinct.
#[derive(Debug)]
pub struct Unique<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Unique<T> {
    /// Creates a new uniqueness rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Unique<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Unique<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Unique<T> {}

impl<T: Eq + Hash> Rule for Unique<T> {
    type Input = [T];

    fn check(&self, value: &[T]) -> Result<(), RuleError> {
        let mut seen = HashSet::with_capacity(value.len());
        for (index, item) in value.iter().enumerate() {
            if !seen.insert(item) {
                return Err(RuleError::new("unique", "duplicate values found")
                    .with_param("index", index.to_string()));
            }
        }
        Ok(())
    }
}

/// Creates a uniqueness rule.
#[must_use]
pub fn unique<T: Eq + Hash>() -> Unique<T> {
    Unique::new()
}
