//! AND combinators - logical conjunction of rules
//!
//! [`And`] joins two rules of possibly different types; [`All`] joins any
//! number of boxed rules. Both evaluate in order and stop at the first
//! failure, so the order in which rules are listed decides which error
//! surfaces.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! let password = all_of![min_len(8), max_len(64)];
//! assert!(password.check("correct horse").is_ok());
//! assert_eq!(password.check("short").unwrap_err().code, "min_length");
//! ```

use crate::foundation::{BoxedRule, Rule, RuleError};

/// Combines two rules with logical AND.
///
/// The right rule is not evaluated when the left one fails.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Rule for And<L, R>
where
    L: Rule,
    R: Rule<Input = L::Input>,
{
    type Input = L::Input;

    fn check(&self, value: &Self::Input) -> Result<(), RuleError> {
        self.left.check(value)?;
        self.right.check(value)
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Rule,
    R: Rule<Input = L::Input>,
{
    And::new(left, right)
}

/// Conjunction over a list of rules.
///
/// Passes when every rule passes (and trivially when the list is empty).
/// Returns the first failure unchanged.
pub struct All<V: ?Sized> {
    rules: Vec<BoxedRule<V>>,
}

impl<V: ?Sized> All<V> {
    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<V: ?Sized> Rule for All<V> {
    type Input = V;

    fn check(&self, value: &V) -> Result<(), RuleError> {
        for rule in &self.rules {
            rule.check(value)?;
        }
        Ok(())
    }
}

impl<V: ?Sized> Clone for All<V> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<V: ?Sized> std::fmt::Debug for All<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("All").field("rules", &self.rules.len()).finish()
    }
}

/// Creates an [`All`] combinator from a list of boxed rules.
///
/// See also the [`all_of!`](crate::all_of) macro, which boxes for you.
pub fn all<V: ?Sized>(rules: impl IntoIterator<Item = BoxedRule<V>>) -> All<V> {
    All {
        rules: rules.into_iter().collect(),
    }
}
