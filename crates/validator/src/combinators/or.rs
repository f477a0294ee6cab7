//! OR combinators - logical disjunction of rules
//!
//! [`Or`] and [`Any`] pass on the first passing rule. When every rule fails
//! they report the **last** error that carried a diagnostic; if none did, the
//! result is `any` / `none of the rules matched`.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! let role = any_of![min_len(3), one_of(["x"])];
//! assert!(role.check("x").is_ok());
//! assert_eq!(role.check("ab").unwrap_err().code, "one_of");
//! ```

use crate::foundation::{BoxedRule, Rule, RuleError};

fn none_matched() -> RuleError {
    RuleError::new("any", "none of the rules matched")
}

/// Combines two rules with logical OR.
///
/// If the left rule passes, the right one is not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Rule for Or<L, R>
where
    L: Rule,
    R: Rule<Input = L::Input>,
{
    type Input = L::Input;

    fn check(&self, value: &Self::Input) -> Result<(), RuleError> {
        let left_error = match self.left.check(value) {
            Ok(()) => return Ok(()),
            Err(error) => error,
        };
        match self.right.check(value) {
            Ok(()) => Ok(()),
            Err(right_error) if !right_error.is_unspecified() => Err(right_error),
            Err(_) if !left_error.is_unspecified() => Err(left_error),
            Err(_) => Err(none_matched()),
        }
    }
}

/// Creates an `Or` combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Rule,
    R: Rule<Input = L::Input>,
{
    Or::new(left, right)
}

/// Disjunction over a list of rules.
///
/// Every rule is tried in order until one passes. An empty list passes.
pub struct Any<V: ?Sized> {
    rules: Vec<BoxedRule<V>>,
}

impl<V: ?Sized> Any<V> {
    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<V: ?Sized> Rule for Any<V> {
    type Input = V;

    fn check(&self, value: &V) -> Result<(), RuleError> {
        if self.rules.is_empty() {
            return Ok(());
        }

        let mut last_error = None;
        for rule in &self.rules {
            match rule.check(value) {
                Ok(()) => return Ok(()),
                Err(error) if !error.is_unspecified() => last_error = Some(error),
                Err(_) => {}
            }
        }
        Err(last_error.unwrap_or_else(none_matched))
    }
}

impl<V: ?Sized> Clone for Any<V> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<V: ?Sized> std::fmt::Debug for Any<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Any").field("rules", &self.rules.len()).finish()
    }
}

/// Creates an [`Any`] combinator from a list of boxed rules.
///
/// See also the [`any_of!`](crate::any_of) macro, which boxes for you.
pub fn any<V: ?Sized>(rules: impl IntoIterator<Item = BoxedRule<V>>) -> Any<V> {
    Any {
        rules: rules.into_iter().collect(),
    }
}
