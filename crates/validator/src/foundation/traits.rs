//! Core traits for the rule system
//!
//! This module defines the [`Rule`] contract every leaf rule and combinator
//! implements, the [`RuleExt`] combinator methods, and the shared
//! representations a schema stores rules in.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::foundation::RuleError;
use crate::foundation::ZeroValue;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The unit of validation logic.
///
/// A rule is a pure check over one value. It may close over configuration
/// captured at construction (a bound, a compiled pattern), but it never
/// mutates the value and must be callable from many threads at once when it
/// is stored in a [`Schema`](crate::schema::Schema).
///
/// # Examples
///
/// ```
/// use fieldguard_validator::foundation::{Rule, RuleError};
///
/// struct NoSpaces;
///
/// impl Rule for NoSpaces {
///     type Input = str;
///
///     fn check(&self, value: &str) -> Result<(), RuleError> {
///         if value.contains(' ') {
///             Err(RuleError::new("no_spaces", "value must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.check("alice").is_ok());
/// assert!(NoSpaces.check("al ice").is_err());
/// ```
pub trait Rule {
    /// The type of value being checked.
    ///
    /// Use `?Sized` types such as `str` and `[T]` for borrowed field values.
    type Input: ?Sized;

    /// Checks the value.
    ///
    /// `Ok(())` means the value satisfies the rule. A failure without a
    /// useful diagnostic should return [`RuleError::unspecified`].
    fn check(&self, value: &Self::Input) -> Result<(), RuleError>;
}

impl<R: Rule + ?Sized> Rule for &R {
    type Input = R::Input;

    #[inline]
    fn check(&self, value: &Self::Input) -> Result<(), RuleError> {
        (**self).check(value)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Input = R::Input;

    #[inline]
    fn check(&self, value: &Self::Input) -> Result<(), RuleError> {
        (**self).check(value)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    type Input = R::Input;

    #[inline]
    fn check(&self, value: &Self::Input) -> Result<(), RuleError> {
        (**self).check(value)
    }
}

/// A type-erased rule that can be shared between fields and threads.
pub type BoxedRule<V> = Arc<dyn Rule<Input = V> + Send + Sync>;

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Rule`].
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
///
/// let username = min_len(3).and(max_len(20));
/// assert!(username.check("alice").is_ok());
/// assert!(username.check("al").is_err());
/// ```
pub trait RuleExt: Rule + Sized {
    /// Conjunction: `other` is only evaluated when `self` passes.
    fn and<R>(self, other: R) -> And<Self, R>
    where
        R: Rule<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Disjunction: passes when either side passes; reports the right-hand
    /// error when both fail.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Rule<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Skips the rule when the value is its type's zero value.
    fn optional(self) -> Optional<Self>
    where
        Self::Input: ZeroValue,
    {
        Optional::new(self)
    }

    /// Runs the rule only when `condition` holds for the value.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Erases the concrete type so the rule can sit in a heterogeneous list.
    fn boxed(self) -> BoxedRule<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Rule> RuleExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::when::When;

// ============================================================================
// CLOSURE RULES
// ============================================================================

/// A rule backed by a closure. Built with [`from_fn`].
pub struct FnRule<V: ?Sized, F> {
    check: F,
    _input: PhantomData<fn(&V)>,
}

impl<V: ?Sized, F> Rule for FnRule<V, F>
where
    F: Fn(&V) -> Result<(), RuleError>,
{
    type Input = V;

    #[inline]
    fn check(&self, value: &V) -> Result<(), RuleError> {
        (self.check)(value)
    }
}

impl<V: ?Sized, F: Clone> Clone for FnRule<V, F> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            _input: PhantomData,
        }
    }
}

impl<V: ?Sized, F> fmt::Debug for FnRule<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

/// Adapts a closure into a [`Rule`].
///
/// # Examples
///
/// ```
/// use fieldguard_validator::foundation::{Rule, RuleError, from_fn};
///
/// let has_digit = from_fn(|v: &str| {
///     if v.chars().any(|c| c.is_ascii_digit()) {
///         Ok(())
///     } else {
///         Err(RuleError::new("password_digit", "password must contain a digit"))
///     }
/// });
///
/// assert!(has_digit.check("s3cret").is_ok());
/// assert!(has_digit.check("secret").is_err());
/// ```
pub fn from_fn<V: ?Sized, F>(check: F) -> FnRule<V, F>
where
    F: Fn(&V) -> Result<(), RuleError>,
{
    FnRule {
        check,
        _input: PhantomData,
    }
}

// ============================================================================
// RULE SLOT
// ============================================================================

/// One entry in a field's rule chain.
///
/// A slot is either a configured rule or explicitly [`Unset`](RuleSlot::Unset),
/// for example when the rule came from optional configuration that was never
/// filled in. The field executor reports an unset slot as `invalid_rule`
/// without evaluating anything.
pub enum RuleSlot<V: ?Sized> {
    /// A rule ready to run.
    Configured(BoxedRule<V>),
    /// A declared slot that was never assigned a rule.
    Unset,
}

impl<V: ?Sized> RuleSlot<V> {
    /// Wraps a rule into a configured slot.
    pub fn configured<R>(rule: R) -> Self
    where
        R: Rule<Input = V> + Send + Sync + 'static,
    {
        Self::Configured(Arc::new(rule))
    }

    /// An empty slot.
    #[must_use]
    pub const fn unset() -> Self {
        Self::Unset
    }

    /// Returns `true` if a rule is present.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    /// Returns the configured rule, if any.
    #[must_use]
    pub const fn rule(&self) -> Option<&BoxedRule<V>> {
        match self {
            Self::Configured(rule) => Some(rule),
            Self::Unset => None,
        }
    }
}

impl<V: ?Sized, R> From<Option<R>> for RuleSlot<V>
where
    R: Rule<Input = V> + Send + Sync + 'static,
{
    fn from(rule: Option<R>) -> Self {
        match rule {
            Some(rule) => Self::configured(rule),
            None => Self::Unset,
        }
    }
}

impl<V: ?Sized> Clone for RuleSlot<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Configured(rule) => Self::Configured(Arc::clone(rule)),
            Self::Unset => Self::Unset,
        }
    }
}

impl<V: ?Sized> fmt::Debug for RuleSlot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured(_) => f.write_str("Configured(<rule>)"),
            Self::Unset => f.write_str("Unset"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Rule for AlwaysValid {
        type Input = str;

        fn check(&self, _value: &str) -> Result<(), RuleError> {
            Ok(())
        }
    }

    fn run<R: Rule<Input = str>>(rule: R, value: &str) -> Result<(), RuleError> {
        rule.check(value)
    }

    #[test]
    fn forwarding_impls_delegate() {
        let boxed: Box<dyn Rule<Input = str>> = Box::new(AlwaysValid);
        assert!(run(boxed, "x").is_ok());
        assert!(run(&AlwaysValid, "x").is_ok());
        assert!(run(AlwaysValid.boxed(), "x").is_ok());
    }

    #[test]
    fn from_fn_sees_the_value() {
        let rule = from_fn(|v: &i32| {
            if *v > 0 {
                Ok(())
            } else {
                Err(RuleError::new("positive", "must be positive"))
            }
        });
        assert!(rule.check(&1).is_ok());
        assert_eq!(rule.check(&0).unwrap_err().code, "positive");
    }

    #[test]
    fn slot_from_option() {
        let some: RuleSlot<str> = Some(AlwaysValid).into();
        let none: RuleSlot<str> = Option::<AlwaysValid>::None.into();
        assert!(some.is_configured());
        assert!(!none.is_configured());
        assert!(none.rule().is_none());
    }

    #[test]
    fn slot_debug_hides_rule() {
        let slot: RuleSlot<str> = RuleSlot::configured(AlwaysValid);
        assert_eq!(format!("{slot:?}"), "Configured(<rule>)");
        assert_eq!(format!("{:?}", RuleSlot::<str>::unset()), "Unset");
    }
}
