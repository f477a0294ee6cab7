//! Core rule types and traits
//!
//! This module contains the building blocks every other module is written
//! against:
//!
//! - **Traits**: [`Rule`], [`RuleExt`], [`ZeroValue`]
//! - **Errors**: [`RuleError`]
//! - **Storage**: [`BoxedRule`], [`RuleSlot`]
//! - **Adapters**: [`from_fn`] / [`FnRule`]
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Rules are generic over their input type, so a string rule cannot be
//! attached to a numeric field:
//!
//! ```compile_fail
//! use fieldguard_validator::prelude::*;
//!
//! struct User { age: u32 }
//!
//! let mut schema = Schema::<User>::new();
//! schema.field("age", |u| &u.age).rule(min_len(3));
//! ```
//!
//! ## 2. Composition
//!
//! Rules compose with combinators and the composite is itself a rule:
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! let code = min_len(3).and(max_len(8)).optional();
//! assert!(code.check("").is_ok());
//! assert!(code.check("ab").is_err());
//! ```
//!
//! ## 3. Static and dynamic dispatch
//!
//! `a.and(b)` builds a concrete `And<A, B>` with no indirection.
//! Heterogeneous lists (`all_of!`, `any_of!`, a field's rule chain) store
//! [`BoxedRule`]s, a shared `Arc<dyn Rule>`.

pub mod error;
pub mod traits;
pub mod zero;

pub use error::{ErrorParams, RuleError};
pub use traits::{BoxedRule, FnRule, Rule, RuleExt, RuleSlot, from_fn};
pub use zero::ZeroValue;

/// The result every rule returns.
pub type RuleResult = Result<(), RuleError>;

/// Checks a value against a slice of rules, collecting every failure.
///
/// This is the non-short-circuiting counterpart of
/// [`all`](crate::combinators::all), the same semantics a field's rule chain
/// has inside a schema.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::foundation::check_each;
/// use fieldguard_validator::prelude::*;
///
/// let rules = [min_len(8).boxed(), one_of(["admin"]).boxed()];
/// let errors = check_each("root", &rules);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn check_each<V: ?Sized>(value: &V, rules: &[BoxedRule<V>]) -> Vec<RuleError> {
    rules
        .iter()
        .filter_map(|rule| rule.check(value).err())
        .collect()
}

#[cfg(test)]
mod foundation_tests {
    use super::*;

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        type Input = str;

        fn check(&self, _value: &str) -> RuleResult {
            Err(RuleError::new("always_fails", "always fails"))
        }
    }

    #[test]
    fn check_each_keeps_every_failure() {
        let rules = [AlwaysFails.boxed(), AlwaysFails.boxed()];
        assert_eq!(check_each("x", &rules).len(), 2);
    }

    #[test]
    fn check_each_empty() {
        let rules: [BoxedRule<str>; 0] = [];
        assert!(check_each("x", &rules).is_empty());
    }
}
