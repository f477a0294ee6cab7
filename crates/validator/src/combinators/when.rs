//! WHEN combinator - conditional rules
//!
//! [`When`] runs the inner rule only if a predicate over the value holds;
//! otherwise the value passes. [`Optional`](super::Optional) is the special
//! case whose predicate is "not the zero value".
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! // Only internal accounts must use the corporate domain.
//! let rule = pattern(regex::Regex::new(r"@company\.com$").unwrap())
//!     .when(|v: &str| v.starts_with("staff."));
//!
//! assert!(rule.check("someone@gmail.com").is_ok()); // skipped
//! assert!(rule.check("staff.ali@gmail.com").is_err()); // checked, fails
//! assert!(rule.check("staff.ali@company.com").is_ok()); // checked, passes
//! ```

use crate::foundation::{Rule, RuleError};

/// Conditionally applies a rule based on a predicate.
///
/// # Type Parameters
///
/// * `R` - The inner rule type
/// * `C` - The condition (`Fn(&Input) -> bool`)
#[derive(Debug, Clone, Copy)]
pub struct When<R, C> {
    pub(crate) rule: R,
    pub(crate) condition: C,
}

impl<R, C> When<R, C> {
    /// Creates a new `When` combinator.
    pub fn new(rule: R, condition: C) -> Self {
        Self { rule, condition }
    }

    /// Returns a reference to the inner rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R, C> Rule for When<R, C>
where
    R: Rule,
    C: Fn(&R::Input) -> bool,
{
    type Input = R::Input;

    fn check(&self, value: &Self::Input) -> Result<(), RuleError> {
        if (self.condition)(value) {
            self.rule.check(value)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator.
pub fn when<R, C>(rule: R, condition: C) -> When<R, C>
where
    R: Rule,
    C: Fn(&R::Input) -> bool,
{
    When::new(rule, condition)
}
