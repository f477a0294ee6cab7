//! OPTIONAL combinator - skips a rule on the zero value
//!
//! "Absent is fine, present must be valid": an empty string, `0`, an empty
//! slice or `None` passes without touching the inner rule.

use crate::foundation::{Rule, RuleError, ZeroValue};

/// Bypasses the inner rule when the value is its type's zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<R> {
    pub(crate) inner: R,
}

impl<R> Optional<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Rule for Optional<R>
where
    R: Rule,
    R::Input: ZeroValue,
{
    type Input = R::Input;

    fn check(&self, value: &Self::Input) -> Result<(), RuleError> {
        if value.is_zero_value() {
            return Ok(());
        }
        self.inner.check(value)
    }
}

pub fn optional<R>(rule: R) -> Optional<R>
where
    R: Rule,
    R::Input: ZeroValue,
{
    Optional::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::from_fn;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MinLength {
        min: usize,
    }

    impl Rule for MinLength {
        type Input = str;
        fn check(&self, value: &str) -> Result<(), RuleError> {
            if value.len() >= self.min {
                Ok(())
            } else {
                Err(RuleError::min_length(self.min, value.len()))
            }
        }
    }

    #[test]
    fn test_optional_empty_string() {
        let rule = Optional::new(MinLength { min: 5 });
        assert!(rule.check("").is_ok());
    }

    #[test]
    fn test_optional_present_valid() {
        let rule = Optional::new(MinLength { min: 5 });
        assert!(rule.check("hello").is_ok());
    }

    #[test]
    fn test_optional_present_invalid() {
        let rule = optional(MinLength { min: 5 });
        assert_eq!(rule.check("hi").unwrap_err().code, "min_length");
    }

    #[test]
    fn test_optional_does_not_invoke_inner_on_zero() {
        let calls = AtomicUsize::new(0);
        let rule = optional(from_fn(|_: &i64| {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(RuleError::unspecified())
        }));

        assert!(rule.check(&0).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(rule.check(&7).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
