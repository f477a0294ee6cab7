//! String presence and length rules
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! length 5 regardless of its UTF-8 byte count.

use crate::foundation::{Rule, RuleError};

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// REQUIRED
// ============================================================================

crate::rule! {
    /// Validates that a string is non-empty after trimming whitespace.
    pub RequiredString for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { RuleError::required() }
    fn required_string();
}

// ============================================================================
// MIN / MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLen { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { RuleError::min_length(self.min, char_len(input)) }
    fn min_len(min: usize);
}

crate::rule! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLen { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { RuleError::max_length(self.max, char_len(input)) }
    fn max_len(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length lies in `min..=max`.
///
/// Reports `min_length` or `max_length` depending on which side was violated,
/// so it is a drop-in for `min_len(min).and(max_len(max))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBetween {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthBetween {
    /// Creates a new length range rule.
    ///
    /// Returns an `invalid_range` error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, RuleError> {
        if min > max {
            return Err(RuleError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }
}

impl Rule for LengthBetween {
    type Input = str;

    fn check(&self, value: &str) -> Result<(), RuleError> {
        let len = char_len(value);
        if len < self.min {
            Err(RuleError::min_length(self.min, len))
        } else if len > self.max {
            Err(RuleError::max_length(self.max, len))
        } else {
            Ok(())
        }
    }
}

/// Creates a length range rule.
pub fn length_between(min: usize, max: usize) -> Result<LengthBetween, RuleError> {
    LengthBetween::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice", true)]
    #[case(" x ", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t\n", false)]
    fn required_string_cases(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(required_string().check(input).is_ok(), ok);
    }

    #[test]
    fn required_string_code() {
        let err = required_string().check("").unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "value is required");
    }

    #[test]
    fn min_len_counts_chars_not_bytes() {
        let rule = min_len(5);
        assert!(rule.check("héllo").is_ok());
        assert!(rule.check("日本語").is_err());
    }

    #[test]
    fn min_len_error_params() {
        let err = min_len(8).check("abc").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("8"));
        assert_eq!(err.param("actual"), Some("3"));
    }

    #[test]
    fn max_len_boundary() {
        let rule = max_len(3);
        assert!(rule.check("abc").is_ok());
        assert_eq!(rule.check("abcd").unwrap_err().code, "max_length");
    }

    #[test]
    fn length_between_reports_the_violated_side() {
        let rule = length_between(2, 4).unwrap();
        assert!(rule.check("abc").is_ok());
        assert_eq!(rule.check("a").unwrap_err().code, "min_length");
        assert_eq!(rule.check("abcde").unwrap_err().code, "max_length");
    }

    #[test]
    fn length_between_rejects_inverted_bounds() {
        let err = length_between(5, 2).unwrap_err();
        assert_eq!(err.code, "invalid_range");
    }
}
