//! String format rules: email, URL, regex pattern, enumerations.
//!
//! `email` and `url` accept the empty string so they can be stacked after
//! `required_string` without double-reporting; pair them with `required_string`
//! or wrap them in `optional` to state intent explicitly.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Rule, RuleError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Validates email address format (`local@domain`).
    pub Email for str;
    rule(input) { input.is_empty() || EMAIL_REGEX.is_match(input) }
    error(input) { RuleError::new("email", "invalid email format") }
    fn email();
}

// ============================================================================
// URL
// ============================================================================

crate::rule! {
    /// Validates an absolute URL with a scheme and a host.
    pub Url for str;
    rule(input) {
        input.is_empty()
            || url::Url::parse(input).is_ok_and(|parsed| parsed.has_host())
    }
    error(input) { RuleError::new("url", "invalid url") }
    fn url();
}

// ============================================================================
// PATTERN
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// A pattern built without a regex (`pattern(None)`) fails every value with
/// `pattern is not configured` instead of silently passing.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Option<Regex>,
}

impl Pattern {
    /// Creates a pattern rule. `None` yields an unconfigured rule.
    pub fn new(regex: impl Into<Option<Regex>>) -> Self {
        Self {
            regex: regex.into(),
        }
    }

    /// Compiles `source` into a pattern rule.
    pub fn parse(source: &str) -> Result<Self, RuleError> {
        Regex::new(source).map(Self::new).map_err(|e| {
            RuleError::new("invalid_pattern", "pattern does not compile")
                .with_param("pattern", source.to_owned())
                .with_param("reason", e.to_string())
        })
    }

    /// Returns the underlying regex, if configured.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }
}

impl Rule for Pattern {
    type Input = str;

    fn check(&self, value: &str) -> Result<(), RuleError> {
        let Some(regex) = &self.regex else {
            return Err(RuleError::new("pattern", "pattern is not configured"));
        };
        if regex.is_match(value) {
            Ok(())
        } else {
            Err(RuleError::new("pattern", "pattern mismatch")
                .with_param("pattern", regex.as_str().to_owned()))
        }
    }
}

/// Creates a pattern rule from a compiled regex (or `None`).
pub fn pattern(regex: impl Into<Option<Regex>>) -> Pattern {
    Pattern::new(regex)
}

/// Compiles `source` and creates a pattern rule.
pub fn pattern_str(source: &str) -> Result<Pattern, RuleError> {
    Pattern::parse(source)
}

// ============================================================================
// ONE OF
// ============================================================================

crate::rule! {
    /// Validates that a string is one of a fixed set of values.
    pub OneOf { allowed: HashSet<String> } for str;
    rule(self, input) { self.allowed.contains(input) }
    error(self, input) { RuleError::new("one_of", "value not allowed") }
    new(options: impl IntoIterator<Item = impl Into<String>>) {
        Self {
            allowed: options.into_iter().map(Into::into).collect(),
        }
    }
    fn one_of(options: impl IntoIterator<Item = impl Into<String>>);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@@example.com", false)]
    fn email_cases(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email().check(input).is_ok(), ok);
    }

    #[rstest]
    #[case("https://company.com/docs", true)]
    #[case("http://localhost:8080", true)]
    #[case("ftp://files.example.com", true)]
    #[case("", true)]
    #[case("not-a-url", false)]
    #[case("/relative/path", false)]
    #[case("mailto:user@example.com", false)]
    fn url_cases(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(url().check(input).is_ok(), ok);
    }

    #[test]
    fn url_error_code() {
        assert_eq!(url().check("not-a-url").unwrap_err().code, "url");
    }

    #[test]
    fn pattern_matches() {
        let rule = pattern_str(r"^[A-Z]{3}-[A-Z0-9]{5}$").unwrap();
        assert!(rule.check("ABC-9X2Q1").is_ok());
        let err = rule.check("ab-12").unwrap_err();
        assert_eq!(err.code, "pattern");
        assert_eq!(err.message, "pattern mismatch");
    }

    #[test]
    fn pattern_without_regex_fails_gracefully() {
        let err = pattern(None).check("abc").unwrap_err();
        assert_eq!(err.code, "pattern");
        assert_eq!(err.message, "pattern is not configured");
    }

    #[test]
    fn pattern_str_rejects_bad_source() {
        let err = pattern_str("(").unwrap_err();
        assert_eq!(err.code, "invalid_pattern");
        assert_eq!(err.param("pattern"), Some("("));
    }

    #[test]
    fn one_of_membership() {
        let rule = one_of(["admin", "editor"]);
        assert!(rule.check("admin").is_ok());
        assert_eq!(rule.check("owner").unwrap_err().code, "one_of");
    }

    #[test]
    fn one_of_empty_set_rejects_everything() {
        let rule = one_of(Vec::<String>::new());
        assert!(rule.check("").is_err());
    }
}
