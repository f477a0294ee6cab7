//! The diagnostic a failing rule hands back to the engine.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Ordered key/value parameters attached to an error (typically 0-2 entries).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A structured failure produced by a [`Rule`](crate::foundation::Rule).
///
/// `code` is a short machine-stable identifier (`"required"`, `"min"`, ...),
/// `message` is meant for humans. A rule that fails without anything useful
/// to say returns [`RuleError::unspecified`]; the field executor then fills in
/// `"invalid"` / `"validation failed"`.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::foundation::RuleError;
///
/// let error = RuleError::new("min_length", "minimum length not satisfied")
///     .with_param("min", "8")
///     .with_param("actual", "3");
///
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("8"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleError {
    /// Machine-stable error code. Empty means "not supplied".
    pub code: Cow<'static, str>,

    /// Human-readable message. Empty means "not supplied".
    pub message: Cow<'static, str>,

    /// Parameters for message templating, in insertion order.
    pub params: ErrorParams,
}

impl RuleError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// A failure that carries no diagnostic at all.
    #[must_use]
    pub fn unspecified() -> Self {
        Self::default()
    }

    /// Returns `true` when neither a code nor a message was supplied.
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            return f.write_str("rule failed without a diagnostic");
        }
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for RuleError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl RuleError {
    /// Creates a "required" error.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "value is required")
    }

    /// Creates a "min_length" error.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", "minimum length not satisfied")
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    #[must_use]
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", "maximum length exceeded")
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_range" error for a rule built with `min > max`.
    pub fn invalid_range(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::new("invalid_range", "min must be <= max")
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
    }
}
