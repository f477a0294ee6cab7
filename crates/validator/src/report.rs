//! Validation outcome types
//!
//! A [`Violation`] is one failed check on one field. A [`ValidationReport`] is
//! the ordered set of violations produced by one validation run; it only
//! exists when at least one check failed.

use std::borrow::Cow;

use parking_lot::Mutex;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::foundation::{ErrorParams, RuleError};

/// Code used when a failing rule leaves its code empty.
pub const DEFAULT_CODE: &str = "invalid";
/// Message used when a failing rule leaves its message empty.
pub const DEFAULT_MESSAGE: &str = "validation failed";

// ============================================================================
// VIOLATION
// ============================================================================

/// One failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    field: String,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    #[serde(serialize_with = "serialize_params")]
    params: ErrorParams,
}

impl Violation {
    /// Creates a violation with an explicit code and message.
    ///
    /// An empty code or message is replaced by [`DEFAULT_CODE`] /
    /// [`DEFAULT_MESSAGE`] independently.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::from_rule_error(field, RuleError::new(code, message))
    }

    /// Converts a rule failure into a violation on `field`.
    pub fn from_rule_error(field: impl Into<String>, error: RuleError) -> Self {
        let RuleError {
            code,
            message,
            params,
        } = error;
        Self {
            field: field.into(),
            code: if code.is_empty() {
                Cow::Borrowed(DEFAULT_CODE)
            } else {
                code
            },
            message: if message.is_empty() {
                Cow::Borrowed(DEFAULT_MESSAGE)
            } else {
                message
            },
            params,
        }
    }

    /// The field label the violation was recorded under.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Machine-readable violation code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parameters carried over from the rule error.
    pub fn params(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
        &self.params
    }

    /// Looks up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}] {}", self.field, self.code, self.message)
    }
}

fn serialize_params<S: Serializer>(params: &ErrorParams, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(params.len()))?;
    for (key, value) in params {
        map.serialize_entry(key.as_ref(), value.as_ref())?;
    }
    map.end()
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// All violations recorded during one validation run.
///
/// The order of violations across fields is unspecified; within one field
/// they follow the rule chain.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
///
/// struct Login { user: String }
///
/// let mut schema = Schema::<Login>::new();
/// schema.field("user", |l| l.user.as_str()).rule(required_string());
///
/// let report = schema.validate(&Login { user: String::new() }).unwrap();
/// assert!(report.has("user", "required"));
/// assert_eq!(report.to_string(), "validation failed with 1 violation(s)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed with {} violation(s)", .violations.len())]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if any violation was recorded.
    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    /// All violations in recording order.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterates over violations.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations recorded under `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Returns `true` if `field` has a violation with `code`.
    pub fn has(&self, field: &str, code: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.code == code)
    }

    /// Distinct field labels with at least one violation, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.violations.iter().map(Violation::field).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Consumes the report, yielding the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Serializes the report as `{"violations": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

// ============================================================================
// COLLECTOR
// ============================================================================

/// Shared sink the field workers append to during one run.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    violations: Mutex<Vec<Violation>>,
}

impl Collector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, violation: Violation) {
        tracing::trace!(field = %violation.field, code = %violation.code, "rule failed");
        self.violations.lock().push(violation);
    }

    pub(crate) fn into_report(self) -> Option<ValidationReport> {
        let violations = self.violations.into_inner();
        (!violations.is_empty()).then_some(ValidationReport { violations })
    }
}
