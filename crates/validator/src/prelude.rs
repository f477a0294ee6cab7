//! Prelude module for convenient imports.
//!
//! `use fieldguard_validator::prelude::*;` brings in the schema, the report
//! types, the rule traits, every built-in rule and the combinators.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! let username = required_string().and(min_len(3)).and(max_len(20));
//! let age = between(18, 120);
//! let tags = unique::<String>().and(max_items(10));
//! # let _ = (username, age, tags);
//! ```

// ============================================================================
// FOUNDATION: Traits, errors, slots
// ============================================================================

pub use crate::foundation::{
    BoxedRule, FnRule, Rule, RuleError, RuleExt, RuleResult, RuleSlot, ZeroValue, from_fn,
};

// ============================================================================
// ENGINE: Schema, configuration, report
// ============================================================================

pub use crate::config::{EngineConfig, PanicPolicy};
pub use crate::report::{ValidationReport, Violation};
pub use crate::schema::{FieldHandle, Schema};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    All, And, Any, Optional, Or, When, all, and, any, optional, or, when,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all_of, any_of, rule};
