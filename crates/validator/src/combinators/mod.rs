//! Rule combinators
//!
//! Higher-order rules built from simpler ones. Every combinator implements
//! [`Rule`](crate::foundation::Rule) itself, so they nest freely.
//!
//! | Combinator | Semantics |
//! |------------|-----------|
//! | [`And`] / [`All`] | every rule must pass; first failure is returned |
//! | [`Or`] / [`Any`] | one rule must pass; last diagnostic is returned |
//! | [`Optional`] | zero value passes without running the rule |
//! | [`When`] | rule runs only when a predicate holds |
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! let website = any_of![url(), one_of(["n/a"])].optional();
//! assert!(website.check("").is_ok());
//! assert!(website.check("n/a").is_ok());
//! assert!(website.check("https://example.com").is_ok());
//! assert!(website.check("nope").is_err());
//! ```

pub mod and;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{All, And, all, and};
pub use optional::{Optional, optional};
pub use or::{Any, Or, any, or};
pub use when::{When, when};
