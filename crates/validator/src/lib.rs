//! # fieldguard-validator
//!
//! Concurrent, composable per-field validation for in-memory records.
//!
//! ## Quick Start
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! struct User {
//!     email: String,
//!     age: u32,
//! }
//!
//! let mut schema = Schema::<User>::new();
//! schema
//!     .field("email", |u| u.email.as_str())
//!     .rule(required_string())
//!     .rule(email());
//! schema.field("age", |u| &u.age).rule(min(18));
//!
//! assert!(schema.validate(&User { email: "user@x.com".into(), age: 30 }).is_none());
//!
//! let report = schema.validate(&User { email: String::new(), age: 15 }).unwrap();
//! assert!(report.has("email", "required"));
//! assert!(report.has("age", "min"));
//! ```
//!
//! ## How it runs
//!
//! [`Schema::validate`](schema::Schema::validate) runs every field on its own
//! scoped thread. Within a field the rule chain runs in order and every
//! failure is recorded; across fields there is no ordering. The call returns
//! after all fields finish, with `None` when nothing failed.
//!
//! ## Writing rules
//!
//! Use the [`rule!`] macro for leaf rules, [`from_fn`](foundation::from_fn)
//! for one-off closures, or implement [`Rule`](foundation::Rule) by hand.
//! Compose with [`RuleExt`](foundation::RuleExt) (`and`, `or`, `optional`,
//! `when`) or the [`all_of!`] / [`any_of!`] macros.
//!
//! ## Built-in Rules
//!
//! - **Strings**: [`RequiredString`](validators::RequiredString),
//!   [`MinLen`](validators::MinLen), [`MaxLen`](validators::MaxLen),
//!   [`LengthBetween`](validators::LengthBetween),
//!   [`Email`](validators::Email), [`Url`](validators::Url),
//!   [`Pattern`](validators::Pattern), [`OneOf`](validators::OneOf)
//! - **Numbers**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`Between`](validators::Between)
//! - **Collections**: [`MinItems`](validators::MinItems),
//!   [`MaxItems`](validators::MaxItems), [`Unique`](validators::Unique)

// Deep combinator nesting (And<Or<Optional<...>, ...>, ...>) and the
// extractor bounds on field handles produce long types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod report;
pub mod schema;
pub mod validators;
