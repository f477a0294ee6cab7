//! Built-in rules
//!
//! Ready-made leaf rules for the common field shapes.
//!
//! # Categories
//!
//! - **Length**: presence and character-count bounds on strings
//! - **Range**: numeric bounds, generic over `PartialOrd`
//! - **Content**: email, URL, regex pattern, enumerations
//! - **Collection**: item count bounds and uniqueness on slices
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! let username = required_string().and(min_len(3)).and(max_len(20));
//! assert!(username.check("alice").is_ok());
//!
//! let age = between(18, 120);
//! assert!(age.check(&42).is_ok());
//! ```

pub mod collection;
pub mod content;
pub mod length;
pub mod range;

pub use collection::{MaxItems, MinItems, Unique, max_items, min_items, unique};
pub use content::{Email, OneOf, Pattern, Url, email, one_of, pattern, pattern_str, url};
pub use length::{
    LengthBetween, MaxLen, MinLen, RequiredString, length_between, max_len, min_len,
    required_string,
};
pub use range::{Between, Max, Min, between, max, min};
