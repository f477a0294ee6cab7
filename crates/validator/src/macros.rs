//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a leaf rule (struct + `Rule` impl + factory fn)
//! - [`all_of!`]: conjunction over heterogeneous rules
//! - [`any_of!`]: disjunction over heterogeneous rules
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::rule;
//! use fieldguard_validator::foundation::{Rule, RuleError};
//!
//! rule! {
//!     /// Rejects values containing whitespace.
//!     pub NoWhitespace for str;
//!     rule(input) { !input.chars().any(char::is_whitespace) }
//!     error(input) { RuleError::new("no_whitespace", "value must not contain whitespace") }
//!     fn no_whitespace();
//! }
//!
//! assert!(no_whitespace().check("alice").is_ok());
//! assert!(no_whitespace().check("al ice").is_err());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a complete leaf rule: struct definition, [`Rule`] implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub RequiredString for str;
///     rule(input) { !input.trim().is_empty() }
///     error(input) { RuleError::required() }
///     fn required_string();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLen { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { RuleError::min_length(self.min, input.chars().count()) }
///     fn min_len(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub OneOf { allowed: HashSet<String> } for str;
///     rule(self, input) { self.allowed.contains(input) }
///     error(self, input) { RuleError::new("one_of", "value not allowed") }
///     new(options: impl IntoIterator<Item = impl Into<String>>) { ... }
///     fn one_of(options: impl IntoIterator<Item = impl Into<String>>);
/// }
/// ```
///
/// **Generic rule** (bounded type parameter):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { RuleError::new("min", "value below minimum") }
///     fn min(value: T);
/// }
/// ```
///
/// **Phantom generic** (element type of a slice input, no bounds):
/// ```rust,ignore
/// rule! {
///     pub MinItems<T> { min: usize } for [T];
///     rule(self, input) { input.len() >= self.min }
///     error(self, input) { RuleError::new("min_items", "not enough items") }
///     fn min_items(min: usize);
/// }
/// ```
///
/// [`Rule`]: crate::foundation::Rule
#[macro_export]
macro_rules! rule {
    // ── Unit rule (no fields) + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct (bounded) + auto new + factory fn ─────────────────
    //
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Rule for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Phantom generic struct + auto new + factory fn ───────────────────
    //
    // For rules over `[T]` that never look inside the elements.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
            _phantom: ::std::marker::PhantomData<fn(&$gen)>,
        }

        impl<$gen> ::std::clone::Clone for $name<$gen> {
            fn clone(&self) -> Self {
                Self { $($field: self.$field.clone(),)+ _phantom: ::std::marker::PhantomData }
            }
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field,)+ _phantom: ::std::marker::PhantomData }
            }
        }

        impl<$gen> $crate::foundation::Rule for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// ALL_OF / ANY_OF MACROS
// ============================================================================

/// Builds an [`All`](crate::combinators::All) from rules of different types.
///
/// ```
/// use fieldguard_validator::prelude::*;
///
/// let rule = all_of![required_string(), min_len(3), max_len(20)];
/// assert!(rule.check("alice").is_ok());
/// assert_eq!(rule.check("  ").unwrap_err().code, "required");
/// ```
#[macro_export]
macro_rules! all_of {
    () => {
        $crate::combinators::all(::std::vec::Vec::new())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::all(::std::vec![$($crate::foundation::RuleExt::boxed($rule)),+])
    };
}

/// Builds an [`Any`](crate::combinators::Any) from rules of different types.
///
/// ```
/// use fieldguard_validator::prelude::*;
///
/// let rule = any_of![min_len(10), required_string()];
/// assert!(rule.check("x").is_ok());
/// ```
#[macro_export]
macro_rules! any_of {
    () => {
        $crate::combinators::any(::std::vec::Vec::new())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::any(::std::vec![$($crate::foundation::RuleExt::boxed($rule)),+])
    };
}
