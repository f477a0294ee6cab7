//! Record schemas
//!
//! A [`Schema`] binds named fields of a record type to rule chains. Once built
//! it is immutable during validation and can be shared between threads.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! struct User {
//!     email: String,
//!     age: u32,
//!     roles: Vec<String>,
//! }
//!
//! let mut schema = Schema::<User>::new();
//! schema
//!     .field("email", |u| u.email.as_str())
//!     .rule(required_string())
//!     .rule(email());
//! schema.field("age", |u| &u.age).rule(min(18));
//! schema.field("roles", |u| u.roles.as_slice()).rule(unique());
//!
//! let report = schema
//!     .validate(&User {
//!         email: String::new(),
//!         age: 15,
//!         roles: vec!["admin".into(), "admin".into()],
//!     })
//!     .expect("invalid record");
//!
//! assert!(report.has("email", "required"));
//! assert!(report.has("age", "min"));
//! assert!(report.has("roles", "unique"));
//! ```

mod engine;
mod field;

pub use field::{Borrowed, Computed, Extract, FieldBinding};

use field::FieldCheck;

use crate::config::EngineConfig;
use crate::foundation::{Rule, RuleSlot};

/// An ordered set of field bindings over records of type `R`.
pub struct Schema<R> {
    fields: Vec<Box<dyn FieldCheck<R>>>,
    config: EngineConfig,
}

impl<R> Schema<R> {
    /// Creates an empty schema with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an empty schema with `config`.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            fields: Vec::new(),
            config,
        }
    }

    /// The configuration `validate` runs with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// Registers a field and returns a handle for attaching its rules.
    ///
    /// The binding joins the schema when the handle is dropped, which in the
    /// fluent style is the end of the statement. Names need not be unique.
    ///
    /// The extractor borrows from the record. Use [`Schema::field_owned`]
    /// for values that have to be computed.
    pub fn field<V, E>(
        &mut self,
        name: impl Into<String>,
        extractor: E,
    ) -> FieldHandle<'_, R, V, Borrowed<E>>
    where
        V: ?Sized + 'static,
        E: Fn(&R) -> &V + Send + Sync + 'static,
    {
        FieldHandle {
            binding: Some(FieldBinding::new(name.into(), Borrowed(extractor))),
            schema: self,
        }
    }

    /// Registers a field whose value is computed from the record.
    ///
    /// The extractor runs once per validation and its result is checked by
    /// reference, like a borrowed field.
    ///
    /// ```
    /// use fieldguard_validator::prelude::*;
    ///
    /// struct Order { items: Vec<String> }
    ///
    /// let mut schema = Schema::<Order>::new();
    /// schema.field_owned("item_count", |o| o.items.len()).rule(between(1, 10));
    ///
    /// let report = schema.validate(&Order { items: vec![] }).unwrap();
    /// assert!(report.has("item_count", "between"));
    /// ```
    pub fn field_owned<V, E>(
        &mut self,
        name: impl Into<String>,
        extractor: E,
    ) -> FieldHandle<'_, R, V, Computed<E>>
    where
        V: 'static,
        E: Fn(&R) -> V + Send + Sync + 'static,
    {
        FieldHandle {
            binding: Some(FieldBinding::new(name.into(), Computed(extractor))),
            schema: self,
        }
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in registration order, duplicates included.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name()).collect()
    }
}

impl<R> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field(
                "fields",
                &self
                    .fields
                    .iter()
                    .map(|field| (field.name(), field.rule_count()))
                    .collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .finish()
    }
}

// ============================================================================
// FIELD HANDLE
// ============================================================================

/// Builder for one field's rule chain, returned by [`Schema::field`].
///
/// Rules run in the order they are attached. The binding is committed to the
/// schema when the handle is dropped.
pub struct FieldHandle<'s, R, V, E>
where
    V: ?Sized + 'static,
    E: Extract<R, V> + 'static,
{
    schema: &'s mut Schema<R>,
    binding: Option<FieldBinding<V, E>>,
}

impl<R, V, E> FieldHandle<'_, R, V, E>
where
    V: ?Sized + 'static,
    E: Extract<R, V> + 'static,
{
    /// Appends a rule to the chain.
    pub fn rule<Q>(&mut self, rule: Q) -> &mut Self
    where
        Q: Rule<Input = V> + Send + Sync + 'static,
    {
        self.slot(RuleSlot::configured(rule))
    }

    /// Appends an explicit slot, which may be [`RuleSlot::Unset`].
    pub fn slot(&mut self, slot: impl Into<RuleSlot<V>>) -> &mut Self {
        if let Some(binding) = self.binding.as_mut() {
            binding.push(slot.into());
        }
        self
    }

    /// Number of rules attached so far.
    pub fn len(&self) -> usize {
        self.binding.as_ref().map_or(0, |binding| binding.rules().len())
    }

    /// Returns `true` if no rule is attached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R, V, E> Drop for FieldHandle<'_, R, V, E>
where
    V: ?Sized + 'static,
    E: Extract<R, V> + 'static,
{
    fn drop(&mut self) {
        if let Some(binding) = self.binding.take() {
            self.schema.fields.push(Box::new(binding));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_len, min_len, required_string};

    #[derive(Debug)]
    struct Account {
        handle: String,
        bio: String,
    }

    #[test]
    fn registration_order_is_kept() {
        let mut schema = Schema::<Account>::new();
        schema.field("handle", |a| a.handle.as_str()).rule(min_len(2));
        schema.field("bio", |a| a.bio.as_str()).rule(max_len(140));
        schema.field("handle", |a| a.handle.as_str());

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.field_names(), ["handle", "bio", "handle"]);
    }

    #[test]
    fn handle_commits_on_drop() {
        let mut schema = Schema::<Account>::new();
        {
            let mut handle = schema.field("handle", |a| a.handle.as_str());
            handle.rule(required_string()).rule(min_len(2));
            assert_eq!(handle.len(), 2);
        }
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn empty_schema() {
        let schema = Schema::<Account>::default();
        assert!(schema.is_empty());
        assert_eq!(schema.config(), &EngineConfig::default());
    }

    #[test]
    fn slot_accepts_option() {
        let mut schema = Schema::<Account>::new();
        let maybe_rule = None::<crate::validators::MinLen>;
        schema
            .field("handle", |a| a.handle.as_str())
            .slot(maybe_rule)
            .slot(RuleSlot::Unset);
        let debug = format!("{schema:?}");
        assert!(debug.contains("(\"handle\", 2)"));
    }

    #[test]
    fn computed_field_registers_like_borrowed() {
        let mut schema = Schema::<Account>::new();
        schema
            .field_owned("bio_words", |a| a.bio.split_whitespace().count())
            .rule(crate::validators::max(3_usize));
        schema
            .field_owned("handle_lower", |a| a.handle.to_lowercase())
            .rule(crate::foundation::from_fn(|handle: &String| {
                if handle == "admin" {
                    Ok(())
                } else {
                    Err(crate::foundation::RuleError::new("reserved", "handle is reserved"))
                }
            }));

        assert_eq!(schema.field_names(), ["bio_words", "handle_lower"]);
        let report = schema
            .validate(&Account {
                handle: "ADMIN".to_owned(),
                bio: "one two three four".to_owned(),
            })
            .unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.has("bio_words", "max"));
    }

    #[test]
    fn set_config_replaces_configuration() {
        let mut schema = Schema::<Account>::new();
        schema.set_config(EngineConfig::production());
        assert_eq!(schema.config(), &EngineConfig::production());
    }
}
