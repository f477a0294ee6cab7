//! Concurrent evaluation of a schema against one record.
//!
//! Every field runs on its own scoped thread; all of them borrow the record
//! and push into one [`Collector`]. The call returns only after every thread
//! has been joined.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, Scope, ScopedJoinHandle};

use crate::config::{EngineConfig, PanicPolicy};
use crate::report::{Collector, ValidationReport, Violation};

use super::Schema;
use super::field::FieldCheck;

type PanicPayload = Box<dyn Any + Send + 'static>;

/// A field's unit of work: running on its own thread or already finished
/// inline because the thread could not be spawned.
enum Unit<'scope> {
    Spawned(ScopedJoinHandle<'scope, ()>),
    Finished(thread::Result<()>),
}

impl Unit<'_> {
    fn join(self) -> thread::Result<()> {
        match self {
            Self::Spawned(handle) => handle.join(),
            Self::Finished(result) => result,
        }
    }
}

impl<R: Sync> Schema<R> {
    /// Validates `record` with the schema's configuration.
    ///
    /// Returns `None` when every rule passed.
    ///
    /// # Panics
    ///
    /// Under [`PanicPolicy::Propagate`] a panic raised by rule logic is
    /// re-raised here after every field thread has been joined.
    pub fn validate(&self, record: &R) -> Option<ValidationReport> {
        self.validate_with(record, &self.config)
    }

    /// Validates `record` with a one-off configuration.
    ///
    /// # Panics
    ///
    /// See [`Schema::validate`].
    pub fn validate_with(&self, record: &R, config: &EngineConfig) -> Option<ValidationReport> {
        if self.fields.is_empty() {
            tracing::debug!(fields = 0, violations = 0, "record validated");
            return None;
        }

        let collector = Collector::new();

        let panicked = thread::scope(|scope| {
            let units: Vec<_> = self
                .fields
                .iter()
                .map(|field| (field, spawn_field(scope, field.as_ref(), record, config, &collector)))
                .collect();

            let mut first_panic: Option<PanicPayload> = None;
            for (field, unit) in units {
                let Err(payload) = unit.join() else {
                    continue;
                };
                match config.panic_policy {
                    PanicPolicy::Isolate => {
                        tracing::warn!(
                            field = field.name(),
                            panic = panic_message(payload.as_ref()),
                            "rule panicked; isolating field"
                        );
                        collector.push(Violation::new(
                            field.name(),
                            "rule_panicked",
                            "rule panicked during evaluation",
                        ));
                    }
                    PanicPolicy::Propagate => {
                        first_panic.get_or_insert(payload);
                    }
                }
            }
            first_panic
        });

        if let Some(payload) = panicked {
            panic::resume_unwind(payload);
        }

        let report = collector.into_report();
        tracing::debug!(
            fields = self.fields.len(),
            violations = report.as_ref().map_or(0, ValidationReport::len),
            "record validated"
        );
        report
    }

    /// Validates `record`, returning the report as an error.
    ///
    /// ```
    /// use fieldguard_validator::prelude::*;
    ///
    /// struct Signup { name: String }
    ///
    /// fn accept(schema: &Schema<Signup>, signup: &Signup) -> Result<(), ValidationReport> {
    ///     schema.check(signup)?;
    ///     Ok(())
    /// }
    ///
    /// let mut schema = Schema::<Signup>::new();
    /// schema.field("name", |s| s.name.as_str()).rule(min_len(2));
    /// assert!(accept(&schema, &Signup { name: "Al".into() }).is_ok());
    /// assert!(accept(&schema, &Signup { name: "A".into() }).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationReport`] when at least one rule failed.
    ///
    /// # Panics
    ///
    /// See [`Schema::validate`].
    pub fn check(&self, record: &R) -> Result<(), ValidationReport> {
        self.validate(record).map_or(Ok(()), Err)
    }
}

fn spawn_field<'scope, 'env, R: Sync>(
    scope: &'scope Scope<'scope, 'env>,
    field: &'env dyn FieldCheck<R>,
    record: &'env R,
    config: &'env EngineConfig,
    collector: &'env Collector,
) -> Unit<'scope> {
    let spawned = thread::Builder::new()
        .name(thread_name(field.name()))
        .spawn_scoped(scope, move || field.run(record, config, collector));

    match spawned {
        Ok(handle) => Unit::Spawned(handle),
        Err(error) => {
            tracing::warn!(field = field.name(), %error, "failed to spawn field thread; running inline");
            Unit::Finished(panic::catch_unwind(AssertUnwindSafe(|| {
                field.run(record, config, collector);
            })))
        }
    }
}

/// Thread names may not contain NUL, so those bytes are replaced.
fn thread_name(field: &str) -> String {
    format!("fieldguard:{}", field.replace('\0', "\u{FFFD}"))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleError, from_fn};
    use crate::validators::{min, required_string};

    struct Probe {
        label: String,
        score: i32,
    }

    fn probe(label: &str, score: i32) -> Probe {
        Probe {
            label: label.to_owned(),
            score,
        }
    }

    fn exploding() -> impl crate::foundation::Rule<Input = i32> + Send + Sync + 'static {
        from_fn(|_: &i32| -> Result<(), RuleError> { panic!("boom") })
    }

    #[test]
    fn empty_schema_returns_none() {
        let schema = Schema::<Probe>::new();
        assert!(schema.validate(&probe("", 0)).is_none());
    }

    #[test]
    fn valid_record_returns_none() {
        let mut schema = Schema::<Probe>::new();
        schema.field("label", |p| p.label.as_str()).rule(required_string());
        schema.field("score", |p| &p.score).rule(min(0));
        assert!(schema.validate(&probe("ok", 1)).is_none());
        assert!(schema.check(&probe("ok", 1)).is_ok());
    }

    #[test]
    fn violations_from_all_fields_are_collected() {
        let mut schema = Schema::<Probe>::new();
        schema.field("label", |p| p.label.as_str()).rule(required_string());
        schema.field("score", |p| &p.score).rule(min(0));

        let report = schema.validate(&probe(" ", -1)).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.has("label", "required"));
        assert!(report.has("score", "min"));
    }

    #[test]
    fn validate_with_overrides_schema_config() {
        let mut schema = Schema::<Probe>::new();
        schema
            .field("score", |p| &p.score)
            .rule(min(0))
            .rule(min(10));

        assert_eq!(schema.validate(&probe("x", -1)).unwrap().len(), 2);
        let fast = EngineConfig::default().fail_fast(true);
        assert_eq!(schema.validate_with(&probe("x", -1), &fast).unwrap().len(), 1);
    }

    #[test]
    fn isolated_panic_becomes_violation() {
        let mut schema = Schema::<Probe>::with_config(EngineConfig::production());
        schema.field("label", |p| p.label.as_str()).rule(required_string());
        schema.field("score", |p| &p.score).rule(exploding());

        let report = schema.validate(&probe("", 5)).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.has("label", "required"));
        let panicked: Vec<_> = report.for_field("score").collect();
        assert_eq!(panicked.len(), 1);
        assert_eq!(panicked[0].code(), "rule_panicked");
        assert_eq!(panicked[0].message(), "rule panicked during evaluation");
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn propagated_panic_resurfaces() {
        let mut schema = Schema::<Probe>::new();
        schema.field("score", |p| &p.score).rule(exploding());
        let _ = schema.validate(&probe("", 5));
    }

    #[test]
    fn nul_in_field_name_is_validated_under_both_policies() {
        for config in [EngineConfig::development(), EngineConfig::production()] {
            let mut schema = Schema::<Probe>::with_config(config);
            schema.field("a\0b", |p| p.label.as_str()).rule(required_string());

            let report = schema.validate(&probe("", 0)).unwrap();
            assert_eq!(report.len(), 1);
            assert!(report.has("a\0b", "required"));
            assert!(schema.validate(&probe("ok", 0)).is_none());
        }
    }

    #[test]
    fn thread_name_replaces_nul() {
        assert_eq!(thread_name("email"), "fieldguard:email");
        assert_eq!(thread_name("a\0b"), "fieldguard:a\u{FFFD}b");
    }

    #[test]
    fn panic_message_extracts_strings() {
        let text: PanicPayload = Box::new("static");
        assert_eq!(panic_message(text.as_ref()), "static");
        let owned: PanicPayload = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let other: PanicPayload = Box::new(7_u8);
        assert_eq!(panic_message(other.as_ref()), "<non-string panic payload>");
    }
}
