//! Field bindings: one extractor plus its rule chain.

use crate::config::EngineConfig;
use crate::foundation::{Rule, RuleError, RuleSlot};
use crate::report::{Collector, Violation};

/// How a binding reaches its value inside a record.
pub trait Extract<R, V: ?Sized>: Send + Sync {
    /// Calls `f` with the field's value for `record`.
    fn with_value<T, F>(&self, record: &R, f: F) -> T
    where
        F: FnOnce(&V) -> T;
}

/// Extractor that borrows the value from the record.
///
/// Built by [`Schema::field`](super::Schema::field).
#[derive(Clone, Copy)]
pub struct Borrowed<E>(pub(crate) E);

impl<R, V, E> Extract<R, V> for Borrowed<E>
where
    V: ?Sized,
    E: Fn(&R) -> &V + Send + Sync,
{
    fn with_value<T, F>(&self, record: &R, f: F) -> T
    where
        F: FnOnce(&V) -> T,
    {
        f((self.0)(record))
    }
}

/// Extractor that computes an owned value from the record.
///
/// Built by [`Schema::field_owned`](super::Schema::field_owned). The value is
/// computed once per validation and dropped when the chain finishes.
#[derive(Clone, Copy)]
pub struct Computed<E>(pub(crate) E);

impl<R, V, E> Extract<R, V> for Computed<E>
where
    E: Fn(&R) -> V + Send + Sync,
{
    fn with_value<T, F>(&self, record: &R, f: F) -> T
    where
        F: FnOnce(&V) -> T,
    {
        f(&(self.0)(record))
    }
}

/// A named field bound to an extractor and an ordered rule chain.
///
/// Bindings are created through [`Schema::field`](super::Schema::field) and
/// owned by the schema; they are not constructed directly.
pub struct FieldBinding<V: ?Sized, E> {
    name: String,
    extractor: E,
    rules: Vec<RuleSlot<V>>,
}

impl<V: ?Sized, E> FieldBinding<V, E> {
    pub(crate) fn new(name: String, extractor: E) -> Self {
        Self {
            name,
            extractor,
            rules: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, slot: RuleSlot<V>) {
        self.rules.push(slot);
    }

    /// The label violations for this field are recorded under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule chain in evaluation order.
    pub fn rules(&self) -> &[RuleSlot<V>] {
        &self.rules
    }
}

impl<V: ?Sized, E> std::fmt::Debug for FieldBinding<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// Type-erased view of a binding over records of type `R`.
pub(crate) trait FieldCheck<R>: Send + Sync {
    fn name(&self) -> &str;

    fn rule_count(&self) -> usize;

    /// Runs the chain against `record`, appending every failure to `sink`.
    fn run(&self, record: &R, config: &EngineConfig, sink: &Collector);
}

impl<R, V, E> FieldCheck<R> for FieldBinding<V, E>
where
    V: ?Sized,
    E: Extract<R, V>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn run(&self, record: &R, config: &EngineConfig, sink: &Collector) {
        self.extractor
            .with_value(record, |value| self.check_value(value, config, sink));
    }
}

impl<V: ?Sized, E> FieldBinding<V, E> {
    fn check_value(&self, value: &V, config: &EngineConfig, sink: &Collector) {
        for slot in &self.rules {
            let outcome = match slot {
                RuleSlot::Configured(rule) => rule.check(value),
                RuleSlot::Unset => {
                    tracing::warn!(field = %self.name, "rule is not configured");
                    Err(RuleError::new("invalid_rule", "rule is not configured"))
                }
            };

            if let Err(error) = outcome {
                sink.push(Violation::from_rule_error(self.name.as_str(), error));
                if config.fail_fast {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::from_fn;
    use crate::validators::{min_len, required_string};

    struct Named {
        name: String,
    }

    fn extract(named: &Named) -> &str {
        &named.name
    }

    fn binding() -> FieldBinding<str, Borrowed<fn(&Named) -> &str>> {
        FieldBinding::new("name".to_owned(), Borrowed(extract as fn(&Named) -> &str))
    }

    fn run(binding: &impl FieldCheck<Named>, value: &str, config: EngineConfig) -> Vec<Violation> {
        let sink = Collector::new();
        binding.run(
            &Named {
                name: value.to_owned(),
            },
            &config,
            &sink,
        );
        sink.into_report()
            .map(crate::report::ValidationReport::into_violations)
            .unwrap_or_default()
    }

    #[test]
    fn every_failure_in_the_chain_is_reported() {
        let mut b = binding();
        b.push(RuleSlot::configured(required_string()));
        b.push(RuleSlot::configured(min_len(3)));

        let codes: Vec<_> = run(&b, "", EngineConfig::default())
            .iter()
            .map(|v| v.code().to_owned())
            .collect();
        assert_eq!(codes, ["required", "min_length"]);
    }

    #[test]
    fn fail_fast_stops_the_chain() {
        let mut b = binding();
        b.push(RuleSlot::configured(required_string()));
        b.push(RuleSlot::configured(min_len(3)));

        let violations = run(&b, "", EngineConfig::default().fail_fast(true));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code(), "required");
    }

    #[test]
    fn unset_slot_is_reported_and_chain_continues() {
        let mut b = binding();
        b.push(RuleSlot::Unset);
        b.push(RuleSlot::configured(min_len(3)));

        let violations = run(&b, "ab", EngineConfig::default());
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].code(), "invalid_rule");
        assert_eq!(violations[0].message(), "rule is not configured");
        assert_eq!(violations[1].code(), "min_length");
    }

    #[test]
    fn unspecified_error_gets_defaults() {
        let mut b = binding();
        b.push(RuleSlot::configured(from_fn(|_: &str| {
            Err(RuleError::unspecified())
        })));

        let violations = run(&b, "x", EngineConfig::default());
        assert_eq!(violations[0].code(), "invalid");
        assert_eq!(violations[0].message(), "validation failed");
        assert_eq!(violations[0].field(), "name");
    }

    #[test]
    fn computed_value_is_checked() {
        let mut b = FieldBinding::new(
            "name_len".to_owned(),
            Computed(|named: &Named| named.name.chars().count()),
        );
        b.push(RuleSlot::configured(crate::validators::max(3_usize)));

        let sink = Collector::new();
        let record = Named {
            name: "abcd".to_owned(),
        };
        b.run(&record, &EngineConfig::default(), &sink);
        let violations = sink
            .into_report()
            .map(crate::report::ValidationReport::into_violations)
            .unwrap_or_default();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code(), "max");
        assert_eq!(violations[0].field(), "name_len");
    }

    #[test]
    fn erased_view_reports_name_and_len() {
        let mut b = binding();
        b.push(RuleSlot::Unset);
        let erased: &dyn FieldCheck<Named> = &b;
        assert_eq!(erased.name(), "name");
        assert_eq!(erased.rule_count(), 1);
    }
}
