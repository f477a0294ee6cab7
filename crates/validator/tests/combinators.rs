//! Combinator behaviour through the public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldguard_validator::prelude::*;
use rstest::rstest;

/// A rule that counts its invocations and fails with `code`.
fn counting_failure(
    code: &'static str,
    calls: &Arc<AtomicUsize>,
) -> impl Rule<Input = str> + Send + Sync + 'static + use<> {
    let calls = Arc::clone(calls);
    from_fn(move |_: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(RuleError::new(code, "failed"))
    })
}

// ============================================================================
// ALL
// ============================================================================

#[test]
fn all_returns_first_failure_and_skips_the_rest() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule = all_of![counting_failure("r1", &calls), counting_failure("r2", &calls)];

    assert_eq!(rule.check("x").unwrap_err().code, "r1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn all_of_nothing_passes() {
    let rule: All<str> = all_of![];
    assert!(rule.check("anything").is_ok());
}

#[test]
fn binary_and_short_circuits() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule = counting_failure("left", &calls).and(counting_failure("right", &calls));
    assert_eq!(rule.check("x").unwrap_err().code, "left");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// ============================================================================
// ANY
// ============================================================================

#[test]
fn any_of_nothing_passes() {
    let rule: Any<str> = any_of![];
    assert!(rule.check("").is_ok());
}

#[test]
fn any_passes_when_one_alternative_passes() {
    let rule = any_of![min_len(10), required_string()];
    assert!(rule.check("x").is_ok());
}

#[test]
fn any_reports_the_last_failure() {
    let rule = any_of![min_len(3), one_of(["x"])];
    let err = rule.check("ab").unwrap_err();
    assert_eq!(err.code, "one_of");
}

#[test]
fn any_with_only_silent_failures_uses_fallback() {
    let silent = || from_fn(|_: &str| Err(RuleError::unspecified()));
    let err = any_of![silent(), silent()].check("x").unwrap_err();
    assert_eq!(err.code, "any");
    assert_eq!(err.message, "none of the rules matched");
}

// ============================================================================
// OPTIONAL / WHEN
// ============================================================================

#[test]
fn optional_skips_zero_values_without_invoking() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule = counting_failure("inner", &calls).optional();

    assert!(rule.check("").is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(rule.check("value").unwrap_err().code, "inner");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[case(0, true)]
#[case(5, false)]
#[case(18, true)]
fn optional_number(#[case] value: u32, #[case] ok: bool) {
    assert_eq!(min(18_u32).optional().check(&value).is_ok(), ok);
}

#[test]
fn optional_collection_skips_empty() {
    let rule = min_items::<String>(2).optional();
    assert!(rule.check(&[]).is_ok());
    assert!(rule.check(&["a".to_owned()]).is_err());
}

#[test]
fn when_runs_only_if_condition_holds() {
    let rule = email().when(|v: &str| v.contains('@'));
    assert!(rule.check("no-at-sign").is_ok());
    assert!(rule.check("broken@").is_err());
}

// ============================================================================
// NESTING
// ============================================================================

#[rstest]
#[case("", true)]
#[case("n/a", true)]
#[case("https://example.com", true)]
#[case("example", false)]
fn nested_combinators(#[case] input: &str, #[case] ok: bool) {
    let website = any_of![url(), one_of(["n/a"])].optional();
    assert_eq!(website.check(input).is_ok(), ok);
}

#[test]
fn boxed_rules_share_between_fields() {
    let shared: BoxedRule<str> = required_string().and(max_len(5)).boxed();
    let first = all([Arc::clone(&shared)]);
    let second = any([shared]);
    assert!(first.check("ok").is_ok());
    assert!(second.check("ok").is_ok());
    assert!(first.check("toolong").is_err());
}

#[test]
fn check_each_collects_without_short_circuit() {
    let rules = [min_len(8).boxed(), max_len(2).boxed(), one_of(["admin"]).boxed()];
    let codes: Vec<_> = fieldguard_validator::foundation::check_each("root", &rules)
        .into_iter()
        .map(|e| e.code)
        .collect();
    assert_eq!(codes, ["min_length", "max_length", "one_of"]);
}
