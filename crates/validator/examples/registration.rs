//! Sign-up form validation with built-in and custom rules.
//!
//! Run with `RUST_LOG=fieldguard_validator=trace` to see per-violation events.

use std::collections::HashSet;
use std::sync::LazyLock;

use fieldguard_validator::prelude::*;
use regex::Regex;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct RegisterInput {
    email: String,
    password: String,
    age: u32,
    roles: Vec<String>,
    website: String,
    referral_code: String,
}

static HAS_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern is a valid regex"));
static HAS_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern is a valid regex"));

rule! {
    /// The address must belong to the company domain.
    pub CorporateEmail for str;
    rule(input) { input.ends_with("@company.com") }
    error(input) { RuleError::new("corporate_email", "email must end with @company.com") }
    fn corporate_email();
}

/// At least eight characters with one digit and one uppercase letter.
fn strong_password() -> All<str> {
    all_of![
        min_len(8),
        from_fn(|v: &str| {
            if HAS_DIGIT.is_match(v) {
                Ok(())
            } else {
                Err(RuleError::new(
                    "password_digit",
                    "password must contain at least one digit",
                ))
            }
        }),
        from_fn(|v: &str| {
            if HAS_UPPER.is_match(v) {
                Ok(())
            } else {
                Err(RuleError::new(
                    "password_upper",
                    "password must contain at least one uppercase letter",
                ))
            }
        }),
    ]
}

/// Every role must come from the supported set.
fn allowed_roles() -> impl Rule<Input = [String]> + Send + Sync + 'static {
    let allowed: HashSet<&'static str> = ["admin", "editor", "support", "user"].into();
    from_fn(move |roles: &[String]| {
        match roles.iter().find(|role| !allowed.contains(role.as_str())) {
            Some(role) => Err(RuleError::new(
                "role_invalid",
                format!("roles contain unsupported value: {role}"),
            )
            .with_param("role", role.clone())),
            None => Ok(()),
        }
    })
}

fn register_schema() -> Result<Schema<RegisterInput>, RuleError> {
    let mut schema = Schema::<RegisterInput>::new();

    schema
        .field("email", |i| i.email.as_str())
        .rule(required_string())
        .rule(email())
        .rule(corporate_email());

    schema
        .field("password", |i| i.password.as_str())
        .rule(required_string())
        .rule(strong_password());

    schema.field("age", |i| &i.age).rule(between(18, 70));

    schema
        .field("roles", |i| i.roles.as_slice())
        .rule(min_items(1))
        .rule(unique())
        .rule(allowed_roles());

    // Empty is accepted; anything else must be a URL.
    schema
        .field("website", |i| i.website.as_str())
        .rule(url().optional());

    schema
        .field("referral_code", |i| i.referral_code.as_str())
        .rule(pattern_str(r"^[A-Z]{3}-[A-Z0-9]{5}$")?.optional());

    Ok(schema)
}

fn print_result(title: &str, schema: &Schema<RegisterInput>, input: &RegisterInput) {
    println!("{}", "=".repeat(72));
    println!("{title}");

    match schema.validate(input) {
        None => println!("Validation: PASSED"),
        Some(report) => {
            println!("Validation: FAILED");
            let mut violations = report.into_violations();
            violations.sort_by(|a, b| a.field().cmp(b.field()));
            for v in &violations {
                println!(
                    "- field={} code={} message={}",
                    v.field(),
                    v.code(),
                    v.message()
                );
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::from_env()?;
    let mut schema = register_schema()?;
    schema.set_config(config);

    let invalid = RegisterInput {
        email: "ali@gmail.com".into(),
        password: "weakpass".into(),
        age: 16,
        roles: vec!["admin".into(), "admin".into(), "owner".into()],
        website: "not-a-url".into(),
        referral_code: "ab-12".into(),
    };

    let valid = RegisterInput {
        email: "ali@company.com".into(),
        password: "StrongPass1".into(),
        age: 30,
        roles: vec!["admin".into(), "support".into()],
        website: "https://company.com/docs".into(),
        referral_code: "ABC-9X2Q1".into(),
    };

    print_result("Scenario 1: Invalid Input", &schema, &invalid);
    print_result("Scenario 2: Valid Input", &schema, &valid);

    if let Err(report) = schema.check(&invalid) {
        println!("{}", "=".repeat(72));
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
