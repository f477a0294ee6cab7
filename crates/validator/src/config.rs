//! Engine configuration
//!
//! [`EngineConfig`] controls how a [`Schema`](crate::schema::Schema) runs its
//! fields. It can be built in code, embedded in an application config file
//! through `serde`, or read from the environment:
//!
//! | Variable | Values |
//! |---|---|
//! | `FIELDGUARD_FAIL_FAST` | `1/0`, `true/false`, `yes/no`, `on/off` |
//! | `FIELDGUARD_PANIC_POLICY` | `propagate`, `isolate` |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable toggling [`EngineConfig::fail_fast`].
pub const ENV_FAIL_FAST: &str = "FIELDGUARD_FAIL_FAST";
/// Environment variable selecting the [`PanicPolicy`].
pub const ENV_PANIC_POLICY: &str = "FIELDGUARD_PANIC_POLICY";

/// Error raised while loading an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid engine config json: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting had a value outside its accepted set.
    #[error("invalid value {value:?} for {key}, expected {expected}")]
    InvalidValue {
        /// Setting name (environment variable or field).
        key: &'static str,
        /// The rejected raw value.
        value: String,
        /// Human-readable list of accepted values.
        expected: &'static str,
    },
}

// ============================================================================
// PANIC POLICY
// ============================================================================

/// What happens when rule logic panics during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanicPolicy {
    /// Re-raise the panic from `validate` once every field thread has joined.
    #[default]
    Propagate,
    /// Record a `rule_panicked` violation for the field and keep the rest.
    Isolate,
}

impl PanicPolicy {
    /// Returns the policy's config name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Propagate => "propagate",
            Self::Isolate => "isolate",
        }
    }
}

impl std::fmt::Display for PanicPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanicPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "isolate" => Ok(Self::Isolate),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_PANIC_POLICY,
                value: s.to_owned(),
                expected: "propagate or isolate",
            }),
        }
    }
}

// ============================================================================
// ENGINE CONFIG
// ============================================================================

/// Runtime options for a schema.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::config::{EngineConfig, PanicPolicy};
///
/// let config = EngineConfig::default()
///     .fail_fast(true)
///     .panic_policy(PanicPolicy::Isolate);
/// assert!(config.is_fail_fast());
///
/// let parsed = EngineConfig::from_json_str(r#"{"fail_fast": true, "panic_policy": "isolate"}"#)?;
/// assert_eq!(parsed, config);
/// # Ok::<(), fieldguard_validator::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Stop a field's rule chain at its first failure. Other fields still run.
    pub fail_fast: bool,
    /// Panic handling for rule logic.
    pub panic_policy: PanicPolicy,
}

impl EngineConfig {
    /// Sets fail-fast mode.
    #[must_use]
    pub const fn fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    /// Sets the panic policy.
    #[must_use]
    pub const fn panic_policy(mut self, policy: PanicPolicy) -> Self {
        self.panic_policy = policy;
        self
    }

    /// Returns `true` if fail-fast mode is on.
    #[must_use]
    pub const fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Development preset: report everything, let panics surface.
    #[must_use]
    pub const fn development() -> Self {
        Self {
            fail_fast: false,
            panic_policy: PanicPolicy::Propagate,
        }
    }

    /// Production preset: report everything, isolate panicking fields.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            fail_fast: false,
            panic_policy: PanicPolicy::Isolate,
        }
    }

    /// Parses a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `FIELDGUARD_FAIL_FAST` and `FIELDGUARD_PANIC_POLICY`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup shaped like the
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_FAIL_FAST) {
            config.fail_fast = parse_flag(ENV_FAIL_FAST, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PANIC_POLICY) {
            config.panic_policy = raw.parse()?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_owned(),
            expected: "1/0, true/false, yes/no or on/off",
        }),
    }
}
