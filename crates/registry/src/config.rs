//! Registry configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use registrar_core::{DomainError, DomainResult};

/// Environment variable read by [`RegistryConfig::from_env`].
pub const REMOVAL_POLICY_VAR: &str = "REGISTRAR_REMOVAL_POLICY";

/// What happens to enrollments when a student or course is removed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Keep enrollment records and the other side's view untouched. The
    /// leftovers are reported by `Registry::orphaned_enrollments`.
    #[default]
    Retain,
    /// Drop the removed record's enrollments and unlink it from the other side.
    Cascade,
}

impl FromStr for RemovalPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(RemovalPolicy::Retain),
            "cascade" => Ok(RemovalPolicy::Cascade),
            other => Err(DomainError::validation(format!(
                "unknown removal policy {other:?} (expected \"retain\" or \"cascade\")"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub removal_policy: RemovalPolicy,
}

impl RegistryConfig {
    pub fn new(removal_policy: RemovalPolicy) -> Self {
        Self { removal_policy }
    }

    /// Load configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; set-but-invalid values are errors.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let removal_policy = match lookup(REMOVAL_POLICY_VAR) {
            Some(raw) => raw.parse()?,
            None => RemovalPolicy::default(),
        };
        Ok(Self { removal_policy })
    }
}
