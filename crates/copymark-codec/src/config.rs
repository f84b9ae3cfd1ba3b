//! Codec configuration

use crate::error::{CopymarkError, Result};
use copymark_domain::Alphabet;
use serde::{Deserialize, Serialize};

/// Configuration for record validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject objects carrying fields outside the four-field schema
    pub reject_unknown_fields: bool,

    /// Reject records whose version differs from the current schema version
    pub require_current_version: bool,

    /// Reject records whose `original` text is empty
    pub require_non_empty_original: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_unknown_fields: true,
            require_current_version: false,
            require_non_empty_original: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (type checks only)
    pub fn permissive() -> Self {
        Self {
            reject_unknown_fields: false,
            require_current_version: false,
            require_non_empty_original: false,
        }
    }

    /// Create a strict configuration (all checks enabled)
    pub fn strict() -> Self {
        Self {
            reject_unknown_fields: true,
            require_current_version: true,
            require_non_empty_original: true,
        }
    }
}

/// Configuration for a [`Copymark`](crate::Copymark) instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopymarkConfig {
    /// Marker alphabet shared by encoder, scanner and decoder
    pub alphabet: Alphabet,

    /// Emit a warning for every marker run dropped during recovery
    pub log_skipped_runs: bool,

    /// Rules applied to decoded records
    pub validation: ValidationConfig,
}

impl Default for CopymarkConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Binary,
            log_skipped_runs: true,
            validation: ValidationConfig::default(),
        }
    }
}

impl CopymarkConfig {
    /// Compact preset: quaternary markers, half the invisible characters
    pub fn compact() -> Self {
        Self {
            alphabet: Alphabet::Quaternary,
            ..Self::default()
        }
    }

    /// Strict preset: binary markers, every validation rule enabled
    pub fn strict() -> Self {
        Self {
            validation: ValidationConfig::strict(),
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| CopymarkError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CopymarkError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
