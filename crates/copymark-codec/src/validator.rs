//! Record validation - accept or reject decoded envelopes

use crate::config::ValidationConfig;
use crate::error::RejectionReason;
use copymark_domain::record::fields;
use copymark_domain::{ProvenanceRecord, SCHEMA_VERSION};
use serde_json::{Map, Value};

/// Checks decoded JSON against the four-field record schema
///
/// Stateless apart from its configuration; build one per configuration and
/// share it freely.
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    config: ValidationConfig,
}

impl RecordValidator {
    /// Create a validator with the given rules
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// The rules this validator applies
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a candidate and convert it into a record
    ///
    /// All four fields must be present and string-typed. Nothing is accepted
    /// partially: the first violation rejects the whole candidate.
    pub fn validate(&self, candidate: &Value) -> Result<ProvenanceRecord, RejectionReason> {
        let obj = candidate
            .as_object()
            .ok_or_else(|| RejectionReason::NotAnObject(json_type(candidate)))?;

        let original = required_str(obj, fields::ORIGINAL)?;
        let href = required_str(obj, fields::HREF)?;
        let date = required_str(obj, fields::DATE)?;
        let version = required_str(obj, fields::VERSION)?;

        if self.config.reject_unknown_fields {
            if let Some(extra) = obj.keys().find(|key| !fields::ALL.contains(&key.as_str())) {
                return Err(RejectionReason::UnknownField(extra.clone()));
            }
        }

        if self.config.require_non_empty_original && original.is_empty() {
            return Err(RejectionReason::EmptyOriginal);
        }

        if self.config.require_current_version && version != SCHEMA_VERSION {
            return Err(RejectionReason::UnsupportedVersion(version.to_string()));
        }

        Ok(ProvenanceRecord::restore(original, href, date, version))
    }
}

/// Validate with the default rules
pub fn validate_record(candidate: &Value) -> Result<ProvenanceRecord, RejectionReason> {
    RecordValidator::default().validate(candidate)
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, RejectionReason> {
    let value = obj.get(field).ok_or(RejectionReason::MissingField(field))?;
    value.as_str().ok_or_else(|| RejectionReason::WrongType {
        field,
        expected: "string",
        found: json_type(value),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
