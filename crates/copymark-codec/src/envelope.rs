//! Envelope codec - provenance records to and from compact JSON text

use crate::error::Result;
use copymark_domain::ProvenanceRecord;
use serde_json::Value;

/// Serialize a record as compact JSON
///
/// Keys are written in the fixed order `original`, `href`, `date`, `version`,
/// so equal records always produce identical text.
pub fn serialize(record: &ProvenanceRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Parse text into a JSON value
///
/// Only syntax is checked here; schema checks belong to the validator.
pub fn deserialize(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}
