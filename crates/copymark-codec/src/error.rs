//! Error types for the codec

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, CopymarkError>;

/// Errors that can occur while encoding, decoding or validating provenance
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CopymarkError {
    /// Marker count is not a multiple of the markers-per-byte unit
    #[error("Malformed marker sequence: {length} markers is not a multiple of {unit}")]
    MalformedSequence {
        /// Number of markers in the sequence
        length: usize,
        /// Markers needed per byte
        unit: usize,
    },

    /// A code point outside the marker alphabet reached the decoder
    #[error("Unknown marker symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The offending character
        symbol: char,
        /// Character index within the sequence
        position: usize,
    },

    /// Decoded payload is not well-formed structured text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Well-formed payload that does not match the record schema
    #[error("Validation rejected: {0}")]
    ValidationRejected(#[from] RejectionReason),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CopymarkError {
    fn from(e: serde_json::Error) -> Self {
        CopymarkError::Parse(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CopymarkError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        CopymarkError::Parse(format!("Invalid UTF-8: {}", e))
    }
}

impl CopymarkError {
    /// Short stable name of the error kind, used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            CopymarkError::MalformedSequence { .. } => "malformed_sequence",
            CopymarkError::UnknownSymbol { .. } => "unknown_symbol",
            CopymarkError::Parse(_) => "parse_error",
            CopymarkError::ValidationRejected(_) => "validation_rejected",
            CopymarkError::Config(_) => "config",
        }
    }
}

/// Why the validator refused a candidate record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Candidate is not a JSON object
    #[error("expected an object, found {0}")]
    NotAnObject(&'static str),

    /// A required field is absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A required field has the wrong JSON type
    #[error("field '{field}' must be a {expected}, found {found}")]
    WrongType {
        /// Field name
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
        /// Actual JSON type
        found: &'static str,
    },

    /// A field outside the schema is present
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// The copied text is empty
    #[error("field 'original' must not be empty")]
    EmptyOriginal,

    /// Version differs from the current schema version
    #[error("unsupported schema version '{0}'")]
    UnsupportedVersion(String),
}
