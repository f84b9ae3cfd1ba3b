//! Provenance record - the envelope embedded into copied text

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Schema version written into every record produced by this crate
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Wire names of the record fields, in serialization order
pub mod fields {
    /// The copied selection
    pub const ORIGINAL: &str = "original";
    /// Where the text was copied from
    pub const HREF: &str = "href";
    /// When the text was copied (ISO-8601)
    pub const DATE: &str = "date";
    /// Schema version of the record
    pub const VERSION: &str = "version";

    /// All required fields, in serialization order
    pub const ALL: [&str; 4] = [ORIGINAL, HREF, DATE, VERSION];
}

/// Format a timestamp the way records store it
///
/// Millisecond precision with a `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Where and when a piece of text was copied
///
/// Records are immutable once created. Field order is fixed so that
/// serializing equal records yields identical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProvenanceRecord {
    original: String,
    href: String,
    date: String,
    version: String,
}

impl ProvenanceRecord {
    /// Create a record for the current schema version
    ///
    /// Field contents are not checked here. A record with an empty `original`
    /// is refused at embed time, since recovery would reject it.
    ///
    /// # Examples
    ///
    /// ```
    /// use copymark_domain::{ProvenanceRecord, SCHEMA_VERSION};
    ///
    /// let record = ProvenanceRecord::new(
    ///     "hello world",
    ///     "https://x/y",
    ///     "2024-01-01T00:00:00.000Z",
    /// );
    /// assert_eq!(record.version(), SCHEMA_VERSION);
    /// ```
    pub fn new(
        original: impl Into<String>,
        href: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            href: href.into(),
            date: date.into(),
            version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Create a record stamped with the current time
    pub fn capture(original: impl Into<String>, href: impl Into<String>) -> Self {
        Self::captured_at(original, href, Utc::now())
    }

    /// Create a record stamped with the given time
    pub fn captured_at(
        original: impl Into<String>,
        href: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self::new(original, href, format_timestamp(at))
    }

    /// Rebuild a record read back from marker text
    ///
    /// The version is taken as found, so records written by other schema
    /// generations survive decoding. Validation decides whether to accept them.
    pub fn restore(
        original: impl Into<String>,
        href: impl Into<String>,
        date: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            href: href.into(),
            date: date.into(),
            version: version.into(),
        }
    }

    /// The copied selection
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The source location identifier
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The copy timestamp as stored
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The schema version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether this record was written with [`SCHEMA_VERSION`]
    pub fn is_current_version(&self) -> bool {
        self.version == SCHEMA_VERSION
    }

    /// Parse the stored date, if it is a valid RFC 3339 timestamp
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
