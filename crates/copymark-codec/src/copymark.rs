//! The Copymark facade - one configured entry point for embed and recover

use crate::bits::{BitCodec, MarkerCodec};
use crate::clipboard::{ClipboardPayload, CopyEvent};
use crate::config::CopymarkConfig;
use crate::embedder::Embedder;
use crate::envelope;
use crate::error::{RejectionReason, Result};
use crate::recovery::{Recoverer, RecoveryReport};
use crate::scanner::MarkerRun;
use crate::validator::RecordValidator;
use chrono::{DateTime, Utc};
use copymark_domain::{Alphabet, ProvenanceRecord};
use serde_json::Value;
use tracing::debug;

/// Embeds provenance into copied text and recovers it from pasted text
///
/// Holds no state besides its configuration; every call is independent.
#[derive(Debug, Clone)]
pub struct Copymark {
    config: CopymarkConfig,
    embedder: Embedder<BitCodec>,
    recoverer: Recoverer<BitCodec>,
    validator: RecordValidator,
}

impl Copymark {
    /// Create a Copymark instance from a configuration
    pub fn new(config: CopymarkConfig) -> Self {
        let codec = BitCodec::new(config.alphabet);
        let validator = RecordValidator::new(config.validation.clone());
        let recoverer =
            Recoverer::new(codec, validator.clone()).with_logging(config.log_skipped_runs);

        Self {
            embedder: Embedder::new(codec),
            recoverer,
            validator,
            config,
        }
    }

    /// Create a Copymark instance with default configuration
    pub fn default_config() -> Self {
        Self::new(CopymarkConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &CopymarkConfig {
        &self.config
    }

    /// The marker alphabet in use
    pub fn alphabet(&self) -> Alphabet {
        self.config.alphabet
    }

    /// Spell bytes as markers
    pub fn encode_bits(&self, payload: &[u8]) -> String {
        self.embedder.codec().encode(payload)
    }

    /// Read markers back into bytes
    pub fn decode_bits(&self, markers: &str) -> Result<Vec<u8>> {
        self.embedder.codec().decode(markers)
    }

    /// Splice `hidden` into `host` as markers
    pub fn embed(&self, host: &str, hidden: &str) -> String {
        self.embedder.embed(host, hidden)
    }

    /// Serialize `record` and splice it into `host`
    ///
    /// Fails with [`ValidationRejected`](crate::CopymarkError::ValidationRejected)
    /// for a record this instance would not recover, e.g. an empty `original`.
    pub fn embed_record(&self, host: &str, record: &ProvenanceRecord) -> Result<String> {
        self.validator.validate(&serde_json::to_value(record)?)?;
        let json = envelope::serialize(record)?;
        Ok(self.embed(host, &json))
    }

    /// Every marker run in `text`, left to right
    pub fn scan<'a>(&self, text: &'a str) -> Vec<MarkerRun<'a>> {
        self.recoverer.scanner().scan(text)
    }

    /// Every valid record hidden in `text`, in scan order
    pub fn recover(&self, text: &str) -> Vec<ProvenanceRecord> {
        self.recoverer.recover(text)
    }

    /// Like [`recover`](Self::recover), also listing every dropped run
    pub fn recover_report(&self, text: &str) -> RecoveryReport {
        self.recoverer.recover_report(text)
    }

    /// Check a decoded candidate against the record schema
    pub fn validate_record(
        &self,
        candidate: &Value,
    ) -> std::result::Result<ProvenanceRecord, RejectionReason> {
        self.validator.validate(candidate)
    }

    /// `text` with every marker of the active alphabet removed
    pub fn strip_markers(&self, text: &str) -> String {
        self.recoverer.scanner().strip(text)
    }

    /// Build the clipboard payload for a copy event, stamped now
    pub fn on_copy(&self, event: &CopyEvent) -> Result<Option<ClipboardPayload>> {
        self.on_copy_at(event, Utc::now())
    }

    /// Build the clipboard payload for a copy event, stamped at `at`
    ///
    /// Markers already present in the selection are dropped first, so text
    /// re-copied from an earlier paste carries one fresh record instead of a
    /// fused, unreadable run. The recorded `original` is the visible text.
    ///
    /// Returns `Ok(None)` when the selection has no visible text.
    pub fn on_copy_at(
        &self,
        event: &CopyEvent,
        at: DateTime<Utc>,
    ) -> Result<Option<ClipboardPayload>> {
        let visible = CopyEvent::new(self.strip_markers(&event.selection), event.href.clone());
        let Some(record) = visible.record_at(at) else {
            return Ok(None);
        };

        let text = self.embed_record(&visible.selection, &record)?;
        debug!(
            href = %event.href,
            date = record.date(),
            markers = text.chars().count() - visible.selection.chars().count(),
            "Embedded provenance into copy"
        );
        Ok(Some(ClipboardPayload::plain_text(text)))
    }
}

impl Default for Copymark {
    fn default() -> Self {
        Self::default_config()
    }
}
