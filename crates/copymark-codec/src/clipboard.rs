//! Copy-event types for the clipboard collaborator

use chrono::{DateTime, Utc};
use copymark_domain::ProvenanceRecord;

/// MIME type of the payload written to the clipboard
pub const PLAIN_TEXT: &str = "text/plain";

/// A copy action observed by the host application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEvent {
    /// The selected text
    pub selection: String,

    /// Location of the page or document the selection came from
    pub href: String,
}

impl CopyEvent {
    /// Create a copy event
    pub fn new(selection: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            href: href.into(),
        }
    }

    /// Build the provenance record for this event, stamped at `at`
    ///
    /// Returns `None` for an empty selection; nothing is embedded then and the
    /// host keeps its default copy behaviour.
    pub fn record_at(&self, at: DateTime<Utc>) -> Option<ProvenanceRecord> {
        if self.selection.is_empty() {
            return None;
        }
        Some(ProvenanceRecord::captured_at(
            self.selection.clone(),
            self.href.clone(),
            at,
        ))
    }
}

/// Content to place on the clipboard in place of the default copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    /// MIME type, always [`PLAIN_TEXT`]
    pub mime_type: &'static str,

    /// Selection with the provenance markers spliced in
    pub text: String,
}

impl ClipboardPayload {
    /// Wrap combined text as a plain-text payload
    pub fn plain_text(text: String) -> Self {
        Self {
            mime_type: PLAIN_TEXT,
            text,
        }
    }
}
