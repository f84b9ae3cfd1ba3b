//! Copymark Codec
//!
//! Hides a provenance record inside copied text as invisible marker
//! characters, and recovers it from wherever that text is pasted.
//!
//! # Architecture
//!
//! ```text
//! copy:    record → envelope (JSON) → bit codec → markers → embedder → clipboard text
//! detect:  text → scanner → runs → bit codec → envelope → validator → records
//! ```
//!
//! # Components
//!
//! - **Bit codec** ([`MarkerCodec`], [`BitCodec`]): bytes to markers and back
//! - **Envelope** ([`envelope`]): record to compact JSON and back
//! - **Validator** ([`RecordValidator`]): four-field schema check
//! - **Embedder** ([`Embedder`]): splices markers at the host's midpoint
//! - **Scanner** ([`Scanner`]): finds every maximal marker run
//! - **Recovery** ([`Recoverer`]): scan, decode, parse, validate; skip failures
//!
//! # Example Usage
//!
//! ```
//! use copymark_codec::{Copymark, CopyEvent};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let copymark = Copymark::default_config();
//!
//! // On copy: splice provenance into the selection
//! let event = CopyEvent::new("hello world", "https://example.com/novel");
//! let payload = copymark.on_copy(&event)?.expect("non-empty selection");
//!
//! // On paste: recover it
//! let records = copymark.recover(&payload.text);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].href(), "https://example.com/novel");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod bits;
mod clipboard;
mod config;
mod copymark;
mod embedder;
pub mod envelope;
mod error;
mod recovery;
mod scanner;
mod validator;

pub use bits::{decode_bits, encode_bits, BitCodec, MarkerCodec};
pub use clipboard::{ClipboardPayload, CopyEvent, PLAIN_TEXT};
pub use config::{CopymarkConfig, ValidationConfig};
pub use copymark::Copymark;
pub use embedder::{insertion_index, splice, Embedder};
pub use error::{CopymarkError, RejectionReason, Result};
pub use recovery::{Recoverer, RecoveryReport, SkippedRun};
pub use scanner::{MarkerRun, Scanner};
pub use validator::{validate_record, RecordValidator};

pub use copymark_domain::{Alphabet, ProvenanceRecord, SCHEMA_VERSION};
