//! Copymark Domain Layer
//!
//! This crate holds the core vocabulary shared by every other Copymark crate:
//! the provenance record that travels inside copied text, the fixed schema
//! version, and the invisible marker alphabets the record is encoded with.
//!
//! ## Key Concepts
//!
//! - **Provenance Record**: where and when a piece of text was copied
//!   (`original`, `href`, `date`, `version`)
//! - **Alphabet**: the fixed table of invisible code points used as markers
//! - **Marker Sequence**: a record's serialized bytes spelled in that alphabet
//!
//! ## Architecture
//!
//! - No I/O, no global state
//! - Records are immutable once constructed
//! - Encoding, scanning and validation live in `copymark-codec`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod record;

// Re-exports for convenience
pub use alphabet::{Alphabet, ONE, ZERO};
pub use record::{format_timestamp, ProvenanceRecord, SCHEMA_VERSION};
