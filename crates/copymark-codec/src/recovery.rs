//! Detect-and-recover pipeline
//!
//! ```text
//! text → Scanner → runs → MarkerCodec::decode → UTF-8 → envelope → validator → records
//! ```
//!
//! Each run is processed on its own. A failure at any stage drops that run
//! and the pipeline moves on to the next one.

use crate::bits::MarkerCodec;
use crate::envelope;
use crate::error::{CopymarkError, Result};
use crate::scanner::Scanner;
use crate::validator::RecordValidator;
use copymark_domain::ProvenanceRecord;
use tracing::{debug, warn};

/// A marker run that did not yield a record
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRun {
    /// Byte offset of the run in the scanned text
    pub start: usize,
    /// Byte offset one past the run
    pub end: usize,
    /// Why the run was dropped
    pub error: CopymarkError,
}

/// Outcome of scanning one text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecoveryReport {
    /// Records recovered, in scan order
    pub records: Vec<ProvenanceRecord>,
    /// Runs that were dropped, in scan order
    pub skipped: Vec<SkippedRun>,
}

impl RecoveryReport {
    /// Total number of marker runs seen
    pub fn runs_scanned(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    /// Whether no marker runs were found at all
    pub fn is_empty(&self) -> bool {
        self.runs_scanned() == 0
    }
}

/// Recovers provenance records from arbitrary text
#[derive(Debug, Clone)]
pub struct Recoverer<C> {
    codec: C,
    scanner: Scanner,
    validator: RecordValidator,
    log_skipped_runs: bool,
}

impl<C: MarkerCodec> Recoverer<C> {
    /// Create a recoverer that scans for the codec's alphabet
    pub fn new(codec: C, validator: RecordValidator) -> Self {
        Self {
            scanner: Scanner::new(codec.alphabet()),
            codec,
            validator,
            log_skipped_runs: true,
        }
    }

    /// Turn per-run warnings on or off
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_skipped_runs = enabled;
        self
    }

    /// The scanner used to locate runs
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Decode a single marker run into a validated record
    pub fn decode_run(&self, markers: &str) -> Result<ProvenanceRecord> {
        let bytes = self.codec.decode(markers)?;
        let json = String::from_utf8(bytes)?;
        let candidate = envelope::deserialize(&json)?;
        Ok(self.validator.validate(&candidate)?)
    }

    /// Recover every valid record, reporting each dropped run
    pub fn recover_report(&self, text: &str) -> RecoveryReport {
        let mut report = RecoveryReport::default();

        for run in self.scanner.scan(text) {
            match self.decode_run(run.markers) {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    if self.log_skipped_runs {
                        warn!(
                            start = run.start,
                            end = run.end,
                            kind = error.kind(),
                            "Skipping marker run: {}",
                            error
                        );
                    }
                    report.skipped.push(SkippedRun {
                        start: run.start,
                        end: run.end,
                        error,
                    });
                }
            }
        }

        debug!(
            recovered = report.records.len(),
            skipped = report.skipped.len(),
            "Marker scan complete"
        );
        report
    }

    /// Recover every valid record, in scan order
    pub fn recover(&self, text: &str) -> Vec<ProvenanceRecord> {
        self.recover_report(text).records
    }
}
