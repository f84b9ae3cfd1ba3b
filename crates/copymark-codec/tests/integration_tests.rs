//! Integration tests for copymark-codec
//!
//! These tests run the full copy → paste → detect cycle through the public API.

use copymark_codec::envelope::{deserialize, serialize};
use copymark_codec::{
    decode_bits, encode_bits, validate_record, Copymark, CopymarkConfig, CopymarkError, CopyEvent,
    ProvenanceRecord, RejectionReason,
};
use serde_json::json;

fn record(original: &str, href: &str) -> ProvenanceRecord {
    ProvenanceRecord::new(original, href, "2024-01-01T00:00:00.000Z")
}

#[test]
fn test_hello_world_scenario() {
    let copymark = Copymark::default_config();
    let rec = record("hello world", "https://x/y");

    let json = serialize(&rec).unwrap();
    let combined = copymark.embed("hello world", &json);
    let markers = encode_bits(json.as_bytes());

    // floor(11 / 2) = 5
    assert_eq!(combined, format!("hello{} world", markers));
    assert_eq!(markers.chars().count(), 8 * json.len());

    let recovered = copymark.recover(&combined);
    assert_eq!(recovered, vec![rec]);
}

#[test]
fn test_envelope_round_trip() {
    let rec = record("ünïcødé ✓ text", "file:///tmp/notes.txt");
    let json = serialize(&rec).unwrap();
    let value = deserialize(&json).unwrap();
    assert_eq!(validate_record(&value).unwrap(), rec);
}

#[test]
fn test_bits_round_trip_including_empty() {
    let payloads: [&[u8]; 4] = [b"", b"a", b"Hello World!", &[0, 255, 128, 1]];
    for payload in payloads {
        assert_eq!(decode_bits(&encode_bits(payload)).unwrap(), payload);
    }
}

#[test]
fn test_text_without_markers_yields_nothing() {
    let copymark = Copymark::default_config();
    for text in ["", "plain", "日本語のテキスト", "tabs\tand\nnewlines"] {
        assert!(copymark.recover(text).is_empty());
    }
}

#[test]
fn test_two_copy_events_recovered_in_order() {
    let copymark = Copymark::default_config();
    let first = record("first passage", "https://a/1");
    let second = record("second passage", "https://b/2");

    let pasted = format!(
        "{}\n\n{}",
        copymark.embed_record("first passage", &first).unwrap(),
        copymark.embed_record("second passage", &second).unwrap()
    );

    assert_eq!(copymark.recover(&pasted), vec![first, second]);
}

#[test]
fn test_malformed_run_does_not_stop_later_runs() {
    let copymark = Copymark::default_config();
    let good = record("kept", "https://x/y");

    // Twelve markers: one and a half bytes
    let broken = "\u{200C}".repeat(12);
    let pasted = format!(
        "before {} after {}",
        broken,
        copymark.embed_record("kept", &good).unwrap()
    );

    let report = copymark.recover_report(&pasted);
    assert_eq!(report.records, vec![good]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        report.skipped[0].error,
        CopymarkError::MalformedSequence { length: 12, unit: 8 }
    );
}

#[test]
fn test_record_missing_date_is_rejected() {
    let candidate = json!({
        "original": "hello world",
        "href": "https://x/y",
        "version": "1.0.0"
    });
    assert_eq!(
        validate_record(&candidate),
        Err(RejectionReason::MissingField("date"))
    );

    let copymark = Copymark::default_config();
    let pasted = copymark.embed("host text", &candidate.to_string());
    assert!(copymark.recover(&pasted).is_empty());
}

#[test]
fn test_partial_recopy_keeps_markers() {
    let copymark = Copymark::default_config();
    let rec = record("a longer passage of copied text", "https://x/y");
    let combined = copymark.embed_record(rec.original(), &rec).unwrap();

    // Re-copy drops a few visible characters from each end
    let chars: Vec<char> = combined.chars().collect();
    let recopied: String = chars[4..chars.len() - 4].iter().collect();

    assert_eq!(copymark.recover(&recopied), vec![rec]);
}

#[test]
fn test_copy_event_round_trip_with_compact_alphabet() {
    let copymark = Copymark::new(CopymarkConfig::compact());
    let event = CopyEvent::new("メロスは激怒した。", "https://example.com/merosu");

    let payload = copymark.on_copy(&event).unwrap().unwrap();
    let records = copymark.recover(&payload.text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].original(), "メロスは激怒した。");
    assert_eq!(records[0].href(), "https://example.com/merosu");
    assert!(records[0].timestamp().is_some());
    assert!(records[0].is_current_version());
}

#[test]
fn test_config_from_toml_drives_instance() {
    let config = CopymarkConfig::from_toml(
        r#"
        alphabet = "quaternary"
        log_skipped_runs = false
        "#,
    )
    .unwrap();
    let copymark = Copymark::new(config);
    let rec = record("hello world", "https://x/y");
    let combined = copymark.embed_record("hello world", &rec).unwrap();

    assert!(combined.contains('\u{200D}') || combined.contains('\u{2060}'));
    assert_eq!(copymark.recover(&combined), vec![rec]);
}
