//! Embedder - splice marker text into visible host text

use crate::bits::MarkerCodec;

/// Splices an encoded payload into the middle of host text
#[derive(Debug, Clone, Default)]
pub struct Embedder<C> {
    codec: C,
}

impl<C: MarkerCodec> Embedder<C> {
    /// Create an embedder that encodes with `codec`
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// The codec used to encode hidden payloads
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encode `hidden` and splice the markers into `host`
    ///
    /// The markers go at `floor(n / 2)` where `n` is the number of characters
    /// in `host`. An empty host yields the markers alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use copymark_codec::{BitCodec, Embedder};
    ///
    /// let embedder = Embedder::new(BitCodec::binary());
    /// let combined = embedder.embed("hello world", "x");
    /// assert!(combined.starts_with("hello"));
    /// assert!(combined.ends_with(" world"));
    /// ```
    pub fn embed(&self, host: &str, hidden: &str) -> String {
        let markers = self.codec.encode(hidden.as_bytes());
        splice(host, &markers)
    }
}

/// Character index where markers are inserted into `host`
pub fn insertion_index(host: &str) -> usize {
    host.chars().count() / 2
}

/// Insert `markers` into `host` at [`insertion_index`]
pub fn splice(host: &str, markers: &str) -> String {
    let offset = host
        .char_indices()
        .nth(insertion_index(host))
        .map(|(offset, _)| offset)
        .unwrap_or(host.len());

    let (head, tail) = host.split_at(offset);
    let mut combined = String::with_capacity(host.len() + markers.len());
    combined.push_str(head);
    combined.push_str(markers);
    combined.push_str(tail);
    combined
}
