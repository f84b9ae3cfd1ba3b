//! Bit codec - payload bytes to and from invisible marker text

use crate::error::{CopymarkError, Result};
use copymark_domain::Alphabet;

/// Trait for spelling payload bytes as marker characters
///
/// Callers depend on this trait rather than on [`BitCodec`] so another
/// backend can be linked without touching the embedder or the pipeline.
pub trait MarkerCodec {
    /// Alphabet the markers are drawn from
    fn alphabet(&self) -> Alphabet;

    /// Spell `payload` as markers, most significant bits of each byte first
    ///
    /// Total over all inputs; the empty payload encodes to the empty string.
    fn encode(&self, payload: &[u8]) -> String;

    /// Read a marker sequence back into bytes
    ///
    /// # Errors
    /// - [`CopymarkError::UnknownSymbol`] if a character is not in the alphabet
    /// - [`CopymarkError::MalformedSequence`] if the marker count does not
    ///   split into whole bytes
    fn decode(&self, markers: &str) -> Result<Vec<u8>>;
}

/// Fixed-width codec over an [`Alphabet`]
///
/// Each byte becomes `alphabet.symbols_per_byte()` markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitCodec {
    alphabet: Alphabet,
}

impl BitCodec {
    /// Create a codec for the given alphabet
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// One marker per bit (U+200B / U+200C)
    pub fn binary() -> Self {
        Self::new(Alphabet::Binary)
    }

    /// One marker per bit pair
    pub fn quaternary() -> Self {
        Self::new(Alphabet::Quaternary)
    }

    fn push_byte(&self, byte: u8, out: &mut String) {
        let bits = self.alphabet.bits_per_symbol();
        let mask = (1u8 << bits) - 1;
        for slot in (0..self.alphabet.symbols_per_byte() as u32).rev() {
            out.push(self.alphabet.symbol((byte >> (slot * bits)) & mask));
        }
    }
}

impl MarkerCodec for BitCodec {
    fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    fn encode(&self, payload: &[u8]) -> String {
        // Every marker is a three-byte UTF-8 sequence
        let mut out = String::with_capacity(payload.len() * self.alphabet.symbols_per_byte() * 3);
        for &byte in payload {
            self.push_byte(byte, &mut out);
        }
        out
    }

    fn decode(&self, markers: &str) -> Result<Vec<u8>> {
        let values = markers
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.alphabet
                    .value_of(symbol)
                    .ok_or(CopymarkError::UnknownSymbol { symbol, position })
            })
            .collect::<Result<Vec<u8>>>()?;

        let unit = self.alphabet.symbols_per_byte();
        if values.len() % unit != 0 {
            return Err(CopymarkError::MalformedSequence {
                length: values.len(),
                unit,
            });
        }

        let bits = self.alphabet.bits_per_symbol();
        Ok(values
            .chunks_exact(unit)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &value| (acc << bits) | value))
            .collect())
    }
}

/// Encode bytes with the binary alphabet
pub fn encode_bits(payload: &[u8]) -> String {
    BitCodec::binary().encode(payload)
}

/// Decode binary-alphabet markers into bytes
pub fn decode_bits(markers: &str) -> Result<Vec<u8>> {
    BitCodec::binary().decode(markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use copymark_domain::{ONE, ZERO};

    fn spell(symbols: &[char]) -> String {
        symbols.iter().collect()
    }

    #[test]
    fn test_encode_byte_msb_first() {
        // 'H' = 0x48 = 0100_1000
        let expected = spell(&[ZERO, ONE, ZERO, ZERO, ONE, ZERO, ZERO, ZERO]);
        assert_eq!(encode_bits(b"H"), expected);
    }

    #[test]
    fn test_encode_extremes() {
        assert_eq!(encode_bits(&[0x00]), spell(&[ZERO; 8]));
        assert_eq!(encode_bits(&[0xFF]), spell(&[ONE; 8]));
        assert_eq!(
            encode_bits(&[0xAA]),
            spell(&[ONE, ZERO, ONE, ZERO, ONE, ZERO, ONE, ZERO])
        );
    }

    #[test]
    fn test_encode_length_is_eight_per_byte() {
        let encoded = encode_bits(b"Hello World!");
        assert_eq!(encoded.chars().count(), 8 * 12);
        assert!(encoded.chars().all(|c| c == ZERO || c == ONE));
    }

    #[test]
    fn test_decode_hello_world() {
        let encoded = encode_bits(b"Hello World!");
        assert_eq!(decode_bits(&encoded).unwrap(), b"Hello World!");
    }

    #[test]
    fn test_decode_known_byte() {
        let markers = spell(&[ONE, ZERO, ONE, ZERO, ONE, ZERO, ONE, ZERO]);
        assert_eq!(decode_bits(&markers).unwrap(), vec![170]);
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(encode_bits(&[]), "");
        assert_eq!(decode_bits("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_partial_byte() {
        let markers = spell(&[ONE; 7]);
        assert_eq!(
            decode_bits(&markers),
            Err(CopymarkError::MalformedSequence { length: 7, unit: 8 })
        );
    }

    #[test]
    fn test_decode_rejects_foreign_symbol() {
        let mut symbols = vec![ZERO; 8];
        symbols.insert(3, 'x');
        let markers = spell(&symbols);
        assert_eq!(
            decode_bits(&markers),
            Err(CopymarkError::UnknownSymbol { symbol: 'x', position: 3 })
        );
    }

    #[test]
    fn test_binary_rejects_quaternary_only_symbol() {
        let markers = BitCodec::quaternary().encode(&[0xFF]);
        assert!(matches!(
            decode_bits(&markers),
            Err(CopymarkError::UnknownSymbol { position: 0, .. })
        ));
    }

    #[test]
    fn test_quaternary_encode() {
        // 'H' = 01 00 10 00
        let codec = BitCodec::quaternary();
        assert_eq!(codec.encode(b"H"), "\u{200C}\u{200B}\u{200D}\u{200B}");
        assert_eq!(codec.encode(&[0xFF]), "\u{2060}".repeat(4));
    }

    #[test]
    fn test_quaternary_round_trip() {
        let codec = BitCodec::quaternary();
        let encoded = codec.encode("Hello World!".as_bytes());
        assert_eq!(encoded.chars().count(), 4 * 12);
        assert_eq!(codec.decode(&encoded).unwrap(), b"Hello World!");
    }

    #[test]
    fn test_quaternary_unit_is_four() {
        let codec = BitCodec::quaternary();
        assert_eq!(
            codec.decode("\u{200B}\u{200B}\u{200B}"),
            Err(CopymarkError::MalformedSequence { length: 3, unit: 4 })
        );
    }

    #[test]
    fn test_codec_through_trait_object() {
        let codecs: Vec<Box<dyn MarkerCodec>> =
            vec![Box::new(BitCodec::binary()), Box::new(BitCodec::quaternary())];
        for codec in codecs {
            let encoded = codec.encode(b"trait");
            assert_eq!(codec.decode(&encoded).unwrap(), b"trait");
        }
    }
}
