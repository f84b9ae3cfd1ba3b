//! Marker alphabets - the invisible code points that carry payload bits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker for bit value 0 (zero-width space)
pub const ZERO: char = '\u{200B}';

/// Marker for bit value 1 (zero-width non-joiner)
pub const ONE: char = '\u{200C}';

const BINARY_SYMBOLS: [char; 2] = [ZERO, ONE];

const QUATERNARY_SYMBOLS: [char; 4] = [ZERO, ONE, '\u{200D}', '\u{2060}'];

/// Alphabet used to spell payload bytes as invisible characters
///
/// Both alphabets emit the most significant bits of each byte first:
/// - Binary: one marker per bit, eight markers per byte
/// - Quaternary: one marker per bit pair, four markers per byte
///
/// Encoder and decoder must agree on the alphabet; a run written in one
/// alphabet is not readable in the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Alphabet {
    /// U+200B = 0, U+200C = 1
    #[default]
    Binary,

    /// U+200B = 00, U+200C = 01, U+200D = 10, U+2060 = 11
    Quaternary,
}

impl Alphabet {
    /// The marker code points, indexed by the value they stand for
    pub fn symbols(&self) -> &'static [char] {
        match self {
            Alphabet::Binary => &BINARY_SYMBOLS,
            Alphabet::Quaternary => &QUATERNARY_SYMBOLS,
        }
    }

    /// Number of payload bits carried by one marker
    pub fn bits_per_symbol(&self) -> u32 {
        match self {
            Alphabet::Binary => 1,
            Alphabet::Quaternary => 2,
        }
    }

    /// Number of markers needed to spell one byte
    pub fn symbols_per_byte(&self) -> usize {
        (u8::BITS / self.bits_per_symbol()) as usize
    }

    /// Marker standing for `value`
    ///
    /// Only the low `bits_per_symbol` bits of `value` are used.
    pub fn symbol(&self, value: u8) -> char {
        let symbols = self.symbols();
        symbols[value as usize % symbols.len()]
    }

    /// Value carried by `symbol`, or `None` if it is not part of this alphabet
    pub fn value_of(&self, symbol: char) -> Option<u8> {
        self.symbols()
            .iter()
            .position(|&c| c == symbol)
            .map(|idx| idx as u8)
    }

    /// Check whether a character belongs to this alphabet
    pub fn contains(&self, c: char) -> bool {
        self.symbols().contains(&c)
    }

    /// Get the alphabet name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Alphabet::Binary => "binary",
            Alphabet::Quaternary => "quaternary",
        }
    }

    /// Parse an alphabet from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "binary" => Some(Alphabet::Binary),
            "quaternary" => Some(Alphabet::Quaternary),
            _ => None,
        }
    }
}

impl std::str::FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid alphabet: {}", s))
    }
}

impl TryFrom<String> for Alphabet {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
