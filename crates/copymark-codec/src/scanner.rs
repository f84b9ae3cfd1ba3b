//! Scanner - find every run of marker characters in arbitrary text

use copymark_domain::Alphabet;
use regex::Regex;
use std::sync::LazyLock;

static BINARY_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{200B}\x{200C}]+").expect("binary marker pattern"));

static QUATERNARY_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{200B}\x{200C}\x{200D}\x{2060}]+").expect("quaternary marker pattern")
});

/// A maximal run of marker characters found by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRun<'a> {
    /// Byte offset of the first marker
    pub start: usize,
    /// Byte offset one past the last marker
    pub end: usize,
    /// The markers themselves
    pub markers: &'a str,
}

impl<'a> MarkerRun<'a> {
    /// Number of marker characters in the run
    pub fn len(&self) -> usize {
        self.markers.chars().count()
    }

    /// Whether the run holds no markers (never true for scanner output)
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Finds marker runs for one alphabet
#[derive(Debug, Clone)]
pub struct Scanner {
    alphabet: Alphabet,
    pattern: &'static Regex,
}

impl Scanner {
    /// Build a scanner matching runs of `alphabet` symbols
    pub fn new(alphabet: Alphabet) -> Self {
        let pattern = match alphabet {
            Alphabet::Binary => &*BINARY_RUN,
            Alphabet::Quaternary => &*QUATERNARY_RUN,
        };
        Self { alphabet, pattern }
    }

    /// The alphabet this scanner matches
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Every maximal marker run, left to right
    ///
    /// Returns an empty vector when the text carries no markers.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<MarkerRun<'a>> {
        self.pattern
            .find_iter(text)
            .map(|m| MarkerRun {
                start: m.start(),
                end: m.end(),
                markers: m.as_str(),
            })
            .collect()
    }

    /// Whether the text carries any marker at all
    pub fn contains_markers(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// The text with every marker removed
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copymark_domain::{ONE, ZERO};

    fn binary() -> Scanner {
        Scanner::new(Alphabet::Binary)
    }

    #[test]
    fn test_no_markers_no_runs() {
        let scanner = binary();
        assert!(scanner.scan("plain text").is_empty());
        assert!(scanner.scan("").is_empty());
        assert!(!scanner.contains_markers("plain text"));
    }

    #[test]
    fn test_single_run_with_span() {
        let scanner = binary();
        let text = format!("ab{}{}{}cd", ZERO, ONE, ZERO);
        let runs = scanner.scan(&text);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].start, 2);
        assert_eq!(runs[0].end, 2 + 9);
        assert_eq!(runs[0].markers, format!("{}{}{}", ZERO, ONE, ZERO));
        assert_eq!(runs[0].len(), 3);
    }

    #[test]
    fn test_finds_every_run_in_order() {
        let scanner = binary();
        let text = format!("{}a{}{}b{}", ONE, ZERO, ZERO, ONE);
        let runs: Vec<&str> = scanner.scan(&text).iter().map(|r| r.markers).collect();
        assert_eq!(
            runs,
            vec![ONE.to_string(), format!("{}{}", ZERO, ZERO), ONE.to_string()]
        );
    }

    #[test]
    fn test_other_invisibles_split_runs() {
        // U+200D is not in the binary alphabet
        let scanner = binary();
        let text = format!("{}\u{200D}{}", ZERO, ONE);
        assert_eq!(scanner.scan(&text).len(), 2);
    }

    #[test]
    fn test_quaternary_matches_all_four() {
        let scanner = Scanner::new(Alphabet::Quaternary);
        let text = "x\u{200B}\u{200C}\u{200D}\u{2060}y";
        let runs = scanner.scan(text);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 4);
    }

    #[test]
    fn test_pattern_covers_exactly_the_alphabet() {
        for alphabet in [Alphabet::Binary, Alphabet::Quaternary] {
            let scanner = Scanner::new(alphabet);
            for &symbol in alphabet.symbols() {
                assert!(scanner.contains_markers(&symbol.to_string()));
            }
            assert!(!scanner.contains_markers("\u{FEFF}\u{00AD}abc"));
        }
        assert!(!Scanner::new(Alphabet::Binary).contains_markers("\u{200D}\u{2060}"));
    }

    #[test]
    fn test_strip_leaves_visible_text() {
        let scanner = binary();
        let text = format!("he{}llo{}", ZERO, ONE);
        assert_eq!(scanner.strip(&text), "hello");
    }
}
