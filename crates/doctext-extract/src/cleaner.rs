use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation kept by the cleaner in addition to word characters and whitespace.
pub const KEPT_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '(', ')', '-'];

static UNICODE_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}_\s.,;:!?()-]+").unwrap());

static ASCII_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\s.,;:!?()-]+").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Which characters count as "word characters" when stripping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharClass {
    /// Alphabetic and numeric characters plus `_` (`char::is_alphanumeric`).
    ///
    /// This keeps `²` and `½` but drops combining marks such as U+0301, so
    /// decomposed `cafe\u{0301}` cleans to `cafe`. Precomposed letters are
    /// unaffected.
    #[default]
    Unicode,
    /// `[0-9A-Za-z_]` only. Accented and non-Latin letters are removed.
    Ascii,
}

/// Whitespace and character normalizer applied to every extractor's output.
///
/// The result is a single line: no leading/trailing whitespace, no two
/// consecutive whitespace characters, and nothing but word characters,
/// ASCII spaces and [`KEPT_PUNCTUATION`]. Cleaning is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cleaner {
    char_class: CharClass,
}

impl Cleaner {
    pub fn new(char_class: CharClass) -> Self {
        Self { char_class }
    }

    pub fn clean(&self, text: &str) -> String {
        let strip = match self.char_class {
            CharClass::Unicode => &*UNICODE_STRIP_RE,
            CharClass::Ascii => &*ASCII_STRIP_RE,
        };

        // Strip before collapsing: removing a symbol between two spaces
        // must not leave a double space behind.
        let stripped = strip.replace_all(text, "");
        let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
        collapsed.trim().to_string()
    }
}

/// Clean `text` with the default (Unicode) word-character class.
pub fn clean_text(text: &str) -> String {
    Cleaner::default().clean(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Hello,   World!\n\nThis is   a test.",
        "  leading and trailing \t\n",
        "a @ b # c",
        "price: $5 (approx) — 10% off!",
        "Zürich, Ελλάδα and 東京; naïve café?",
        "tabs\tand\r\nwindows\u{00A0}nbsp\u{2003}em-space",
        "\u{FEFF}bom-prefixed line",
        "emoji 🎉 party 🎉 time",
        "",
        "   \n\t  ",
        "@#$%^&*",
        "under_score snake_case 123-456",
        "cafe\u{0301} x\u{00B2} \u{00BD}",
        "x² ½ ‿joined",
    ];

    fn allowed(c: char, class: CharClass) -> bool {
        let word = match class {
            CharClass::Unicode => c.is_alphanumeric() || c == '_',
            CharClass::Ascii => c.is_ascii_alphanumeric() || c == '_',
        };
        word || c == ' ' || KEPT_PUNCTUATION.contains(&c)
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(
            clean_text("Hello,   World!\n\nThis is   a test."),
            "Hello, World! This is a test."
        );
    }

    #[test]
    fn test_paragraph_lines_join_with_single_space() {
        assert_eq!(clean_text("A\nB\nC\n"), "A B C");
    }

    #[test]
    fn test_removed_symbol_between_spaces_leaves_one_space() {
        assert_eq!(clean_text("a @ b # c"), "a b c");
        assert_eq!(clean_text("emoji 🎉 party"), "emoji party");
    }

    #[test]
    fn test_kept_punctuation() {
        assert_eq!(
            clean_text("a. b, c; d: e! f? (g) h-i"),
            "a. b, c; d: e! f? (g) h-i"
        );
    }

    #[test]
    fn test_strips_symbols() {
        assert_eq!(clean_text("price: $5 [approx] 10% off"), "price: 5 approx 10 off");
        assert_eq!(clean_text("\"quoted\" 'single' /slash\\"), "quoted single slash");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t  "), "");
        assert_eq!(clean_text("@#$%^&*"), "");
    }

    #[test]
    fn test_unicode_letters_kept_by_default() {
        assert_eq!(
            clean_text("Zürich, Ελλάδα and 東京; naïve café?"),
            "Zürich, Ελλάδα and 東京; naïve café?"
        );
    }

    #[test]
    fn test_ascii_class_strips_non_ascii_letters() {
        let cleaner = Cleaner::new(CharClass::Ascii);
        assert_eq!(cleaner.clean("naïve café in Zürich"), "nave caf in Zrich");
        assert_eq!(cleaner.clean("東京 Tokyo"), "Tokyo");
    }

    #[test]
    fn test_numeric_kept_combining_marks_dropped() {
        assert_eq!(clean_text("cafe\u{0301} x\u{00B2} \u{00BD}"), "cafe x\u{00B2} \u{00BD}");
        assert_eq!(clean_text("a\u{203F}b"), "ab");
        assert_eq!(Cleaner::new(CharClass::Ascii).clean("x² ½"), "x");
    }

    #[test]
    fn test_unicode_whitespace_collapses_to_ascii_space() {
        assert_eq!(
            clean_text("a\u{00A0}b\u{2003}c\r\nd"),
            "a b c d"
        );
    }

    #[test]
    fn test_idempotent() {
        for class in [CharClass::Unicode, CharClass::Ascii] {
            let cleaner = Cleaner::new(class);
            for sample in SAMPLES {
                let once = cleaner.clean(sample);
                assert_eq!(cleaner.clean(&once), once, "not idempotent for {:?}", sample);
            }
        }
    }

    #[test]
    fn test_whitespace_law() {
        for class in [CharClass::Unicode, CharClass::Ascii] {
            let cleaner = Cleaner::new(class);
            for sample in SAMPLES {
                let out = cleaner.clean(sample);
                assert_eq!(out.trim(), out, "untrimmed output for {:?}", sample);
                assert!(!out.contains("  "), "double space for {:?}", sample);
                assert!(
                    out.chars().all(|c| !c.is_whitespace() || c == ' '),
                    "non-space whitespace for {:?}",
                    sample
                );
            }
        }
    }

    #[test]
    fn test_character_law() {
        for class in [CharClass::Unicode, CharClass::Ascii] {
            let cleaner = Cleaner::new(class);
            for sample in SAMPLES {
                let out = cleaner.clean(sample);
                for c in out.chars() {
                    assert!(allowed(c, class), "{:?} survived cleaning {:?}", c, sample);
                }
            }
        }
    }
}
