//! Sentence and line delimiter classification.
//!
//! The sets are fixed: ASCII terminal punctuation, their CJK full-width
//! counterparts, and every line break code point the editor recognizes.
//! Nothing here knows about abbreviations or grammar.

use bitflags::bitflags;

/// Line break code points: LF, CR, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR.
pub const LINE_DELIMITERS: &[char] = &['\n', '\r', '\u{0085}', '\u{2028}', '\u{2029}'];

/// Characters that end (or separate) a sentence.
///
/// A superset of [`LINE_DELIMITERS`].
pub const SENTENCE_DELIMITERS: &[char] = &[
    '.', '!', '?', ':', ';', // ASCII
    '。', '．', '：', '；', // CJK full-width
    '\n', '\r', '\u{0085}', '\u{2028}', '\u{2029}',
];

bitflags! {
    /// Classification of a single character for boundary scans.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        /// Member of [`SENTENCE_DELIMITERS`].
        const SENTENCE = 0b0000_0001;
        /// Member of [`LINE_DELIMITERS`].
        const LINE = 0b0000_0010;
        /// `char::is_whitespace`.
        const WHITESPACE = 0b0000_0100;
    }
}

impl CharClass {
    /// Classify a character.
    #[must_use]
    pub fn of(ch: char) -> Self {
        let mut class = Self::empty();
        if is_sentence_delimiter(ch) {
            class |= Self::SENTENCE;
        }
        if is_line_delimiter(ch) {
            class |= Self::LINE;
        }
        if ch.is_whitespace() {
            class |= Self::WHITESPACE;
        }
        class
    }

    /// A character that counts as sentence content: neither a delimiter nor
    /// whitespace.
    #[must_use]
    pub fn is_content(self) -> bool {
        self.is_empty()
    }

    /// Whitespace that does not also delimit a sentence (spaces, tabs, ...).
    #[must_use]
    pub fn is_blank(self) -> bool {
        self.contains(Self::WHITESPACE) && !self.contains(Self::SENTENCE)
    }

    /// Terminal punctuation, i.e. a sentence delimiter that is not a line break.
    #[must_use]
    pub fn is_punctuation(self) -> bool {
        self.contains(Self::SENTENCE) && !self.contains(Self::LINE)
    }
}

/// Check whether `ch` ends a sentence.
#[must_use]
pub fn is_sentence_delimiter(ch: char) -> bool {
    SENTENCE_DELIMITERS.contains(&ch)
}

/// Check whether `ch` is a line break.
#[must_use]
pub fn is_line_delimiter(ch: char) -> bool {
    LINE_DELIMITERS.contains(&ch)
}
