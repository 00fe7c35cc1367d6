//! The editor state the preview is computed from.
//!
//! The host editor owns the real buffer; this module only carries a snapshot of
//! its text, the cursor and the language id, passed explicitly to every call.

pub mod active_document {
    use std::ops::Range;

    /// Identifies a document across editor events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DocumentId(pub u64);

    /// Immutable snapshot of the document under the cursor.
    ///
    /// `cursor` is a byte offset into `text`, clamped to `text.len()`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ActiveDocument {
        pub id: DocumentId,
        pub language_id: String,
        pub text: String,
        pub cursor: usize,
    }

    impl ActiveDocument {
        pub fn new(
            id: DocumentId,
            language_id: impl Into<String>,
            text: impl Into<String>,
            cursor: usize,
        ) -> Self {
            let text = text.into();
            let cursor = cursor.min(text.len());
            ActiveDocument {
                id,
                language_id: language_id.into(),
                text,
                cursor,
            }
        }

        /// Replace the cursor, clamping it to the end of the text.
        pub fn with_cursor(mut self, cursor: usize) -> Self {
            self.cursor = cursor.min(self.text.len());
            self
        }
    }

    /// Byte offset of the `chars`-th character, or the text length past the end.
    pub fn char_offset_to_byte(text: &str, chars: usize) -> usize {
        text.char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    }

    /// Byte offset for a UTF-16 code unit offset, as reported by most editors.
    ///
    /// An offset that lands inside a surrogate pair resolves to the start of the
    /// following character.
    pub fn utf16_offset_to_byte(text: &str, units: usize) -> usize {
        let mut seen = 0;
        for (i, ch) in text.char_indices() {
            if seen >= units {
                return i;
            }
            seen += ch.len_utf16();
        }
        text.len()
    }

    /// UTF-16 code unit offset for a byte offset, the inverse of
    /// [`utf16_offset_to_byte`]. A byte inside a character counts that
    /// whole character.
    pub fn byte_offset_to_utf16(text: &str, byte: usize) -> usize {
        text.char_indices()
            .take_while(|&(i, _)| i < byte)
            .map(|(_, ch)| ch.len_utf16())
            .sum()
    }

    /// Convert a byte range (as produced by the rule locator) to UTF-16 units
    /// for hosts that decorate in editor coordinates.
    pub fn byte_range_to_utf16(text: &str, range: Range<usize>) -> Range<usize> {
        byte_offset_to_utf16(text, range.start)..byte_offset_to_utf16(text, range.end)
    }

    /// Byte offset for a 1-based line and 1-based character column.
    ///
    /// Columns past the end of a line stop at the line break; lines past the end
    /// of the text resolve to the text length. Zero is treated as one.
    pub fn line_column_to_byte(text: &str, line: usize, column: usize) -> usize {
        let line = line.max(1);
        let column = column.max(1);

        let mut line_start = 0;
        for _ in 1..line {
            match text[line_start..].find('\n') {
                Some(pos) => line_start += pos + 1,
                None => return text.len(),
            }
        }

        let line_end = text[line_start..]
            .find('\n')
            .map(|pos| line_start + pos)
            .unwrap_or(text.len());
        let line_text = &text[line_start..line_end];
        line_start + char_offset_to_byte(line_text, column - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::active_document::*;

    #[test]
    fn test_cursor_is_clamped() {
        let doc = ActiveDocument::new(DocumentId(1), "css", "a{}", 99);
        assert_eq!(doc.cursor, 3);
        assert_eq!(doc.with_cursor(1).cursor, 1);
    }

    #[test]
    fn test_char_offsets_skip_multibyte() {
        let text = "é{x}";
        assert_eq!(char_offset_to_byte(text, 0), 0);
        assert_eq!(char_offset_to_byte(text, 1), 2);
        assert_eq!(char_offset_to_byte(text, 10), text.len());
    }

    #[test]
    fn test_utf16_offsets_count_surrogate_pairs() {
        // U+1F600 takes two UTF-16 units and four bytes.
        let text = "\u{1F600}a{b}";
        assert_eq!(utf16_offset_to_byte(text, 2), 4);
        assert_eq!(utf16_offset_to_byte(text, 3), 5);
        assert_eq!(utf16_offset_to_byte(text, 1), 4);
        assert_eq!(utf16_offset_to_byte(text, 50), text.len());
    }

    #[test]
    fn test_byte_to_utf16_round_trip() {
        let text = "/* \u{1F600} é */ a{b}";
        let brace = text.find('{').unwrap();
        let units = byte_offset_to_utf16(text, brace);
        assert_eq!(units, text[..brace].encode_utf16().count());
        assert_eq!(utf16_offset_to_byte(text, units), brace);
        assert_eq!(byte_offset_to_utf16(text, 999), text.encode_utf16().count());
    }

    #[test]
    fn test_byte_range_to_utf16() {
        // "é" is two bytes but one UTF-16 unit.
        let text = "é{x}";
        assert_eq!(byte_range_to_utf16(text, 0..5), 0..4);
        assert_eq!(byte_range_to_utf16(text, 2..3), 1..2);
    }

    #[test]
    fn test_line_column() {
        let text = "a {\n  color: red;\n}";
        assert_eq!(line_column_to_byte(text, 1, 1), 0);
        assert_eq!(line_column_to_byte(text, 2, 3), 6);
        assert_eq!(&text[line_column_to_byte(text, 2, 3)..][..5], "color");
        assert_eq!(line_column_to_byte(text, 2, 100), 17);
        assert_eq!(line_column_to_byte(text, 9, 1), text.len());
    }
}
