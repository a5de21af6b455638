// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalisation used while recognising the document structure.
// The original bytes stay in Document::raw, and fenced code is
// taken from the uncleaned lines, so nothing done here can leak
// into identity output or into a SQL example.
//
// Files edited on different machines often carry:
//   - A byte order mark (U+FEFF) at the start
//   - Windows line endings (\r\n) or old Mac ones (\r)
//   - Non-breaking spaces (U+00A0) pasted from a browser
//   - Zero-width spaces (U+200B)
//   - Trailing spaces left by editors
//
// Left alone, a heading like "##\u{00A0}Joins" or a fence line
// ending in "```\r" would not be recognised.
//
// Two passes:
//   1. normalise_line_endings — whole text: leading BOM, \r\n and \r
//   2. clean_line             — one line of non-code text: odd
//                               spaces, control chars, trailing space
//
// Neither pass changes the number of lines, so line numbers
// reported for headings and fences still match the source file.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Drop a leading byte order mark and turn every line ending into `\n`.
    /// This is the only change applied to lines inside code fences.
    pub fn normalise_line_endings(&self, text: &str) -> String {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Clean one line of prose or markup so headings and fences are found.
    /// Never applied to the body of a code block.
    pub fn clean_line(&self, line: &str) -> String {
        // Tabs survive: they separate a heading marker from its title
        let mapped: String = line
            .chars()
            .filter_map(|c| match c {
                '\u{00A0}' => Some(' '),
                '\u{200B}' | '\u{FEFF}' => None,
                '\t' => Some(c),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect();

        mapped.trim_end().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
