//! Line lexer for the mdlite dialect
//!
//! Splits the source into lines and classifies each one on its own. Block
//! structure is decided later by the parser; nothing here looks at more than
//! one line.

/// Longest `#` run still recognised as a heading marker
pub const MAX_HEADING_LEVEL: u8 = 3;

/// A classified source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub kind: LineKind<'a>,
    pub span: Span,
}

/// The kind of line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// `#{1,3}` followed by whitespace; `text` is what follows the whitespace
    Heading { level: u8, text: &'a str },
    /// Line starting with `- `; `text` is what follows the marker
    ListItem { text: &'a str },
    /// Any other line, kept verbatim
    Text { text: &'a str },
}

/// Source location of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Starting byte offset
    pub start: usize,
    /// Ending byte offset (exclusive, before any `\r\n` / `\n`)
    pub end: usize,
    /// Line number (1-indexed)
    pub line: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }
}

/// Lexer over the lines of a document
pub struct Lexer<'a> {
    input: &'a str,
    /// Current byte position
    pos: usize,
    /// Current line (1-indexed)
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Classify every line of the input
    pub fn tokenize(input: &'a str) -> Vec<Line<'a>> {
        Lexer::new(input).collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        let (raw, consumed) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        let text = raw.strip_suffix('\r').unwrap_or(raw);

        let span = Span::new(self.pos, self.pos + text.len(), self.line);
        self.pos += consumed;
        self.line += 1;

        Some(Line {
            kind: classify(text),
            span,
        })
    }
}

/// Classify a single line (without its line terminator)
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if let Some((level, text)) = heading(line) {
        return LineKind::Heading { level, text };
    }

    if let Some(text) = line.strip_prefix("- ") {
        return LineKind::ListItem { text };
    }

    LineKind::Text { text: line }
}

/// Match `^#{1,3}\s+(.*)$`
///
/// The whole `#` run is counted before deciding, so `####` is never read as a
/// level-3 heading with a stray `#` and `###` is never read as level 1.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL as usize {
        return None;
    }

    let after = &line[hashes..];
    if !after.starts_with(char::is_whitespace) {
        return None;
    }

    Some((hashes as u8, after.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<LineKind<'_>> {
        Lexer::tokenize(input).into_iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            classify("# One"),
            LineKind::Heading {
                level: 1,
                text: "One"
            }
        );
        assert_eq!(
            classify("## Two"),
            LineKind::Heading {
                level: 2,
                text: "Two"
            }
        );
        assert_eq!(
            classify("### Three"),
            LineKind::Heading {
                level: 3,
                text: "Three"
            }
        );
    }

    #[test]
    fn test_four_hashes_is_text() {
        assert_eq!(
            classify("#### Four"),
            LineKind::Text { text: "#### Four" }
        );
    }

    #[test]
    fn test_heading_requires_whitespace() {
        assert_eq!(classify("#tag"), LineKind::Text { text: "#tag" });
        assert_eq!(
            classify("#\tTabbed"),
            LineKind::Heading {
                level: 1,
                text: "Tabbed"
            }
        );
        assert_eq!(
            classify("##   Spaced"),
            LineKind::Heading {
                level: 2,
                text: "Spaced"
            }
        );
    }

    #[test]
    fn test_heading_with_empty_text() {
        assert_eq!(classify("## "), LineKind::Heading { level: 2, text: "" });
    }

    #[test]
    fn test_indented_markers_are_text() {
        assert_eq!(classify("  # x"), LineKind::Text { text: "  # x" });
        assert_eq!(classify(" - x"), LineKind::Text { text: " - x" });
    }

    #[test]
    fn test_list_item() {
        assert_eq!(classify("- item"), LineKind::ListItem { text: "item" });
        assert_eq!(classify("- "), LineKind::ListItem { text: "" });
        assert_eq!(classify("-item"), LineKind::Text { text: "-item" });
        assert_eq!(classify("--"), LineKind::Text { text: "--" });
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_crlf_is_normalized() {
        assert_eq!(
            kinds("# A\r\nbody\r\n"),
            vec![
                LineKind::Heading {
                    level: 1,
                    text: "A"
                },
                LineKind::Text { text: "body" },
            ]
        );
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(kinds("a\n").len(), 1);
        assert_eq!(kinds("a\n\n").len(), 2);
        assert!(kinds("").is_empty());
    }

    #[test]
    fn test_spans() {
        let lines = Lexer::tokenize("ab\r\n\ncd");
        assert_eq!(lines[0].span, Span::new(0, 2, 1));
        assert_eq!(lines[1].span, Span::new(4, 4, 2));
        assert_eq!(lines[2].span, Span::new(5, 7, 3));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            classify("## Привет мир"),
            LineKind::Heading {
                level: 2,
                text: "Привет мир"
            }
        );
    }
}
