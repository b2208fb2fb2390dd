//! Block parser for the mdlite dialect
//!
//! Groups classified lines into blocks. Blank lines end every block; inside a
//! blank-separated segment a heading line stands alone, adjacent list lines
//! form one list and adjacent text lines form one paragraph.

use crate::ast::{Block, Document, ListItem};
use crate::inline::{parse_inline, parse_line};
use crate::lexer::{Lexer, Line, LineKind};

/// Parse a document
///
/// Parsing never fails: anything that is not a heading or a list item ends up
/// as paragraph text.
pub fn parse(source: &str) -> Document {
    Parser::new(source).parse()
}

/// mdlite block parser
pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser from source text
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: Lexer::tokenize(source),
            pos: 0,
        }
    }

    /// Parse the entire document
    pub fn parse(&mut self) -> Document {
        let mut blocks = Vec::new();

        while let Some(kind) = self.peek_kind().cloned() {
            let block = match kind {
                LineKind::Blank => {
                    self.skip_blank_lines();
                    continue;
                }
                LineKind::Heading { level, text } => {
                    self.advance();
                    Block::heading(level, parse_line(text))
                }
                LineKind::ListItem { .. } => self.parse_list(),
                LineKind::Text { .. } => self.parse_paragraph(),
            };
            blocks.push(block);
        }

        Document { blocks }
    }

    /// Parse a run of adjacent `- ` lines
    fn parse_list(&mut self) -> Block {
        let mut items = Vec::new();
        while let Some(&LineKind::ListItem { text }) = self.peek_kind() {
            items.push(ListItem::new(parse_line(text)));
            self.advance();
        }
        Block::list(items)
    }

    /// Parse a run of adjacent text lines
    fn parse_paragraph(&mut self) -> Block {
        let mut lines = Vec::new();
        while let Some(&LineKind::Text { text }) = self.peek_kind() {
            lines.push(text);
            self.advance();
        }
        Block::paragraph(parse_inline(&lines.join("\n")))
    }

    fn skip_blank_lines(&mut self) {
        while matches!(self.peek_kind(), Some(LineKind::Blank)) {
            self.advance();
        }
    }

    fn peek_kind(&self) -> Option<&LineKind<'a>> {
        self.lines.get(self.pos).map(|line| &line.kind)
    }

    fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Inline;

    fn text(s: &str) -> Inline {
        Inline::text(s)
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_single_paragraph() {
        let doc = parse("hello world");
        assert_eq!(doc.blocks, vec![Block::paragraph(vec![text("hello world")])]);
    }

    #[test]
    fn test_paragraph_keeps_single_newlines() {
        let doc = parse("a\nb");
        assert_eq!(doc.blocks, vec![Block::paragraph(vec![text("a\nb")])]);
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let doc = parse("a\n\n\n\nb");
        assert_eq!(
            doc.blocks,
            vec![
                Block::paragraph(vec![text("a")]),
                Block::paragraph(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn test_heading_stands_alone_in_segment() {
        let doc = parse("# Title\nFirst line");
        assert_eq!(
            doc.blocks,
            vec![
                Block::heading(1, vec![text("Title")]),
                Block::paragraph(vec![text("First line")]),
            ]
        );
    }

    #[test]
    fn test_adjacent_list_items_group() {
        let doc = parse("- one\n- two");
        assert_eq!(
            doc.blocks,
            vec![Block::list(vec![
                ListItem::new(vec![text("one")]),
                ListItem::new(vec![text("two")]),
            ])]
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let doc = parse("- one\n\n- two");
        assert_eq!(doc.blocks.len(), 2);
        assert!(doc.blocks.iter().all(|b| matches!(b, Block::List { .. })));
    }

    #[test]
    fn test_paragraph_then_list_in_one_segment() {
        let doc = parse("Steps:\n- first\n- second\nDone.");
        assert_eq!(
            doc.blocks,
            vec![
                Block::paragraph(vec![text("Steps:")]),
                Block::list(vec![
                    ListItem::new(vec![text("first")]),
                    ListItem::new(vec![text("second")]),
                ]),
                Block::paragraph(vec![text("Done.")]),
            ]
        );
    }

    #[test]
    fn test_inline_spans_in_blocks() {
        let doc = parse("## **Bold** title\n\n- *item*");
        assert_eq!(
            doc.blocks,
            vec![
                Block::heading(
                    2,
                    vec![Inline::strong(vec![text("Bold")]), text(" title")]
                ),
                Block::list(vec![ListItem::new(vec![Inline::emphasis(vec![text(
                    "item"
                )])])]),
            ]
        );
    }

    #[test]
    fn test_unknown_syntax_is_paragraph_text() {
        let doc = parse("> quote\n```\ncode\n```\n| a | b |");
        assert_eq!(
            doc.blocks,
            vec![Block::paragraph(vec![text(
                "> quote\n```\ncode\n```\n| a | b |"
            )])]
        );
    }

    #[test]
    fn test_only_markers() {
        let doc = parse("#\n\n####\n\n-");
        assert_eq!(
            doc.blocks,
            vec![
                Block::paragraph(vec![text("#")]),
                Block::paragraph(vec![text("####")]),
                Block::paragraph(vec![text("-")]),
            ]
        );
    }
}
