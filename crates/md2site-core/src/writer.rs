//! mdlite AST to HTML writer
//!
//! Produces an HTML fragment (no document shell). Blocks are separated by a
//! single `\n`; list items inside one `<ul>` are separated the same way.

use mdlite_parser::{Block, Document, Inline, ListItem};

/// Options for the HTML writer
#[derive(Debug, Clone, Default)]
pub struct WriterOptions {
    /// Escape `<`, `>` and `&` in text content.
    ///
    /// Off by default: article text is trusted and passes through verbatim,
    /// so authors can embed inline HTML.
    pub escape_html: bool,
}

/// Render a parsed document as an HTML fragment
pub fn document_to_html(doc: &Document, options: &WriterOptions) -> String {
    let mut writer = Writer::new(options);
    writer.write_document(doc);
    writer.output
}

/// Render inline nodes as HTML (no surrounding block tag)
pub fn inline_to_html(nodes: &[Inline], options: &WriterOptions) -> String {
    let mut writer = Writer::new(options);
    writer.write_inlines(nodes);
    writer.output
}

/// HTML writer state
struct Writer<'a> {
    options: &'a WriterOptions,
    output: String,
}

impl<'a> Writer<'a> {
    fn new(options: &'a WriterOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    fn write_document(&mut self, doc: &Document) {
        for (i, block) in doc.blocks.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.write_block(block);
        }
    }

    fn write_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, content } => self.write_heading(*level, content),
            Block::List { items } => self.write_list(items),
            Block::Paragraph { content } => {
                self.output.push_str("<p>");
                self.write_inlines(content);
                self.output.push_str("</p>");
            }
        }
    }

    fn write_heading(&mut self, level: u8, content: &[Inline]) {
        self.output.push_str(&format!("<h{}>", level));
        self.write_inlines(content);
        self.output.push_str(&format!("</h{}>", level));
    }

    fn write_list(&mut self, items: &[ListItem]) {
        self.output.push_str("<ul>");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.output.push_str("<li>");
            self.write_inlines(&item.content);
            self.output.push_str("</li>");
        }
        self.output.push_str("</ul>");
    }

    fn write_inlines(&mut self, nodes: &[Inline]) {
        for node in nodes {
            match node {
                Inline::Text(s) => self.write_text(s),
                Inline::Strong(children) => {
                    self.output.push_str("<strong>");
                    self.write_inlines(children);
                    self.output.push_str("</strong>");
                }
                Inline::Emphasis(children) => {
                    self.output.push_str("<em>");
                    self.write_inlines(children);
                    self.output.push_str("</em>");
                }
            }
        }
    }

    fn write_text(&mut self, s: &str) {
        if self.options.escape_html {
            self.output.push_str(&html_escape::encode_text(s));
        } else {
            self.output.push_str(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(blocks: Vec<Block>) -> String {
        document_to_html(&Document::new(blocks), &WriterOptions::default())
    }

    #[test]
    fn test_write_heading_levels() {
        for level in 1..=3 {
            let html = render(vec![Block::heading(level, vec![Inline::text("T")])]);
            assert_eq!(html, format!("<h{0}>T</h{0}>", level));
        }
    }

    #[test]
    fn test_write_list() {
        let html = render(vec![Block::list(vec![
            ListItem::new(vec![Inline::text("a")]),
            ListItem::new(vec![Inline::strong(vec![Inline::text("b")])]),
        ])]);
        assert_eq!(html, "<ul><li>a</li>\n<li><strong>b</strong></li></ul>");
    }

    #[test]
    fn test_blocks_joined_by_newline() {
        let html = render(vec![
            Block::heading(2, vec![Inline::text("H")]),
            Block::paragraph(vec![Inline::text("p")]),
        ]);
        assert_eq!(html, "<h2>H</h2>\n<p>p</p>");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(vec![]), "");
    }

    #[test]
    fn test_text_passes_through_by_default() {
        let html = render(vec![Block::paragraph(vec![Inline::text("<b>x</b> & y")])]);
        assert_eq!(html, "<p><b>x</b> & y</p>");
    }

    #[test]
    fn test_escape_html_option() {
        let doc = Document::new(vec![Block::paragraph(vec![
            Inline::text("a < b & "),
            Inline::emphasis(vec![Inline::text("<script>")]),
        ])]);
        let html = document_to_html(&doc, &WriterOptions { escape_html: true });
        assert_eq!(html, "<p>a &lt; b &amp; <em>&lt;script&gt;</em></p>");
    }

    #[test]
    fn test_inline_to_html() {
        let html = inline_to_html(
            &[Inline::text("x "), Inline::emphasis(vec![Inline::text("y")])],
            &WriterOptions::default(),
        );
        assert_eq!(html, "x <em>y</em>");
    }
}
