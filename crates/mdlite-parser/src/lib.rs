//! mdlite-parser: Parser for the mdlite Markdown dialect
//!
//! The dialect is the small subset article authors use: `#`/`##`/`###`
//! headings, `**strong**` and `*emphasis*` spans, flat `- ` lists and
//! blank-line separated paragraphs. Anything else is kept as paragraph text.
//!
//! This crate provides:
//! - Line lexer (classifies each line on its own)
//! - Block parser (groups lines into headings, lists and paragraphs)
//! - Inline span resolution
//! - mdlite AST types
//!
//! # Example
//!
//! ```
//! use mdlite_parser::{parse, Block};
//!
//! let doc = parse("# Title\n\nSome **bold** text.\n\n- one\n- two");
//! assert_eq!(doc.blocks.len(), 3);
//! assert!(matches!(doc.blocks[2], Block::List { .. }));
//! ```

pub mod ast;
pub mod inline;
pub mod lexer;
pub mod parser;

// Re-export main types for convenient access
pub use ast::{Block, Document, Inline, ListItem, plain_text};
pub use inline::parse_inline;
pub use lexer::{Lexer, Line, LineKind, Span};
pub use parser::{Parser, parse};

/// Serialize a parsed document as pretty-printed JSON
#[cfg(feature = "json")]
pub fn to_json(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}
