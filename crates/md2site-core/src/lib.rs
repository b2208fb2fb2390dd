//! md2site-core: Core library for converting mdlite Markdown to HTML
//!
//! This crate provides:
//! - The `markdown_to_html` converter (total: every input yields a fragment)
//! - mdlite AST to HTML writer
//!
//! # Example
//!
//! ```
//! use md2site_core::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome **bold** text.");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>Some <strong>bold</strong> text.</p>");
//! ```

pub mod convert;
pub mod writer;

pub use convert::{markdown_to_html, markdown_to_html_with_options};
pub use mdlite_parser::{Block, Document, Inline, ListItem, parse, plain_text};
pub use writer::{WriterOptions, document_to_html, inline_to_html};

#[cfg(feature = "json")]
pub use mdlite_parser::to_json;
