//! mdlite Markdown to HTML conversion
//!
//! The converter contract: any UTF-8 string in, an HTML fragment out. There
//! is no error path; unrecognised syntax ends up as paragraph text.

use mdlite_parser::parse;

use crate::writer::{WriterOptions, document_to_html};

/// Convert mdlite Markdown to an HTML fragment
///
/// Text is not escaped; see [`WriterOptions::escape_html`].
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_options(markdown, &WriterOptions::default())
}

/// Convert mdlite Markdown to an HTML fragment with custom writer options
pub fn markdown_to_html_with_options(markdown: &str, options: &WriterOptions) -> String {
    let doc = parse(markdown);
    document_to_html(&doc, options)
}

#[cfg(test)]
mod tests;
