//! AST types for the mdlite dialect
//!
//! The dialect knows three block kinds (heading, flat list, paragraph) and two
//! inline spans (strong, emphasis). Everything else is text.

use serde::{Deserialize, Serialize};

/// A parsed document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

/// A block-level element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// `#`, `##` or `###` heading
    Heading { level: u8, content: Vec<Inline> },
    /// Run of adjacent `- ` lines
    List { items: Vec<ListItem> },
    /// Everything else, lines joined with `\n`
    Paragraph { content: Vec<Inline> },
}

/// A single `- ` line inside a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

/// An inline span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Inline {
    Text(String),
    /// `**text**`
    Strong(Vec<Inline>),
    /// `*text*`
    Emphasis(Vec<Inline>),
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over headings as `(level, plain text)` pairs
    pub fn headings(&self) -> impl Iterator<Item = (u8, String)> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { level, content } => Some((*level, plain_text(content))),
            _ => None,
        })
    }
}

// Convenience constructors
impl Block {
    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Block::Heading { level, content }
    }

    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    pub fn list(items: Vec<ListItem>) -> Self {
        Block::List { items }
    }
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    pub fn strong(children: Vec<Inline>) -> Self {
        Inline::Strong(children)
    }

    pub fn emphasis(children: Vec<Inline>) -> Self {
        Inline::Emphasis(children)
    }
}

/// Extract the text of inline nodes with all markup removed
pub fn plain_text(nodes: &[Inline]) -> String {
    let mut result = String::new();
    for node in nodes {
        match node {
            Inline::Text(s) => result.push_str(s),
            Inline::Strong(children) | Inline::Emphasis(children) => {
                result.push_str(&plain_text(children));
            }
        }
    }
    result
}
