//! Inline span resolution
//!
//! Spans are line-local. Each line goes through two passes: `**strong**`
//! pairs are taken first (left to right, shortest match), then single `*`
//! pairs are taken over what is left. Strong spans are atomic during the
//! second pass, so an emphasis may contain a strong span but never half of
//! one.

use crate::ast::Inline;

/// Piece of a line after the strong pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Strong(&'a str),
}

/// Resolve inline spans in block text
///
/// Newlines are kept as literal text between the lines they separate.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            push_text(&mut nodes, "\n");
        }
        for node in parse_line(line) {
            push_node(&mut nodes, node);
        }
    }
    nodes
}

/// Resolve inline spans in a single line
pub fn parse_line(line: &str) -> Vec<Inline> {
    resolve_emphasis(&split_strong(line))
}

/// First pass: split a line on `**...**` pairs
///
/// The closing marker is the first `**` after the opening one, so
/// `**a** **b**` yields two spans. An opening `**` with no partner stays text.
fn split_strong(line: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        if open > 0 {
            pieces.push(Piece::Text(&rest[..open]));
        }
        pieces.push(Piece::Strong(&after[..close]));
        rest = &after[close + 2..];
    }

    if !rest.is_empty() {
        pieces.push(Piece::Text(rest));
    }
    pieces
}

/// Second pass: pair single `*` markers found in text pieces
fn resolve_emphasis(pieces: &[Piece<'_>]) -> Vec<Inline> {
    let mut outer = Vec::new();
    let mut open: Option<Vec<Inline>> = None;

    for piece in pieces.iter().copied() {
        match piece {
            Piece::Strong(inner) => {
                let children = resolve_emphasis(&[Piece::Text(inner)]);
                target(&mut outer, &mut open).push(Inline::Strong(children));
            }
            Piece::Text(s) => {
                let mut start = 0;
                for (idx, _) in s.match_indices('*') {
                    push_text(target(&mut outer, &mut open), &s[start..idx]);
                    match open.take() {
                        Some(children) => outer.push(Inline::Emphasis(children)),
                        None => open = Some(Vec::new()),
                    }
                    start = idx + 1;
                }
                push_text(target(&mut outer, &mut open), &s[start..]);
            }
        }
    }

    // Unmatched opening marker: it was literal text all along
    if let Some(children) = open {
        push_text(&mut outer, "*");
        for child in children {
            push_node(&mut outer, child);
        }
    }

    outer
}

fn target<'v>(
    outer: &'v mut Vec<Inline>,
    open: &'v mut Option<Vec<Inline>>,
) -> &'v mut Vec<Inline> {
    match open {
        Some(children) => children,
        None => outer,
    }
}

/// Append text, merging with a preceding text node
fn push_text(nodes: &mut Vec<Inline>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = nodes.last_mut() {
        last.push_str(s);
    } else {
        nodes.push(Inline::Text(s.to_string()));
    }
}

fn push_node(nodes: &mut Vec<Inline>, node: Inline) {
    match node {
        Inline::Text(s) => push_text(nodes, &s),
        other => nodes.push(other),
    }
}
