//! Applying classifications to a document tree.
//!
//! The scanner only reports spans. This module is the consumer side: it splits
//! text at those spans and, for a small element/text tree, replaces every
//! eligible text leaf with plain pieces and `span` elements whose class is the
//! category.
//!
//! ```text
//! "if(x)"  + [if@0..2 keyword, (@2..3 separator, )@4..5 separator]
//!   ──▶ <span class="keyword">if</span><span class="separator">(</span>x<span class="separator">)</span>
//! ```
//!
//! Elements whose tag is `script` or `style` (any case) are opaque: their text
//! is never classified.

use crate::engine::{PreparedRules, Scanner};
use crate::{ClassifiedSpan, Options, Registry, Result};
use std::fmt::Write as _;

/// A piece of text after splitting at classified spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Unclassified text between (or around) spans.
    Plain(&'a str),
    /// The exact text of one span.
    Classified { category: &'a str, text: &'a str },
}

/// Split `text` into before/classified/remainder pieces, in order.
///
/// `spans` must be sorted and non-overlapping, as the scanner produces them.
/// Offsets always refer to the original `text`; the split cursor tracks how
/// much has been carved off already.
pub fn split_spans<'a>(text: &'a str, spans: &'a [ClassifiedSpan]) -> Vec<Piece<'a>> {
    let mut pieces = Vec::with_capacity(spans.len() * 2 + 1);
    let mut offset = 0;
    for span in spans {
        if span.start > offset {
            pieces.push(Piece::Plain(&text[offset..span.start]));
        }
        pieces.push(Piece::Classified { category: span.category(), text: span.text(text) });
        offset = span.end();
    }
    if offset < text.len() {
        pieces.push(Piece::Plain(&text[offset..]));
    }
    pieces
}

/// A minimal document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
    /// Sibling nodes without a wrapping element. A text root becomes one of
    /// these once it has been split.
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), class: None, children: Vec::new() }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Script and style contents are never classified.
    pub fn is_opaque(&self) -> bool {
        self.tag.eq_ignore_ascii_case("script") || self.tag.eq_ignore_ascii_case("style")
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Render as HTML, escaping text and attribute values.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(out, text),
            Node::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                if let Some(class) = &el.class {
                    out.push_str(" class=\"");
                    escape_into(out, class);
                    out.push('"');
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Classify every eligible text leaf under `node` with `language`.
///
/// An unknown language leaves the tree untouched.
pub fn highlight_node(registry: &Registry, language: &str, node: &mut Node, options: &Options) -> Result<()> {
    let Some(prepared) = registry.prepared(language)? else {
        return Ok(());
    };
    walk(&prepared, node, options);
    Ok(())
}

fn walk(prepared: &PreparedRules, node: &mut Node, options: &Options) {
    match node {
        Node::Text(text) => {
            let pieces = classify_leaf(prepared, text, options);
            if !is_single_plain(&pieces) {
                *node = Node::Fragment(pieces);
            }
        }
        Node::Element(el) if el.is_opaque() => {}
        Node::Element(Element { children, .. }) | Node::Fragment(children) => {
            let old = std::mem::take(children);
            for mut child in old {
                match child {
                    Node::Text(ref text) => children.extend(classify_leaf(prepared, text, options)),
                    _ => {
                        walk(prepared, &mut child, options);
                        children.push(child);
                    }
                }
            }
        }
    }
}

fn classify_leaf(prepared: &PreparedRules, text: &str, options: &Options) -> Vec<Node> {
    let result = Scanner::new(prepared, text).run(options);
    split_spans(text, &result.spans)
        .into_iter()
        .map(|piece| match piece {
            Piece::Plain(plain) => Node::text(plain),
            Piece::Classified { category, text } => {
                Element::new("span").with_class(category).with_child(Node::text(text)).into()
            }
        })
        .collect()
}

fn is_single_plain(nodes: &[Node]) -> bool {
    matches!(nodes, [] | [Node::Text(_)])
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
