//! Inline text markup.
//!
//! Narrative text (feature descriptions, highlights, the challenge paragraph)
//! may mark emphasis with double asterisks. The grammar is:
//!
//! ```text
//! text     := (plain | emphasis)*
//! emphasis := "**" non-empty-run "**"
//! plain    := any run not starting an emphasis
//! ```
//!
//! An opening `**` without a matching close, or an empty `****` pair, is kept
//! as literal text.
//!
//! ```
//! use folio::markup::{parse, Span};
//!
//! let spans = parse("uses **Supabase** edge functions");
//! assert_eq!(
//!     spans,
//!     vec![
//!         Span::Plain("uses ".into()),
//!         Span::Strong("Supabase".into()),
//!         Span::Plain(" edge functions".into()),
//!     ]
//! );
//! ```

use crate::node::{Element, Node};

const DELIMITER: &str = "**";

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Unemphasized text.
    Plain(String),
    /// Emphasized text.
    Strong(String),
}

/// Parse inline markup into spans. Adjacent plain runs are merged.
#[must_use]
pub fn parse(input: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = input;

    while let Some(open) = rest.find(DELIMITER) {
        let after_open = &rest[open + DELIMITER.len()..];
        match after_open.find(DELIMITER) {
            Some(0) => {
                // Empty emphasis: keep both delimiters literally.
                plain.push_str(&rest[..open + 2 * DELIMITER.len()]);
                rest = &after_open[DELIMITER.len()..];
            }
            Some(close) => {
                plain.push_str(&rest[..open]);
                if !plain.is_empty() {
                    spans.push(Span::Plain(std::mem::take(&mut plain)));
                }
                spans.push(Span::Strong(after_open[..close].to_string()));
                rest = &after_open[close + DELIMITER.len()..];
            }
            None => break,
        }
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        spans.push(Span::Plain(plain));
    }
    spans
}

/// Render spans as inline nodes: text for plain runs, `<strong>` for emphasis.
#[must_use]
pub fn to_nodes(spans: &[Span]) -> Vec<Node> {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => Node::text(text.clone()),
            Span::Strong(text) => Element::new("strong").text(text.clone()).into(),
        })
        .collect()
}

/// Parse and render in one step.
#[must_use]
pub fn render_inline(input: &str) -> Vec<Node> {
    to_nodes(&parse(input))
}
