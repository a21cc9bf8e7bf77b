//! HTML rendering for parsed documents.
//!
//! Walks a [`Document`](minimark_ast::Document) and produces a single flat
//! markup string. Each node is first described as an [`element::Element`]
//! (tag, attributes, content), then rendered by one uniform rule. The rule
//! collapses elements with no attributes and no content, so empty input
//! never leaves stray `<p></p>` pairs behind.
//!
//! Output is emitted verbatim: node text is not entity-escaped, and no
//! whitespace is inserted between sibling elements.

mod convert;
mod element;

use minimark_ast::Block;

/// Render a parsed document to an HTML fragment.
#[must_use]
pub fn render(document: &[Block]) -> String {
    convert::render_blocks(document)
}
