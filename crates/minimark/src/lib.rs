//! Lightweight markup to HTML conversion.
//!
//! The pipeline has two stages: [`parse`] turns raw text into a
//! [`Document`] tree, and [`render`] flattens that tree into an HTML
//! fragment. [`to_html`] runs both.
//!
//! Parsing never fails. Malformed constructs fall back to literal text, so
//! every input produces some document and every document renders.
//!
//! # Example
//!
//! ```
//! let html = minimark::to_html("# Title\n\nSome *emphasised* text.");
//! assert_eq!(html, "<h1>Title</h1><p>Some <em>emphasised</em> text.</p>");
//! ```

pub use minimark_ast::{Block, Document, Inline};
use tracing::trace;

/// Parse raw markup text into a document tree.
#[must_use]
pub fn parse(text: &str) -> Document {
    let document = minimark_parser::parse(text);
    trace!(bytes = text.len(), blocks = document.len(), "parsed document");
    document
}

/// Render a document tree to an HTML fragment.
#[must_use]
pub fn render(document: &[Block]) -> String {
    let html = minimark_html::render(document);
    trace!(blocks = document.len(), bytes = html.len(), "rendered document");
    html
}

/// Convert raw markup text straight to an HTML fragment.
#[must_use]
pub fn to_html(text: &str) -> String {
    render(&parse(text))
}
