//! Line-oriented parser for the markup grammar.
//!
//! [`parse`] turns raw text into a [`Document`](minimark_ast::Document) in
//! two stages. A queue of classified lines is consumed into block structure
//! (headings, lists, quotes, fenced pre blocks, paragraphs), and the text
//! carried by non-pre blocks is then scanned for inline spans (emphasis,
//! code, links, images).
//!
//! Parsing is total. There is no error type: any construct that fails to
//! close or carries malformed delimiters degrades to the literal text it
//! was written as.

mod block;
mod classify;
mod inline;
mod line;

pub use block::parse;
