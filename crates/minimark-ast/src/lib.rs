//! Document model for the minimark markup format.
//!
//! Two closed node hierarchies make up a parsed document: [`Inline`] nodes
//! for styled text within a block, and [`Block`] nodes for the structural
//! units (paragraphs, headings, code blocks, quotes, lists). A [`Document`]
//! is the ordered block sequence crossing the parser/renderer boundary.
//!
//! Nodes are immutable once built and hold no back-references to their
//! parent or to the source text. The parser constructs them; the renderer
//! only reads. Node text is carried verbatim — no HTML escaping happens at
//! this layer, so callers embedding untrusted input own their own escaping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit of styled text within a block.
///
/// `Code` holds literal text only — inline constructs are never nested
/// inside a code span.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Inline {
    /// Unstyled text run.
    Plain(String),
    /// Emphasis (`*..*` / `_.._`).
    Emph(Vec<Inline>),
    /// Strong emphasis (`**..**` / `__..__`).
    Bold(Vec<Inline>),
    /// Strikethrough (`~~..~~`).
    Struck(Vec<Inline>),
    /// Inline code span, literal text.
    Code(String),
    /// Hyperlink with target and description.
    Link { src: String, desc: String },
    /// Named anchor target (`[](#id)`).
    Anchor(String),
    /// Image reference (`![alt](src)`).
    Image { src: String, alt: String },
}

/// A structural unit of the document, spanning one or more physical lines.
///
/// List items are full block sequences: an item may contain paragraphs,
/// nested lists, quotes, or code fences, recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Block {
    /// Paragraph of inline content.
    Normal(Vec<Inline>),
    /// Heading with level 1..=6.
    Heading(u8, Vec<Inline>),
    /// Fenced code block. `option` is the trailing text of the opening
    /// fence (e.g. a language hint); `text` is the raw body.
    Pre { option: String, text: String },
    /// Block quote containing nested blocks.
    Quote(Vec<Block>),
    /// Unordered list; one block sequence per item.
    Ulist(Vec<Vec<Block>>),
    /// Ordered list; one block sequence per item.
    Olist(Vec<Vec<Block>>),
}

/// A parsed document: the ordered sequence of top-level blocks.
pub type Document = Vec<Block>;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Inline: Send, Sync, Clone);
    assert_impl_all!(Block: Send, Sync, Clone);

    #[test]
    fn test_structural_equality() {
        let a = Block::Normal(vec![
            Inline::Plain("foo ".to_owned()),
            Inline::Emph(vec![Inline::Plain("bar".to_owned())]),
        ]);
        let b = Block::Normal(vec![
            Inline::Plain("foo ".to_owned()),
            Inline::Emph(vec![Inline::Plain("bar".to_owned())]),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_nested_list_items_are_block_sequences() {
        let doc: Document = vec![Block::Ulist(vec![vec![
            Block::Normal(vec![Inline::Plain("foo".to_owned())]),
            Block::Ulist(vec![vec![Block::Normal(vec![Inline::Plain(
                "bar".to_owned(),
            )])]]),
        ]])];
        match &doc[0] {
            Block::Ulist(items) => assert_eq!(items[0].len(), 2),
            other => panic!("expected ulist, got {other:?}"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let doc: Document = vec![
            Block::Heading(2, vec![Inline::Plain("title".to_owned())]),
            Block::Pre {
                option: "rust".to_owned(),
                text: "fn main() {}\n".to_owned(),
            },
        ];
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
