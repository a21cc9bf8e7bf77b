//! Exhaustive node-to-element conversion.

use minimark_ast::{Block, Inline};

use crate::element::Element;

/// Describe how a block node renders.
pub(crate) fn block_element(block: &Block) -> Element {
    match block {
        Block::Normal(children) => Element::container("p", render_inlines(children)),
        Block::Heading(level, children) => {
            Element::container(format!("h{level}"), render_inlines(children))
        }
        Block::Pre { option: _, text } => Element::container("pre", text.clone()),
        Block::Quote(blocks) => Element::container("quote", render_blocks(blocks)),
        Block::Ulist(items) => Element::container("ul", render_items(items)),
        Block::Olist(items) => Element::container("ol", render_items(items)),
    }
}

/// Describe how an inline node renders.
fn inline_element(inline: &Inline) -> Element {
    match inline {
        Inline::Plain(text) => Element::text(text.clone()),
        Inline::Emph(children) => Element::container("em", render_inlines(children)),
        Inline::Bold(children) => Element::container("strong", render_inlines(children)),
        Inline::Struck(children) => Element::container(
            "del",
            children
                .iter()
                .filter_map(try_inline_element)
                .map(Element::render)
                .collect(),
        ),
        Inline::Code(text) => Element::container("code", text.clone()),
        Inline::Link { src, desc } => Element {
            tag: "a".to_owned(),
            attributes: vec![("href", src.clone())],
            self_closing: false,
            content: desc.clone(),
        },
        Inline::Anchor(id) => Element {
            tag: "a".to_owned(),
            attributes: vec![("id", id.clone())],
            self_closing: false,
            content: String::new(),
        },
        Inline::Image { src, alt } => Element {
            tag: "img".to_owned(),
            attributes: vec![("src", src.clone()), ("alt", alt.clone())],
            self_closing: true,
            content: String::new(),
        },
    }
}

/// Conversion that struck content filters through.
///
/// Every variant converts today, so nothing is ever dropped; the `Option`
/// keeps the drop-on-failure contract in place for struck children.
fn try_inline_element(inline: &Inline) -> Option<Element> {
    Some(inline_element(inline))
}

pub(crate) fn render_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(|b| block_element(b).render()).collect()
}

fn render_inlines(children: &[Inline]) -> String {
    children.iter().map(|i| inline_element(i).render()).collect()
}

/// Render list items: each item's blocks concatenated inside one `<li>`.
///
/// The wrapper is unconditional — an item with no renderable content still
/// emits `<li></li>`.
fn render_items(items: &[Vec<Block>]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str("<li>");
        out.push_str(&render_blocks(item));
        out.push_str("</li>");
    }
    out
}
