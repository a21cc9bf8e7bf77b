//! Render-descriptor record and the uniform element rendering rule.

use std::fmt::Write;

/// Flat description of how one node renders: tag, attributes, body mode,
/// and already-rendered content.
#[derive(Debug, Default)]
pub(crate) struct Element {
    /// Tag name; empty means the content renders bare (plain text runs).
    pub(crate) tag: String,
    /// Ordered attribute list. Attributes with empty values are dropped.
    pub(crate) attributes: Vec<(&'static str, String)>,
    /// Render as `<tag attrs />` instead of wrapping a body.
    pub(crate) self_closing: bool,
    /// Rendered content of the node's children (or its literal text).
    pub(crate) content: String,
}

impl Element {
    pub(crate) fn text(content: String) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    pub(crate) fn container(tag: impl Into<String>, content: String) -> Self {
        Self {
            tag: tag.into(),
            content,
            ..Self::default()
        }
    }

    /// Render to markup.
    ///
    /// The collapsing rule applies uniformly: a tagged element whose
    /// attribute list (after dropping empty values) and content are both
    /// empty renders as nothing at all.
    pub(crate) fn render(self) -> String {
        if self.tag.is_empty() {
            return self.content;
        }

        let attributes: Vec<(&'static str, String)> = self
            .attributes
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();
        if self.content.is_empty() && attributes.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(self.content.len() + 16);
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &attributes {
            write!(out, r#" {name}="{value}""#).unwrap();
        }
        if self.self_closing {
            out.push_str(" />");
        } else {
            write!(out, ">{}</{}>", self.content, self.tag).unwrap();
        }
        out
    }
}
