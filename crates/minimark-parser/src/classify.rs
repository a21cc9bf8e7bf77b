//! Block classification for trimmed line content.

/// The block construct a line's trimmed content introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    /// Ordered list marker (`! `).
    Olist,
    /// Unordered list marker (`* `).
    Ulist,
    /// Quote marker (`> ` or a lone `>`).
    Quote,
    /// Code fence opener.
    Pre,
    /// Heading marker with its level (1..=6).
    Heading(u8),
    /// Anything else: paragraph text.
    Normal,
}

/// Classify a line's trimmed content.
///
/// Total over any input; `Normal` is the default. The priority order
/// matters: list and quote markers win over fences and headings, and the
/// heading check runs longest-marker-first so six `#` resolve to level 6
/// rather than level 1 with literal trailing hashes.
pub(crate) fn classify(content: &str) -> BlockKind {
    if content.starts_with("! ") || content.starts_with("!\t") {
        BlockKind::Olist
    } else if content.starts_with("* ") || content.starts_with("*\t") {
        BlockKind::Ulist
    } else if content.starts_with("> ") || content.starts_with(">\t") || content == ">" {
        BlockKind::Quote
    } else if content.starts_with("```") {
        BlockKind::Pre
    } else if let Some(level) = heading_level(content) {
        BlockKind::Heading(level)
    } else {
        BlockKind::Normal
    }
}

/// Detect a heading marker: 1..=6 `#` followed by a space or tab.
fn heading_level(content: &str) -> Option<u8> {
    (1..=6u8).rev().find(|&level| {
        let marker = &"######"[..usize::from(level)];
        content
            .strip_prefix(marker)
            .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('\t'))
    })
}
