//! Indentation-aware block parser.
//!
//! The parser owns a single mutable queue of pending [`Line`]s, consumed
//! from the front and occasionally pushed back at the front (the remainder
//! of a list marker re-enters as a synthetic line). Sub-parsers recurse
//! through [`read_paragraph`] for nested content; a nested context ends
//! when the front line's indent drops below its minimum, without any
//! explicit closing token. Quotes are the one exception to queue sharing:
//! they extract a disjoint sub-queue and run the collection loop over it.

use std::collections::VecDeque;
use std::sync::LazyLock;

use minimark_ast::{Block, Document};
use regex::Regex;

use crate::classify::{BlockKind, classify};
use crate::inline::scan;
use crate::line::Line;

/// Length of a list marker including its trailing space or tab.
const MARKER_LEN: usize = 2;

/// One or more backslashes immediately followed by a fence token.
static ESCAPED_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\\+```$").unwrap());

type Lines = VecDeque<Line>;

/// Parse raw text into a document.
///
/// Total over any input: malformed constructs degrade to literal text and
/// unterminated fences close at end of input.
pub fn parse(text: &str) -> Document {
    let mut lines: Lines = text.split('\n').map(Line::new).collect();
    collect(&mut lines, |ls| read_paragraph(0, ls))
}

/// Drive a step function until it signals end, gathering its blocks.
fn collect<F>(lines: &mut Lines, mut step: F) -> Vec<Block>
where
    F: FnMut(&mut Lines) -> Option<Block>,
{
    let mut blocks = Vec::new();
    while let Some(block) = step(lines) {
        blocks.push(block);
    }
    blocks
}

fn skip_blank_lines(lines: &mut Lines) {
    while lines.front().is_some_and(|l| l.is_blank) {
        lines.pop_front();
    }
}

/// Read the next block at `min_indent` or signal end.
///
/// A front line indented less than `min_indent` is left in place and ends
/// the current context; the enclosing reader will reconsider it.
fn read_paragraph(min_indent: usize, lines: &mut Lines) -> Option<Block> {
    skip_blank_lines(lines);

    let front = lines.front()?;
    if front.indent < min_indent {
        return None;
    }

    let line = lines.pop_front()?;
    read_block(line, lines)
}

/// Dispatch an already-consumed, non-blank line by its classification.
fn read_block(line: Line, lines: &mut Lines) -> Option<Block> {
    match classify(&line.content) {
        BlockKind::Heading(level) => Some(read_heading(level, &line.content)),
        BlockKind::Pre => Some(read_pre(&line.content[3..], lines)),
        BlockKind::Quote => {
            let indent = line.indent;
            lines.push_front(line);
            read_quote(indent, lines)
        }
        BlockKind::Ulist => {
            let indent = line.indent;
            push_remainder(lines, &line.content, indent);
            Some(read_list(indent, lines, ListKind::Unordered))
        }
        BlockKind::Olist => {
            let indent = line.indent;
            push_remainder(lines, &line.content, indent);
            Some(read_list(indent, lines, ListKind::Ordered))
        }
        BlockKind::Normal => {
            lines.push_front(line);
            Some(read_normal(lines))
        }
    }
}

/// Re-push a marker line's remainder as a synthetic line.
///
/// The remainder starts where the marker ended, so its indent is based at
/// `indent + MARKER_LEN`.
fn push_remainder(lines: &mut Lines, content: &str, indent: usize) {
    lines.push_front(Line::with_indent(&content[MARKER_LEN..], indent + MARKER_LEN));
}

/// Heading: strip the marker, inline-scan the rest. No continuation lines.
fn read_heading(level: u8, content: &str) -> Block {
    let rest = &content[usize::from(level) + 1..];
    Block::Heading(level, scan(rest))
}

/// Code fence: consume raw lines until a bare closing fence or end of input.
///
/// The fence opener's trailing text becomes the block's `option`. Kept
/// lines are re-based against the first body line's indent so relative
/// indentation survives while the fence's own indentation does not. A body
/// line of backslashes followed by the fence token loses exactly one
/// backslash, allowing literal fences inside the block.
fn read_pre(after_fence: &str, lines: &mut Lines) -> Block {
    let option = after_fence.trim().to_owned();

    let mut kept: Vec<String> = Vec::new();
    let mut first_indent: Option<usize> = None;
    while let Some(line) = lines.pop_front() {
        if line.content == "```" {
            break;
        }
        let base = *first_indent.get_or_insert(line.indent);
        let mut body = " ".repeat(line.indent.saturating_sub(base));
        body.push_str(unescape_fence_line(&line.content));
        kept.push(body);
    }

    let mut text = kept.join("\n");
    text.push('\n');
    Block::Pre { option, text }
}

fn unescape_fence_line(content: &str) -> &str {
    if ESCAPED_FENCE_RE.is_match(content) {
        &content[1..]
    } else {
        content
    }
}

/// Quote: slice the marker run into a sub-queue and parse it from scratch.
///
/// Lines continue the quote while non-blank, indented at least as far as
/// the marker, and starting with `>`. Each loses one `>` and is
/// re-normalized. Extracting zero blocks yields `None`, which the caller's
/// collection loop treats exactly like end of input.
fn read_quote(indent: usize, lines: &mut Lines) -> Option<Block> {
    let mut quoted: Lines = VecDeque::new();
    while lines
        .front()
        .is_some_and(|l| !l.is_blank && l.indent >= indent && l.content.starts_with('>'))
    {
        let Some(line) = lines.pop_front() else {
            break;
        };
        let rest = &line.content[1..];
        let trimmed = rest.trim_start();
        quoted.push_back(Line {
            content: trimmed.to_owned(),
            indent: rest.chars().count() - trimmed.chars().count(),
            is_blank: trimmed.is_empty(),
        });
    }

    let blocks = collect(&mut quoted, |ls| read_paragraph(0, ls));
    if blocks.is_empty() {
        None
    } else {
        Some(Block::Quote(blocks))
    }
}

#[derive(Debug, Clone, Copy)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// Whether `content` opens another item of this kind. Mixed markers at
    /// one level terminate the list instead of continuing it.
    fn matches(self, content: &str) -> bool {
        match self {
            Self::Unordered => content.starts_with("* ") || content.starts_with("*\t"),
            Self::Ordered => content.starts_with("! ") || content.starts_with("!\t"),
        }
    }

    fn build(self, items: Vec<Vec<Block>>) -> Block {
        match self {
            Self::Unordered => Block::Ulist(items),
            Self::Ordered => Block::Olist(items),
        }
    }
}

/// List: one block sequence per item, each read at `marker_indent + 1`.
///
/// The first marker's remainder is already back on the queue when this is
/// called. Blank runs between items are absorbed; a line that is shallower
/// or carries a different marker ends the list and is reconsidered by the
/// enclosing context.
fn read_list(indent: usize, lines: &mut Lines, kind: ListKind) -> Block {
    let mut items = vec![read_item(indent, lines)];
    loop {
        skip_blank_lines(lines);
        let continues = lines
            .front()
            .is_some_and(|l| l.indent >= indent && kind.matches(&l.content));
        if !continues {
            break;
        }
        let Some(line) = lines.pop_front() else {
            break;
        };
        push_remainder(lines, &line.content, line.indent);
        items.push(read_item(line.indent, lines));
    }
    kind.build(items)
}

fn read_item(item_indent: usize, lines: &mut Lines) -> Vec<Block> {
    collect(lines, |ls| read_paragraph(item_indent + 1, ls))
}

/// Paragraph: greedily join consecutive plain lines with single spaces.
fn read_normal(lines: &mut Lines) -> Block {
    let mut parts: Vec<String> = Vec::new();
    while lines
        .front()
        .is_some_and(|l| !l.is_blank && classify(&l.content) == BlockKind::Normal)
    {
        if let Some(line) = lines.pop_front() {
            parts.push(line.content);
        }
    }
    Block::Normal(scan(&parts.join(" ")))
}
