//! Physical line normalization.
//!
//! Each input line is reduced to its trimmed content, an indentation width,
//! and a blank flag before block parsing begins. Indentation is the nesting
//! mechanism for the whole block grammar, so it has to be computed the same
//! way everywhere: a tab counts as [`TAB_WIDTH`], any other leading
//! whitespace character counts as one.

/// Indentation width of a tab character.
pub(crate) const TAB_WIDTH: usize = 8;

/// A normalized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line {
    /// Whitespace-trimmed line content.
    pub(crate) content: String,
    /// Computed indentation width.
    pub(crate) indent: usize,
    /// Whether the trimmed content is empty.
    pub(crate) is_blank: bool,
}

impl Line {
    /// Normalize a raw physical line.
    pub(crate) fn new(raw: &str) -> Self {
        Self::with_indent(raw, 0)
    }

    /// Normalize a raw line starting from a base indentation.
    ///
    /// Synthesized lines (the remainder of a consumed list marker) start at
    /// the position the marker ended, not at column zero.
    pub(crate) fn with_indent(raw: &str, base_indent: usize) -> Self {
        let leading: usize = raw
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
            .sum();
        let content = raw.trim().to_owned();
        let is_blank = content.is_empty();

        Self {
            content,
            indent: base_indent + leading,
            is_blank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let line = Line::new("foo");
        assert_eq!(line.content, "foo");
        assert_eq!(line.indent, 0);
        assert!(!line.is_blank);
    }

    #[test]
    fn test_spaces_count_one_each() {
        let line = Line::new("   foo");
        assert_eq!(line.content, "foo");
        assert_eq!(line.indent, 3);
    }

    #[test]
    fn test_tab_counts_as_eight() {
        let line = Line::new("\tfoo");
        assert_eq!(line.indent, 8);

        let line = Line::new(" \t foo");
        assert_eq!(line.indent, 10);
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let line = Line::new("  foo  ");
        assert_eq!(line.content, "foo");
        assert_eq!(line.indent, 2);
    }

    #[test]
    fn test_blank_line() {
        assert!(Line::new("").is_blank);
        assert!(Line::new("   ").is_blank);
        assert!(Line::new("\t").is_blank);
        assert!(!Line::new(" x").is_blank);
    }

    #[test]
    fn test_base_indent_added() {
        let line = Line::with_indent(" foo", 2);
        assert_eq!(line.content, "foo");
        assert_eq!(line.indent, 3);
    }
}
