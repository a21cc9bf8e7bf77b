//! Inline scanner: one logical line of text to a sequence of inline nodes.
//!
//! A single left-to-right pass over char positions. Closed nodes accumulate
//! alongside a pending run of literal characters, which is flushed into a
//! [`Inline::Plain`] whenever a styled construct closes and at end of input.
//! Malformed constructs never fail: an opener without a valid close falls
//! back to literal text and scanning resumes one position later.

use minimark_ast::Inline;

/// Scan a line's worth of text into inline nodes.
pub(crate) fn scan(text: &str) -> Vec<Inline> {
    let chars: Vec<char> = text.chars().collect();
    let max = chars.len();
    scan_range(&chars, 0, max)
}

/// Scan the char range `[start, max)`.
///
/// Delimited constructs recurse here with the interior bounds; the cursor
/// is strictly non-decreasing, so the scan always terminates.
fn scan_range(chars: &[char], start: usize, max: usize) -> Vec<Inline> {
    let mut frags = Fragments::default();
    let mut n = start;
    while n < max {
        n = scan_step(chars, n, max, &mut frags);
    }
    frags.finish()
}

/// Handle one construct (or one literal char) at position `n`.
///
/// Returns the position to resume from. Construct priority: bold before
/// emphasis so `**` is not read as two emphasis openers.
fn scan_step(chars: &[char], n: usize, max: usize, frags: &mut Fragments) -> usize {
    if matches_at(chars, n, max, "**") {
        delimited(chars, n, max, "**", false, frags, |c, first, last| {
            Inline::Bold(scan_range(c, first, last))
        })
    } else if matches_at(chars, n, max, "__") {
        delimited(chars, n, max, "__", false, frags, |c, first, last| {
            Inline::Bold(scan_range(c, first, last))
        })
    } else if matches_at(chars, n, max, "*") {
        delimited(chars, n, max, "*", false, frags, |c, first, last| {
            Inline::Emph(scan_range(c, first, last))
        })
    } else if matches_at(chars, n, max, "_") {
        delimited(chars, n, max, "_", false, frags, |c, first, last| {
            Inline::Emph(scan_range(c, first, last))
        })
    } else if matches_at(chars, n, max, "`") {
        delimited(chars, n, max, "`", true, frags, |c, first, last| {
            Inline::Code(unescape_span(c, first, last))
        })
    } else if matches_at(chars, n, max, "~~") {
        delimited(chars, n, max, "~~", false, frags, |c, first, last| {
            Inline::Struck(scan_range(c, first, last))
        })
    } else if matches_at(chars, n, max, "![") {
        maybe_link(chars, n + 2, max, "![", frags, |r| Inline::Image {
            src: r.src,
            alt: r.desc,
        })
    } else if matches_at(chars, n, max, "[") {
        maybe_link(chars, n + 1, max, "[", frags, Ref::resolve)
    } else if chars[n] == '\\' && n + 1 < max {
        // Escape: the next char is literal. A trailing backslash has
        // nothing to escape and falls through as a literal itself.
        frags.put(chars[n + 1]);
        n + 2
    } else {
        frags.put(chars[n]);
        n + 1
    }
}

/// Close a symmetric delimiter pair opened at `n`.
///
/// On success the interior `[first, last)` is handed to `build` and the
/// cursor resumes past the close. Without a valid close, or when the
/// interior starts or ends with whitespace (unless `allow_space`, which
/// only inline code gets), the opener char is emitted literally and the
/// cursor advances by one.
fn delimited(
    chars: &[char],
    n: usize,
    max: usize,
    delim: &str,
    allow_space: bool,
    frags: &mut Fragments,
    build: impl FnOnce(&[char], usize, usize) -> Inline,
) -> usize {
    let dlen = delim.chars().count();
    let Some(close) = scan_past(chars, delim, max, n + dlen) else {
        frags.put(chars[n]);
        return n + 1;
    };

    let first = n + dlen;
    let last = close - dlen;

    // For an empty interior these probes land on the delimiters themselves,
    // which accepts the match (`****` closes as empty bold).
    if !allow_space && (chars[first].is_whitespace() || chars[last - 1].is_whitespace()) {
        frags.put(chars[n]);
        return n + 1;
    }

    frags.close_with(build(chars, first, last));
    close
}

/// Find the next unescaped occurrence of `delim` starting at `from`.
///
/// The occurrence must start before `max` (it may extend past it). Returns
/// the position just past the close. A candidate preceded by a backslash is
/// skipped and the search retries one position later.
fn scan_past(chars: &[char], delim: &str, max: usize, from: usize) -> Option<usize> {
    let needle: Vec<char> = delim.chars().collect();
    let mut m = from;
    loop {
        let idx = find_from(chars, &needle, m)?;
        if idx >= max {
            return None;
        }
        if idx == 0 || chars[idx - 1] != '\\' {
            return Some(idx + needle.len());
        }
        m = idx + 1;
    }
}

/// First occurrence of `needle` at position >= `from`.
fn find_from(chars: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || chars.len() < needle.len() {
        return None;
    }
    (from..=chars.len() - needle.len()).find(|&i| chars[i..i + needle.len()] == *needle)
}

/// Attempt a `[desc](src)` / `![alt](src)` construct.
///
/// `n` is the content position just past the opener. The `]` must be
/// immediately followed by `(`; if any piece is missing the opener is
/// emitted literally and scanning resumes at `n`, so the bracketed text is
/// re-scanned as ordinary content.
fn maybe_link(
    chars: &[char],
    n: usize,
    max: usize,
    opener: &str,
    frags: &mut Fragments,
    build: impl FnOnce(Ref) -> Inline,
) -> usize {
    let Some(end_of_desc) = scan_past(chars, "]", max, n) else {
        frags.put_str(opener);
        return n;
    };
    if chars.get(end_of_desc) != Some(&'(') {
        frags.put_str(opener);
        return n;
    }
    let Some(end_of_uri) = scan_past(chars, ")", max, end_of_desc + 1) else {
        frags.put_str(opener);
        return n;
    };

    let reference = Ref {
        src: unescape_span(chars, end_of_desc + 1, end_of_uri - 1),
        desc: unescape_span(chars, n, end_of_desc - 1),
    };
    frags.close_with(build(reference));
    end_of_uri
}

/// True when `delim` occurs at `n` and fits inside the scan bound.
fn matches_at(chars: &[char], n: usize, max: usize, delim: &str) -> bool {
    let dlen = delim.chars().count();
    n + dlen <= max && delim.chars().zip(&chars[n..n + dlen]).all(|(d, &c)| d == c)
}

/// Extract `[first, last)`, trim it, and unescape.
fn unescape_span(chars: &[char], first: usize, last: usize) -> String {
    let span: String = chars[first..last].iter().collect();
    unescape(span.trim())
}

/// Drop every backslash except one in final position.
///
/// A trailing backslash is kept verbatim — it escapes nothing, so there is
/// nothing to remove.
fn unescape(s: &str) -> String {
    let len = s.chars().count();
    s.chars()
        .enumerate()
        .filter(|&(i, ch)| i + 1 == len || ch != '\\')
        .map(|(_, ch)| ch)
        .collect()
}

/// Accumulator for closed nodes plus the pending literal run.
#[derive(Default)]
struct Fragments {
    closed: Vec<Inline>,
    pending: String,
}

impl Fragments {
    fn put(&mut self, c: char) {
        self.pending.push(c);
    }

    fn put_str(&mut self, s: &str) {
        self.pending.push_str(s);
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.closed
                .push(Inline::Plain(std::mem::take(&mut self.pending)));
        }
    }

    fn close_with(&mut self, node: Inline) {
        self.flush();
        self.closed.push(node);
    }

    fn finish(mut self) -> Vec<Inline> {
        self.flush();
        self.closed
    }
}

/// Unescaped, trimmed `src`/`desc` pair of a bracket construct.
struct Ref {
    src: String,
    desc: String,
}

impl Ref {
    /// Resolve a non-image bracket construct.
    fn resolve(self) -> Inline {
        if self.src.is_empty() && self.desc.is_empty() {
            Inline::Plain(String::new())
        } else if self.src.is_empty() {
            Inline::Link {
                src: self.desc.clone(),
                desc: self.desc,
            }
        } else if self.desc.is_empty() && self.src.starts_with('#') {
            Inline::Anchor(self.src)
        } else {
            Inline::Link {
                src: self.src,
                desc: self.desc,
            }
        }
    }
}
