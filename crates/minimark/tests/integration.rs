//! End-to-end conversion through the full parse and render pipeline.

use pretty_assertions::assert_eq;

#[test]
fn test_empty_input() {
    assert_eq!(minimark::to_html(""), "");
    assert_eq!(minimark::to_html("\n\n\n"), "");
    assert_eq!(minimark::to_html("   \n\t\n"), "");
}

#[test]
fn test_paragraph_joins_consecutive_lines() {
    assert_eq!(minimark::to_html("foo\nbar"), "<p>foo bar</p>");
    assert_eq!(minimark::to_html("foo\n\nbar"), "<p>foo</p><p>bar</p>");
}

#[test]
fn test_headings() {
    assert_eq!(minimark::to_html("# Title"), "<h1>Title</h1>");
    assert_eq!(minimark::to_html("### Sub"), "<h3>Sub</h3>");
    assert_eq!(minimark::to_html("###### Deep"), "<h6>Deep</h6>");
}

#[test]
fn test_inline_spans() {
    assert_eq!(minimark::to_html("*foo*"), "<p><em>foo</em></p>");
    assert_eq!(minimark::to_html("**foo**"), "<p><strong>foo</strong></p>");
    assert_eq!(minimark::to_html("~~foo~~"), "<p><del>foo</del></p>");
    assert_eq!(minimark::to_html("`foo`"), "<p><code>foo</code></p>");
}

#[test]
fn test_link() {
    assert_eq!(
        minimark::to_html("[desc](src)"),
        r#"<p><a href="src">desc</a></p>"#
    );
}

#[test]
fn test_bare_link_uses_description_as_target() {
    assert_eq!(
        minimark::to_html("[http://example.com]()"),
        r#"<p><a href="http://example.com">http://example.com</a></p>"#
    );
}

#[test]
fn test_anchor() {
    assert_eq!(
        minimark::to_html("[](#this)"),
        r##"<p><a id="#this"></a></p>"##
    );
}

#[test]
fn test_image() {
    assert_eq!(
        minimark::to_html("![alt](src)"),
        r#"<p><img src="src" alt="alt" /></p>"#
    );
}

#[test]
fn test_quote() {
    assert_eq!(minimark::to_html("> foo"), "<quote><p>foo</p></quote>");
    assert_eq!(
        minimark::to_html("> > foo"),
        "<quote><quote><p>foo</p></quote></quote>"
    );
}

#[test]
fn test_unordered_list() {
    assert_eq!(
        minimark::to_html("* foo\n* bar"),
        "<ul><li><p>foo</p></li><li><p>bar</p></li></ul>"
    );
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        minimark::to_html("! foo\n! bar"),
        "<ol><li><p>foo</p></li><li><p>bar</p></li></ol>"
    );
}

#[test]
fn test_nested_list_renders_inside_parent_item() {
    assert_eq!(
        minimark::to_html("* foo\n  * bar"),
        "<ul><li><p>foo</p><ul><li><p>bar</p></li></ul></li></ul>"
    );
}

#[test]
fn test_list_inside_quote() {
    assert_eq!(
        minimark::to_html("> * foo\n> * bar"),
        "<quote><ul><li><p>foo</p></li><li><p>bar</p></li></ul></quote>"
    );
}

#[test]
fn test_pre_block_keeps_text_verbatim() {
    assert_eq!(
        minimark::to_html("```\nlet x = 1;\n```"),
        "<pre>let x = 1;\n</pre>"
    );
}

#[test]
fn test_pre_option_is_not_rendered() {
    assert_eq!(
        minimark::to_html("```rust\nfn main() {}\n```"),
        "<pre>fn main() {}\n</pre>"
    );
}

#[test]
fn test_pre_preserves_relative_indentation() {
    assert_eq!(
        minimark::to_html("```\nif x {\n    y();\n}\n```"),
        "<pre>if x {\n    y();\n}\n</pre>"
    );
}

#[test]
fn test_unterminated_emphasis_stays_literal() {
    assert_eq!(minimark::to_html("*foo"), "<p>*foo</p>");
    assert_eq!(minimark::to_html("*foo *"), "<p>*foo *</p>");
}

#[test]
fn test_escaped_delimiters_stay_literal() {
    assert_eq!(minimark::to_html(r"\*foo\*"), "<p>*foo*</p>");
}

#[test]
fn test_sample_document() {
    let text = "\
# Release notes

Changes in this *cycle*:

* Faster `scan` loop
* Fixed **two** regressions

> See [the changelog](changelog.html) for details.

```
cargo install minimark
```
";
    let expected = concat!(
        "<h1>Release notes</h1>",
        "<p>Changes in this <em>cycle</em>:</p>",
        "<ul><li><p>Faster <code>scan</code> loop</p></li>",
        "<li><p>Fixed <strong>two</strong> regressions</p></li></ul>",
        "<quote><p>See <a href=\"changelog.html\">the changelog</a> for details.</p></quote>",
        "<pre>cargo install minimark\n</pre>",
    );
    assert_eq!(minimark::to_html(text), expected);
}

#[test]
fn test_conversion_is_deterministic() {
    let text = "# a\n\n* b\n* c\n\n> d";
    let first = minimark::to_html(text);
    for _ in 0..3 {
        assert_eq!(minimark::to_html(text), first);
    }
}

#[test]
fn test_parse_and_render_compose_to_to_html() {
    let text = "some **bold** text";
    let document = minimark::parse(text);
    assert_eq!(minimark::render(&document), minimark::to_html(text));
}
