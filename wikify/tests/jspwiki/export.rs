//! Export tests for the classic syntax (HTML → JSPWiki markup)

use crate::common::translate;
use insta::assert_snapshot;
use wikify::syntaxes::JspWikiSyntax;

fn jspwiki(html: &str) -> String {
    translate(html, &JspWikiSyntax)
}

// ============================================================================
// INLINE STYLE TESTS
// ============================================================================

#[test]
fn test_bold() {
    assert_eq!(jspwiki("<p><b>hi</b></p>"), "__hi__\n\n");
}

#[test]
fn test_bold_from_css_class() {
    assert_eq!(jspwiki("<p><span class=\"bold\">hi</span></p>"), "__hi__\n\n");
}

#[test]
fn test_italic() {
    assert_eq!(jspwiki("<p><em>hi</em></p>"), "''hi''\n\n");
}

#[test]
fn test_monospace() {
    assert_eq!(jspwiki("<p><tt>x</tt></p>"), "{{x}}\n\n");
}

#[test]
fn test_nested_tags_nest_markup() {
    assert_eq!(jspwiki("<p><b><i>text</i></b></p>"), "__''text''__\n\n");
}

#[test]
fn test_strike() {
    assert_eq!(jspwiki("<p><strike>old</strike></p>"), "%%strike old/%\n\n");
}

#[test]
fn test_underline_and_scripts() {
    assert_eq!(jspwiki("<p><u>u</u></p>"), "%%underline u/%\n\n");
    assert_eq!(jspwiki("<p>x<sup>2</sup></p>"), "x%%sup 2/%\n\n");
    assert_eq!(jspwiki("<p>H<sub>2</sub>O</p>"), "H%%sub 2/%O\n\n");
}

#[test]
fn test_inline_style_attribute() {
    assert_eq!(
        jspwiki("<p><span style=\"font-weight: bold\">hi</span></p>"),
        "__hi__\n\n"
    );
}

// ============================================================================
// BLOCK TESTS
// ============================================================================

#[test]
fn test_headings_clamp() {
    assert_eq!(jspwiki("<h1>Top</h1>"), "!!! Top\n\n");
    assert_eq!(jspwiki("<h2>Mid</h2>"), "!! Mid\n\n");
    assert_eq!(jspwiki("<h4>Deep</h4>"), "! Deep\n\n");
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(jspwiki("<p>a</p><hr><p>b</p>"), "a\n\n----\n\nb\n\n");
}

#[test]
fn test_line_break() {
    assert_eq!(jspwiki("<p>a<br>b</p>"), "a\\\\\nb\n\n");
}

#[test]
fn test_unordered_list() {
    assert_eq!(
        jspwiki("<ul><li>One</li><li>Two</li></ul>"),
        "* One\n* Two\n\n"
    );
}

#[test]
fn test_ordered_list() {
    assert_eq!(jspwiki("<ol><li>x</li><li>y</li></ol>"), "# x\n# y\n\n");
}

#[test]
fn test_nested_list_markers_deepen() {
    assert_eq!(
        jspwiki("<ul><li>a<ul><li>b</li></ul></li></ul>"),
        "* a\n** b\n\n"
    );
}

#[test]
fn test_preformatted_keeps_whitespace() {
    assert_eq!(
        jspwiki("<pre>code  spaced\n  line2</pre>"),
        "{{{\ncode  spaced\n  line2\n}}}\n\n"
    );
}

#[test]
fn test_link() {
    assert_eq!(
        jspwiki("<p><a href=\"https://example.org\">Example</a></p>"),
        "[Example|https://example.org]\n\n"
    );
}

#[test]
fn test_link_text_keeps_inline_markup() {
    assert_eq!(
        jspwiki("<p><a href=\"https://example.org\"><b>x</b> y</a></p>"),
        "[__x__ y|https://example.org]\n\n"
    );
}

#[test]
fn test_link_text_matching_target_collapses() {
    assert_eq!(
        jspwiki("<p><a href=\"https://example.org\">https://example.org</a></p>"),
        "[https://example.org]\n\n"
    );
}

#[test]
fn test_image() {
    assert_eq!(
        jspwiki("<p><img src=\"pic.png\" alt=\"Pic\"></p>"),
        "[{Image src='pic.png'}]\n\n"
    );
}

#[test]
fn test_intertag_whitespace_is_dropped() {
    assert_eq!(jspwiki("<p>A</p>\n    <p>B</p>"), "A\n\nB\n\n");
}

#[test]
fn test_kitchensink_document() {
    let html = "<h1>Title</h1>\
                <p>Intro with <b>bold</b> and <i>italic</i>.</p>\
                <ul><li>One</li><li>Two</li></ul>\
                <hr>\
                <pre>let x = 1;</pre>";
    assert_snapshot!(jspwiki(html), @r"
    !!! Title

    Intro with __bold__ and ''italic''.

    * One
    * Two

    ----

    {{{
    let x = 1;
    }}}
    ");
}
