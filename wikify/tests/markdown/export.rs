//! Export tests for the Markdown-like syntax (HTML → Markdown)

use crate::common::translate;
use insta::assert_snapshot;
use wikify::syntaxes::MarkdownSyntax;

fn markdown(html: &str) -> String {
    translate(html, &MarkdownSyntax)
}

#[test]
fn test_bold() {
    assert_eq!(markdown("<p><strong>hi</strong></p>"), "**hi**\n\n");
}

#[test]
fn test_italic() {
    assert_eq!(markdown("<p><i>hi</i></p>"), "*hi*\n\n");
}

#[test]
fn test_monospace() {
    assert_eq!(markdown("<p><code>x</code></p>"), "`x`\n\n");
}

#[test]
fn test_strike() {
    assert_eq!(markdown("<p><del>old</del></p>"), "~~old~~\n\n");
}

#[test]
fn test_underline_passes_through() {
    // Markdown has no underline; the pass-through emits content unmarked.
    assert_eq!(markdown("<p><u>plain</u></p>"), "plain\n\n");
}

#[test]
fn test_scripts_pass_through() {
    assert_eq!(markdown("<p>x<sup>2</sup></p>"), "x2\n\n");
    assert_eq!(markdown("<p>H<sub>2</sub>O</p>"), "H2O\n\n");
}

#[test]
fn test_headings() {
    assert_eq!(markdown("<h1>Top</h1>"), "# Top\n\n");
    assert_eq!(markdown("<h3>Deeper</h3>"), "### Deeper\n\n");
    assert_eq!(markdown("<h6>Deepest</h6>"), "###### Deepest\n\n");
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(markdown("<hr>"), "---\n\n");
}

#[test]
fn test_line_break() {
    assert_eq!(markdown("<p>a<br>b</p>"), "a  \nb\n\n");
}

#[test]
fn test_unordered_list() {
    assert_eq!(markdown("<ul><li>One</li><li>Two</li></ul>"), "- One\n- Two\n\n");
}

#[test]
fn test_ordered_list_counts() {
    assert_eq!(markdown("<ol><li>x</li><li>y</li></ol>"), "1. x\n2. y\n\n");
}

#[test]
fn test_nested_list_indents() {
    assert_eq!(
        markdown("<ul><li>a<ul><li>b</li></ul></li></ul>"),
        "- a\n    - b\n\n"
    );
}

#[test]
fn test_preformatted_is_fenced() {
    assert_eq!(markdown("<pre>let x = 1;</pre>"), "```\nlet x = 1;\n```\n\n");
}

#[test]
fn test_link() {
    assert_eq!(
        markdown("<p><a href=\"https://example.org\">Example</a></p>"),
        "[Example](https://example.org)\n\n"
    );
}

#[test]
fn test_link_text_keeps_inline_markup() {
    assert_eq!(
        markdown("<p><a href=\"https://example.org\"><em>x</em> y</a></p>"),
        "[*x* y](https://example.org)\n\n"
    );
}

#[test]
fn test_image() {
    assert_eq!(
        markdown("<p><img src=\"pic.png\" alt=\"Pic\"></p>"),
        "![Pic](pic.png)\n\n"
    );
}

#[test]
fn test_kitchensink_document() {
    let html = "<h2>Title</h2>\
                <p>Intro with <b>bold</b> and <code>mono</code>.</p>\
                <ol><li>first</li><li>second</li></ol>\
                <pre>fn main() {}</pre>";
    assert_snapshot!(markdown(html), @r"
    ## Title

    Intro with **bold** and `mono`.

    1. first
    2. second

    ```
    fn main() {}
    ```
    ");
}
