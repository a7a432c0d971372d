//! Shared helpers and dialect-independent invariant tests.

use proptest::prelude::*;
use wikify::syntaxes::{JspWikiSyntax, MarkdownSyntax};
use wikify::{dom, WikiSyntax};

/// Parse HTML and translate the whole document under the given syntax.
pub fn translate(html: &str, syntax: &dyn WikiSyntax) -> String {
    let doc = dom::parse_html(html);
    wikify::translate_document(&doc, syntax).expect("translation should succeed")
}

/// Byte offsets of each needle in the haystack, in needle order.
fn positions(haystack: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle.as_str())
                .unwrap_or_else(|| panic!("'{needle}' missing from output"))
        })
        .collect()
}

#[test]
fn sibling_output_never_interleaves() {
    // Two paragraphs in a container: the first must be emitted entirely
    // before the second begins.
    let out = translate("<div><p>Alpha</p><p>Beta</p></div>", &JspWikiSyntax);
    let alpha_end = out.find("Alpha").expect("Alpha") + "Alpha".len();
    let beta_start = out.find("Beta").expect("Beta");
    assert!(alpha_end <= beta_start, "siblings interleaved: {out:?}");
}

#[test]
fn nesting_order_is_dialect_independent() {
    let html = "<p><span class=\"bold italic monospace\">x</span></p>";
    assert_eq!(translate(html, &JspWikiSyntax), "__''{{x}}''__\n\n");
    assert_eq!(translate(html, &MarkdownSyntax), "***`x`***\n\n");
}

#[test]
fn dialects_differ_only_in_tokens() {
    let html = "<p><b>a</b> <i>b</i> <code>c</code></p>";
    let classic = translate(html, &JspWikiSyntax);
    let markdown = translate(html, &MarkdownSyntax);

    assert_eq!(classic, "__a__ ''b'' {{c}}\n\n");
    assert_eq!(markdown, "**a** *b* `c`\n\n");
}

#[test]
fn newline_between_inline_siblings_separates_words() {
    // A newline between inline siblings renders as a space in HTML, so the
    // separator must survive translation.
    let html = "<p><b>alpha</b>\n<b>beta</b></p>";
    assert_eq!(translate(html, &JspWikiSyntax), "__alpha__ __beta__\n\n");
    assert_eq!(translate(html, &MarkdownSyntax), "**alpha** **beta**\n\n");

    // Between blocks the same newline is source formatting only.
    assert_eq!(
        translate("<p>A</p>\n<p>B</p>", &JspWikiSyntax),
        "A\n\nB\n\n"
    );
}

proptest! {
    /// Ordering invariant: emitted text reflects a pre-order, depth-first,
    /// left-to-right visitation, so sibling paragraphs keep their source
    /// order under every dialect.
    #[test]
    fn paragraph_order_is_preserved(words in proptest::collection::vec("[a-z]{2,8}", 2..6)) {
        let html: String = words
            .iter()
            .enumerate()
            .map(|(i, w)| format!("<p>{w}{i}</p>"))
            .collect();
        let tagged: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(i, w)| format!("{w}{i}"))
            .collect();

        for syntax in [&JspWikiSyntax as &dyn WikiSyntax, &MarkdownSyntax] {
            let out = translate(&html, syntax);
            let found = positions(&out, &tagged);
            for pair in found.windows(2) {
                prop_assert!(pair[0] < pair[1], "order violated in {out:?}");
            }
        }
    }

    /// Translation is deterministic: same tree, same dialect, same output.
    #[test]
    fn translation_is_deterministic(word in "[a-z]{1,12}") {
        let html = format!("<p><b>{word}</b></p>");
        let first = translate(&html, &MarkdownSyntax);
        let second = translate(&html, &MarkdownSyntax);
        prop_assert_eq!(first, second);
    }
}
