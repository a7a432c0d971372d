//! Table tests for the classic syntax

use crate::common::translate;
use wikify::syntaxes::JspWikiSyntax;

fn jspwiki(html: &str) -> String {
    translate(html, &JspWikiSyntax)
}

#[test]
fn test_header_and_data_rows() {
    let html = "<table>\
                <tr><th>H1</th><th>H2</th></tr>\
                <tr><td>a</td><td>b</td></tr>\
                </table>";
    assert_eq!(jspwiki(html), "|| H1 || H2 \n| a | b \n\n");
}

#[test]
fn test_data_cell_gets_one_trailing_space() {
    assert_eq!(jspwiki("<table><tr><td>x</td></tr></table>"), "| x \n\n");
}

#[test]
fn test_cell_content_keeps_inline_markup() {
    assert_eq!(
        jspwiki("<table><tr><td><b>x</b> y</td></tr></table>"),
        "| __x__ y \n\n"
    );
}

#[test]
fn test_explicit_tbody_and_thead_are_transparent() {
    let html = "<table>\
                <thead><tr><th>H</th></tr></thead>\
                <tbody><tr><td>d</td></tr></tbody>\
                </table>";
    assert_eq!(jspwiki(html), "|| H \n| d \n\n");
}
