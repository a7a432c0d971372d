//! Table tests for the Markdown-like syntax

use crate::common::translate;
use wikify::syntaxes::MarkdownSyntax;

fn markdown(html: &str) -> String {
    translate(html, &MarkdownSyntax)
}

#[test]
fn test_single_data_cell() {
    assert_eq!(markdown("<table><tr><td>x</td></tr></table>"), "| x \n\n");
}

#[test]
fn test_header_row_gets_divider() {
    let html = "<table>\
                <tr><th>H1</th><th>H2</th></tr>\
                <tr><td>a</td><td>b</td></tr>\
                </table>";
    assert_eq!(markdown(html), "| H1 | H2 \n|---|---|\n| a | b \n\n");
}

#[test]
fn test_data_only_table_has_no_divider() {
    let html = "<table><tr><td>a</td><td>b</td></tr></table>";
    assert_eq!(markdown(html), "| a | b \n\n");
}

#[test]
fn test_cell_content_keeps_inline_markup() {
    assert_eq!(
        markdown("<table><tr><td><em>x</em></td></tr></table>"),
        "| *x* \n\n"
    );
}
