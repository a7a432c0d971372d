//! Markdown-like syntax
//!
//! CommonMark-flavored output: `**bold**`, `*italic*`, backtick monospace,
//! `~~strike~~`, pipe tables with a divider row after the header, fenced
//! preformatted blocks. Underline and sub/superscript have no Markdown
//! equivalent and pass through deliberately.

use crate::syntax::{Construct, TokenPair, WikiSyntax};

pub struct MarkdownSyntax;

impl WikiSyntax for MarkdownSyntax {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown-like wiki syntax"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn tokens(&self, construct: Construct) -> TokenPair {
        match construct {
            Construct::Bold => TokenPair::new("**", "**"),
            Construct::Italic => TokenPair::new("*", "*"),
            Construct::Monospace => TokenPair::new("`", "`"),
            Construct::Strike => TokenPair::new("~~", "~~"),
            Construct::Underline => TokenPair::PASS_THROUGH,
            Construct::Subscript => TokenPair::PASS_THROUGH,
            Construct::Superscript => TokenPair::PASS_THROUGH,
            Construct::TableHeaderCell => TokenPair::new("| ", ""),
            Construct::TableDataCell => TokenPair::new("| ", ""),
        }
    }

    fn heading(&self, level: u8) -> TokenPair {
        match level {
            1 => TokenPair::new("# ", "\n\n"),
            2 => TokenPair::new("## ", "\n\n"),
            3 => TokenPair::new("### ", "\n\n"),
            4 => TokenPair::new("#### ", "\n\n"),
            5 => TokenPair::new("##### ", "\n\n"),
            _ => TokenPair::new("###### ", "\n\n"),
        }
    }

    fn line_break(&self) -> &'static str {
        "  \n"
    }

    fn horizontal_rule(&self) -> &'static str {
        "---\n\n"
    }

    fn preformatted(&self) -> TokenPair {
        TokenPair::new("```\n", "```\n\n")
    }

    fn list_item_prefix(&self, ordered: bool, depth: usize, index: usize) -> String {
        let indent = "    ".repeat(depth.saturating_sub(1));
        if ordered {
            format!("{indent}{index}. ")
        } else {
            format!("{indent}- ")
        }
    }

    fn link(&self, text: &str, href: &str) -> String {
        let text = if text.is_empty() { href } else { text };
        format!("[{text}]({href})")
    }

    fn image(&self, src: &str, alt: &str) -> String {
        format!("![{alt}]({src})")
    }

    fn table_header_divider(&self, columns: usize) -> Option<String> {
        if columns == 0 {
            return None;
        }
        Some(format!("|{}", "---|".repeat(columns)))
    }
}
