//! Classic wiki syntax
//!
//! The asterisk/underscore dialect of classic JSPWiki markup: `__bold__`,
//! `''italic''`, `{{monospace}}`, `%%style ... /%` spans, `||`/`|` table
//! markers, `!!!`-style headings and `{{{ }}}` preformatted fences.

use crate::syntax::{Construct, TokenPair, WikiSyntax};

pub struct JspWikiSyntax;

impl WikiSyntax for JspWikiSyntax {
    fn name(&self) -> &str {
        "jspwiki"
    }

    fn description(&self) -> &str {
        "Classic JSPWiki wiki syntax"
    }

    fn file_extensions(&self) -> &[&str] {
        &["jspwiki", "wiki"]
    }

    fn tokens(&self, construct: Construct) -> TokenPair {
        match construct {
            Construct::Bold => TokenPair::new("__", "__"),
            Construct::Italic => TokenPair::new("''", "''"),
            Construct::Monospace => TokenPair::new("{{", "}}"),
            Construct::Strike => TokenPair::new("%%strike ", "/%"),
            Construct::Underline => TokenPair::new("%%underline ", "/%"),
            Construct::Subscript => TokenPair::new("%%sub ", "/%"),
            Construct::Superscript => TokenPair::new("%%sup ", "/%"),
            Construct::TableHeaderCell => TokenPair::new("|| ", ""),
            Construct::TableDataCell => TokenPair::new("| ", ""),
        }
    }

    fn heading(&self, level: u8) -> TokenPair {
        // The classic syntax only has three heading sizes; deeper levels
        // clamp to the smallest.
        match level {
            1 => TokenPair::new("!!! ", "\n\n"),
            2 => TokenPair::new("!! ", "\n\n"),
            _ => TokenPair::new("! ", "\n\n"),
        }
    }

    fn line_break(&self) -> &'static str {
        "\\\\\n"
    }

    fn horizontal_rule(&self) -> &'static str {
        "----\n\n"
    }

    fn preformatted(&self) -> TokenPair {
        TokenPair::new("{{{\n", "}}}\n\n")
    }

    fn list_item_prefix(&self, ordered: bool, depth: usize, _index: usize) -> String {
        let marker = if ordered { '#' } else { '*' };
        let mut prefix: String = std::iter::repeat(marker).take(depth).collect();
        prefix.push(' ');
        prefix
    }

    fn link(&self, text: &str, href: &str) -> String {
        if text.is_empty() || text == href {
            format!("[{href}]")
        } else {
            format!("[{text}|{href}]")
        }
    }

    fn image(&self, src: &str, _alt: &str) -> String {
        format!("[{{Image src='{src}'}}]")
    }
}
