//! The core transducer
//!
//! `Translator` walks a parsed element tree in strict pre-order, depth-first,
//! left to right, and appends markup to its owned output sink. Element tags
//! are classified into structural constructs with dedicated emission rules
//! (cells, headings, lists, preformatted blocks), inline style spans that go
//! through the decorator chain, and generic containers that simply recurse.
//! The preformatted-context stack is the only state carried across the walk;
//! everything else is a pure function of the current node.

mod context;
mod inline;

pub use context::PreformattedStack;

use markup5ever_rcdom::{Handle, NodeData};

use crate::css::{self, StyleClassifier};
use crate::dom;
use crate::error::TranslateError;
use crate::syntax::{Construct, WikiSyntax};
use inline::ElementDecoration;

/// Recursion guard for malformed or adversarial input. Well-formed trees from
/// the upstream parser stay far below this.
const MAX_DEPTH: usize = 256;

struct ListState {
    ordered: bool,
    index: usize,
}

/// One translation of a document or fragment.
///
/// Create a fresh translator per translation; instances are not meant to be
/// reused or shared. The syntax is read-only and may be shared freely.
pub struct Translator<'a> {
    syntax: &'a dyn WikiSyntax,
    classify: StyleClassifier,
    out: String,
    pre: PreformattedStack,
    lists: Vec<ListState>,
    depth: usize,
}

impl<'a> Translator<'a> {
    pub fn new(syntax: &'a dyn WikiSyntax) -> Self {
        Self::with_classifier(syntax, css::classify)
    }

    /// Use a custom style classifier instead of the built-in CSS one.
    pub fn with_classifier(syntax: &'a dyn WikiSyntax, classify: StyleClassifier) -> Self {
        Translator {
            syntax,
            classify,
            out: String::new(),
            pre: PreformattedStack::new(),
            lists: Vec::new(),
            depth: 0,
        }
    }

    /// Translate one node (and its subtree) into the output sink.
    pub fn translate(&mut self, node: &Handle) -> Result<(), TranslateError> {
        if self.depth >= MAX_DEPTH {
            return Err(TranslateError::MaxDepthExceeded(MAX_DEPTH));
        }
        self.depth += 1;
        let result = self.translate_node(node);
        self.depth -= 1;
        result
    }

    /// Consume the translator and return the emitted markup.
    pub fn finish(self) -> String {
        self.out
    }

    fn translate_node(&mut self, node: &Handle) -> Result<(), TranslateError> {
        match &node.data {
            NodeData::Document => self.translate_children(node),
            NodeData::Text { contents } => {
                self.emit_text(&contents.borrow());
                Ok(())
            }
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref().to_string();
                self.translate_element(node, &tag)
            }
            // Comments, doctypes and processing instructions carry no
            // formatting intent.
            _ => Ok(()),
        }
    }

    fn translate_element(&mut self, node: &Handle, tag: &str) -> Result<(), TranslateError> {
        match tag {
            // Non-content subtrees.
            "head" | "script" | "style" | "title" => Ok(()),

            "p" => {
                self.translate_children(node)?;
                self.emit("\n\n");
                Ok(())
            }

            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = heading_level(tag);
                let pair = self.syntax.heading(level);
                self.emit(pair.open);
                self.translate_children(node)?;
                self.emit(pair.close);
                Ok(())
            }

            "br" => {
                self.emit(self.syntax.line_break());
                Ok(())
            }

            "hr" => {
                self.emit(self.syntax.horizontal_rule());
                Ok(())
            }

            "pre" => self.translate_preformatted(node),

            "table" => {
                self.translate_children(node)?;
                self.emit("\n");
                Ok(())
            }
            "thead" | "tbody" | "tfoot" => self.translate_children(node),
            "tr" => self.translate_table_row(node),
            "th" => self.decorate_cell(node, Construct::TableHeaderCell),
            "td" => self.decorate_cell(node, Construct::TableDataCell),

            "ul" => self.translate_list(node, false),
            "ol" => self.translate_list(node, true),
            "li" => self.translate_list_item(node),

            // Inline style spans: tag intent and CSS intent merge into the
            // descriptor's pre-computed flags, then the chain runs.
            "b" | "strong" | "i" | "em" | "tt" | "code" | "span" | "font" => {
                let mut flags = (self.classify)(node);
                match tag {
                    "b" | "strong" => flags.bold = true,
                    "i" | "em" => flags.italic = true,
                    "tt" | "code" => flags.monospace = true,
                    _ => {}
                }
                self.decorate_styled(&ElementDecoration {
                    element: node.clone(),
                    flags,
                })
            }

            "strike" | "s" | "del" => self.decorate_wrapped(node, Construct::Strike),
            "u" => self.decorate_wrapped(node, Construct::Underline),
            "sub" => self.decorate_wrapped(node, Construct::Subscript),
            "sup" => self.decorate_wrapped(node, Construct::Superscript),

            "a" => self.translate_link(node),
            "img" => {
                let src = dom::attr(node, "src").unwrap_or_default();
                if !src.is_empty() {
                    let alt = dom::attr(node, "alt").unwrap_or_default();
                    let markup = self.syntax.image(&src, &alt);
                    self.emit(&markup);
                }
                Ok(())
            }

            // Generic container: no markup of its own, recurse in document
            // order.
            _ => self.translate_children(node),
        }
    }

    pub(crate) fn translate_children(&mut self, node: &Handle) -> Result<(), TranslateError> {
        for child in dom::children(node) {
            self.translate(&child)?;
        }
        Ok(())
    }

    fn translate_preformatted(&mut self, node: &Handle) -> Result<(), TranslateError> {
        let pair = self.syntax.preformatted();
        self.emit(pair.open);
        // The marker must come off on every exit path, error included.
        self.pre.enter("pre");
        let result = self.translate_children(node);
        self.pre.exit();
        result?;
        self.ensure_newline();
        self.emit(pair.close);
        Ok(())
    }

    /// Structural cell decorator: open token, full recursive translation of
    /// the cell subtree, close token. The single trailing separator space is
    /// a layout aid for the generated markup and is suppressed inside
    /// preformatted regions so verbatim content stays intact.
    fn decorate_cell(&mut self, node: &Handle, construct: Construct) -> Result<(), TranslateError> {
        let pair = self.syntax.tokens(construct);
        self.emit(pair.open);
        self.translate_children(node)?;
        self.emit(pair.close);
        if !self.pre.is_inside() {
            self.emit(" ");
        }
        Ok(())
    }

    fn translate_table_row(&mut self, node: &Handle) -> Result<(), TranslateError> {
        let mut columns = 0;
        let mut header = false;
        for child in dom::children(node) {
            match dom::tag_name(&child) {
                Some("th") => {
                    header = true;
                    columns += 1;
                }
                Some("td") => columns += 1,
                _ => {}
            }
            self.translate(&child)?;
        }
        self.emit("\n");
        if header && !self.pre.is_inside() {
            if let Some(divider) = self.syntax.table_header_divider(columns) {
                self.emit(&divider);
                self.emit("\n");
            }
        }
        Ok(())
    }

    fn translate_list(&mut self, node: &Handle, ordered: bool) -> Result<(), TranslateError> {
        // Item markers are only valid at the start of a line.
        if !self.out.is_empty() {
            self.ensure_newline();
        }
        self.lists.push(ListState { ordered, index: 0 });
        let result = self.translate_children(node);
        self.lists.pop();
        result?;
        if self.lists.is_empty() {
            self.emit("\n");
        }
        Ok(())
    }

    fn translate_list_item(&mut self, node: &Handle) -> Result<(), TranslateError> {
        let depth = self.lists.len().max(1);
        let (ordered, index) = match self.lists.last_mut() {
            Some(state) => {
                state.index += 1;
                (state.ordered, state.index)
            }
            // Stray item outside any list; treat as a single unordered entry.
            None => (false, 1),
        };
        let prefix = self.syntax.list_item_prefix(ordered, depth, index);
        self.emit(&prefix);
        self.translate_children(node)?;
        self.ensure_newline();
        Ok(())
    }

    fn translate_link(&mut self, node: &Handle) -> Result<(), TranslateError> {
        let href = dom::attr(node, "href").unwrap_or_default();
        if href.is_empty() {
            // Anchors without a target carry only their content.
            return self.translate_children(node);
        }
        // Link text goes through the full translator so inline markup inside
        // the anchor survives; the sink is swapped back on error paths too.
        let saved = std::mem::take(&mut self.out);
        let result = self.translate_children(node);
        let text = std::mem::replace(&mut self.out, saved);
        result?;
        let text = collapse_whitespace(text.trim());
        let markup = self.syntax.link(&text, &href);
        self.emit(&markup);
        Ok(())
    }

    fn emit(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn ensure_newline(&mut self) {
        if !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    /// Text emission: verbatim inside preformatted regions; outside,
    /// whitespace runs collapse to a single space. A whitespace-only node
    /// still separates words when emission sits mid-line (a newline between
    /// inline siblings renders as a space), and is dropped right after a
    /// block boundary, where it is source formatting only.
    fn emit_text(&mut self, text: &str) {
        if self.pre.is_inside() {
            self.out.push_str(text);
            return;
        }
        if text.trim().is_empty() {
            if !self.out.is_empty() && !self.out.ends_with(char::is_whitespace) {
                self.out.push(' ');
            }
            return;
        }
        self.out.push_str(&collapse_whitespace(text));
    }

    /// Flags of the active style chain context, exposed for tests.
    #[cfg(test)]
    fn styled_flags(&self, node: &Handle) -> css::StyleFlags {
        (self.classify)(node)
    }
}

fn heading_level(tag: &str) -> u8 {
    match tag {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        _ => 6,
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}
