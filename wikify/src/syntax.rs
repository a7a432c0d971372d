//! Wiki syntax definition
//!
//! This module defines the WikiSyntax trait that all target syntaxes implement.
//! A syntax is primarily data: a vocabulary table mapping each construct to its
//! literal open/close tokens. The remaining trait methods cover the few places
//! where a construct's structural behavior differs between syntaxes and come
//! with plain-text fallbacks, so a minimal syntax only needs a name and a
//! vocabulary.

use serde::Serialize;

/// A semantic formatting category, independent of any syntax's literal tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Bold,
    Italic,
    Monospace,
    Strike,
    Underline,
    Subscript,
    Superscript,
    TableHeaderCell,
    TableDataCell,
}

/// The literal opening and closing strings realizing one construct.
///
/// The close token may be empty where the syntax has none, e.g. a table-cell
/// leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPair {
    pub open: &'static str,
    pub close: &'static str,
}

impl TokenPair {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        TokenPair { open, close }
    }

    /// Deliberate pass-through for constructs a syntax does not mark up.
    pub const PASS_THROUGH: TokenPair = TokenPair::new("", "");
}

/// Machine-readable description of a syntax, used for listings.
#[derive(Debug, Clone, Serialize)]
pub struct SyntaxDescriptor {
    pub name: String,
    pub description: String,
    pub file_extensions: Vec<String>,
}

/// Trait for target wiki syntaxes
///
/// Implementors supply the literal tokens of one wiki dialect. The shared
/// translator consults the syntax during emission; the traversal itself never
/// changes per syntax.
///
/// # Examples
///
/// ```ignore
/// struct MySyntax;
///
/// impl WikiSyntax for MySyntax {
///     fn name(&self) -> &str {
///         "my-syntax"
///     }
///
///     fn tokens(&self, construct: Construct) -> TokenPair {
///         match construct {
///             Construct::Bold => TokenPair::new("*", "*"),
///             _ => TokenPair::PASS_THROUGH,
///         }
///     }
/// }
/// ```
pub trait WikiSyntax: Send + Sync {
    /// The name of this syntax (e.g., "jspwiki", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this syntax
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this syntax (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic syntax detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Vocabulary table: the open/close tokens for each construct.
    ///
    /// Implementations must be total over [`Construct`]; a construct the
    /// syntax has no markup for gets [`TokenPair::PASS_THROUGH`], never a
    /// missing arm. Lookups are pure: the same construct always yields the
    /// same tokens.
    fn tokens(&self, construct: Construct) -> TokenPair;

    /// Opening marker and trailing text for a heading at `level` (1-based).
    fn heading(&self, _level: u8) -> TokenPair {
        TokenPair::new("", "\n\n")
    }

    /// Markup for a forced line break.
    fn line_break(&self) -> &'static str {
        "\n"
    }

    /// Markup for a horizontal rule.
    fn horizontal_rule(&self) -> &'static str {
        "\n"
    }

    /// Fence tokens around a preformatted block.
    fn preformatted(&self) -> TokenPair {
        TokenPair::new("", "\n")
    }

    /// Marker emitted before a list item.
    ///
    /// `depth` is the 1-based list nesting depth, `index` the 1-based position
    /// within an ordered list.
    fn list_item_prefix(&self, ordered: bool, _depth: usize, index: usize) -> String {
        if ordered {
            format!("{index}. ")
        } else {
            "- ".to_string()
        }
    }

    /// Markup for a hyperlink.
    fn link(&self, text: &str, href: &str) -> String {
        if text.is_empty() {
            href.to_string()
        } else {
            format!("{text} ({href})")
        }
    }

    /// Markup for an inline image.
    fn image(&self, src: &str, alt: &str) -> String {
        if alt.is_empty() {
            src.to_string()
        } else {
            alt.to_string()
        }
    }

    /// Divider row emitted after a table header row, if the syntax needs one.
    fn table_header_divider(&self, _columns: usize) -> Option<String> {
        None
    }

    /// Descriptor used by registries and listings.
    fn descriptor(&self) -> SyntaxDescriptor {
        SyntaxDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            file_extensions: self
                .file_extensions()
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}
