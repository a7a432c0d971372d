//! HTML to wiki markup translation
//!
//!     This crate walks a parsed XHTML element tree and emits equivalent markup text in one of
//!     several pluggable wiki syntaxes (classic JSPWiki-style markup and a Markdown-like syntax
//!     are built in).
//!
//!     TLDR: for syntax authors:
//!         - The translator never changes per syntax. A syntax is a vocabulary (construct ->
//!           open/close tokens) plus, only where a construct's structural behavior genuinely
//!           differs, a narrow override on the WikiSyntax trait.
//!         - Adding a syntax means implementing WikiSyntax and registering it. Nothing else.
//!         - A syntax that has no markup for a construct provides a deliberate empty-token
//!           pass-through, never a missing arm.
//!
//! Architecture
//!
//!     The core is a small compiler backend: a recursive transducer over the element tree with
//!     context-sensitive emission rules. The walk is strictly pre-order, depth-first, left to
//!     right, so emitted markup always follows source document order. The only state carried
//!     across the walk is the preformatted-context stack, which records whether the current
//!     emission point sits inside verbatim content.
//!
//!     This is a pure lib, that is, it powers the wikify-cli but is shell agnostic; no code here
//!     should suppose a shell environment, be it to std print, env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # TranslateError
//!     ├── syntax.rs               # WikiSyntax trait, Construct, TokenPair
//!     ├── registry.rs             # SyntaxRegistry for discovery and selection
//!     ├── css.rs                  # style-flag classification (the upstream CSS collaborator)
//!     ├── dom.rs                  # element tree access, boundary to the html5ever parser
//!     ├── translator
//!     │   ├── mod.rs              # the recursive transducer
//!     │   ├── context.rs          # preformatted-context stack
//!     │   └── inline.rs           # inline style decorator chain
//!     ├── syntaxes
//!     │   ├── jspwiki.rs
//!     │   └── markdown.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <syntax>
//!         ├── export.rs
//!         └── table.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Element Trees
//!
//!     The input tree is the rcdom DOM from the html5ever ecosystem. Parsing HTML is not this
//!     crate's job; the dom module wraps the parser purely as the upstream collaborator that
//!     produces trees for the translator (and for tests). The translator never mutates a tree.
//!
//! Concurrency
//!
//!     A Translator is created fresh per translation and is not shared. Syntaxes are immutable
//!     and safely shared across concurrent translations of different documents.

pub mod css;
pub mod dom;
pub mod error;
pub mod registry;
pub mod syntax;
pub mod syntaxes;
pub mod translator;

pub use error::TranslateError;
pub use registry::SyntaxRegistry;
pub use syntax::{Construct, SyntaxDescriptor, TokenPair, WikiSyntax};
pub use translator::Translator;

use markup5ever_rcdom::Handle;

/// Translate a whole parsed document to wiki markup under the given syntax.
///
/// The translator is created fresh for this call; on error the partial output
/// is dropped with it, so callers never observe a half-written sink.
pub fn translate_document(root: &Handle, syntax: &dyn WikiSyntax) -> Result<String, TranslateError> {
    translate_fragment(root, syntax)
}

/// Translate a single subtree to wiki markup under the given syntax.
///
/// Used internally for recursive translation and exposed for partial
/// conversions of document fragments.
pub fn translate_fragment(node: &Handle, syntax: &dyn WikiSyntax) -> Result<String, TranslateError> {
    let mut translator = Translator::new(syntax);
    translator.translate(node)?;
    Ok(translator.finish())
}
