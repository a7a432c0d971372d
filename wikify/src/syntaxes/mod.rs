//! Built-in syntax implementations
//!
//! Each submodule realizes one target wiki dialect as a vocabulary plus the
//! few structural overrides that dialect needs. The traversal lives in the
//! translator; nothing here recurses.

pub mod jspwiki;
pub mod markdown;

pub use jspwiki::JspWikiSyntax;
pub use markdown::MarkdownSyntax;
