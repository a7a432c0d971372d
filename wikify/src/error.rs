//! Error types for translation operations

use std::fmt;

/// Errors that can occur while translating an element tree to wiki markup
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// Syntax not found in registry
    SyntaxNotFound(String),
    /// The element tree is not usable as translation input
    MalformedDocument(String),
    /// Element nesting exceeded the recursion guard
    MaxDepthExceeded(usize),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::SyntaxNotFound(name) => write!(f, "Syntax '{name}' not found"),
            TranslateError::MalformedDocument(msg) => write!(f, "Malformed document: {msg}"),
            TranslateError::MaxDepthExceeded(limit) => {
                write!(f, "Element nesting exceeded {limit} levels")
            }
        }
    }
}

impl std::error::Error for TranslateError {}
