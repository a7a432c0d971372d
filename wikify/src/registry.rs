//! Syntax registry for dialect discovery and selection
//!
//! This module provides a centralized registry for all available target
//! syntaxes. Syntaxes can be registered and retrieved by name.

use markup5ever_rcdom::Handle;
use std::collections::HashMap;

use crate::error::TranslateError;
use crate::syntax::{SyntaxDescriptor, WikiSyntax};

/// Registry of wiki syntaxes
///
/// # Examples
///
/// ```ignore
/// let mut registry = SyntaxRegistry::new();
/// registry.register(MySyntax);
///
/// let markup = registry.translate(&root, "my-syntax")?;
/// ```
pub struct SyntaxRegistry {
    syntaxes: HashMap<String, Box<dyn WikiSyntax>>,
}

impl SyntaxRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SyntaxRegistry {
            syntaxes: HashMap::new(),
        }
    }

    /// Register a syntax
    ///
    /// If a syntax with the same name already exists, it will be replaced.
    pub fn register<S: WikiSyntax + 'static>(&mut self, syntax: S) {
        self.syntaxes
            .insert(syntax.name().to_string(), Box::new(syntax));
    }

    /// Get a syntax by name
    pub fn get(&self, name: &str) -> Result<&dyn WikiSyntax, TranslateError> {
        self.syntaxes
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| TranslateError::SyntaxNotFound(name.to_string()))
    }

    /// Check if a syntax exists
    pub fn has(&self, name: &str) -> bool {
        self.syntaxes.contains_key(name)
    }

    /// List all available syntax names (sorted)
    pub fn list_syntaxes(&self) -> Vec<String> {
        let mut names: Vec<_> = self.syntaxes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Descriptors of all registered syntaxes, sorted by name
    pub fn descriptors(&self) -> Vec<SyntaxDescriptor> {
        let mut descriptors: Vec<_> = self.syntaxes.values().map(|s| s.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Detect a syntax from a filename based on its extension
    ///
    /// Returns the syntax name if a matching extension is found, or None
    /// otherwise. Useful for picking the target dialect from an output path.
    pub fn detect_syntax_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for syntax in self.syntaxes.values() {
            if syntax.file_extensions().contains(&extension) {
                return Some(syntax.name().to_string());
            }
        }

        None
    }

    /// Translate a parsed document under the named syntax
    pub fn translate(&self, root: &Handle, syntax: &str) -> Result<String, TranslateError> {
        let syntax = self.get(syntax)?;
        crate::translate_document(root, syntax)
    }

    /// Create a registry with the built-in syntaxes
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::syntaxes::JspWikiSyntax);
        registry.register(crate::syntaxes::MarkdownSyntax);

        registry
    }
}

impl Default for SyntaxRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
