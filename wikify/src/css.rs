//! Style-flag classification
//!
//! The upstream HTML cleanup pipeline expresses bold/italic/monospace intent
//! through CSS classes and inline `style` attributes. This module reduces
//! those to three booleans; the translator consumes the result as a pure
//! function (see [`StyleClassifier`]) and never inspects raw class or style
//! strings itself. Full CSS selector evaluation is out of scope.

use markup5ever_rcdom::Handle;

use crate::dom;

/// Semantic style flags computed for one element, bundled with the element
/// itself into the descriptor passed through the inline decorator chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
}

impl StyleFlags {
    pub fn any(self) -> bool {
        self.bold || self.italic || self.monospace
    }
}

/// Classification function the translator is parameterized over.
pub type StyleClassifier = fn(&Handle) -> StyleFlags;

/// Derive style flags from the element's `class` and `style` attributes.
///
/// Recognized class tokens: `bold`, `italic`, `monospace`. Recognized inline
/// declarations: `font-weight` of `bold`/`bolder` or a numeric weight of 700
/// and up, `font-style` of `italic`/`oblique`, and `font-family` naming a
/// monospace or courier face.
pub fn classify(element: &Handle) -> StyleFlags {
    let mut flags = StyleFlags::default();

    if let Some(classes) = dom::attr(element, "class") {
        for token in classes.split_whitespace() {
            match token {
                "bold" => flags.bold = true,
                "italic" => flags.italic = true,
                "monospace" => flags.monospace = true,
                _ => {}
            }
        }
    }

    if let Some(style) = dom::attr(element, "style") {
        for declaration in style.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim().to_ascii_lowercase();
            match property.as_str() {
                "font-weight" => {
                    if is_bold_weight(&value) {
                        flags.bold = true;
                    }
                }
                "font-style" => {
                    if value.starts_with("italic") || value.starts_with("oblique") {
                        flags.italic = true;
                    }
                }
                "font-family" => {
                    if value.contains("monospace") || value.contains("courier") {
                        flags.monospace = true;
                    }
                }
                _ => {}
            }
        }
    }

    flags
}

fn is_bold_weight(value: &str) -> bool {
    matches!(value, "bold" | "bolder") || value.parse::<u32>().map(|w| w >= 700).unwrap_or(false)
}
