//! Inline style decorator chain
//!
//! Bold, italic and monospace intent is pre-computed into boolean flags (from
//! the tag itself plus the CSS classifier), so the chain is a fixed sequence
//! over those flags rather than a literal walk of `<b>`/`<i>` nesting.
//! Open tokens are emitted in chain order, the element content is translated
//! once at the base, and close tokens are emitted in reverse. The nesting
//! order is therefore always bold outermost, then italic, then monospace,
//! regardless of source nesting order and of syntax.

use markup5ever_rcdom::Handle;

use super::Translator;
use crate::css::StyleFlags;
use crate::error::TranslateError;
use crate::syntax::Construct;

/// Element-decoration descriptor: a source element bundled with the style
/// flags computed for it. Immutable for the duration of one dispatch.
pub(crate) struct ElementDecoration {
    pub element: Handle,
    pub flags: StyleFlags,
}

/// Fixed responsibility order of the chain; outer wraps inner.
const CHAIN: [Construct; 3] = [Construct::Bold, Construct::Italic, Construct::Monospace];

fn applies(flags: StyleFlags, construct: Construct) -> bool {
    match construct {
        Construct::Bold => flags.bold,
        Construct::Italic => flags.italic,
        Construct::Monospace => flags.monospace,
        _ => false,
    }
}

impl Translator<'_> {
    /// Run the inline chain over a styled element.
    pub(crate) fn decorate_styled(
        &mut self,
        decoration: &ElementDecoration,
    ) -> Result<(), TranslateError> {
        for construct in CHAIN {
            if applies(decoration.flags, construct) {
                let pair = self.syntax.tokens(construct);
                self.emit(pair.open);
            }
        }

        // Base of the chain: the element's own content through the core
        // translator, remaining flags ignored.
        self.translate_children(&decoration.element)?;

        for construct in CHAIN.iter().rev() {
            if applies(decoration.flags, *construct) {
                let pair = self.syntax.tokens(*construct);
                self.emit(pair.close);
            }
        }
        Ok(())
    }

    /// Wrap an element's translated content in one construct's tokens.
    ///
    /// Used for the inline constructs that are driven by the tag alone
    /// (strike, underline, sub/superscript) rather than by style flags.
    pub(crate) fn decorate_wrapped(
        &mut self,
        element: &Handle,
        construct: Construct,
    ) -> Result<(), TranslateError> {
        let pair = self.syntax.tokens(construct);
        self.emit(pair.open);
        self.translate_children(element)?;
        self.emit(pair.close);
        Ok(())
    }
}
