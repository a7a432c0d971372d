//! Preformatted-context stack
//!
//! A stack of markers recording which preformatted elements enclose the
//! current emission point. A non-empty stack means whitespace must be
//! reproduced verbatim and cosmetic additions (like the trailing cell
//! separator space) are suppressed. The stack lives inside one translator,
//! so every decorator can ask "am I inside preformatted content" without
//! parameter threading. Push/pop pairing is owned by the translator's
//! preformatted handler, which pops on error paths too.

#[derive(Debug, Default)]
pub struct PreformattedStack {
    markers: Vec<String>,
}

impl PreformattedStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record entry into a preformatted element.
    pub fn enter(&mut self, marker: impl Into<String>) {
        self.markers.push(marker.into());
    }

    /// Record exit from the innermost preformatted element.
    pub fn exit(&mut self) {
        self.markers.pop();
    }

    /// Whether the current emission point has a preformatted ancestor.
    pub fn is_inside(&self) -> bool {
        !self.markers.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.markers.len()
    }
}
