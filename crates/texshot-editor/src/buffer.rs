//! The editor buffer: text and selection.

use texshot_core::Selection;

/// Raw editor text with a selection.
///
/// Offsets are byte offsets into the UTF-8 text. Every selection stored
/// here lies on char boundaries inside the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    selection: Selection,
}

impl EditorBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the caret at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: Selection::caret(end),
        }
    }

    /// The buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected text (empty for a caret).
    pub fn selected_text(&self) -> &str {
        &self.text[self.selection.start..self.selection.end]
    }

    /// Replace the whole text, as a direct edit would.
    ///
    /// The selection is kept where possible and clamped otherwise.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.select(self.selection);
    }

    /// Move the selection, clamping it into the text and onto char boundaries.
    pub fn select(&mut self, selection: Selection) {
        let start = self.clamp(selection.start);
        let end = self.clamp(selection.end);
        self.selection = Selection::new(start, end);
    }

    /// Replace the selection with `insert` and put the caret `caret` bytes into it.
    ///
    /// `caret` is clamped to the inserted text.
    pub fn replace_selection(&mut self, insert: &str, caret: usize) {
        let Selection { start, end } = self.selection;
        self.text.replace_range(start..end, insert);
        self.select(Selection::caret(start + caret.min(insert.len())));
    }

    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}
