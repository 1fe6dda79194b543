//! Helper template expansion and insertion.
//!
//! A template is a snippet of LaTeX with three placeholder tokens:
//!
//! | token | replaced by |
//! |---|---|
//! | `[[sel]]` | the selected text, or nothing |
//! | `[[nl]]` | a newline |
//! | `[[cur]]` | nothing; the caret lands here after insertion |
//!
//! Templates write literal backslashes doubled (`\\frac`); doubled
//! backslashes collapse to single ones before tokens are substituted, so
//! selected text is never collapsed.

use crate::buffer::EditorBuffer;
use texshot_core::Selection;

/// Replaced by the selected text.
pub const SELECTION_TOKEN: &str = "[[sel]]";
/// Replaced by a newline.
pub const NEWLINE_TOKEN: &str = "[[nl]]";
/// Marks where the caret goes.
pub const CURSOR_TOKEN: &str = "[[cur]]";

/// An expanded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Text to insert
    pub text: String,
    /// Caret offset inside `text`, in bytes
    pub caret: usize,
}

/// Expand a template against the selected text.
///
/// # Example
///
/// ```
/// use texshot_editor::expand_template;
///
/// let expansion = expand_template(r"\\sqrt{[[sel]][[cur]]}", "2");
/// assert_eq!(expansion.text, r"\sqrt{2}");
/// assert_eq!(expansion.caret, 7);
/// ```
pub fn expand_template(template: &str, selected: &str) -> Expansion {
    let collapsed = template.replace("\\\\", "\\");
    let substitute = |part: &str| {
        part.replace(SELECTION_TOKEN, selected)
            .replace(NEWLINE_TOKEN, "\n")
    };

    // Split on the cursor before substituting so selected text can never
    // move the caret.
    match collapsed.split_once(CURSOR_TOKEN) {
        Some((before, after)) => {
            let mut text = substitute(before);
            let caret = text.len();
            text.push_str(&substitute(&after.replace(CURSOR_TOKEN, "")));
            Expansion { text, caret }
        }
        None => {
            let text = substitute(&collapsed);
            let caret = text.len();
            Expansion { text, caret }
        }
    }
}

/// Splice a template into the buffer at its selection.
///
/// # Returns
/// The new (collapsed) selection.
pub fn insert_template(buffer: &mut EditorBuffer, template: &str) -> Selection {
    let expansion = expand_template(template, buffer.selected_text());
    buffer.replace_selection(&expansion.text, expansion.caret);
    buffer.selection()
}
