//! Texshot Editor
//!
//! The editable LaTeX buffer and the text-splicing operations that act on it:
//!
//! - [`EditorBuffer`] - text plus the current selection
//! - [`insert_template`] - helper templates with selection, cursor and newline tokens
//! - [`auto_close`] - bracket pairs wrapped around the selection
//! - [`HelperCatalog`] - built-in and user-defined helper templates
//!
//! # Example
//!
//! ```
//! use texshot_core::Selection;
//! use texshot_editor::{insert_template, EditorBuffer};
//!
//! let mut buffer = EditorBuffer::from_text("x + 1");
//! buffer.select(Selection::new(0, 1));
//!
//! insert_template(&mut buffer, r"\\frac{[[sel]]}{[[cur]]}");
//! assert_eq!(buffer.text(), r"\frac{x}{} + 1");
//! assert_eq!(buffer.selection(), Selection::caret(9));
//! ```

pub mod brackets;
pub mod buffer;
pub mod helpers;
pub mod template;

pub use brackets::{auto_close, closing_bracket};
pub use buffer::EditorBuffer;
pub use helpers::{builtin_helpers, Helper, HelperCatalog};
pub use template::{
    expand_template, insert_template, Expansion, CURSOR_TOKEN, NEWLINE_TOKEN, SELECTION_TOKEN,
};
