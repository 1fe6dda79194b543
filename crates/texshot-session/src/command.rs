//! Commands a front end sends to the session.

use texshot_core::{HeightMode, Selection};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The editor text was replaced by a direct edit
    Input(String),
    /// The selection moved
    Select(Selection),
    /// A character was typed at the selection
    KeyPress(char),
    /// Insert the named helper template
    InsertHelper(String),
    /// Look up an equation by name and insert it
    LookupEquation(String),
    /// Switch between auto and manual export height
    SetHeightMode(HeightMode),
    /// The manual height field changed
    SetManualHeight(String),
    /// Copy the rendered image to the clipboard
    CopyImage,
    /// Save the rendered image as a file
    SaveImage,
    /// Copy the LaTeX source to the clipboard
    CopyLatex,
    /// Copy the MathML rendering to the clipboard
    CopyMathml,
}

/// An export action, used to word its status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Image to clipboard
    CopyImage,
    /// Image to file
    SaveImage,
    /// LaTeX to clipboard
    CopyLatex,
    /// MathML to clipboard
    CopyMathml,
}

impl Action {
    /// Name shown in `<Action> failed: <message>`.
    pub fn label(self) -> &'static str {
        match self {
            Action::CopyImage => "Copy",
            Action::SaveImage => "Save",
            Action::CopyLatex => "Copy LaTeX",
            Action::CopyMathml => "Copy MathML",
        }
    }

    /// Message shown when the action succeeds.
    pub fn success_message(self) -> &'static str {
        match self {
            Action::CopyImage => "Copied image to clipboard.",
            Action::SaveImage => "Saved PNG.",
            Action::CopyLatex => "Copied LaTeX.",
            Action::CopyMathml => "Copied MathML.",
        }
    }

    /// Message shown when the action fails.
    pub fn failure_message(self, reason: impl std::fmt::Display) -> String {
        format!("{} failed: {}", self.label(), reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        assert_eq!(
            Action::CopyImage.failure_message("no clipboard"),
            "Copy failed: no clipboard"
        );
        assert_eq!(Action::SaveImage.failure_message("disk full"), "Save failed: disk full");
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(Action::CopyImage.success_message(), "Copied image to clipboard.");
        assert_eq!(Action::SaveImage.success_message(), "Saved PNG.");
    }
}
