//! Bracket auto-closing.

use crate::buffer::EditorBuffer;

/// The closer for an opening bracket the editor auto-closes.
pub fn closing_bracket(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Handle a typed character: wrap the selection in a bracket pair.
///
/// The caret ends up just before the closer, after any wrapped text.
///
/// # Returns
/// `true` if the key was an auto-closed bracket and the buffer changed,
/// `false` if the caller should treat it as ordinary input.
pub fn auto_close(buffer: &mut EditorBuffer, key: char) -> bool {
    let Some(close) = closing_bracket(key) else {
        return false;
    };

    let selected = buffer.selected_text();
    let mut insert = String::with_capacity(selected.len() + 2);
    insert.push(key);
    insert.push_str(selected);
    let caret = insert.len();
    insert.push(close);

    buffer.replace_selection(&insert, caret);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use texshot_core::Selection;

    #[test]
    fn test_closers() {
        assert_eq!(closing_bracket('{'), Some('}'));
        assert_eq!(closing_bracket('('), Some(')'));
        assert_eq!(closing_bracket('['), Some(']'));
        assert_eq!(closing_bracket('<'), None);
    }

    #[test]
    fn test_caret_between_pair() {
        let mut buffer = EditorBuffer::from_text("x^");
        assert!(auto_close(&mut buffer, '{'));
        assert_eq!(buffer.text(), "x^{}");
        assert_eq!(buffer.selection(), Selection::caret(3));
    }

    #[test]
    fn test_wraps_selection() {
        let mut buffer = EditorBuffer::from_text("a+b=c");
        buffer.select(Selection::new(0, 3));
        assert!(auto_close(&mut buffer, '('));
        assert_eq!(buffer.text(), "(a+b)=c");
        assert_eq!(buffer.selection(), Selection::caret(4));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut buffer = EditorBuffer::from_text("a");
        assert!(!auto_close(&mut buffer, '}'));
        assert!(!auto_close(&mut buffer, 'x'));
        assert_eq!(buffer.text(), "a");
    }
}
