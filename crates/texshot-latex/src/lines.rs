//! Line-break counting for automatic export sizing.

/// The LaTeX line-break escape.
pub const LINE_BREAK: &str = "\\\\";

/// Which line breaks are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakCounting {
    /// Only `\\` escapes count
    EscapesOnly,
    /// `\\` escapes and literal newlines count; a newline right after an
    /// escape is the same break and is counted once
    #[default]
    EscapesAndNewlines,
}

impl BreakCounting {
    /// Pick the mode from the `CountNewlines` config flag.
    pub fn from_count_newlines(count_newlines: bool) -> Self {
        if count_newlines {
            Self::EscapesAndNewlines
        } else {
            Self::EscapesOnly
        }
    }
}

/// Count explicit line breaks in raw input.
///
/// Escapes are matched left to right without overlap, so `\\\` holds one
/// escape and `\\\\` holds two.
pub fn count_line_breaks(input: &str, mode: BreakCounting) -> usize {
    let bytes = input.as_bytes();
    let mut escapes = 0;
    let mut newlines = 0;
    let mut overlap = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'\\') => {
                escapes += 1;
                if bytes.get(i + 2) == Some(&b'\n') {
                    overlap += 1;
                }
                i += 2;
            }
            b'\n' => {
                newlines += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }

    match mode {
        BreakCounting::EscapesOnly => escapes,
        BreakCounting::EscapesAndNewlines => escapes + newlines - overlap,
    }
}

/// Number of rendered lines: one more than the number of breaks, at least one.
pub fn line_count(input: &str, mode: BreakCounting) -> usize {
    (count_line_breaks(input, mode) + 1).max(1)
}
