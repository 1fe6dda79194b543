//! Rewrites raw input into a form the typesetting renderer accepts.
//!
//! Two rewrites run in order:
//!
//! 1. `align` and `align*` environments become `aligned`, which the
//!    renderer supports inside display math.
//! 2. Every bare newline gets a `\\` line break in front of it, so a line
//!    break typed in the editor is a line break in the output.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches `\begin{align}`, `\begin{align*}`, `\end{align}` and `\end{align*}`.
static ALIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(begin|end)\{align\*?\}").unwrap());

/// Normalize raw editor input for the renderer.
///
/// # Example
///
/// ```
/// use texshot_latex::normalize;
///
/// assert_eq!(normalize("a\nb"), "a\\\\\nb");
/// assert_eq!(normalize("a\\\\\nb"), "a\\\\\nb");
/// ```
pub fn normalize(input: &str) -> String {
    encode_line_breaks(&alias_environments(input))
}

/// Replace `align`/`align*` environment markers with `aligned`.
pub fn alias_environments(input: &str) -> Cow<'_, str> {
    ALIGN_RE.replace_all(input, r"\${1}{aligned}")
}

/// Insert `\\` before every newline that does not already follow a backslash.
///
/// The check looks at the output built so far, so a newline at the very
/// start of the input always gets an escape.
pub fn encode_line_breaks(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);

    for ch in input.chars() {
        if ch == '\n' && !out.ends_with('\\') {
            out.push_str("\\\\");
        }
        out.push(ch);
    }

    out
}
