//! Texshot LaTeX
//!
//! Textual preprocessing of user-typed LaTeX before it reaches the
//! typesetting renderer, and the line-break counting that drives
//! automatic export sizing.
//!
//! Nothing here parses LaTeX. Brace balance and command names are left
//! for the renderer to judge.
//!
//! # Example
//!
//! ```
//! use texshot_latex::{normalize, line_count, BreakCounting};
//!
//! let input = "\\begin{align}a &= b\nc &= d\\end{align}";
//! let normalized = normalize(input);
//! assert!(normalized.starts_with("\\begin{aligned}"));
//! assert!(normalized.contains("b\\\\\nc"));
//!
//! assert_eq!(line_count(input, BreakCounting::EscapesAndNewlines), 2);
//! ```

pub mod lines;
pub mod normalize;

pub use lines::{count_line_breaks, line_count, BreakCounting, LINE_BREAK};
pub use normalize::{alias_environments, encode_line_breaks, normalize};
