//! Command-line interface for texshot.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use texshot_core::{Selection, TexshotError};

/// texshot - preview LaTeX equations and export them as PNG, LaTeX or MathML.
#[derive(Parser, Debug)]
#[command(
    name = "texshot",
    author = "Texshot Contributors",
    version,
    about = "Preview LaTeX equations and export them as PNG, LaTeX or MathML",
    after_help = "Repository: https://github.com/texshot/texshot\n\n\
                  Examples:\n  \
                  texshot render 'e^{i\\pi} + 1 = 0'\n  \
                  echo 'a^2 + b^2 = c^2' | texshot export -o out/\n  \
                  texshot lookup 'pythagorean theorem'\n  \
                  texshot insert frac x --start 0 --end 1"
)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if it does not exist and print its path
    #[arg(long = "init-config")]
    pub init_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Typeset LaTeX and print the preview markup
    Render {
        /// LaTeX source (reads stdin if not provided)
        latex: Option<String>,

        /// Print MathML instead of HTML
        #[arg(long)]
        mathml: bool,
    },

    /// Print the normalized LaTeX the renderer receives
    Normalize {
        /// LaTeX source (reads stdin if not provided)
        latex: Option<String>,
    },

    /// Print the number of lines used for automatic export sizing
    Lines {
        /// LaTeX source (reads stdin if not provided)
        latex: Option<String>,

        /// Count only `\\` escapes, ignoring literal newlines
        #[arg(long = "escapes-only")]
        escapes_only: bool,
    },

    /// Look up an equation by name and print its LaTeX
    Lookup {
        /// Equation name or alias
        query: String,

        /// Equation library file (overrides the configured path)
        #[arg(long = "library", value_name = "FILE")]
        library: Option<PathBuf>,
    },

    /// List the available helper templates
    Helpers,

    /// Insert a helper template into LaTeX and print the result
    Insert {
        /// Helper name (see `texshot helpers`)
        helper: String,

        /// LaTeX source (reads stdin if not provided)
        latex: Option<String>,

        /// Selection start byte offset (defaults to the end of the text)
        #[arg(long)]
        start: Option<usize>,

        /// Selection end byte offset (defaults to the start)
        #[arg(long)]
        end: Option<usize>,
    },

    /// Rasterize LaTeX and save it as a PNG
    Export {
        /// LaTeX source (reads stdin if not provided)
        latex: Option<String>,

        /// Directory the PNG is written to
        #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Manual height in pixels (parsed like the height field, e.g. "120px")
        #[arg(long = "height")]
        height: Option<String>,
    },

    /// Copy LaTeX, MathML or the PNG to the clipboard
    Copy {
        /// LaTeX source (reads stdin if not provided)
        latex: Option<String>,

        /// What to copy
        #[arg(short = 'f', long = "format", value_enum, default_value_t = CopyFormat::Latex)]
        format: CopyFormat,
    },
}

/// What the `copy` subcommand puts on the clipboard.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// The raw LaTeX source
    Latex,
    /// The MathML rendering
    Mathml,
    /// The rendered PNG
    Image,
}

/// The LaTeX argument, or all of stdin when it is absent.
///
/// One trailing line terminator is dropped from stdin so `echo` input does
/// not count as an extra line.
pub fn read_input(latex: Option<&str>) -> io::Result<String> {
    match latex {
        Some(latex) => Ok(latex.to_string()),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(strip_line_terminator(input))
        }
    }
}

fn strip_line_terminator(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

/// Resolve `--start` / `--end` into a selection inside `text`.
pub fn selection_arg(
    text: &str,
    start: Option<usize>,
    end: Option<usize>,
) -> texshot_core::Result<Selection> {
    let start = start.unwrap_or(text.len());
    let end = end.unwrap_or(start);

    for offset in [start, end] {
        if offset > text.len() || !text.is_char_boundary(offset) {
            return Err(TexshotError::Config(format!(
                "selection offset {} is not a character boundary of the input",
                offset
            )));
        }
    }

    Ok(Selection::new(start, end))
}

/// Show paths information.
pub fn show_paths(library: &std::path::Path) {
    use texshot_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
    println!("  library               {}", library.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["texshot"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.show_paths);
        assert!(!cli.init_config);

        let cli = Cli::parse_from(["texshot", "--init-config"]);
        assert!(cli.init_config);
    }

    #[test]
    fn test_cli_parse_render() {
        let cli = Cli::parse_from(["texshot", "render", "x^2", "--mathml", "-l", "debug"]);
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Some(Commands::Render { latex, mathml }) => {
                assert_eq!(latex.as_deref(), Some("x^2"));
                assert!(mathml);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_insert() {
        let cli = Cli::parse_from(["texshot", "insert", "frac", "x", "--start", "0", "--end", "1"]);
        match cli.command {
            Some(Commands::Insert {
                helper,
                latex,
                start,
                end,
            }) => {
                assert_eq!(helper, "frac");
                assert_eq!(latex.as_deref(), Some("x"));
                assert_eq!((start, end), (Some(0), Some(1)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_export_and_copy() {
        let cli = Cli::parse_from(["texshot", "export", "-o", "out", "--height", "120px"]);
        match cli.command {
            Some(Commands::Export { latex, output, height }) => {
                assert!(latex.is_none());
                assert_eq!(output, PathBuf::from("out"));
                assert_eq!(height.as_deref(), Some("120px"));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["texshot", "copy", "x", "-f", "mathml"]);
        match cli.command {
            Some(Commands::Copy { format, .. }) => assert_eq!(format, CopyFormat::Mathml),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!(strip_line_terminator("x^2\n".to_string()), "x^2");
        assert_eq!(strip_line_terminator("a\\\\\r\n".to_string()), "a\\\\");
        assert_eq!(strip_line_terminator("a\n\n".to_string()), "a\n");
        assert_eq!(strip_line_terminator("a".to_string()), "a");
    }

    #[test]
    fn test_selection_arg() {
        assert_eq!(selection_arg("abc", None, None).unwrap(), Selection::caret(3));
        assert_eq!(selection_arg("abc", Some(2), Some(0)).unwrap(), Selection::new(0, 2));
        assert!(selection_arg("abc", Some(4), None).is_err());
        assert!(selection_arg("é", Some(1), None).is_err());
    }
}
