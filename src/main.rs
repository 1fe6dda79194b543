//! texshot - preview LaTeX equations and export them as PNG, LaTeX or MathML.
//!
//! This binary is a thin adapter over the texshot session: every subcommand
//! feeds its input through [`Session::dispatch`] (or a single pipeline stage)
//! and reports the resulting status on stderr.

mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, CopyFormat};
use log::{debug, error, info, LevelFilter};
use std::io::{self, Write};

use texshot_config::Config;
use texshot_core::{HeightMode, Result, Status};
use texshot_latex::{line_count, normalize, BreakCounting};
use texshot_render::{
    render_mathml, DirectoryDownloader, MathRenderer, Osc52Clipboard, Preview, Rasterizer,
};
use texshot_session::{Command, Effect, Services, Session};

fn main() {
    let cli = Cli::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("texshot v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(Some(status)) if status.is_error => {
            eprintln!("{}", status);
            std::process::exit(1);
        }
        Ok(Some(status)) => eprintln!("{}", status),
        Ok(None) => {}
        Err(e) => {
            error!("Error: {}", e);
            eprintln!("texshot: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(feature = "katex")]
fn math_renderer() -> Box<dyn MathRenderer> {
    Box::new(texshot_render::KatexRenderer::new())
}

#[cfg(not(feature = "katex"))]
fn math_renderer() -> Box<dyn MathRenderer> {
    Box::new(NoTypesetter)
}

/// Stands in for KaTeX when the binary is built without it.
#[cfg(not(feature = "katex"))]
struct NoTypesetter;

#[cfg(not(feature = "katex"))]
impl MathRenderer for NoTypesetter {
    fn render(&self, _latex: &str, _options: &texshot_render::RenderOptions) -> Result<String> {
        Err(texshot_core::TexshotError::Render(
            "texshot was built without a typesetting engine (enable the `katex` feature)"
                .to_string(),
        ))
    }
}

#[cfg(feature = "mathjax")]
fn rasterizer() -> Option<Box<dyn Rasterizer>> {
    Some(Box::new(texshot_render::MathJaxRasterizer::new()))
}

#[cfg(not(feature = "mathjax"))]
fn rasterizer() -> Option<Box<dyn Rasterizer>> {
    None
}

/// Main application logic.
///
/// # Returns
/// The status to report, if the subcommand produced one.
fn run(cli: &Cli) -> Result<Option<Status>> {
    if cli.init_config {
        let path = Config::ensure_config_file()?;
        println!("{}", path.display());
        return Ok(None);
    }

    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    if cli.show_paths {
        cli::show_paths(&config.library.path);
        return Ok(None);
    }

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(None);
    };

    let renderer = math_renderer();
    let rasterizer = rasterizer();
    let mut services = Services::new(renderer.as_ref());
    if let Some(rasterizer) = rasterizer.as_deref() {
        services = services.with_rasterizer(rasterizer);
    }

    let mut session = Session::new(config)?;

    match command {
        Commands::Render { latex, mathml } => {
            let input = cli::read_input(latex.as_deref())?;
            if *mathml {
                println!("{}", render_mathml(&input, renderer.as_ref())?);
                return Ok(None);
            }

            session.dispatch(Command::Input(input), &services);
            match session.preview() {
                Preview::Rendered { markup, .. } => {
                    println!("{}", markup);
                    Ok(None)
                }
                Preview::Placeholder => Ok(Some(Status::info(session.preview().display_text()))),
                Preview::Error { message } => Ok(Some(Status::error(message.as_str()))),
            }
        }

        Commands::Normalize { latex } => {
            let input = cli::read_input(latex.as_deref())?;
            println!("{}", normalize(&input));
            Ok(None)
        }

        Commands::Lines {
            latex,
            escapes_only,
        } => {
            let input = cli::read_input(latex.as_deref())?;
            let counting = if *escapes_only {
                BreakCounting::EscapesOnly
            } else {
                session.settings().counting
            };
            println!("{}", line_count(&input, counting));
            Ok(None)
        }

        Commands::Lookup { query, library } => {
            let loaded = match library {
                Some(path) => session.load_library_from_path(path),
                None => session.load_library(),
            };
            if let Err(e) = loaded {
                debug!("Library load failed: {}", e);
            }

            let effects = session.dispatch(Command::LookupEquation(query.clone()), &services);
            let status = status_of(&effects);
            if status.as_ref().is_some_and(|s| !s.is_error) {
                println!("{}", session.editor().text());
            }
            Ok(status)
        }

        Commands::Helpers => {
            let mut stdout = io::stdout().lock();
            for helper in session.helpers().iter() {
                writeln!(
                    stdout,
                    "{:<8} {:<20} {}",
                    helper.name, helper.description, helper.template
                )?;
            }
            Ok(None)
        }

        Commands::Insert {
            helper,
            latex,
            start,
            end,
        } => {
            let input = cli::read_input(latex.as_deref())?;
            let selection = cli::selection_arg(&input, *start, *end)?;

            session.dispatch(Command::Input(input), &services);
            session.dispatch(Command::Select(selection), &services);
            let effects = session.dispatch(Command::InsertHelper(helper.clone()), &services);
            if let Some(status) = status_of(&effects) {
                return Ok(Some(status));
            }

            info!("Caret at {}", session.selection().start);
            println!("{}", session.editor().text());
            Ok(None)
        }

        Commands::Export {
            latex,
            output,
            height,
        } => {
            let input = cli::read_input(latex.as_deref())?;
            session.dispatch(Command::Input(input), &services);
            if let Some(height) = height {
                session.dispatch(Command::SetHeightMode(HeightMode::Manual), &services);
                session.dispatch(Command::SetManualHeight(height.clone()), &services);
            }

            let effects = session.dispatch(Command::SaveImage, &services);
            let mut clipboard = Osc52Clipboard::new(io::stdout());
            let mut downloader = DirectoryDownloader::new(output);
            Ok(session.apply(effects, &mut clipboard, &mut downloader))
        }

        Commands::Copy { latex, format } => {
            let input = cli::read_input(latex.as_deref())?;
            session.dispatch(Command::Input(input), &services);

            let command = match format {
                CopyFormat::Latex => Command::CopyLatex,
                CopyFormat::Mathml => Command::CopyMathml,
                CopyFormat::Image => Command::CopyImage,
            };
            let effects = session.dispatch(command, &services);
            let mut clipboard = Osc52Clipboard::new(io::stdout());
            let mut downloader = DirectoryDownloader::new(".");
            let status = session.apply(effects, &mut clipboard, &mut downloader);
            io::stdout().flush()?;
            Ok(status)
        }
    }
}

/// The status among effects that only report one.
fn status_of(effects: &[Effect]) -> Option<Status> {
    effects.iter().rev().find_map(|effect| match effect {
        Effect::Status(status) => Some(status.clone()),
        _ => None,
    })
}
