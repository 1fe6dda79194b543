//! Texshot Session
//!
//! The command dispatcher that ties the editor, the equation library and
//! the export pipeline together.
//!
//! A front end turns user input into [`Command`]s and hands them to
//! [`Session::dispatch`] along with the engines in [`Services`]. Editing
//! commands update the buffer and re-render the preview in place; export
//! commands return [`Effect`] descriptors instead of touching the outside
//! world. [`apply_effects`] then carries the effects out against a
//! [`Clipboard`](texshot_render::Clipboard) and a
//! [`Downloader`](texshot_render::Downloader) and reports the outcome as a
//! [`Status`](texshot_core::Status).
//!
//! # Example
//!
//! ```
//! use texshot_config::Config;
//! use texshot_render::{MathRenderer, RenderOptions};
//! use texshot_session::{Command, Effect, Services, Session};
//!
//! struct Echo;
//!
//! impl MathRenderer for Echo {
//!     fn render(&self, latex: &str, _options: &RenderOptions) -> texshot_core::Result<String> {
//!         Ok(latex.to_string())
//!     }
//! }
//!
//! let mut session = Session::new(Config::default()).unwrap();
//! let services = Services::new(&Echo);
//!
//! session.dispatch(Command::Input("x".into()), &services);
//! session.dispatch(Command::KeyPress('^'), &services);
//! session.dispatch(Command::KeyPress('{'), &services);
//! assert_eq!(session.editor().text(), "x^{}");
//!
//! let effects = session.dispatch(Command::CopyLatex, &services);
//! assert!(matches!(&effects[0], Effect::ClipboardText { text, .. } if text == "x^{}"));
//! ```

pub mod command;
pub mod effects;
pub mod session;

pub use command::{Action, Command};
pub use effects::{apply_effects, Effect};
pub use session::Session;

use texshot_render::{MathRenderer, Rasterizer};

/// The engines a session renders and exports with.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    /// Typesetting engine
    pub renderer: &'a dyn MathRenderer,
    /// Rasterizing engine, if one is available
    pub rasterizer: Option<&'a dyn Rasterizer>,
}

impl<'a> Services<'a> {
    /// Services without image export.
    pub fn new(renderer: &'a dyn MathRenderer) -> Self {
        Self {
            renderer,
            rasterizer: None,
        }
    }

    /// Add a rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: &'a dyn Rasterizer) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }
}
