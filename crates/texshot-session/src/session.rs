//! The session: editor state plus the per-command handlers.

use crate::command::{Action, Command};
use crate::effects::{apply_effects, Effect};
use crate::Services;
use log::{debug, info};
use std::path::Path;
use texshot_config::Config;
use texshot_core::{HeightMode, Result, Selection, Status, TexshotError};
use texshot_editor::{auto_close, insert_template, EditorBuffer, HelperCatalog};
use texshot_library::{EquationLibrary, LookupError, LIBRARY_UNAVAILABLE};
use texshot_render::{
    data_url, encode_png, export_bitmap, render_mathml, render_preview, Clipboard, Downloader,
    ExportSettings, Preview,
};

/// State of one editing session.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    settings: ExportSettings,
    helpers: HelperCatalog,
    library: EquationLibrary,
    editor: EditorBuffer,
    preview: Preview,
    height_mode: HeightMode,
    manual_height: String,
    status: Option<Status>,
    lookup_status: Option<Status>,
}

impl Session {
    /// Create a session from configuration.
    ///
    /// Fails only if the export section holds unusable values.
    pub fn new(config: Config) -> Result<Self> {
        let settings = ExportSettings::from_config(&config.export)?;
        let helpers = HelperCatalog::from_config(&config.helpers);

        Ok(Self {
            height_mode: config.export.height_mode,
            manual_height: config.export.manual_height.clone(),
            config,
            settings,
            helpers,
            library: EquationLibrary::new(),
            editor: EditorBuffer::new(),
            preview: Preview::Placeholder,
            status: None,
            lookup_status: None,
        })
    }

    /// Load the equation library from the configured path.
    pub fn load_library(&mut self) -> Result<usize> {
        let path = self.config.library.path.clone();
        self.load_library_from_path(&path)
    }

    /// Load the equation library from a file.
    pub fn load_library_from_path(&mut self, path: &Path) -> Result<usize> {
        let result = self.library.load_from_path(path);
        self.record_library_load(result)
    }

    /// Load the equation library from a JSON string.
    pub fn load_library_from_str(&mut self, json: &str) -> Result<usize> {
        let result = self.library.load_from_str(json);
        self.record_library_load(result)
    }

    fn record_library_load(&mut self, result: Result<usize>) -> Result<usize> {
        self.lookup_status = Some(match &result {
            Ok(count) => {
                info!("Equation library ready with {} equations", count);
                Status::info(format!("Loaded {} equations.", count))
            }
            Err(_) => Status::error(LIBRARY_UNAVAILABLE),
        });
        result
    }

    /// Handle one command.
    ///
    /// Editing commands change the buffer and re-render the preview.
    /// Export commands return effects for [`apply_effects`](crate::apply_effects).
    /// Status-only outcomes are both recorded and returned as
    /// [`Effect::Status`].
    pub fn dispatch(&mut self, command: Command, services: &Services<'_>) -> Vec<Effect> {
        debug!("Dispatching {:?}", command);

        match command {
            Command::Input(text) => {
                self.editor = EditorBuffer::from_text(text);
                self.rerender(services);
                Vec::new()
            }
            Command::Select(selection) => {
                self.editor.select(selection);
                Vec::new()
            }
            Command::KeyPress(key) => {
                self.key_press(key);
                self.rerender(services);
                Vec::new()
            }
            Command::InsertHelper(name) => self.insert_helper(&name, services),
            Command::LookupEquation(query) => self.lookup_equation(&query, services),
            Command::SetHeightMode(mode) => {
                self.height_mode = mode;
                Vec::new()
            }
            Command::SetManualHeight(text) => {
                self.manual_height = text;
                Vec::new()
            }
            Command::CopyImage => self.export_image(Action::CopyImage, services),
            Command::SaveImage => self.export_image(Action::SaveImage, services),
            Command::CopyLatex => self.copy_latex(),
            Command::CopyMathml => self.copy_mathml(services),
        }
    }

    /// Run `effects` against the adapters and record the resulting status.
    ///
    /// A batch that reports nothing leaves the previous status in place.
    pub fn apply<C, D>(
        &mut self,
        effects: Vec<Effect>,
        clipboard: &mut C,
        downloader: &mut D,
    ) -> Option<Status>
    where
        C: Clipboard + ?Sized,
        D: Downloader + ?Sized,
    {
        let status = apply_effects(effects, clipboard, downloader);
        if status.is_some() {
            self.status = status.clone();
        }
        status
    }

    fn rerender(&mut self, services: &Services<'_>) {
        self.preview = render_preview(self.editor.text(), services.renderer);
    }

    fn key_press(&mut self, key: char) {
        if self.config.editor.auto_close && auto_close(&mut self.editor, key) {
            return;
        }

        let mut buf = [0u8; 4];
        let typed = key.encode_utf8(&mut buf);
        self.editor.replace_selection(typed, typed.len());
    }

    fn insert_helper(&mut self, name: &str, services: &Services<'_>) -> Vec<Effect> {
        let Some(helper) = self.helpers.get(name) else {
            return self.status_effect(Status::error(format!("Unknown helper: {}", name)));
        };

        let template = helper.template.clone();
        insert_template(&mut self.editor, &template);
        self.rerender(services);
        Vec::new()
    }

    fn lookup_equation(&mut self, query: &str, services: &Services<'_>) -> Vec<Effect> {
        let status = match self.library.lookup(query) {
            Ok(found) => {
                let latex = found.latex.to_string();
                let message = format!("Inserted {}.", found.name);
                self.editor.replace_selection(&latex, latex.len());
                self.rerender(services);
                Status::info(message)
            }
            Err(LookupError::NotLoaded) if self.library.load_error().is_some() => {
                Status::error(LIBRARY_UNAVAILABLE)
            }
            Err(e) => Status::error(e.to_string()),
        };

        self.lookup_status = Some(status.clone());
        vec![Effect::Status(status)]
    }

    fn export_image(&mut self, action: Action, services: &Services<'_>) -> Vec<Effect> {
        self.status = None;

        match self.image_png(services) {
            Ok(png) => match action {
                Action::SaveImage => vec![Effect::Download {
                    action,
                    filename: self.config.export.filename.clone(),
                    data_url: data_url(&png),
                }],
                _ => vec![Effect::ClipboardImage { action, png }],
            },
            Err(e) => self.status_effect(Status::error(action.failure_message(e))),
        }
    }

    /// Rasterize, resize and encode the current preview.
    pub fn image_png(&self, services: &Services<'_>) -> Result<Vec<u8>> {
        let rasterizer = services.rasterizer.ok_or_else(|| {
            TexshotError::Raster("no rasterizer is available in this build".to_string())
        })?;

        let bitmap = export_bitmap(
            self.editor.text(),
            &self.preview,
            rasterizer,
            self.height_mode,
            &self.manual_height,
            &self.settings,
        )?;
        debug!("Exporting {}x{} image", bitmap.width(), bitmap.height());
        encode_png(&bitmap)
    }

    fn copy_latex(&mut self) -> Vec<Effect> {
        self.status = None;

        let text = self.editor.text().trim();
        if text.is_empty() {
            let action = Action::CopyLatex;
            return self.status_effect(Status::error(action.failure_message("Nothing to copy.")));
        }

        vec![Effect::ClipboardText {
            action: Action::CopyLatex,
            text: text.to_string(),
        }]
    }

    fn copy_mathml(&mut self, services: &Services<'_>) -> Vec<Effect> {
        self.status = None;

        match render_mathml(self.editor.text(), services.renderer) {
            Ok(text) => vec![Effect::ClipboardText {
                action: Action::CopyMathml,
                text,
            }],
            Err(e) => self.status_effect(Status::error(Action::CopyMathml.failure_message(e))),
        }
    }

    fn status_effect(&mut self, status: Status) -> Vec<Effect> {
        self.status = Some(status.clone());
        vec![Effect::Status(status)]
    }

    /// The editor buffer.
    pub fn editor(&self) -> &EditorBuffer {
        &self.editor
    }

    /// The current preview.
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// The equation library.
    pub fn library(&self) -> &EquationLibrary {
        &self.library
    }

    /// The helper catalog.
    pub fn helpers(&self) -> &HelperCatalog {
        &self.helpers
    }

    /// Resolved export settings.
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current height mode.
    pub fn height_mode(&self) -> HeightMode {
        self.height_mode
    }

    /// Current manual height text.
    pub fn manual_height(&self) -> &str {
        &self.manual_height
    }

    /// Last export status.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Last library or lookup status.
    pub fn lookup_status(&self) -> Option<&Status> {
        self.lookup_status.as_ref()
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.editor.selection()
    }
}
