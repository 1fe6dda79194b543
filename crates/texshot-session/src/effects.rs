//! Side-effect descriptors and the code that carries them out.

use crate::command::Action;
use log::debug;
use texshot_core::Status;
use texshot_render::{Clipboard, Downloader};

/// Something the session wants done outside itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put text on the clipboard
    ClipboardText {
        /// Action that produced the text
        action: Action,
        /// Text to copy
        text: String,
    },
    /// Put a PNG image on the clipboard
    ClipboardImage {
        /// Action that produced the image
        action: Action,
        /// PNG bytes
        png: Vec<u8>,
    },
    /// Offer a file download
    Download {
        /// Action that produced the file
        action: Action,
        /// Suggested file name
        filename: String,
        /// File contents as a `data:` URL
        data_url: String,
    },
    /// Show a status message
    Status(Status),
}

/// Carry out effects in order.
///
/// Failures never propagate; each becomes an `<Action> failed: <message>`
/// status.
///
/// # Returns
/// The status of the last effect, if any effect produced one.
pub fn apply_effects<C, D>(effects: Vec<Effect>, clipboard: &mut C, downloader: &mut D) -> Option<Status>
where
    C: Clipboard + ?Sized,
    D: Downloader + ?Sized,
{
    let mut status = None;

    for effect in effects {
        let outcome = match effect {
            Effect::ClipboardText { action, text } => {
                report(action, clipboard.write_text(&text))
            }
            Effect::ClipboardImage { action, png } => {
                report(action, clipboard.write_image(&png))
            }
            Effect::Download {
                action,
                filename,
                data_url,
            } => report(
                action,
                downloader.download(&filename, &data_url).map(|path| {
                    debug!("Downloaded to {}", path.display());
                }),
            ),
            Effect::Status(s) => s,
        };
        status = Some(outcome);
    }

    status
}

fn report(action: Action, result: texshot_core::Result<()>) -> Status {
    match result {
        Ok(()) => Status::info(action.success_message()),
        Err(e) => Status::error(action.failure_message(e)),
    }
}
