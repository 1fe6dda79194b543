//! Download adapters: where a saved image ends up.

use crate::encode::decode_data_url;
use log::info;
use std::path::{Path, PathBuf};
use texshot_core::{Result, TexshotError};

/// Receives a file the user asked to save.
pub trait Downloader {
    /// Save the payload of `data_url` under `filename`.
    ///
    /// # Returns
    /// Where the file was written.
    fn download(&mut self, filename: &str, data_url: &str) -> Result<PathBuf>;
}

/// Writes downloads into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    /// Save into `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Downloader for DirectoryDownloader {
    fn download(&mut self, filename: &str, data_url: &str) -> Result<PathBuf> {
        // Only the final component is used, so a name cannot escape the directory
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| TexshotError::Download(format!("invalid file name: {:?}", filename)))?;

        let (_, bytes) = decode_data_url(data_url)?;

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, bytes)?;

        info!("Saved {}", path.display());
        Ok(path)
    }
}
