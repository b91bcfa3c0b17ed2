use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::renderer;

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Destination for finished signatures
pub trait ImageStore {
    /// Write `image` somewhere durable and return where it went.
    fn store(&mut self, image: &RgbaImage) -> PersistenceResult<PathBuf>;
}

/// Writes PNG files named `Signature-<timestamp>.png` into a directory.
#[derive(Debug, Clone)]
pub struct DocumentDirStore {
    dir: PathBuf,
}

impl DocumentDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name() -> String {
        format!(
            "Signature-{}.png",
            chrono::Local::now().format("%Y-%m-%d %H-%M-%S%.3f")
        )
    }
}

impl ImageStore for DocumentDirStore {
    fn store(&mut self, image: &RgbaImage) -> PersistenceResult<PathBuf> {
        let bytes = renderer::encode_png(image)?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(Self::file_name());
        fs::write(&path, bytes)?;

        log::info!("Saved signature to {}", path.display());
        Ok(path)
    }
}
