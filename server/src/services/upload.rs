//! Media uploads stored under randomly generated names.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Request body ceiling for the upload route.
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Public path prefix under which stored uploads are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg", "mp4", "mp3"];

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file provided.")]
    MissingFile,
    #[error("No file selected.")]
    EmptyFilename,
    #[error("File type not allowed: {0}")]
    UnsupportedType(String),
    #[error("Invalid file name.")]
    InvalidName,
    #[error("File not found.")]
    NotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file written by [`UploadService::save`].
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub name: String,
    pub url: String,
}

#[derive(Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store `data` under a fresh random name that keeps the lowercased
    /// extension of `filename`.
    pub fn save(&self, filename: &str, data: &[u8]) -> Result<StoredUpload, UploadError> {
        if filename.trim().is_empty() {
            return Err(UploadError::EmptyFilename);
        }
        let ext = allowed_extension(filename)?;

        std::fs::create_dir_all(&self.dir)?;
        let name = format!("{}.{}", uuid::Uuid::new_v4().simple(), ext);
        let path = self.dir.join(&name);

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        write_or_remove(&path, file, data)?;

        tracing::info!(original = filename, stored = %name, bytes = data.len(), "Upload saved");
        Ok(StoredUpload {
            url: format!("{UPLOADS_URL_PREFIX}/{name}"),
            name,
        })
    }

    /// Path of a previously stored upload.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, UploadError> {
        if !is_plain_file_name(name) {
            return Err(UploadError::InvalidName);
        }
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(UploadError::NotFound);
        }
        Ok(path)
    }
}

/// Write `data` through `writer`, deleting the file at `path` if that fails.
fn write_or_remove(path: &Path, mut writer: impl Write, data: &[u8]) -> std::io::Result<()> {
    let result = writer.write_all(data).and_then(|()| writer.flush());
    if result.is_err() {
        drop(writer);
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), "Failed to remove partial upload: {e}");
        }
    }
    result
}

/// Lowercased extension of `filename` if it is on the allow-list.
pub fn allowed_extension(filename: &str) -> Result<String, UploadError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(UploadError::UnsupportedType(ext))
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}
