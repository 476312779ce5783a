use crate::dashboard::errors::{DashboardError, DashboardResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Default upper bound for an uploaded background image (50 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 50 * 1024 * 1024;

/// URL under which an uploaded image is served.
pub fn image_url(filename: &str) -> String {
    format!("/api/image/{filename}")
}

/// Stores uploaded dashboard backgrounds and remembers the current one.
///
/// The current image is process-local: after a restart no image is current
/// until the next upload, even though earlier files stay on disk.
#[derive(Debug)]
pub struct ImageStore {
    dir: PathBuf,
    current: RwLock<Option<String>>,
}

impl ImageStore {
    /// Open the store, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> DashboardResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| DashboardError::DirCreate {
            path: dir.clone(),
            source: e,
        })?;

        Ok(Self {
            dir,
            current: RwLock::new(None),
        })
    }

    /// Save an upload as `dashboard_<unix seconds><ext>` and make it current.
    ///
    /// Returns the generated file name. The extension, dot included, is taken
    /// from `original_name`.
    pub fn save(&self, original_name: &str, bytes: &[u8]) -> DashboardResult<String> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let filename = format!("dashboard_{}{extension}", chrono::Utc::now().timestamp());
        let path = self.dir.join(&filename);

        fs::write(&path, bytes).map_err(|e| DashboardError::Write {
            path: path.clone(),
            source: e,
        })?;

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(filename.clone());
        log::info!("Stored background image '{}' ({} bytes)", filename, bytes.len());

        Ok(filename)
    }

    /// File name of the most recently uploaded image, if any.
    pub fn current(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// URL of the current image, or an empty string when none was uploaded.
    pub fn current_url(&self) -> String {
        self.current()
            .map(|filename| image_url(&filename))
            .unwrap_or_default()
    }

    /// Path of a stored image, refusing anything that could leave the store.
    pub fn resolve(&self, filename: &str) -> DashboardResult<PathBuf> {
        if filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\'])
        {
            return Err(DashboardError::InvalidFilename(filename.to_string()));
        }

        let path = self.dir.join(filename);
        if !path.is_file() {
            return Err(DashboardError::ImageNotFound(filename.to_string()));
        }
        Ok(path)
    }

    /// Read a stored image.
    pub fn read(&self, filename: &str) -> DashboardResult<Vec<u8>> {
        let path = self.resolve(filename)?;
        fs::read(&path).map_err(|e| DashboardError::Read { path, source: e })
    }
}

/// Content type for an image file name, by extension.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
