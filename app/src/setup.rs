use server::theme::storage::ThemeStore;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Themes shipped inside the binary, as `(file name, content)`.
pub const BUNDLED_THEMES: [(&str, &str); 2] = [
    (
        "vigilance-dark.toml",
        include_str!("../themes/vigilance-dark.toml"),
    ),
    (
        "vigilance-light.toml",
        include_str!("../themes/vigilance-light.toml"),
    ),
];

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write the bundled themes into `<root>/themes/default/`.
///
/// Files that already exist are left alone so operator edits survive
/// restarts. Returns how many files were written.
pub fn seed_default_themes(root: &Path) -> Result<usize, SetupError> {
    let default_dir = ThemeStore::new(root).default_dir();
    create_dir_if_not_exists(&default_dir)?;

    let mut written = 0;
    for (file_name, content) in BUNDLED_THEMES {
        let path = default_dir.join(file_name);
        if path.exists() {
            log::debug!("Keeping existing default theme '{}'", path.display());
            continue;
        }

        fs::write(&path, content).map_err(|e| SetupError::WriteFile {
            path: path.clone(),
            source: e,
        })?;
        log::info!("Installed default theme '{}'", path.display());
        written += 1;
    }

    Ok(written)
}

fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| SetupError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}
